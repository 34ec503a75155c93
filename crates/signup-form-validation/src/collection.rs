//! Collection validation functions

/// Validates that a collection has at least one item
pub fn validate_non_empty<T>(items: &[T]) -> Result<(), String> {
    if items.is_empty() {
        Err("Select at least one option".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(validate_non_empty(&empty).is_err());
        assert!(validate_non_empty(&["coding".to_string()]).is_ok());
        assert!(validate_non_empty(&["", ""]).is_ok());
    }
}

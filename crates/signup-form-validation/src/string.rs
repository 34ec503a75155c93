//! String validation functions

use regex::Regex;

/// Validates that a value is present (non-empty, whitespace counts as content)
pub fn validate_required(s: &str) -> Result<(), String> {
    if s.is_empty() {
        Err("This field is required".to_string())
    } else {
        Ok(())
    }
}

/// Length in Unicode scalar values, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Inclusive length bounds, either side optional
pub fn validate_length(s: &str, min: Option<usize>, max: Option<usize>) -> Result<(), String> {
    match (min, max) {
        (Some(min), Some(max)) => {
            let len = char_len(s);
            if len >= min && len <= max {
                Ok(())
            } else {
                Err(format!("Must be between {} and {} characters", min, max))
            }
        }
        (Some(min), None) => validate_min_length(s, min),
        (None, Some(max)) => validate_max_length(s, max),
        (None, None) => Ok(()),
    }
}

/// Regex pattern matching
///
/// Uses search semantics: anchor the pattern (`^...$`) to require a full match.
pub fn validate_pattern(value: &str, pattern: &Regex) -> Result<(), String> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err("Invalid format".to_string())
    }
}

/// Equality validator
pub fn validate_equals(value: &str, expected: &str) -> Result<(), String> {
    if value == expected {
        Ok(())
    } else {
        Err("Values must match".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("John").is_ok());
        assert!(validate_required(" ").is_ok());
        assert!(validate_required("").is_err());
    }

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 3).is_ok());
        assert!(validate_min_length("hi", 3).is_err());

        assert!(validate_max_length("hello", 10).is_ok());
        assert!(validate_max_length("verylongstring", 5).is_err());

        assert!(validate_length("hello", Some(3), Some(10)).is_ok());
        assert!(validate_length("hi", Some(3), Some(10)).is_err());
        assert!(validate_length("verylongstring", Some(3), Some(10)).is_err());
        assert!(validate_length("anything", None, None).is_ok());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert_eq!(char_len("héllo"), 5);
        assert!(validate_max_length("ééééé", 5).is_ok());
    }

    #[test]
    fn test_astral_char_counts_once() {
        // one scalar value, two UTF-16 units
        assert_eq!(char_len("abcdef😀"), 7);
        assert!(validate_min_length("abcdef😀", 8).is_err());
        assert!(validate_min_length("abcdefg😀", 8).is_ok());
    }

    #[test]
    fn test_pattern_is_search_unless_anchored() {
        let digit = Regex::new(r"[0-9]").unwrap();
        assert!(validate_pattern("abc1", &digit).is_ok());
        assert!(validate_pattern("abc", &digit).is_err());

        let ten_digits = Regex::new(r"^\d{10}$").unwrap();
        assert!(validate_pattern("0123456789", &ten_digits).is_ok());
        assert!(validate_pattern("01234567890", &ten_digits).is_err());
    }

    #[test]
    fn test_equality() {
        assert!(validate_equals("secret", "secret").is_ok());
        assert!(validate_equals("secret", "Secret").is_err());
    }
}

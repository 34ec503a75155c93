//! Numeric validation functions

/// Parses a raw form value as a number
///
/// Surrounding whitespace, a sign, a fraction and an exponent are accepted.
/// Empty input, trailing garbage and digit-free words such as `inf` or `NaN`
/// are not. Digits too large for `f64` parse as infinity, so they fail a
/// range check instead of this one.
pub fn parse_number(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() && trimmed.bytes().any(|b| b.is_ascii_digit()) => Ok(value),
        _ => Err("Must be a number".to_string()),
    }
}

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + std::fmt::Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

/// Validates maximum value for numeric types
pub fn validate_max<T: PartialOrd + std::fmt::Display>(value: T, max: T) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {}", max))
    }
}

/// Validates value is within range
pub fn validate_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
) -> Result<(), String> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {}", min, max))
    }
}

/// Parses `raw` and checks it against the optional inclusive bounds
pub fn validate_number_range(raw: &str, min: Option<i64>, max: Option<i64>) -> Result<(), String> {
    let value = parse_number(raw)?;
    match (min, max) {
        (Some(min), Some(max)) => validate_range(value, min as f64, max as f64),
        (Some(min), None) => validate_min(value, min as f64),
        (None, Some(max)) => validate_max(value, max as f64),
        (None, None) => Ok(()),
    }
}

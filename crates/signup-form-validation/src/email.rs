//! Email and phone number validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Something, an `@`, something, a dot, something; no whitespace anywhere
pub const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Email format regex
pub fn email_regex() -> &'static Regex {
    &EMAIL_REGEX
}

/// Validates basic email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Anchored pattern for a phone number of exactly `digits` ASCII digits
pub fn phone_pattern(digits: usize) -> String {
    format!(r"^[0-9]{{{}}}$", digits)
}

/// Validates a phone number of exactly `digits` digits
pub fn validate_phone_number(phone: &str, digits: usize) -> Result<(), String> {
    if phone.len() == digits && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("Phone number must be {} digits", digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_phone_pattern_agrees_with_validator() {
        let regex = Regex::new(&phone_pattern(10)).unwrap();
        for phone in ["0123456789", "012345678", "01234567890", "01234five9", "٠١٢٣٤٥٦٧٨٩", ""] {
            assert_eq!(
                regex.is_match(phone),
                validate_phone_number(phone, 10).is_ok(),
                "disagreement on {phone:?}"
            );
        }
    }
}

//! Password validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters accepted as a password symbol
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

static SYMBOL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).unwrap());
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());

/// A character class a strong password must contain at least once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordProperty {
    Symbol,
    Digit,
    Uppercase,
    Lowercase,
}

impl PasswordProperty {
    /// All properties, in the order they are reported
    pub const ALL: [PasswordProperty; 4] = [
        PasswordProperty::Symbol,
        PasswordProperty::Digit,
        PasswordProperty::Uppercase,
        PasswordProperty::Lowercase,
    ];

    /// Unanchored pattern that matches when the property is present
    pub fn pattern(&self) -> &'static Regex {
        match self {
            PasswordProperty::Symbol => &SYMBOL_REGEX,
            PasswordProperty::Digit => &DIGIT_REGEX,
            PasswordProperty::Uppercase => &UPPERCASE_REGEX,
            PasswordProperty::Lowercase => &LOWERCASE_REGEX,
        }
    }

    pub fn is_present(&self, password: &str) -> bool {
        self.pattern().is_match(password)
    }

    pub fn message(&self) -> &'static str {
        match self {
            PasswordProperty::Symbol => "Password must contain at least one symbol",
            PasswordProperty::Digit => "Password must contain at least one number",
            PasswordProperty::Uppercase => "Password must contain at least one uppercase letter",
            PasswordProperty::Lowercase => "Password must contain at least one lowercase letter",
        }
    }
}

/// Validates password strength, reporting only the first missing property
///
/// Priority: presence, length, symbol, digit, uppercase, lowercase.
pub fn validate_password(password: &str, min_length: usize) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.chars().count() < min_length {
        return Err(format!("Password must be at least {} characters", min_length));
    }

    PasswordProperty::ALL
        .iter()
        .find(|property| !property.is_present(password))
        .map(|property| Err(property.message().to_string()))
        .unwrap_or(Ok(()))
}

//! Rules: one parameterized check plus the message shown when it fails

use crate::field::Field;
use regex::Regex;
use std::fmt;

/// The check a rule performs on a field's raw value
#[derive(Debug, Clone)]
pub enum Check {
    /// Fails on an empty string or an empty collection
    Required,
    /// Fails unless the value, cast to a string, matches the regex
    Pattern(Regex),
    /// Inclusive character-count bounds
    Length { min: Option<usize>, max: Option<usize> },
    /// Fails unless the value parses as a finite number
    Number,
    /// Fails on a non-numeric value or one outside the inclusive bounds
    NumericRange { min: Option<i64>, max: Option<i64> },
    /// Fails unless the value equals the current value of another field
    EqualsField(Field),
    /// Fails on a collection with no members
    NonEmptyCollection,
}

impl Check {
    pub fn name(&self) -> &'static str {
        match self {
            Check::Required => "required",
            Check::Pattern(_) => "pattern",
            Check::Length { .. } => "length",
            Check::Number => "number",
            Check::NumericRange { .. } => "range",
            Check::EqualsField(_) => "equalsField",
            Check::NonEmptyCollection => "nonEmpty",
        }
    }

    /// The other field this check reads, if any
    pub fn reference(&self) -> Option<Field> {
        match self {
            Check::EqualsField(other) => Some(*other),
            _ => None,
        }
    }
}

fn bounds<T: fmt::Display>(f: &mut fmt::Formatter<'_>, min: &Option<T>, max: &Option<T>) -> fmt::Result {
    if let Some(min) = min {
        write!(f, " min={}", min)?;
    }
    if let Some(max) = max {
        write!(f, " max={}", max)?;
    }
    Ok(())
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            Check::Pattern(regex) => write!(f, " /{}/", regex.as_str()),
            Check::Length { min, max } => bounds(f, min, max),
            Check::NumericRange { min, max } => bounds(f, min, max),
            Check::EqualsField(other) => write!(f, " {}", other),
            Check::Required | Check::Number | Check::NonEmptyCollection => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    check: Check,
    message: Option<String>,
}

impl Rule {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: Some(message.into()),
        }
    }

    /// A rule that reports the check's default message
    pub fn with_default_message(check: Check) -> Self {
        Self {
            check,
            message: None,
        }
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Ordered rules for one field, evaluated first to last
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(Rule::new(Check::Required, message))
    }

    pub fn pattern(self, regex: Regex, message: impl Into<String>) -> Self {
        self.rule(Rule::new(Check::Pattern(regex), message))
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.length(Some(min), None, message)
    }

    pub fn length(self, min: Option<usize>, max: Option<usize>, message: impl Into<String>) -> Self {
        self.rule(Rule::new(Check::Length { min, max }, message))
    }

    pub fn number(self, message: impl Into<String>) -> Self {
        self.rule(Rule::new(Check::Number, message))
    }

    pub fn min(self, min: i64, message: impl Into<String>) -> Self {
        self.range(Some(min), None, message)
    }

    pub fn max(self, max: i64, message: impl Into<String>) -> Self {
        self.range(None, Some(max), message)
    }

    pub fn range(self, min: Option<i64>, max: Option<i64>, message: impl Into<String>) -> Self {
        self.rule(Rule::new(Check::NumericRange { min, max }, message))
    }

    pub fn equals_field(self, other: Field, message: impl Into<String>) -> Self {
        self.rule(Rule::new(Check::EqualsField(other), message))
    }

    pub fn non_empty(self, message: impl Into<String>) -> Self {
        self.rule(Rule::new(Check::NonEmptyCollection, message))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}

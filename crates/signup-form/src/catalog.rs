//! Rule catalog: the ordered rules for every validated field

use crate::field::Field;
use crate::rule::{Rule, RuleSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use signup_form_validation::{email_regex, phone_pattern, PasswordProperty};

/// Tunable numbers of the built-in signup catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub password_min_length: usize,
    pub age_min: i64,
    pub age_max: i64,
    pub phone_digits: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            password_min_length: 8,
            age_min: 18,
            age_max: 100,
            phone_digits: 10,
        }
    }
}

/// A catalog that cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("field `{field}` is compared against `{target}`, which is not in the catalog")]
    UnknownReference { field: Field, target: Field },

    #[error("field `{0}` is compared against itself")]
    SelfReference(Field),

    #[error("field `{0}` is declared more than once")]
    DuplicateField(Field),

    #[error("field `{field}` has an invalid pattern: {message}")]
    InvalidPattern { field: Field, message: String },
}

/// Fields to validate, each with its ordered rules
///
/// Immutable once built. Fields are evaluated in the order they were declared.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    fields: Vec<(Field, Vec<Rule>)>,
}

impl RuleCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The signup form with default settings
    pub fn signup() -> Self {
        Self::signup_with(&CatalogConfig::default())
    }

    /// Like [`try_signup_with`](Self::try_signup_with), but panics on a bad config
    pub fn signup_with(config: &CatalogConfig) -> Self {
        match Self::try_signup_with(config) {
            Ok(catalog) => catalog,
            Err(err) => panic!("invalid rule catalog: {}", err),
        }
    }

    /// The signup form tuned by `config`, which may come from user input
    pub fn try_signup_with(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let phone = Regex::new(&phone_pattern(config.phone_digits)).map_err(|err| {
            CatalogError::InvalidPattern {
                field: Field::PhoneNumber,
                message: err.to_string(),
            }
        })?;

        let password = PasswordProperty::ALL.iter().fold(
            RuleSet::new()
                .required("Password is required")
                .min_length(
                    config.password_min_length,
                    format!(
                        "Password must be at least {} characters",
                        config.password_min_length
                    ),
                ),
            |rules, property| rules.pattern(property.pattern().clone(), property.message()),
        );

        Self::builder()
            .field(Field::FirstName, RuleSet::new().required("First name is required"))
            .field(Field::LastName, RuleSet::new().required("Last name is required"))
            .field(
                Field::Email,
                RuleSet::new()
                    .required("Email is required")
                    .pattern(email_regex().clone(), "Invalid email format"),
            )
            .field(
                Field::PhoneNumber,
                RuleSet::new().required("Phone number is required").pattern(
                    phone,
                    format!("Phone number must be {} digits", config.phone_digits),
                ),
            )
            .field(Field::Password, password)
            .field(
                Field::ConfirmPassword,
                RuleSet::new()
                    .required("Confirm password is required")
                    .equals_field(Field::Password, "Passwords must match"),
            )
            .field(
                Field::Age,
                RuleSet::new()
                    .required("Age is required")
                    .number("Age must be a number")
                    .min(config.age_min, format!("Age must be at least {}", config.age_min))
                    .max(
                        config.age_max,
                        format!("Age must not be greater than {}", config.age_max),
                    ),
            )
            .field(Field::Gender, RuleSet::new().required("Gender is required"))
            .field(
                Field::Interests,
                RuleSet::new().non_empty("Select at least one interest"),
            )
            .field(
                Field::BirthDate,
                RuleSet::new().required("Date of birth is required"),
            )
            .try_build()
    }

    /// Ordered rules for a field; empty when the field is not validated
    pub fn rules_for(&self, field: Field) -> &[Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.iter().any(|(f, _)| *f == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[Rule])> {
        self.fields.iter().map(|(field, rules)| (*field, rules.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    fields: Vec<(Field, Vec<Rule>)>,
}

impl CatalogBuilder {
    pub fn field(mut self, field: Field, rules: RuleSet) -> Self {
        self.fields.push((field, rules.into_rules()));
        self
    }

    /// Check cross-field references and duplicates, then freeze the catalog
    pub fn try_build(self) -> Result<RuleCatalog, CatalogError> {
        for (index, (field, rules)) in self.fields.iter().enumerate() {
            if self.fields[..index].iter().any(|(seen, _)| seen == field) {
                return Err(CatalogError::DuplicateField(*field));
            }

            for target in rules.iter().filter_map(|rule| rule.check().reference()) {
                if target == *field {
                    return Err(CatalogError::SelfReference(*field));
                }
                if !self.fields.iter().any(|(declared, _)| *declared == target) {
                    return Err(CatalogError::UnknownReference {
                        field: *field,
                        target,
                    });
                }
            }
        }

        Ok(RuleCatalog {
            fields: self.fields,
        })
    }

    /// Like [`try_build`](Self::try_build), but a malformed catalog is a bug and panics
    pub fn build(self) -> RuleCatalog {
        match self.try_build() {
            Ok(catalog) => catalog,
            Err(err) => panic!("invalid rule catalog: {}", err),
        }
    }
}

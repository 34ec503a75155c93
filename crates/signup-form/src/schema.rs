//! Declarative catalog schemas loaded from JSON or TOML
//!
//! A schema is data, so unlike [`CatalogBuilder::build`] a bad schema is
//! reported as a [`SchemaError`] instead of a panic.
//!
//! ```toml
//! [[fields]]
//! name = "password"
//! rules = [
//!   { rule = "required", message = "Password is required" },
//!   { rule = "length", min = 8 },
//!   { rule = "pattern", regex = "[0-9]", message = "Password must contain at least one number" },
//! ]
//! ```
//!
//! [`CatalogBuilder::build`]: crate::catalog::CatalogBuilder::build

use crate::catalog::{CatalogError, RuleCatalog};
use crate::field::Field;
use crate::rule::{Check, Rule, RuleSet};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to parse JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML schema: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("field `{field}` has an invalid pattern: {source}")]
    Pattern {
        field: Field,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSchema {
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: Field,
    #[serde(default)]
    pub rules: Vec<RuleSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSchema {
    #[serde(flatten)]
    pub check: CheckSchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum CheckSchema {
    Required,
    Pattern {
        regex: String,
    },
    Length {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    Number,
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    EqualsField {
        field: Field,
    },
    NonEmpty,
}

impl CatalogSchema {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(toml: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(toml)?)
    }

    /// Compile patterns and check references
    pub fn into_catalog(self) -> Result<RuleCatalog, SchemaError> {
        let mut builder = RuleCatalog::builder();

        for field in self.fields {
            let mut rules = RuleSet::new();
            for rule in field.rules {
                let check = rule.check.compile(field.name)?;
                rules = rules.rule(match rule.message {
                    Some(message) => Rule::new(check, message),
                    None => Rule::with_default_message(check),
                });
            }
            builder = builder.field(field.name, rules);
        }

        Ok(builder.try_build()?)
    }
}

impl CheckSchema {
    fn compile(self, field: Field) -> Result<Check, SchemaError> {
        Ok(match self {
            CheckSchema::Required => Check::Required,
            CheckSchema::Pattern { regex } => Check::Pattern(
                Regex::new(&regex).map_err(|source| SchemaError::Pattern { field, source })?,
            ),
            CheckSchema::Length { min, max } => Check::Length { min, max },
            CheckSchema::Number => Check::Number,
            CheckSchema::Range { min, max } => Check::NumericRange { min, max },
            CheckSchema::EqualsField { field } => Check::EqualsField(field),
            CheckSchema::NonEmpty => Check::NonEmptyCollection,
        })
    }
}

impl From<&Check> for CheckSchema {
    fn from(check: &Check) -> Self {
        match check {
            Check::Required => CheckSchema::Required,
            Check::Pattern(regex) => CheckSchema::Pattern {
                regex: regex.as_str().to_string(),
            },
            Check::Length { min, max } => CheckSchema::Length {
                min: *min,
                max: *max,
            },
            Check::Number => CheckSchema::Number,
            Check::NumericRange { min, max } => CheckSchema::Range {
                min: *min,
                max: *max,
            },
            Check::EqualsField(field) => CheckSchema::EqualsField { field: *field },
            Check::NonEmptyCollection => CheckSchema::NonEmpty,
        }
    }
}

/// Describe an existing catalog, e.g. to export the built-in one
impl From<&RuleCatalog> for CatalogSchema {
    fn from(catalog: &RuleCatalog) -> Self {
        let fields = catalog
            .iter()
            .map(|(name, rules)| FieldSchema {
                name,
                rules: rules
                    .iter()
                    .map(|rule| RuleSchema {
                        check: rule.check().into(),
                        message: rule.message().map(str::to_string),
                    })
                    .collect(),
            })
            .collect();
        Self { fields }
    }
}

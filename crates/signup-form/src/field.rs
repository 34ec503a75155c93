//! Field identifiers and their declared kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fields of the signup form
///
/// Variant order is the catalog order, so maps keyed by `Field` iterate in
/// the order the form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
    Age,
    Gender,
    Interests,
    BirthDate,
}

/// What kind of control supplies a field's raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Numeric,
    Date,
    Choice,
    MultiSelect,
}

impl FieldKind {
    /// Collection-typed kinds hold a list of members instead of a string
    pub fn is_collection(&self) -> bool {
        matches!(self, FieldKind::MultiSelect)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Numeric => "numeric",
            FieldKind::Date => "date",
            FieldKind::Choice => "choice",
            FieldKind::MultiSelect => "multi-select",
        };
        f.write_str(name)
    }
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::Password,
        Field::ConfirmPassword,
        Field::Age,
        Field::Gender,
        Field::Interests,
        Field::BirthDate,
    ];

    /// Wire name, as used in records, error maps and schemas
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Interests => "interests",
            Field::BirthDate => "birthDate",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Interests => "Interests",
            Field::BirthDate => "Date of Birth",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::FirstName
            | Field::LastName
            | Field::Email
            | Field::PhoneNumber
            | Field::Password
            | Field::ConfirmPassword => FieldKind::Text,
            Field::Age => FieldKind::Numeric,
            Field::Gender => FieldKind::Choice,
            Field::Interests => FieldKind::MultiSelect,
            Field::BirthDate => FieldKind::Date,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field name that is not part of the form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

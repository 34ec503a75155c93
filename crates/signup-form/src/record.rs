//! Raw form values supplied to a validation pass

use crate::field::{Field, FieldKind};
use crate::toggle::toggle_member;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

static EMPTY_TEXT: FieldValue = FieldValue::Text(String::new());
static EMPTY_MANY: FieldValue = FieldValue::Many(Vec::new());

/// A raw value: a string, or the insertion-ordered members of a multi-select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// The value an untouched control of `kind` holds
    pub fn empty_for(kind: FieldKind) -> &'static FieldValue {
        if kind.is_collection() {
            &EMPTY_MANY
        } else {
            &EMPTY_TEXT
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Many(items) => items.is_empty(),
        }
    }

    /// The value cast to a string; members are joined with `,`
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Many(items) => Cow::Owned(items.join(",")),
        }
    }

    /// The value as a collection; a non-empty string is a single member
    pub fn members(&self) -> Cow<'_, [String]> {
        match self {
            FieldValue::Many(items) => Cow::Borrowed(items.as_slice()),
            FieldValue::Text(s) if s.is_empty() => Cow::Borrowed(&[]),
            FieldValue::Text(s) => Cow::Owned(vec![s.clone()]),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::Many(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::Many(items.into_iter().map(str::to_string).collect())
    }
}

/// The current values of the form, keyed by field
///
/// Serialized as a JSON object of `fieldName: string | string[]`. Fields that
/// are absent read as the empty value for their kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputRecord {
    values: BTreeMap<Field, FieldValue>,
}

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field present and empty, like a freshly rendered form
    pub fn blank() -> Self {
        let values = Field::ALL
            .iter()
            .map(|field| (*field, FieldValue::empty_for(field.kind()).clone()))
            .collect();
        Self { values }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builder-style `set`
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Replace the value of one field, leaving the others as they were
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Current value, or the empty value for the field's kind
    pub fn value(&self, field: Field) -> &FieldValue {
        self.values
            .get(&field)
            .unwrap_or_else(|| FieldValue::empty_for(field.kind()))
    }

    /// Toggle membership of `member` in a multi-select field and store the result
    pub fn toggle(&mut self, field: Field, member: &str, included: bool) {
        let updated = toggle_member(&self.value(field).members(), member, included);
        self.values.insert(field, FieldValue::Many(updated));
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }
}

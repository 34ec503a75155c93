//! Validation evaluator: record + catalog in, error map out

use crate::catalog::RuleCatalog;
use crate::error_map::ErrorMap;
use crate::field::Field;
use crate::record::{FieldValue, InputRecord};
use crate::rule::{Check, Rule};
use signup_form_validation as validators;
use tracing::{debug, trace};

/// Validate every catalog field against the record
///
/// Each field reports the message of its first failing rule and stops there;
/// the remaining fields are still evaluated. Neither argument is modified, so
/// validating an unchanged record again yields the same map.
pub fn validate(record: &InputRecord, catalog: &RuleCatalog) -> ErrorMap {
    let errors: ErrorMap = catalog
        .iter()
        .filter_map(|(field, rules)| first_violation(field, rules, record).map(|msg| (field, msg)))
        .collect();

    debug!(
        fields = catalog.len(),
        failed = errors.len(),
        "validation pass complete"
    );
    errors
}

/// The first violated message for one field, read against the whole record
pub fn validate_field(record: &InputRecord, catalog: &RuleCatalog, field: Field) -> Option<String> {
    first_violation(field, catalog.rules_for(field), record)
}

fn first_violation(field: Field, rules: &[Rule], record: &InputRecord) -> Option<String> {
    let value = record.value(field);

    rules.iter().find_map(|rule| {
        let outcome = apply(rule.check(), value, record);
        trace!(field = %field, check = rule.check().name(), passed = outcome.is_ok());

        outcome.err().map(|default_message| {
            debug!(field = %field, check = rule.check().name(), "rule failed");
            rule.message().map(str::to_string).unwrap_or(default_message)
        })
    })
}

/// Run one check; `Err` carries the validator's default message
fn apply(check: &Check, value: &FieldValue, record: &InputRecord) -> Result<(), String> {
    match check {
        Check::Required => match value {
            FieldValue::Text(text) => validators::validate_required(text),
            FieldValue::Many(members) => validators::validate_non_empty(members.as_slice()),
        },
        Check::Pattern(regex) => validators::validate_pattern(&value.as_text(), regex),
        Check::Length { min, max } => validators::validate_length(&value.as_text(), *min, *max),
        Check::Number => validators::parse_number(&value.as_text()).map(|_| ()),
        Check::NumericRange { min, max } => {
            validators::validate_number_range(&value.as_text(), *min, *max)
        }
        Check::EqualsField(other) => {
            validators::validate_equals(&value.as_text(), &record.value(*other).as_text())
        }
        Check::NonEmptyCollection => validators::validate_non_empty(&value.members()[..]),
    }
}

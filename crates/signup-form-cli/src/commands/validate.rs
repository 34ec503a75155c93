use anyhow::Result;
use colored::Colorize;
use signup_form::{validate, ErrorMap};
use std::path::Path;
use tracing::debug;

use super::read_record;
use crate::config::Config;

/// Returns whether the record may be submitted
pub fn execute(config: &Config, record_path: &Path) -> Result<bool> {
    let catalog = config.rule_catalog()?;
    let record = read_record(record_path)?;

    let errors = validate(&record, &catalog);
    debug!(path = ?record_path, errors = errors.len(), "validated record");

    if errors.is_valid() {
        println!("{}", "Form submitted".green().bold());
    } else {
        println!("{}", render(&errors)?);
        eprintln!(
            "{}",
            format!("{} field(s) need attention", errors.len()).red()
        );
    }

    Ok(errors.is_valid())
}

/// Pretty JSON object of field name to message
pub fn render(errors: &ErrorMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(errors)?)
}

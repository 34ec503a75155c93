pub mod catalog;
pub mod toggle;
pub mod validate;

use anyhow::{Context, Result};
use signup_form::InputRecord;
use std::fs;
use std::path::Path;

/// Read a JSON form record from disk
pub fn read_record(path: &Path) -> Result<InputRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record: {:?}", path))?;
    InputRecord::from_json(&content)
        .with_context(|| format!("Failed to parse record: {:?}", path))
}

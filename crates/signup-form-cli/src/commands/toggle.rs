use anyhow::{bail, Context, Result};
use colored::Colorize;
use signup_form::{Field, InputRecord};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::read_record;

pub fn execute(
    record_path: &Path,
    field: Field,
    member: &str,
    included: bool,
    write: bool,
) -> Result<()> {
    let record = toggled(read_record(record_path)?, field, member, included)?;
    let json = serde_json::to_string_pretty(&record)?;

    if write {
        fs::write(record_path, format!("{}\n", json))
            .with_context(|| format!("Failed to write record: {:?}", record_path))?;
        let action = if included { "Added" } else { "Removed" };
        println!(
            "{} {} {} {}",
            action.green(),
            member.cyan(),
            if included { "to" } else { "from" },
            field
        );
    } else {
        println!("{}", json);
    }

    debug!(%field, included, write, "toggled member");
    Ok(())
}

/// The record with `member` added to or removed from a multi-select field
pub fn toggled(mut record: InputRecord, field: Field, member: &str, included: bool) -> Result<InputRecord> {
    if !field.kind().is_collection() {
        bail!("`{}` is a {} field, not a multi-select", field, field.kind());
    }
    record.toggle(field, member, included);
    Ok(record)
}

use anyhow::Result;
use colored::Colorize;
use signup_form::{CatalogSchema, Field, RuleCatalog};

use crate::config::Config;

pub fn execute(config: &Config, json: bool) -> Result<()> {
    let catalog = config.rule_catalog()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&CatalogSchema::from(&catalog))?);
        return Ok(());
    }

    for field in catalog.fields() {
        println!(
            "{} {} {}",
            field.label().bold(),
            field.to_string().cyan(),
            format!("({})", field.kind()).dimmed()
        );
        for line in describe_rules(&catalog, field) {
            println!("  {}", line);
        }
    }

    Ok(())
}

/// One line per rule: the check, then its message if it has one
pub fn describe_rules(catalog: &RuleCatalog, field: Field) -> Vec<String> {
    catalog
        .rules_for(field)
        .iter()
        .enumerate()
        .map(|(i, rule)| match rule.message() {
            Some(message) => format!("{}. {} -> \"{}\"", i + 1, rule.check(), message),
            None => format!("{}. {}", i + 1, rule.check()),
        })
        .collect()
}

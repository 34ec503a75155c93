// File: src/config.rs
// Purpose: Configuration parsing from signup-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use signup_form::{CatalogConfig, CatalogSchema, RuleCatalog};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "signup-form.toml";

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Schema file (.json or .toml) replacing the built-in catalog.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub schema: Option<PathBuf>,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        if let (Some(schema), Some(dir)) = (&config.schema, path.parent()) {
            if schema.is_relative() {
                config.schema = Some(dir.join(schema));
            }
        }

        Ok(config)
    }

    /// The catalog to validate with: the schema file if one is configured,
    /// otherwise the built-in signup catalog tuned by `[catalog]`
    pub fn rule_catalog(&self) -> Result<RuleCatalog> {
        let Some(path) = &self.schema else {
            return RuleCatalog::try_signup_with(&self.catalog)
                .context("Invalid [catalog] settings");
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {:?}", path))?;

        let schema = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => CatalogSchema::from_toml(&content),
            _ => CatalogSchema::from_json(&content),
        }
        .with_context(|| format!("Failed to parse schema file: {:?}", path))?;

        let catalog = schema
            .into_catalog()
            .with_context(|| format!("Invalid rule catalog in {:?}", path))?;

        debug!(?path, fields = catalog.len(), "loaded catalog schema");
        Ok(catalog)
    }
}

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct TableConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty source pattern")]
    EmptyKey,
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("table {0} already initialized")]
    AlreadyInitialized(&'static str),
}

/// Parse TOML text into a sorted `BTreeMap<source, target>`.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TableConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if key.is_empty() {
            return Err(TableConfigError::EmptyKey);
        }
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.mappings)
}

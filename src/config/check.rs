use crate::config::CONFIG_FIELDS;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;

/// Top-level fields absent from a config document (they fall back to defaults).
pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

    let Some(map) = yaml.as_mapping() else {
        return Ok(CONFIG_FIELDS.to_vec());
    };

    Ok(CONFIG_FIELDS
        .iter()
        .copied()
        .filter(|f| !map.contains_key(*f))
        .collect())
}

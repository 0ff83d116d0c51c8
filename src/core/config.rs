//! Serializable logger configuration

use super::environment::EnvironmentPolicy;
use super::error::{DebugError, Result};
use super::templater::DEFAULT_LINK_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Everything about a logger that can live in a config file.
///
/// # Example
///
/// ```
/// use record_debug_logger::LoggerConfig;
///
/// let config = LoggerConfig::from_json_str(r#"{ "label": "Orders #{NUMBER}", "min_level": "warn" }"#)
///     .unwrap();
/// assert_eq!(config.link_separator, ", ");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Instance label template, resolved once against the bound record
    pub label: Option<String>,
    /// Explicit minimum level; when absent the environment policy decides
    pub min_level: Option<String>,
    /// Emit every call regardless of level
    pub force: bool,
    /// When false the logger starts suppressed unless `min_level` is given
    pub enabled: bool,
    pub link_separator: String,
    /// Field holding the record number in default labels
    pub record_number_field: String,
    pub environment: EnvironmentPolicy,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            label: None,
            min_level: None,
            force: false,
            enabled: true,
            link_separator: DEFAULT_LINK_SEPARATOR.to_string(),
            record_number_field: "NUMBER".to_string(),
            environment: EnvironmentPolicy::default(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.link_separator.is_empty() {
            return Err(DebugError::config(
                "LoggerConfig",
                "link_separator must not be empty",
            ));
        }
        if self.record_number_field.trim().is_empty() {
            return Err(DebugError::config(
                "LoggerConfig",
                "record_number_field must not be empty",
            ));
        }
        Ok(())
    }
}

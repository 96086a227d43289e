//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub data_source: DataSourceConfig,
    pub preferences: PreferencesConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Roster data source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataSourceConfig {
    /// Candidate locations tried in order; file paths or HTTP(S) URLs
    pub sources: Vec<String>,
    pub timeout_seconds: u64,
}

/// Operator preferences storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreferencesConfig {
    pub path: String,
}

/// Export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub directory: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for rolling log files; stderr only when unset
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("ROLLCALL").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::RollcallError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_source: DataSourceConfig {
                // mirrors the site-root / origin-root / path-segment fallback
                // of the original deployment
                sources: vec![
                    "./database.json".to_string(),
                    "./data/database.json".to_string(),
                    "./public/database.json".to_string(),
                ],
                timeout_seconds: 10,
            },
            preferences: PreferencesConfig {
                path: "./preferences.toml".to_string(),
            },
            export: ExportConfig {
                directory: "./exports".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(!settings.data_source.sources.is_empty());
    }
}

//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{Result, RollcallError};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_data_source_config(&settings.data_source)?;
    validate_preferences_config(&settings.preferences)?;
    validate_export_config(&settings.export)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate roster data source configuration
fn validate_data_source_config(config: &super::DataSourceConfig) -> Result<()> {
    if config.sources.is_empty() {
        return Err(RollcallError::Config(
            "At least one roster data source is required".to_string(),
        ));
    }

    if config.sources.iter().any(|s| s.trim().is_empty()) {
        return Err(RollcallError::Config(
            "Roster data sources cannot be empty strings".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(RollcallError::Config(
            "Data source timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate preferences storage configuration
fn validate_preferences_config(config: &super::PreferencesConfig) -> Result<()> {
    if config.path.is_empty() {
        return Err(RollcallError::Config(
            "Preferences file path is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate export configuration
fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.directory.is_empty() {
        return Err(RollcallError::Config(
            "Export directory is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(RollcallError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(RollcallError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

//! Configuration management for the Kayan admin bot
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, `config/{env}`)
//! - Environment variables (`KAYAN__` prefix, `__` between nested keys)
//! - Runtime overrides

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_file, AliasEntry, BotConfig, InterpreterSettings, MagnitudePolicy,
    ObservabilityConfig, RuntimeEnvironment, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => ConfigError::MissingField(key),
            config::ConfigError::Foreign(inner) => ConfigError::Environment(inner.to_string()),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}

//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{loader, LOG_LEVELS};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Command interpreter configuration
    #[serde(default)]
    pub interpreter: InterpreterSettings,

    /// Bot identity and role configuration
    #[serde(default)]
    pub bot: BotConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// How a "million" word rewrites the extracted price
///
/// `SecondToLast` keeps the legacy bot behavior: it collects every number in
/// the message (digits first, then number words) and takes the
/// second-to-last one. With a single number it changes nothing, and with
/// three or more it usually picks the wrong one. `Adjacent` scales the
/// number written directly before the magnitude word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudePolicy {
    #[default]
    Adjacent,
    SecondToLast,
}

/// Extra project alias appended after the built-in table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Free-text alias, matched case-insensitively as a substring
    pub alias: String,
    /// Canonical project identifier
    pub project_id: String,
}

impl AliasEntry {
    pub fn new(alias: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            project_id: project_id.into(),
        }
    }
}

/// Command interpreter configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InterpreterSettings {
    /// Magnitude-word handling for prices
    #[serde(default)]
    pub magnitude_policy: MagnitudePolicy,

    /// Aliases checked after the built-in ones, in order
    #[serde(default)]
    pub project_aliases: Vec<AliasEntry>,
}

/// Bot identity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// User id of the administrator. Empty means nobody is admin.
    #[serde(default = "default_admin_id")]
    pub admin_id: String,
}

fn default_admin_id() -> String {
    std::env::var(loader::ADMIN_ID_VAR).unwrap_or_default()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            admin_id: default_admin_id(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_interpreter()?;
        self.validate_bot()?;
        self.validate_observability()?;

        Ok(())
    }

    fn validate_interpreter(&self) -> Result<(), ConfigError> {
        for (index, entry) in self.interpreter.project_aliases.iter().enumerate() {
            if entry.alias.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("interpreter.project_aliases[{}].alias", index),
                    message: "Alias cannot be empty (it would match every message)".to_string(),
                });
            }

            if entry.project_id.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("interpreter.project_aliases[{}].project_id", index),
                    message: format!("Project id for alias '{}' cannot be empty", entry.alias),
                });
            }
        }

        if self.interpreter.magnitude_policy == MagnitudePolicy::SecondToLast {
            tracing::warn!(
                "interpreter.magnitude_policy = second_to_last picks the wrong price \
                 when a message has three or more numbers"
            );
        }

        Ok(())
    }

    fn validate_bot(&self) -> Result<(), ConfigError> {
        if self.bot.admin_id.trim().is_empty() {
            if self.environment.is_production() {
                return Err(ConfigError::MissingField("bot.admin_id".to_string()));
            }
            tracing::warn!("bot.admin_id not configured, every user is treated as a customer");
        }

        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.trim();
        if level.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: "Log level cannot be empty".to_string(),
            });
        }

        // Full filter directives ("kayan=debug,info") are left to EnvFilter
        let is_directive = level.contains('=') || level.contains(',');
        if !is_directive && !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!("Unknown log level '{}', expected one of {:?}", level, LOG_LEVELS),
            });
        }

        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority: env vars (`KAYAN__...`) > config/{env} > config/default > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name(loader::DEFAULT_CONFIG).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder = builder.add_source(
            File::with_name(&format!("{}/{}", loader::CONFIG_DIR, env_name)).required(false),
        );
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix(loader::ENV_PREFIX)
            .separator(loader::ENV_SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}

/// Load settings from one explicit file, with environment overrides on top
pub fn load_settings_file(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config = Config::builder()
        .add_source(File::from(path))
        .add_source(
            Environment::with_prefix(loader::ENV_PREFIX)
                .separator(loader::ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?;
    let settings: Settings = config.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

//! Centralized constants for the Kayan admin bot
//!
//! Single source of truth for numeric scales and loader defaults shared
//! between the config, interpreter, and agent crates.

/// Numeric scales used when normalizing amounts
pub mod scale {
    /// Value of the "million" magnitude word (مليون)
    pub const MILLION: u64 = 1_000_000;

    /// Decimal places kept when a fractional amount precedes a magnitude
    /// word ("1.5 مليون"). One million has six.
    pub const MILLION_DECIMALS: u32 = 6;
}

/// Settings loader defaults
pub mod loader {
    /// Environment variable prefix (`KAYAN__BOT__ADMIN_ID=...`)
    pub const ENV_PREFIX: &str = "KAYAN";

    /// Separator between nested keys in environment variables
    pub const ENV_SEPARATOR: &str = "__";

    /// Base config file, loaded before the environment-specific one
    pub const DEFAULT_CONFIG: &str = "config/default";

    /// Directory holding `<env>.yaml` / `<env>.toml` overrides
    pub const CONFIG_DIR: &str = "config";

    /// Plain environment variable holding the admin id, outside the prefix
    pub const ADMIN_ID_VAR: &str = "ADMIN_ID";
}

/// Log levels accepted by `observability.log_level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

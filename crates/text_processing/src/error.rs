//! Errors raised while building an interpreter
//!
//! Interpreting text never fails; only construction from settings can.

use kayan_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Invalid project alias '{alias}': {message}")]
    InvalidAlias { alias: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;

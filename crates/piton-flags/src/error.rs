//! Error types for piton-flags.

use thiserror::Error;

/// Result type for piton-flags operations.
pub type Result<T> = std::result::Result<T, FlagsError>;

/// Errors that can occur while assembling completion flags.
#[derive(Error, Debug)]
pub enum FlagsError {
    /// Failed to read a database or config file.
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to parse JSON (compile_commands.json or a flags record).
    #[error("Failed to parse JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),
}

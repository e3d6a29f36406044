//! Error types for command table loading.

use cmdhelp_core::UsageError;
use thiserror::Error;

/// Errors that can occur while loading or saving command tables and
/// configuration.
#[derive(Debug, Error)]
pub enum TableError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A raw usage description could not be decoded.
    #[error("invalid usage description: {0}")]
    UsageError(#[from] UsageError),

    /// The file extension names no supported table format.
    #[error("unsupported table format: {0}")]
    UnsupportedFormat(String),

    /// All configured loader sources failed.
    #[error("no command table sources available")]
    NoSourcesAvailable,
}

/// Convenience alias for results with [`TableError`].
pub type Result<T> = std::result::Result<T, TableError>;

//! Error types for the CLI application.

use configgen_extractor::ExtractorError;
use configgen_llm::LlmError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion client could not be created
    #[error("failed to create client: {0}")]
    Client(#[source] LlmError),

    /// Generation pipeline error
    #[error(transparent)]
    Generation(#[from] ExtractorError),

    /// Output file could not be written
    #[error("failed to write configuration file {}: {source}", .path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

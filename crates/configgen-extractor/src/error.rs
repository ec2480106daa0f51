//! Error types for configuration generation

use configgen_llm::LlmError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a configuration
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Schema file could not be read
    #[error("failed to read schema file {}: {source}", .path.display())]
    SchemaRead {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The completion stream could not be opened
    #[error("failed to start completion stream: {0}")]
    StreamStart(#[source] LlmError),

    /// The completion stream broke while being read
    #[error("error reading stream: {0}")]
    StreamRead(#[source] LlmError),

    /// Nothing YAML-like was found in the response
    #[error("received empty YAML content from AI.YOU")]
    EmptyDocument,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<configgen_domain::EmptyDocument> for ExtractorError {
    fn from(_: configgen_domain::EmptyDocument) -> Self {
        ExtractorError::EmptyDocument
    }
}

//! Result types for generation

use configgen_domain::YamlDocument;

/// Outcome of a successful generation run
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Cleaned YAML, guaranteed non-empty
    pub document: YamlDocument,

    /// Metadata about the run
    pub metadata: GenerationMetadata,
}

/// Metadata about a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationMetadata {
    /// Length of the prompt sent, in characters
    pub prompt_chars: usize,

    /// Chunks received from the stream
    pub chunk_count: usize,

    /// Length of the raw response before extraction, in characters
    pub response_chars: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

//! Configgen Domain Layer
//!
//! Value types shared by every other configgen crate. This crate has ZERO
//! external dependencies; wire formats and I/O live in the infrastructure
//! crates that convert into these types.
//!
//! ## Key Concepts
//!
//! - **GenerationRequest**: schema text, device type and context for one run
//! - **StreamChunk**: one incremental piece of a streamed completion
//! - **YamlDocument**: the cleaned, non-empty YAML produced by a run

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod document;
pub mod request;

// Re-exports for convenience
pub use chunk::{Choice, Delta, StreamChunk};
pub use document::{EmptyDocument, YamlDocument};
pub use request::GenerationRequest;

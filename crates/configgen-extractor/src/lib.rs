//! Configgen Extractor
//!
//! Generates device configurations from a completion service and extracts
//! the YAML from its answer.
//!
//! # Overview
//!
//! A [`GenerationRequest`](configgen_domain::GenerationRequest) carries the
//! raw JSON schema, the device type and a natural-language context. The
//! Generator turns it into a prompt, streams the answer back, and keeps only
//! the YAML-looking part of the text.
//!
//! # Architecture
//!
//! ```text
//! Schema file → Prompt → CompletionClient → Stream → YAML filter → YamlDocument
//! ```
//!
//! The YAML filter strips one pair of markdown
//! fences, drops comment lines and leading prose, and removes blank lines.
//! The result is never validated against the schema.
//!
//! # Example Usage
//!
//! ```
//! use configgen_domain::GenerationRequest;
//! use configgen_extractor::{GenerationConfig, Generator};
//! use configgen_llm::MockClient;
//!
//! # tokio_test::block_on(async {
//! let client = MockClient::new(["```yaml\n", "hostname: ", "r1\n", "```"]);
//! let generator = Generator::new(client, GenerationConfig::default());
//!
//! let request = GenerationRequest::new("{}", "router", "small office, 4 ports");
//! let outcome = generator.generate(&request).await.unwrap();
//!
//! assert_eq!(outcome.document.as_str(), "hostname: r1");
//! # });
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod parser;
mod prompt;
mod schema;
mod stream;
mod types;

#[cfg(test)]
mod tests;

pub use config::GenerationConfig;
pub use error::ExtractorError;
pub use generator::Generator;
pub use parser::extract_yaml;
pub use prompt::PromptBuilder;
pub use schema::load_schema;
pub use stream::{collect_response, CollectedResponse};
pub use types::{GenerationMetadata, GenerationOutcome};

//! Configgen LLM Client Layer
//!
//! Streaming chat-completion clients used to generate device configurations.
//!
//! # Architecture
//!
//! The [`CompletionClient`] trait is the seam between the generation pipeline
//! and the remote service. A client opens one streaming request and hands back
//! a [`ChunkStream`] of domain [`StreamChunk`] values in arrival order.
//!
//! # Clients
//!
//! - `MockClient`: Replays scripted chunks for testing
//! - `AiYouClient`: AI.YOU chat-completion API with email/password sessions
//!
//! # Examples
//!
//! ```
//! use configgen_llm::{CompletionClient, ChatCompletionRequest, MockClient};
//! use futures_util::StreamExt;
//!
//! # tokio_test::block_on(async {
//! let client = MockClient::new(["hostname: ", "r1"]);
//! let request = ChatCompletionRequest::user_prompt("prompt", None);
//! let mut stream = client.stream_chat(request).await.unwrap();
//!
//! let mut text = String::new();
//! while let Some(chunk) = stream.next().await {
//!     text.push_str(chunk.unwrap().delta_text().unwrap_or_default());
//! }
//! assert_eq!(text, "hostname: r1");
//! # });
//! ```

#![warn(missing_docs)]

pub mod aiyou;
pub mod protocol;
pub mod sse;

use async_trait::async_trait;
use configgen_domain::StreamChunk;
use futures_util::Stream;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use aiyou::{AiYouClient, AiYouConfig, Session};
pub use protocol::{ChatCompletionRequest, ContentPart, Message};

/// Errors that can occur while talking to the completion service
#[derive(Error, Debug)]
pub enum LlmError {
    /// Client misconfiguration (missing credentials, bad base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Login rejected or session refused by the service
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Invalid response from the service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Error while reading an open stream
    #[error("Stream error: {0}")]
    Stream(String),
}

/// Chunks of a streamed completion, in arrival order
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<StreamChunk, LlmError>> + Send>>;

/// A chat-completion service that can stream its answer
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one streaming completion request.
    ///
    /// Errors returned here mean the stream never started; errors yielded by
    /// the stream mean it broke mid-way.
    async fn stream_chat(&self, request: ChatCompletionRequest) -> Result<ChunkStream, LlmError>;
}

/// Mock client for deterministic testing
///
/// Replays a fixed list of text deltas without making any network calls.
/// It can also be told to refuse the request or to break mid-stream.
///
/// # Examples
///
/// ```
/// use configgen_llm::MockClient;
///
/// let client = MockClient::new(["```yaml\n", "hostname: r1\n", "```"]);
/// assert_eq!(client.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    chunks: Vec<StreamChunk>,
    fail_after: Option<usize>,
    refuse: bool,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockClient {
    /// Create a MockClient streaming one chunk per text delta
    pub fn new<I, S>(deltas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_chunks(deltas.into_iter().map(StreamChunk::text).collect())
    }

    /// Create a MockClient streaming the given chunks verbatim
    pub fn from_chunks(chunks: Vec<StreamChunk>) -> Self {
        Self {
            chunks,
            ..Self::default()
        }
    }

    /// Yield a stream error after `count` chunks have been delivered
    pub fn fail_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    /// Reject the request before any stream is opened
    pub fn refuse_request(mut self) -> Self {
        self.refuse = true;
        self
    }

    /// Get the number of times stream_chat was called
    pub fn call_count(&self) -> usize {
        self.recorded().len()
    }

    /// The most recent request received
    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.recorded().last().cloned()
    }

    fn recorded(&self) -> std::sync::MutexGuard<'_, Vec<ChatCompletionRequest>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn stream_chat(&self, request: ChatCompletionRequest) -> Result<ChunkStream, LlmError> {
        self.recorded().push(request);

        if self.refuse {
            return Err(LlmError::Communication("Mock refused request".to_string()));
        }

        let mut items: Vec<Result<StreamChunk, LlmError>> = self.chunks.iter().cloned().map(Ok).collect();
        if let Some(count) = self.fail_after {
            items.truncate(count);
            items.push(Err(LlmError::Stream("Mock stream interrupted".to_string())));
        }

        Ok(Box::pin(futures_util::stream::iter(items)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    async fn drain(stream: ChunkStream) -> Vec<Result<StreamChunk, LlmError>> {
        stream.collect().await
    }

    #[tokio::test]
    async fn test_mock_client_replays_in_order() {
        let client = MockClient::new(["a", "b", "c"]);
        let stream = client
            .stream_chat(ChatCompletionRequest::user_prompt("p", None))
            .await
            .unwrap();

        let texts: Vec<String> = drain(stream)
            .await
            .into_iter()
            .map(|c| c.unwrap().delta_text().unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_mock_client_records_requests() {
        let client = MockClient::new(["x"]);
        assert_eq!(client.call_count(), 0);

        client
            .stream_chat(ChatCompletionRequest::user_prompt("first", Some("asst".to_string())))
            .await
            .unwrap();
        assert_eq!(client.call_count(), 1);

        let last = client.last_request().unwrap();
        assert_eq!(last.assistant_id.as_deref(), Some("asst"));
        assert_eq!(last.prompt_text(), Some("first"));
    }

    #[tokio::test]
    async fn test_mock_client_fail_after() {
        let client = MockClient::new(["a", "b", "c"]).fail_after(1);
        let stream = client
            .stream_chat(ChatCompletionRequest::user_prompt("p", None))
            .await
            .unwrap();

        let items = drain(stream).await;
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(LlmError::Stream(_))));
    }

    #[tokio::test]
    async fn test_mock_client_refuse() {
        let client = MockClient::new(["a"]).refuse_request();
        let result = client
            .stream_chat(ChatCompletionRequest::user_prompt("p", None))
            .await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn test_mock_client_clone_shares_history() {
        let client1 = MockClient::new(["a"]);
        let client2 = client1.clone();

        tokio_test::block_on(async {
            client1
                .stream_chat(ChatCompletionRequest::user_prompt("p", None))
                .await
                .unwrap();
        });

        // Both share the same request log due to Arc
        assert_eq!(client1.call_count(), 1);
        assert_eq!(client2.call_count(), 1);
    }
}

//! AI.YOU wire types
//!
//! Request and response bodies exchanged with the chat-completion service.
//! Streamed chunks are decoded here and converted into domain
//! [`StreamChunk`] values so nothing downstream depends on the wire format.

use chrono::{DateTime, Utc};
use configgen_domain::{Choice, Delta, StreamChunk};
use serde::{Deserialize, Serialize};

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default nucleus sampling cutoff
pub const DEFAULT_TOP_P: f32 = 0.95;

/// Streaming chat-completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Conversation messages (a single user turn for configgen)
    pub messages: Vec<Message>,

    /// Assistant to route the request to
    #[serde(rename = "assistantId", skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,

    /// Always true for configgen: the answer is streamed back
    pub stream: bool,

    /// Sampling temperature
    pub temperature: f32,

    /// Nucleus sampling cutoff
    pub top_p: f32,
}

/// One conversation message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Author role ("user", "assistant", "system")
    pub role: String,

    /// Multi-part content
    pub content: Vec<ContentPart>,
}

/// A single content part of a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPart {
    /// Part type, "text" for plain prompts
    #[serde(rename = "type")]
    pub kind: String,

    /// Text payload
    pub text: String,
}

impl ChatCompletionRequest {
    /// Build a streaming request holding one user text prompt
    pub fn user_prompt(prompt: impl Into<String>, assistant_id: Option<String>) -> Self {
        Self {
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![ContentPart {
                    kind: "text".to_string(),
                    text: prompt.into(),
                }],
            }],
            assistant_id,
            stream: true,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }

    /// Override the sampling parameters
    pub fn with_sampling(mut self, temperature: f32, top_p: f32) -> Self {
        self.temperature = temperature;
        self.top_p = top_p;
        self
    }

    /// Text of the first content part of the first message
    pub fn prompt_text(&self) -> Option<&str> {
        self.messages
            .first()
            .and_then(|m| m.content.first())
            .map(|part| part.text.as_str())
    }
}

/// Login request body
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Login response body
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Streamed chunk as sent on the wire
#[derive(Debug, Deserialize)]
pub(crate) struct WireChunk {
    #[serde(default)]
    choices: Option<Vec<WireChoice>>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    #[serde(default)]
    index: Option<u32>,
    #[serde(default)]
    delta: Option<WireDelta>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireDelta {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl From<WireChunk> for StreamChunk {
    fn from(chunk: WireChunk) -> Self {
        let choices = chunk
            .choices
            .unwrap_or_default()
            .into_iter()
            .map(|choice| Choice {
                index: choice.index.unwrap_or(0),
                delta: choice.delta.map(|delta| Delta {
                    role: delta.role,
                    content: delta.content.unwrap_or_default(),
                }),
                finish_reason: choice.finish_reason,
            })
            .collect();

        StreamChunk { choices }
    }
}

//! Chunk module - incremental pieces of a streamed chat completion

/// One chunk of a streamed completion.
///
/// Chunks carry zero or more choices. Only the first choice contributes
/// text; chunks are consumed strictly in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamChunk {
    /// Choices carried by this chunk (usually exactly one)
    pub choices: Vec<Choice>,
}

/// A single choice inside a chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choice {
    /// Position of the choice in the response
    pub index: u32,

    /// Incremental content, absent on some control chunks
    pub delta: Option<Delta>,

    /// Why generation stopped, set on the final chunk only
    pub finish_reason: Option<String>,
}

/// Incremental message content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delta {
    /// Role, usually only present on the first chunk
    pub role: Option<String>,

    /// Text fragment
    pub content: String,
}

impl StreamChunk {
    /// Build a chunk holding a single text delta
    ///
    /// # Examples
    ///
    /// ```
    /// use configgen_domain::StreamChunk;
    ///
    /// let chunk = StreamChunk::text("hostname: ");
    /// assert_eq!(chunk.delta_text(), Some("hostname: "));
    /// ```
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                index: 0,
                delta: Some(Delta {
                    role: None,
                    content: content.into(),
                }),
                finish_reason: None,
            }],
        }
    }

    /// Text contributed by this chunk.
    ///
    /// Returns `None` when there are no choices, the first choice has no
    /// delta, or the delta content is empty.
    pub fn delta_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.delta.as_ref())
            .map(|delta| delta.content.as_str())
            .filter(|content| !content.is_empty())
    }
}

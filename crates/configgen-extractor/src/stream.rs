//! Draining a completion stream into text

use crate::error::ExtractorError;
use configgen_llm::ChunkStream;
use futures_util::StreamExt;
use tracing::debug;

/// Text collected from a completion stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedResponse {
    /// Concatenated deltas, in arrival order
    pub text: String,

    /// Chunks received, including those that carried no text
    pub chunk_count: usize,
}

/// Read the stream to its end, concatenating the first choice's deltas.
///
/// Chunks without choices or with empty deltas are skipped. The first read
/// error aborts and discards everything collected so far.
pub async fn collect_response(mut stream: ChunkStream) -> Result<CollectedResponse, ExtractorError> {
    let mut response = CollectedResponse::default();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(ExtractorError::StreamRead)?;
        response.chunk_count += 1;

        if let Some(delta) = chunk.delta_text() {
            response.text.push_str(delta);
        }
    }

    debug!(
        "Stream ended: {} chunks, {} chars",
        response.chunk_count,
        response.text.len()
    );
    Ok(response)
}

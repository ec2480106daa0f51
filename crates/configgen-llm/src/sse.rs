//! Server-sent event decoding
//!
//! Turns the raw response body of a streaming completion into a
//! [`ChunkStream`]. Each `data:` payload is one JSON chunk; the payload
//! `[DONE]` ends the stream. `eventsource-stream` takes care of line
//! buffering and UTF-8 boundaries between network reads.

use crate::protocol::WireChunk;
use crate::{ChunkStream, LlmError};
use async_stream::stream;
use configgen_domain::StreamChunk;
use eventsource_stream::Eventsource;
use futures_util::{Stream, StreamExt};
use std::fmt;
use tracing::{debug, trace};

/// End-of-stream marker sent as the last `data:` payload
pub const DONE_MARKER: &str = "[DONE]";

/// Meaning of one SSE payload
#[derive(Debug, PartialEq)]
pub enum Frame {
    /// A chunk of the completion
    Chunk(StreamChunk),
    /// Keep-alive or empty payload, nothing to deliver
    Skip,
    /// Normal end of stream
    Done,
}

/// Decode a single `data:` payload
pub fn parse_frame(data: &str) -> Result<Frame, LlmError> {
    let data = data.trim();
    if data == DONE_MARKER {
        return Ok(Frame::Done);
    }
    if data.is_empty() {
        return Ok(Frame::Skip);
    }

    let wire: WireChunk = serde_json::from_str(data)
        .map_err(|e| LlmError::Stream(format!("Invalid chunk payload: {}", e)))?;
    Ok(Frame::Chunk(wire.into()))
}

/// Wrap a response byte stream into a stream of chunks.
///
/// The stream stops after `[DONE]` or when the body ends. The first
/// transport, SSE or payload error is yielded once and ends the stream.
pub fn chunk_stream<S, B, E>(bytes: S) -> ChunkStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: fmt::Display + Send + 'static,
{
    Box::pin(stream! {
        let mut events = Box::pin(bytes.eventsource());
        let mut delivered = 0usize;

        while let Some(event) = events.next().await {
            let frame = match event {
                Ok(event) => parse_frame(&event.data),
                Err(e) => Err(LlmError::Stream(format!("SSE parsing error: {}", e))),
            };

            match frame {
                Ok(Frame::Chunk(chunk)) => {
                    delivered += 1;
                    trace!("Received chunk {}", delivered);
                    yield Ok(chunk);
                }
                Ok(Frame::Skip) => continue,
                Ok(Frame::Done) => {
                    debug!("Stream finished after {} chunks", delivered);
                    break;
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    })
}

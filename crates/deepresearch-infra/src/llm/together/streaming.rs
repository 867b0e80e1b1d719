//! Stream draining for the Together chat-completions SSE protocol.
//!
//! The custom streaming handle does not deliver tokens incrementally to
//! its caller: the whole stream is consumed here and the concatenated
//! text is returned atomically once the stream is exhausted.

use futures_util::{Stream, StreamExt, pin_mut};

use deepresearch_types::llm::LlmError;

use super::types::ChatStreamChunk;

/// Drain a chunk stream, concatenating each chunk's first-choice text
/// delta in arrival order.
///
/// A chunk with no delta contributes nothing; a stream error aborts the
/// drain and propagates.
pub async fn collect_stream_text(
    chunks: impl Stream<Item = Result<ChatStreamChunk, LlmError>>,
) -> Result<String, LlmError> {
    pin_mut!(chunks);

    let mut result = String::new();
    while let Some(chunk) = chunks.next().await {
        result.push_str(chunk?.delta_text());
    }
    Ok(result)
}

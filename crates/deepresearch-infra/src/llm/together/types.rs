//! Together chat-completions wire types.
//!
//! Together-specific request/response structures for HTTP communication
//! with the Together API. They are NOT the generic LLM types from
//! `deepresearch-types` -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

use deepresearch_types::llm::{GenerationOptions, Message};

/// Request body for the Together chat-completions endpoint.
///
/// Sampling fields are always present on the wire; the documented
/// defaults are filled in from [`GenerationOptions`] accessors.
#[derive(Debug, Clone, Serialize)]
pub struct TogetherRequest {
    pub model: String,
    pub messages: Vec<TogetherMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub repetition_penalty: f64,
    pub stop: Vec<String>,
    pub stream: bool,
}

impl TogetherRequest {
    /// Build a streaming request for `model` from messages and options.
    pub fn streaming(model: &str, messages: &[Message], options: &GenerationOptions) -> Self {
        Self {
            model: model.to_string(),
            messages: messages.iter().map(TogetherMessage::from).collect(),
            max_tokens: options.max_tokens,
            temperature: options.temperature_or_default(),
            top_p: options.top_p_or_default(),
            top_k: options.top_k_or_default(),
            repetition_penalty: options.repetition_penalty_or_default(),
            stop: options.stop_or_default(),
            stream: true,
        }
    }
}

/// A single message in a Together conversation.
#[derive(Debug, Clone, Serialize)]
pub struct TogetherMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for TogetherMessage {
    fn from(msg: &Message) -> Self {
        Self {
            role: msg.role.to_string(),
            content: msg.content.clone(),
        }
    }
}

/// One SSE chunk of a streamed chat completion.
///
/// Every field is defaulted: a chunk with no choices or no delta content
/// is valid and simply contributes nothing to the result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatStreamChunk {
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

impl ChatStreamChunk {
    /// The first choice's text delta, or `""` when absent.
    pub fn delta_text(&self) -> &str {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
            .unwrap_or_default()
    }
}

/// A single choice within a stream chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub delta: StreamDelta,
}

/// The incremental content delta within a choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamDelta {
    #[serde(default)]
    pub content: Option<String>,
}

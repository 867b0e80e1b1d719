//! LLM request/response types for the deep-research core.
//!
//! These types model the data shapes shared by every model handle:
//! conversation messages, sampling options, completions, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Reasoning effort parameter for models that support it (e.g., o3-mini).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasoningEffort::Low => write!(f, "low"),
            ReasoningEffort::Medium => write!(f, "medium"),
            ReasoningEffort::High => write!(f, "high"),
        }
    }
}

/// Sampling options for a generation call.
///
/// All fields are optional; each handle applies its own documented
/// defaults for fields left unset. The streaming handle's defaults are
/// exposed through the accessor methods so the wire request and the
/// documentation cannot drift apart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl GenerationOptions {
    /// Sampling temperature; defaults to 0.7 when unset.
    pub fn temperature_or_default(&self) -> f64 {
        self.temperature.unwrap_or(0.7)
    }

    /// Nucleus sampling probability mass; defaults to 0.7 when unset.
    pub fn top_p_or_default(&self) -> f64 {
        self.top_p.unwrap_or(0.7)
    }

    /// Top-k sampling cutoff; defaults to 50 when unset.
    pub fn top_k_or_default(&self) -> u32 {
        self.top_k.unwrap_or(50)
    }

    /// Repetition penalty; defaults to 1 (no penalty) when unset.
    pub fn repetition_penalty_or_default(&self) -> f64 {
        self.repetition_penalty.unwrap_or(1.0)
    }

    /// Stop sequences; defaults to the Llama end-of-turn sentinels.
    pub fn stop_or_default(&self) -> Vec<String> {
        self.stop
            .clone()
            .unwrap_or_else(|| vec!["<|eot_id|>".to_string(), "<|eom_id|>".to_string()])
    }
}

/// Result of a generation call.
///
/// `reasoning` is populated only when a reasoning middleware separated a
/// tagged thinking segment out of the raw model output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl Completion {
    /// A completion with content only and no reasoning segment.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            reasoning: None,
        }
    }
}

/// Errors from model handle operations.
///
/// Provider and network failures are surfaced to the caller unchanged in
/// meaning; this core performs no retries or recovery of its own.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("stream error: {0}")]
    Stream(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors from model resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Every candidate construction path was blocked by missing settings.
    /// Fatal to the caller; there is no default provider and no retry.
    #[error("no model available: set USE_TOGETHER, CUSTOM_MODEL, FIREWORKS_KEY or OPENAI_KEY")]
    NoModelAvailable,
}

//! LanguageModel trait definition.
//!
//! This is the single abstraction every model handle implements. Uses
//! native async fn in traits (RPITIT, Rust 2024 edition); the object-safe
//! wrapper for runtime selection lives in [`super::box_model`].

use deepresearch_types::llm::{Completion, GenerationOptions, LlmError, Message};

/// A callable LLM backend, independent of its underlying transport.
///
/// Handles are stateless after construction: all methods take `&self`
/// and concurrent `generate` calls on the same handle are safe. Provider
/// and network errors propagate unchanged; this trait imposes no retry
/// or timeout of its own (a caller-imposed timeout must wrap the whole
/// `generate` future).
///
/// Implementations live in `deepresearch-infra` (e.g., `OpenAiChatModel`,
/// `TogetherChatModel`).
pub trait LanguageModel: Send + Sync {
    /// Stable identifier for this handle (e.g., the model name).
    fn model_id(&self) -> &str;

    /// Generate a completion from a message sequence and a parameter set.
    fn generate(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> impl std::future::Future<Output = Result<Completion, LlmError>> + Send;
}

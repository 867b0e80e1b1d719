//! Model resolution.
//!
//! Selects exactly one model handle from the process settings via a
//! strict, non-randomized fallback chain. Resolution is a pure function
//! of its input: no network calls, no ambient reads, deterministic for a
//! fixed configuration.

use deepresearch_core::llm::{BoxLanguageModel, ReasoningMiddleware};
use deepresearch_types::config::ResolverSettings;
use deepresearch_types::llm::{ReasoningEffort, ResolveError};

use super::openai::OpenAiChatModel;
use super::together::{TOGETHER_MODEL_ID, TogetherChatModel};

/// Fixed model served through the Fireworks reasoning path.
const DEEPSEEK_R1_MODEL: &str = "accounts/fireworks/models/deepseek-r1";

/// Fixed model for the primary provider's reasoning-effort path.
const O3_MINI_MODEL: &str = "o3-mini";

/// Tag name wrapping the thinking segment in deepseek-r1 output.
const REASONING_TAG: &str = "think";

/// Resolve the active model handle from settings.
///
/// Ordered, first-match-wins:
/// 1. `use_together` selects the direct-streaming handle unconditionally;
/// 2. a custom model name plus the primary API key selects a direct
///    handle for that model with structured output enabled;
/// 3. the secondary key selects deepseek-r1 wrapped in the reasoning
///    middleware, else the primary key selects o3-mini with medium
///    reasoning effort and structured output;
/// 4. otherwise [`ResolveError::NoModelAvailable`].
pub fn resolve_model(settings: &ResolverSettings) -> Result<BoxLanguageModel, ResolveError> {
    if settings.use_together {
        tracing::debug!(model = TOGETHER_MODEL_ID, "resolved direct-streaming handle");
        return Ok(BoxLanguageModel::new(TogetherChatModel::new(
            settings.together_api_key.clone().unwrap_or_default(),
        )));
    }

    if let (Some(model), Some(key)) = (&settings.custom_model, &settings.openai_key) {
        tracing::debug!(model = %model, "resolved custom model on primary provider");
        return Ok(BoxLanguageModel::new(
            OpenAiChatModel::new(key, &settings.openai_endpoint, model).with_structured_outputs(),
        ));
    }

    if let Some(key) = &settings.fireworks_key {
        tracing::debug!(model = DEEPSEEK_R1_MODEL, "resolved reasoning-wrapped handle");
        return Ok(BoxLanguageModel::new(ReasoningMiddleware::new(
            OpenAiChatModel::fireworks(key, DEEPSEEK_R1_MODEL),
            REASONING_TAG,
        )));
    }

    if let Some(key) = &settings.openai_key {
        tracing::debug!(model = O3_MINI_MODEL, "resolved reasoning-effort handle");
        return Ok(BoxLanguageModel::new(
            OpenAiChatModel::new(key, &settings.openai_endpoint, O3_MINI_MODEL)
                .with_reasoning_effort(ReasoningEffort::Medium)
                .with_structured_outputs(),
        ));
    }

    Err(ResolveError::NoModelAvailable)
}

//! Reasoning middleware.
//!
//! Wraps a model handle and splits tagged thinking segments (e.g.
//! `<think>...</think>` emitted by deepseek-r1) out of the raw output.
//! Extracted segments land in [`Completion::reasoning`]; the remaining
//! text becomes [`Completion::content`].

use deepresearch_types::llm::{Completion, GenerationOptions, LlmError, Message};

use super::model::LanguageModel;

/// Middleware that separates a tagged reasoning segment from the final
/// answer segment in a model's raw output.
///
/// The wrapper is transparent for everything else: `model_id` passes
/// through and errors propagate unchanged.
pub struct ReasoningMiddleware<M: LanguageModel> {
    inner: M,
    tag: String,
}

impl<M: LanguageModel> ReasoningMiddleware<M> {
    /// Wrap `inner`, extracting segments delimited by `<tag>...</tag>`.
    pub fn new(inner: M, tag: impl Into<String>) -> Self {
        Self {
            inner,
            tag: tag.into(),
        }
    }
}

impl<M: LanguageModel> LanguageModel for ReasoningMiddleware<M> {
    fn model_id(&self) -> &str {
        self.inner.model_id()
    }

    async fn generate(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion, LlmError> {
        let completion = self.inner.generate(messages, options).await?;
        let (content, reasoning) = split_reasoning(&completion.content, &self.tag);
        Ok(Completion {
            content,
            // An inner handle never sets reasoning itself; keep whatever
            // it produced when no tagged segment was found.
            reasoning: reasoning.or(completion.reasoning),
        })
    }
}

/// Split every complete `<tag>...</tag>` segment out of `text`.
///
/// Multiple segments concatenate in order, newline-separated. An unclosed
/// opening tag is left in place untouched (no extraction for that tail).
fn split_reasoning(text: &str, tag: &str) -> (String, Option<String>) {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let mut content = String::new();
    let mut reasoning: Vec<&str> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(&open) {
        let after = &rest[start + open.len()..];
        match after.find(&close) {
            Some(end) => {
                content.push_str(&rest[..start]);
                reasoning.push(&after[..end]);
                rest = &after[end + close.len()..];
            }
            None => break,
        }
    }
    content.push_str(rest);

    if reasoning.is_empty() {
        (content, None)
    } else {
        (content.trim_start().to_string(), Some(reasoning.join("\n")))
    }
}

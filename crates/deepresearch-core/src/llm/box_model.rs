//! BoxLanguageModel -- object-safe dynamic dispatch wrapper for LanguageModel.
//!
//! Three-step blanket-impl pattern:
//! 1. Define an object-safe `LanguageModelDyn` trait with boxed futures
//! 2. Blanket-impl `LanguageModelDyn` for all `T: LanguageModel`
//! 3. `BoxLanguageModel` wraps `Box<dyn LanguageModelDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use deepresearch_types::llm::{Completion, GenerationOptions, LlmError, Message};

use super::model::LanguageModel;

/// Object-safe version of [`LanguageModel`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch (`dyn LanguageModelDyn`).
/// A blanket implementation is provided for all types implementing
/// `LanguageModel`.
pub trait LanguageModelDyn: Send + Sync {
    fn model_id(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        messages: &'a [Message],
        options: &'a GenerationOptions,
    ) -> Pin<Box<dyn Future<Output = Result<Completion, LlmError>> + Send + 'a>>;
}

/// Blanket implementation: any `LanguageModel` automatically implements
/// `LanguageModelDyn`.
impl<T: LanguageModel> LanguageModelDyn for T {
    fn model_id(&self) -> &str {
        LanguageModel::model_id(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        messages: &'a [Message],
        options: &'a GenerationOptions,
    ) -> Pin<Box<dyn Future<Output = Result<Completion, LlmError>> + Send + 'a>> {
        Box::pin(self.generate(messages, options))
    }
}

/// Type-erased model handle for runtime provider selection.
///
/// Since `LanguageModel` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxLanguageModel` provides equivalent methods that delegate
/// to the inner `LanguageModelDyn` trait object.
pub struct BoxLanguageModel {
    inner: Box<dyn LanguageModelDyn + Send + Sync>,
}

impl BoxLanguageModel {
    /// Wrap a concrete `LanguageModel` in a type-erased box.
    pub fn new<T: LanguageModel + 'static>(model: T) -> Self {
        Self {
            inner: Box::new(model),
        }
    }

    /// Stable identifier for this handle.
    pub fn model_id(&self) -> &str {
        self.inner.model_id()
    }

    /// Generate a completion from a message sequence and a parameter set.
    pub async fn generate(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion, LlmError> {
        self.inner.generate_boxed(messages, options).await
    }
}

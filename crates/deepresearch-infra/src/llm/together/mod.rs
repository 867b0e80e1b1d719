//! TogetherChatModel -- custom streaming model handle for Together.
//!
//! Opens a streamed chat-completion request and drains the SSE stream,
//! returning the concatenated text only once the stream is exhausted.
//! The API key is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

pub mod streaming;
pub mod types;

use std::time::Duration;

use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use secrecy::{ExposeSecret, SecretString};

use deepresearch_core::llm::LanguageModel;
use deepresearch_types::llm::{Completion, GenerationOptions, LlmError, Message};

use self::streaming::collect_stream_text;
use self::types::{ChatStreamChunk, TogetherRequest};

/// Public identifier exposed by the Together handle.
pub const TOGETHER_MODEL_ID: &str = "Together-Llama-3.3-70B-Instruct-Turbo-Free";

/// Model name sent on the wire.
const TOGETHER_WIRE_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct-Turbo-Free";

const TOGETHER_BASE_URL: &str = "https://api.together.xyz/v1";

/// Custom streaming handle for the Together chat-completions API.
///
/// Unlike the direct handles, this one always streams: it consumes the
/// asynchronous token sequence to completion and hands back one result
/// string. Callers never see partial output.
pub struct TogetherChatModel {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl TogetherChatModel {
    /// Create a Together handle.
    ///
    /// The key is consumed unconditionally; an empty key builds a handle
    /// whose requests will fail with an authentication error.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300)) // 5 min timeout for long generations
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key: SecretString::from(api_key.into()),
            base_url: TOGETHER_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

// TogetherChatModel intentionally does NOT derive Debug to prevent
// accidental exposure of the API key.

impl LanguageModel for TogetherChatModel {
    fn model_id(&self) -> &str {
        TOGETHER_MODEL_ID
    }

    async fn generate(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion, LlmError> {
        let body = TogetherRequest::streaming(TOGETHER_WIRE_MODEL, messages, options);

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let chunks = response
            .bytes_stream()
            .eventsource()
            .map(|event| match event {
                // Terminal sentinel, carries no delta.
                Ok(event) if event.data == "[DONE]" => Ok(None),
                Ok(event) => serde_json::from_str::<ChatStreamChunk>(&event.data)
                    .map(Some)
                    .map_err(|e| LlmError::Deserialization(format!("stream chunk: {e}"))),
                Err(e) => Err(LlmError::Stream(e.to_string())),
            })
            .filter_map(|item| async move { item.transpose() });

        let text = collect_stream_text(chunks).await?;
        Ok(Completion::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_is_fixed() {
        let model = TogetherChatModel::new("key-not-real");
        assert_eq!(model.model_id(), TOGETHER_MODEL_ID);
    }

    #[test]
    fn test_empty_key_still_constructs() {
        let model = TogetherChatModel::new("");
        assert_eq!(model.model_id(), TOGETHER_MODEL_ID);
    }

    #[test]
    fn test_base_url_override() {
        let model =
            TogetherChatModel::new("key").with_base_url("http://localhost:8080".to_string());
        assert_eq!(model.url(), "http://localhost:8080/chat/completions");
    }

    #[test]
    fn test_wire_model_differs_from_public_id() {
        assert_ne!(TOGETHER_MODEL_ID, TOGETHER_WIRE_MODEL);
        assert!(TOGETHER_WIRE_MODEL.starts_with("meta-llama/"));
    }
}

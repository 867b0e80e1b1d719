//! OpenAI-compatible direct model handle.
//!
//! A single [`OpenAiChatModel`] serves the primary hosted endpoint and
//! Fireworks -- any OpenAI-compatible chat-completion API -- via
//! configurable base URLs. Uses [`async_openai`] for type-safe
//! request/response handling.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    ReasoningEffort as OpenAiReasoningEffort, ResponseFormat, StopConfiguration,
};

use deepresearch_core::llm::LanguageModel;
use deepresearch_types::llm::{
    Completion, GenerationOptions, LlmError, Message, MessageRole, ReasoningEffort,
};

/// Base URL for the Fireworks OpenAI-compatible endpoint.
pub const FIREWORKS_BASE_URL: &str = "https://api.fireworks.ai/inference/v1";

/// Direct handle for any OpenAI-compatible chat-completion API.
///
/// Thin pass-through: one non-streaming request per `generate` call,
/// no retries, no interception of the output.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiChatModel {
    client: Client<OpenAIConfig>,
    model: String,
    structured_outputs: bool,
    reasoning_effort: Option<ReasoningEffort>,
}

impl OpenAiChatModel {
    /// Create a direct handle against an OpenAI-compatible endpoint.
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);

        Self {
            client: Client::with_config(config),
            model: model.to_string(),
            structured_outputs: false,
            reasoning_effort: None,
        }
    }

    /// Create a Fireworks handle.
    ///
    /// Uses `https://api.fireworks.ai/inference/v1` as the base URL.
    pub fn fireworks(api_key: &str, model: &str) -> Self {
        Self::new(api_key, FIREWORKS_BASE_URL, model)
    }

    /// Enable structured-output mode (JSON response format).
    pub fn with_structured_outputs(mut self) -> Self {
        self.structured_outputs = true;
        self
    }

    /// Set the reasoning-effort parameter sent with each request.
    pub fn with_reasoning_effort(mut self, effort: ReasoningEffort) -> Self {
        self.reasoning_effort = Some(effort);
        self
    }

    /// Whether structured-output mode is enabled.
    pub fn structured_outputs(&self) -> bool {
        self.structured_outputs
    }

    /// Build a [`CreateChatCompletionRequest`] from messages and options.
    fn build_request(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> CreateChatCompletionRequest {
        let oai_messages: Vec<ChatCompletionRequestMessage> = messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::System => {
                    ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    })
                }
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                        content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                            msg.content.clone(),
                        )),
                        refusal: None,
                        name: None,
                        audio: None,
                        tool_calls: None,
                        function_call: None,
                    })
                }
            })
            .collect();

        let mut req = CreateChatCompletionRequest {
            model: self.model.clone(),
            messages: oai_messages,
            max_completion_tokens: options.max_tokens,
            temperature: options.temperature.map(|t| t as f32),
            top_p: options.top_p.map(|p| p as f32),
            ..Default::default()
        };

        if let Some(ref stops) = options.stop {
            if !stops.is_empty() {
                req.stop = Some(StopConfiguration::StringArray(stops.clone()));
            }
        }

        if self.structured_outputs {
            req.response_format = Some(ResponseFormat::JsonObject);
        }

        if let Some(effort) = self.reasoning_effort {
            req.reasoning_effort = Some(match effort {
                ReasoningEffort::Low => OpenAiReasoningEffort::Low,
                ReasoningEffort::Medium => OpenAiReasoningEffort::Medium,
                ReasoningEffort::High => OpenAiReasoningEffort::High,
            });
        }

        req
    }
}

impl LanguageModel for OpenAiChatModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion, LlmError> {
        let request = self.build_request(messages, options);

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(Completion::text(content))
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited,
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::StreamError(stream_err) => LlmError::Stream(stream_err.to_string()),
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id() {
        let model = OpenAiChatModel::new("sk-test", "https://api.openai.com/v1", "gpt-4o");
        assert_eq!(model.model_id(), "gpt-4o");
        assert!(!model.structured_outputs());
    }

    #[test]
    fn test_fireworks_factory() {
        let model = OpenAiChatModel::fireworks(
            "fw-test",
            "accounts/fireworks/models/deepseek-r1",
        );
        assert_eq!(model.model_id(), "accounts/fireworks/models/deepseek-r1");
    }

    #[test]
    fn test_build_request_messages_and_options() {
        let model = OpenAiChatModel::new("sk-test", "https://api.openai.com/v1", "gpt-4o");
        let options = GenerationOptions {
            max_tokens: Some(1024),
            temperature: Some(0.2),
            stop: Some(vec!["END".to_string()]),
            ..Default::default()
        };
        let req = model.build_request(
            &[Message::system("Be terse"), Message::user("Hello")],
            &options,
        );

        assert_eq!(req.model, "gpt-4o");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.max_completion_tokens, Some(1024));
        assert_eq!(req.temperature, Some(0.2f32));
        assert!(req.stop.is_some());
        assert!(req.response_format.is_none());
        assert!(req.reasoning_effort.is_none());
    }

    #[test]
    fn test_structured_outputs_sets_response_format() {
        let model = OpenAiChatModel::new("sk-test", "https://api.openai.com/v1", "my-model")
            .with_structured_outputs();
        assert!(model.structured_outputs());

        let req = model.build_request(&[Message::user("hi")], &GenerationOptions::default());
        assert!(matches!(req.response_format, Some(ResponseFormat::JsonObject)));
    }

    #[test]
    fn test_reasoning_effort_forwarded() {
        let model = OpenAiChatModel::new("sk-test", "https://api.openai.com/v1", "o3-mini")
            .with_reasoning_effort(ReasoningEffort::Medium);

        let req = model.build_request(&[Message::user("hi")], &GenerationOptions::default());
        assert!(matches!(
            req.reasoning_effort,
            Some(OpenAiReasoningEffort::Medium)
        ));
    }

    #[test]
    fn test_unset_options_are_omitted() {
        let model = OpenAiChatModel::new("sk-test", "https://api.openai.com/v1", "gpt-4o");
        let req = model.build_request(&[Message::user("hi")], &GenerationOptions::default());
        assert!(req.max_completion_tokens.is_none());
        assert!(req.temperature.is_none());
        assert!(req.stop.is_none());
    }

    #[test]
    fn test_map_openai_error_auth() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Incorrect API key provided".to_string(),
            r#type: Some("authentication_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[test]
    fn test_map_openai_error_rate_limit() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Rate limit exceeded".to_string(),
            r#type: Some("rate_limit_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::RateLimited));
    }

    #[test]
    fn test_map_openai_error_invalid_argument() {
        use async_openai::error::OpenAIError;
        let err = map_openai_error(OpenAIError::InvalidArgument("bad arg".to_string()));
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }
}

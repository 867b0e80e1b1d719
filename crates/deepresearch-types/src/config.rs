//! Resolver settings.
//!
//! All provider selection inputs live in one explicit struct that is
//! constructed once at process entry and passed by reference into the
//! resolver. Components never read the environment themselves, which
//! keeps the fallback chain a pure function of its input.

use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible endpoint for the primary provider.
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default context-token budget for prompt trimming.
pub const DEFAULT_CONTEXT_SIZE: usize = 128_000;

/// Process configuration for model resolution and prompt trimming.
///
/// Every key is optional; a missing key means the corresponding candidate
/// handle is never constructed. `Default` yields the empty configuration
/// (which resolves to no model).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Primary provider API key (`OPENAI_KEY`).
    pub openai_key: Option<String>,
    /// Primary provider base URL (`OPENAI_ENDPOINT`).
    pub openai_endpoint: String,
    /// Secondary hosted provider API key (`FIREWORKS_KEY`).
    pub fireworks_key: Option<String>,
    /// Custom model name served by the primary provider (`CUSTOM_MODEL`).
    pub custom_model: Option<String>,
    /// Select the direct-streaming provider unconditionally (`USE_TOGETHER`).
    pub use_together: bool,
    /// API key for the direct-streaming client (`TOGETHER_API_KEY`).
    /// Consumed unconditionally by the client constructor; may be absent.
    pub together_api_key: Option<String>,
    /// Context-token budget override for trimming (`CONTEXT_SIZE`).
    pub context_size: usize,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            openai_key: None,
            openai_endpoint: DEFAULT_OPENAI_ENDPOINT.to_string(),
            fireworks_key: None,
            custom_model: None,
            use_together: false,
            together_api_key: None,
            context_size: DEFAULT_CONTEXT_SIZE,
        }
    }
}

impl ResolverSettings {
    /// Read the settings from the process environment, once.
    ///
    /// Empty-string values are treated as absent so that `FOO=` in a
    /// dotenv file behaves like an unset key.
    pub fn from_env() -> Self {
        Self {
            openai_key: env_opt("OPENAI_KEY"),
            openai_endpoint: env_opt("OPENAI_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_OPENAI_ENDPOINT.to_string()),
            fireworks_key: env_opt("FIREWORKS_KEY"),
            custom_model: env_opt("CUSTOM_MODEL"),
            use_together: env_opt("USE_TOGETHER").as_deref() == Some("true"),
            together_api_key: env_opt("TOGETHER_API_KEY"),
            context_size: env_opt("CONTEXT_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CONTEXT_SIZE),
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ResolverSettings::default();
        assert!(settings.openai_key.is_none());
        assert_eq!(settings.openai_endpoint, DEFAULT_OPENAI_ENDPOINT);
        assert!(settings.fireworks_key.is_none());
        assert!(settings.custom_model.is_none());
        assert!(!settings.use_together);
        assert!(settings.together_api_key.is_none());
        assert_eq!(settings.context_size, 128_000);
    }

    #[test]
    fn test_settings_serde_roundtrip() {
        let settings = ResolverSettings {
            openai_key: Some("sk-test".to_string()),
            custom_model: Some("my-model".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: ResolverSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.openai_key.as_deref(), Some("sk-test"));
        assert_eq!(parsed.custom_model.as_deref(), Some("my-model"));
        assert_eq!(parsed.context_size, 128_000);
    }
}

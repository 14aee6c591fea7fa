//! Configuration management for the auto-parts agent.
//!
//! Configuration can be set via environment variables:
//! - `OPENAI_API_KEY` - Required. Key for the text-generation service.
//! - `CATALOG_URL` - Optional. Base URL of the parts catalog. Defaults to `http://62.109.23.215:3000`.
//! - `COMPLETIONS_URL` - Optional. Chat-completion endpoint. Defaults to the OpenAI endpoint.
//! - `DESCRIPTION_MODEL` - Optional. Model that writes listing descriptions. Defaults to `gpt-3.5-turbo`.
//! - `AGENT_MODEL` - Optional. Model the external agent runtime should drive. Defaults to `gpt-3.5-turbo`.
//! - `MAX_ITERATIONS` - Optional. Iteration cap handed to the agent runtime. Defaults to `15`.

use thiserror::Error;

/// Default catalog host.
pub const DEFAULT_CATALOG_URL: &str = "http://62.109.23.215:3000";

/// Default chat-completion endpoint.
pub const DEFAULT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model for both the agent and description generation.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text-generation API key
    pub api_key: String,

    /// Base URL of the parts catalog service
    pub catalog_url: String,

    /// Chat-completion endpoint used for descriptions
    pub completions_url: String,

    /// Model used to write listing descriptions
    pub description_model: String,

    /// Model the agent runtime should use for tool selection
    pub agent_model: String,

    /// Maximum iterations for the external agent loop
    pub max_iterations: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        Self::from_env_with_key(api_key)
    }

    /// Load everything except the API key from environment variables.
    ///
    /// For commands that never call the completion service. An empty key
    /// makes description generation fail with `LlmError::MissingApiKey`.
    pub fn from_env_with_key(api_key: String) -> Result<Self, ConfigError> {
        let catalog_url =
            std::env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

        let completions_url = std::env::var("COMPLETIONS_URL")
            .unwrap_or_else(|_| DEFAULT_COMPLETIONS_URL.to_string());

        let description_model =
            std::env::var("DESCRIPTION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let agent_model =
            std::env::var("AGENT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_iterations = parse_max_iterations(std::env::var("MAX_ITERATIONS").ok())?;

        Ok(Self {
            api_key,
            catalog_url,
            completions_url,
            description_model,
            agent_model,
            max_iterations,
        })
    }

    /// Create a config with default endpoints (useful for testing).
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            completions_url: DEFAULT_COMPLETIONS_URL.to_string(),
            description_model: DEFAULT_MODEL.to_string(),
            agent_model: DEFAULT_MODEL.to_string(),
            max_iterations: 15,
        }
    }
}

fn parse_max_iterations(value: Option<String>) -> Result<usize, ConfigError> {
    match value {
        None => Ok(15),
        Some(v) => v.trim().parse::<usize>().map_err(|e| {
            ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoints() {
        let config = Config::new("sk-test".to_string());
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.completions_url, DEFAULT_COMPLETIONS_URL);
        assert_eq!(config.description_model, "gpt-3.5-turbo");
        assert_eq!(config.max_iterations, 15);
    }

    #[test]
    fn from_env_with_key_keeps_given_key() {
        let config = Config::from_env_with_key(String::new()).unwrap();
        assert!(config.api_key.is_empty());
        assert!(!config.catalog_url.is_empty());
    }

    #[test]
    fn max_iterations_defaults_when_unset() {
        assert_eq!(parse_max_iterations(None).unwrap(), 15);
        assert_eq!(parse_max_iterations(Some(" 20 ".to_string())).unwrap(), 20);
    }

    #[test]
    fn max_iterations_rejects_garbage() {
        let err = parse_max_iterations(Some("many".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name, _) if name == "MAX_ITERATIONS"));
    }
}

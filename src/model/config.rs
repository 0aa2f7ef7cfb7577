//! Provider configuration
//!
//! API credentials and model selection are passed in as an explicit object
//! rather than read from ambient process state, so the extraction service
//! stays testable with a stub client. `from_env` is a convenience for hosts
//! that do configure through the environment.

use std::env;

const ENV_API_KEY: &str = "GEMINI_API_KEY";
const ENV_MODEL: &str = "GEMINI_AI_MODEL";

/// Default vision model when `GEMINI_AI_MODEL` is unset.
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration for the vision model provider.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),
}

impl Config {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Load configuration from `GEMINI_API_KEY` and `GEMINI_AI_MODEL`.
    ///
    /// The API key is required; the model name defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingEnv(ENV_API_KEY))?;
        let model = env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::debug!(model = %model, "Loaded provider configuration from environment");

        Ok(Self { api_key, model })
    }
}

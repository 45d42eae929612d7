//! Oracle configuration from TOML (`[oracle]` section)

use super::ConfigValidationError;
use crate::oracle::OracleEndpoint;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOracleConfig {
    /// Base URL of the API (anything speaking `/chat/completions`).
    pub base_url: String,
    /// Model used for both speech and next-speaker selection.
    pub model: String,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer `api_key_env`
    pub api_key: Option<String>,
    /// Timeout in seconds for a single completion request.
    pub timeout_seconds: u64,
    /// Sampling temperature; the server default when unset.
    pub temperature: Option<f32>,
}

impl Default for FileOracleConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            timeout_seconds: 120,
            temperature: None,
        }
    }
}

impl FileOracleConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        Ok(())
    }

    /// Resolve the API key: explicit value first, then the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.is_empty())
    }

    /// Endpoint description for [`crate::oracle::OpenAiChatOracle`]
    pub fn to_endpoint(&self) -> OracleEndpoint {
        OracleEndpoint {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: self.resolve_api_key(),
            timeout: Duration::from_secs(self.timeout_seconds),
            temperature: self.temperature,
        }
    }
}

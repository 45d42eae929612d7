//! OpenAI-compatible chat completions oracle

use super::wire::{ChatMessage, ChatRequest, ChatResponse, status_error};
use async_trait::async_trait;
use crew_chat_application::{DecisionOracle, OracleError};
use crew_chat_domain::Message;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Where and how to reach the completions endpoint
#[derive(Debug, Clone)]
pub struct OracleEndpoint {
    pub base_url: String,
    pub model: String,
    /// Sent as a bearer token; local servers usually need none
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub temperature: Option<f32>,
}

/// [`DecisionOracle`] backed by `POST {base_url}/chat/completions`
pub struct OpenAiChatOracle {
    client: Client,
    url: String,
    endpoint: OracleEndpoint,
}

impl OpenAiChatOracle {
    pub fn new(endpoint: OracleEndpoint) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(endpoint.timeout)
            .build()
            .map_err(|e| OracleError::ConnectionError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: completions_url(&endpoint.base_url),
            endpoint,
        })
    }

    pub fn model(&self) -> &str {
        &self.endpoint.model
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl DecisionOracle for OpenAiChatOracle {
    async fn complete(&self, messages: &[Message]) -> Result<String, OracleError> {
        let request = ChatRequest {
            model: &self.endpoint.model,
            messages: messages.iter().map(ChatMessage::from).collect(),
            temperature: self.endpoint.temperature,
        };

        debug!(
            "Oracle request to {} ({} messages)",
            self.endpoint.model,
            messages.len()
        );

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(key) = &self.endpoint.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                OracleError::Timeout
            } else if e.is_connect() {
                OracleError::ConnectionError(e.to_string())
            } else {
                OracleError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OracleError::ConnectionError(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| OracleError::InvalidResponse(format!("{}: {}", e, body)))?;
        let text = parsed.into_text()?;

        debug!("Oracle replied with {} bytes", text.len());
        Ok(text)
    }
}

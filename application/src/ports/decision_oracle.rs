//! Decision oracle port
//!
//! Defines the interface to the external text-completion capability used
//! both to voice participants and to pick the next speaker.

use async_trait::async_trait;
use crew_chat_domain::Message;
use thiserror::Error;

/// Errors that can occur while consulting the oracle
///
/// None of these are retried; they abort the run.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Timeout")]
    Timeout,
}

/// Stateless text-completion capability
///
/// Given an ordered list of role-tagged messages, returns one block of
/// free text. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait DecisionOracle: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, OracleError>;
}

//! Decision oracle adapters
//!
//! [`OpenAiChatOracle`] talks to any server implementing the OpenAI
//! `/chat/completions` endpoint (OpenAI itself, Ollama, vLLM, LM Studio...).

mod openai;
mod wire;

pub use openai::{OpenAiChatOracle, OracleEndpoint};

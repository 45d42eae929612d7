//! Infrastructure layer for crew-chat
//!
//! Adapters implementing the ports defined in the application layer:
//! the HTTP decision oracle, the JSONL run log, plus configuration and
//! persona file loading.

pub mod config;
pub mod logging;
pub mod oracle;
pub mod persona;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileChatConfig, FileConfig, FileOracleConfig,
    FileOutputConfig,
};
pub use logging::JsonlConversationLogger;
pub use oracle::{OpenAiChatOracle, OracleEndpoint};
pub use persona::{PersonaLoadError, PersonaLoader};

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application settings
//! once validated.

mod chat;
mod oracle;
mod output;

pub use chat::FileChatConfig;
pub use oracle::FileOracleConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("oracle.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("oracle.model cannot be empty")]
    EmptyModelName,

    #[error("oracle.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("chat.topic cannot be empty")]
    EmptyTopic,

    #[error("chat.seed_message cannot be empty")]
    EmptySeedMessage,

    #[error("chat.max_turns cannot be 0")]
    InvalidMaxTurns,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Decision oracle endpoint
    pub oracle: FileOracleConfig,
    /// Conversation settings
    pub chat: FileChatConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.oracle.validate()?;
        self.chat.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[oracle]
model = "gpt-4o"
base_url = "http://localhost:11434/v1"
timeout_seconds = 30

[chat]
personas = "crew.json"
topic = "strawhat_chat"
seed_message = "Where is Zoro?"
include_human = false
max_turns = 12

[output]
color = false
log_file = "run.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.oracle.model, "gpt-4o");
        assert_eq!(config.oracle.timeout_seconds, 30);
        assert_eq!(config.chat.topic, "strawhat_chat");
        assert_eq!(config.chat.max_turns, Some(12));
        assert!(!config.chat.include_human);
        assert!(!config.output.color);
        assert_eq!(
            config.output.log_file.as_deref(),
            Some(std::path::Path::new("run.jsonl"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[chat]
termination_keyword = "DONE"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.termination_keyword, "DONE");
        // Defaults should apply
        assert_eq!(config.oracle.model, "gpt-4o-mini");
        assert_eq!(config.chat.topic, "crew_chat");
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(FileConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let mut config = FileConfig::default();
        config.oracle.timeout_seconds = 0;
        config.chat.topic = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }
}

//! Conversation configuration from TOML (`[chat]` section)

use super::ConfigValidationError;
use crew_chat_application::GroupChatSettings;
use crew_chat_domain::{ConversationMessage, PromptTemplate, TerminationPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// JSON file with the persona records
    pub personas: PathBuf,
    /// Shared conversation topic
    pub topic: String,
    /// Message that opens the conversation
    pub seed_message: String,
    /// Source label of the opening message
    pub seed_source: String,
    /// Let the arbiter hand the floor to the human
    pub include_human: bool,
    pub human_description: String,
    /// Word the human types to end the run; empty disables it
    pub termination_keyword: String,
    /// Stop after this many speaker decisions
    pub max_turns: Option<usize>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            personas: PathBuf::from("personas.json"),
            topic: "crew_chat".to_string(),
            seed_message: "Guys Zoro is lost on an island again :(".to_string(),
            seed_source: crew_chat_domain::HUMAN_SOURCE.to_string(),
            include_human: true,
            human_description: PromptTemplate::default_human_description().to_string(),
            termination_keyword: "APPROVE".to_string(),
            max_turns: None,
        }
    }
}

impl FileChatConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.topic.trim().is_empty() {
            return Err(ConfigValidationError::EmptyTopic);
        }
        if self.seed_message.trim().is_empty() {
            return Err(ConfigValidationError::EmptySeedMessage);
        }
        if self.max_turns == Some(0) {
            return Err(ConfigValidationError::InvalidMaxTurns);
        }
        Ok(())
    }

    /// Convert to the settings consumed by the group chat use case
    pub fn to_settings(&self) -> GroupChatSettings {
        let seed = ConversationMessage::new(&self.seed_source, &self.seed_message);
        let termination = TerminationPolicy::new()
            .with_keyword(&self.termination_keyword)
            .with_max_turns(self.max_turns);

        let settings = GroupChatSettings::new(self.topic.as_str(), seed)
            .with_human_description(&self.human_description)
            .with_termination(termination);
        if self.include_human {
            settings
        } else {
            settings.without_human()
        }
    }
}

//! Conversation domain entities

use serde::{Deserialize, Serialize};

/// Source label used for messages typed by the human participant.
pub const HUMAN_SOURCE: &str = "User";

/// Source label used for synthetic attribution entries.
pub const SYSTEM_SOURCE: &str = "system";

/// A message on the shared conversation topic (Value Object)
///
/// Immutable once published. Transcripts store clones, never references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    source: String,
    content: String,
}

impl ConversationMessage {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }

    /// A message typed by the human participant
    pub fn from_human(content: impl Into<String>) -> Self {
        Self::new(HUMAN_SOURCE, content)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the message came from the human participant
    pub fn is_from_human(&self) -> bool {
        self.source == HUMAN_SOURCE
    }
}

impl std::fmt::Display for ConversationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source, self.content)
    }
}

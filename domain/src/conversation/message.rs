//! Role-tagged messages exchanged with the decision oracle

use super::entities::{ConversationMessage, SYSTEM_SOURCE};
use serde::{Deserialize, Serialize};

/// Role of a message in an oracle request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message in an oracle request (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Who said it, when the role alone does not tell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            source: None,
        }
    }

    pub fn user(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            source: Some(source.into()),
        }
    }

    pub fn assistant(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            source: Some(source.into()),
        }
    }

    /// A user-role note attributed to `system`, used to mark hand-overs
    pub fn attribution(content: impl Into<String>) -> Self {
        Self::user(content, SYSTEM_SOURCE)
    }
}

impl From<&ConversationMessage> for Message {
    fn from(msg: &ConversationMessage) -> Self {
        Message::user(msg.content(), msg.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), "assistant");
        assert_eq!(Role::System.as_str(), "system");
    }

    #[test]
    fn test_attribution_is_user_from_system() {
        let msg = Message::attribution("Transferred to Zoro");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.source.as_deref(), Some("system"));
    }

    #[test]
    fn test_from_conversation_message_keeps_source() {
        let conv = ConversationMessage::new("Robin", "Interesting.");
        let msg = Message::from(&conv);
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Interesting.");
        assert_eq!(msg.source.as_deref(), Some("Robin"));
    }

    #[test]
    fn test_system_message_omits_source_when_serialized() {
        let json = serde_json::to_value(Message::system("be Luffy")).unwrap();
        assert!(json.get("source").is_none());
    }
}

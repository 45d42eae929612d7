//! Messages carried by the bus

use crate::conversation::entities::ConversationMessage;
use serde::{Deserialize, Serialize};

/// Discriminant of [`BusMessage`], used to build handler tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Conversation,
    SpeakRequest,
}

/// Everything that can be published on a topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusMessage {
    /// A new line of the shared conversation
    Conversation(ConversationMessage),
    /// "You may produce the next message now"
    SpeakRequest,
}

impl BusMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            BusMessage::Conversation(_) => MessageKind::Conversation,
            BusMessage::SpeakRequest => MessageKind::SpeakRequest,
        }
    }
}

impl From<ConversationMessage> for BusMessage {
    fn from(msg: ConversationMessage) -> Self {
        BusMessage::Conversation(msg)
    }
}

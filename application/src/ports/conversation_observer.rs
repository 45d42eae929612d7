//! Conversation observer port
//!
//! Notified of every message on the shared topic and of every arbitration
//! decision, in delivery order. The presentation layer renders these as
//! console output; nothing here affects the conversation itself.

use crew_chat_domain::{ConversationMessage, StopReason, TurnDecision};

pub trait ConversationObserver: Send + Sync {
    /// A message reached the shared transcript
    fn on_message(&self, _message: &ConversationMessage) {}

    /// The arbiter handed the floor to someone
    fn on_decision(&self, _decision: &TurnDecision, _raw_choice: &str) {}

    /// The arbiter stopped handing out the floor
    fn on_stop(&self, _reason: StopReason) {}
}

/// No-op observer for tests and quiet runs
pub struct NoObserver;

impl ConversationObserver for NoObserver {}

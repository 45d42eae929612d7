//! Conversation domain.
//!
//! - [`entities::ConversationMessage`] — a message published to the shared topic
//! - [`message::Message`] — a role-tagged entry handed to the decision oracle
//! - [`transcript::Transcript`] — an append-only log owned by a single actor

pub mod entities;
pub mod message;
pub mod transcript;

//! Structured run logging
//!
//! Provides [`JsonlConversationLogger`], implementing the
//! [`ConversationLogger`](crew_chat_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;

//! Domain layer for crew-chat
//!
//! This crate contains the entities, value objects and pure policies of a
//! role-played group conversation. It has no dependencies on the runtime,
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! - **ConversationMessage**: an immutable `{source, content}` value published
//!   to the shared conversation topic
//! - **Transcript**: an append-only log of messages, owned by exactly one actor
//!
//! ## Turn selection
//!
//! After every conversation message the arbiter asks the decision oracle who
//! should speak next. [`TurnSelector`] turns the oracle's free-text answer into
//! a participant, falling back to a deterministic round-robin when the answer
//! names nobody usable.

pub mod bus;
pub mod conversation;
pub mod core;
pub mod persona;
pub mod prompt;
pub mod turn;
pub mod util;

// Re-export commonly used types
pub use bus::{BusMessage, MessageKind, Topic};
pub use conversation::{
    entities::{ConversationMessage, HUMAN_SOURCE, SYSTEM_SOURCE},
    message::{Message, Role},
    transcript::Transcript,
};
pub use core::error::DomainError;
pub use persona::{
    entities::{Persona, PersonaRecord},
    registry::PersonaRegistry,
};
pub use prompt::PromptTemplate;
pub use turn::{
    selection::{SelectionOutcome, TurnDecision, TurnSelector},
    termination::{StopReason, TerminationPolicy},
};

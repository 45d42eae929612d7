//! Application layer for crew-chat
//!
//! This crate contains the single-threaded actor runtime, the three actor
//! kinds taking part in a group conversation, the use case wiring them
//! together, and the port definitions for everything external.
//! It depends only on the domain layer.

pub mod actors;
pub mod ports;
pub mod runtime;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use actors::{
    arbiter::{ArbiterParticipant, TurnArbiter},
    human::HumanActor,
    participant::ParticipantActor,
};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    conversation_observer::{ConversationObserver, NoObserver},
    decision_oracle::{DecisionOracle, OracleError},
    human_input::{HumanInput, HumanInputError},
};
pub use runtime::{
    actor::{Actor, ActorContext, ActorId, HandlerError},
    bus::AgentRuntime,
    error::RuntimeError,
};
pub use use_cases::run_group_chat::{
    GroupChatOutcome, GroupChatRun, GroupChatSettings, RunGroupChatError, RunGroupChatUseCase,
};

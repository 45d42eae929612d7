//! Actor contract

use crate::ports::decision_oracle::OracleError;
use crate::ports::human_input::HumanInputError;
use async_trait::async_trait;
use crew_chat_domain::{BusMessage, ConversationMessage, MessageKind, Topic};
use std::any::Any;
use thiserror::Error;

/// Handle returned by [`AgentRuntime::register`](super::bus::AgentRuntime::register)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub(crate) usize);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Failure of an external call made inside a handler
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("Human input error: {0}")]
    HumanInput(#[from] HumanInputError),
}

/// What a handler can do to the outside world: publish
///
/// Publications are collected and handed to the runtime once the handler
/// returns, which puts them behind every delivery already queued.
#[derive(Debug, Default)]
pub struct ActorContext {
    outbox: Vec<(Topic, BusMessage)>,
}

impl ActorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, topic: impl Into<Topic>, message: impl Into<BusMessage>) {
        self.outbox.push((topic.into(), message.into()));
    }

    pub fn published(&self) -> &[(Topic, BusMessage)] {
        &self.outbox
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, (Topic, BusMessage)> {
        self.outbox.drain(..)
    }
}

/// A participant of the bus
///
/// Each actor declares up front which message kinds it handles; the
/// runtime never delivers any other kind to it.
#[async_trait]
pub trait Actor: Send + 'static {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    fn handled_kinds(&self) -> &'static [MessageKind];

    async fn on_conversation(
        &mut self,
        _message: &ConversationMessage,
        _ctx: &mut ActorContext,
    ) -> Result<(), HandlerError> {
        Ok(())
    }

    async fn on_speak_request(&mut self, _ctx: &mut ActorContext) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Concrete view for inspection after a run
    fn as_any(&self) -> &dyn Any;
}

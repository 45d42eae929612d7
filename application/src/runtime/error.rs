//! Runtime errors

use super::actor::{ActorId, HandlerError};
use crew_chat_domain::MessageKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Unknown actor: {0}")]
    UnknownActor(ActorId),

    #[error("Actor {actor} failed handling {kind:?}: {source}")]
    Handler {
        actor: String,
        kind: MessageKind,
        #[source]
        source: HandlerError,
    },
}

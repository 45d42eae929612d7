//! Message bus vocabulary.
//!
//! The runtime itself lives in the application layer; the domain only
//! defines what travels over it.

mod message;
mod topic;

pub use message::{BusMessage, MessageKind};
pub use topic::Topic;

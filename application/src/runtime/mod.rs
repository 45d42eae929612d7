//! Single-threaded actor runtime.
//!
//! Actors are registered once, bound to topics once, and then driven by a
//! FIFO delivery queue: one delivery is handled to completion before the
//! next is dequeued, and anything a handler publishes is queued behind
//! everything already pending.
//!
//! ```text
//! publish(topic, msg) ──► [delivery, delivery, ...] ──► actor handler
//!                                ▲                          │
//!                                └──── ActorContext::publish┘
//! ```

pub mod actor;
pub mod bus;
pub mod error;

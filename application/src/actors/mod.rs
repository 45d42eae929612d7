//! The three kinds of actor on the group-chat bus.
//!
//! - [`participant::ParticipantActor`] — a role-played persona voiced by the oracle
//! - [`human::HumanActor`] — the human at the console
//! - [`arbiter::TurnArbiter`] — decides who speaks after every message

pub mod arbiter;
pub mod human;
pub mod participant;

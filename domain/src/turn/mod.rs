//! Turn-taking policy.
//!
//! - [`selection::TurnSelector`] — maps an oracle answer to the next speaker
//! - [`termination::TerminationPolicy`] — decides when no one should speak anymore

pub mod selection;
pub mod termination;

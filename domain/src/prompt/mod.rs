//! Prompt domain
//!
//! Templates for the persona system text, the hand-over notes and the
//! next-speaker selection prompt.

mod template;

pub use template::{PromptTemplate, RosterEntry};

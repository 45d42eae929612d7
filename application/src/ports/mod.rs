//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod conversation_logger;
pub mod conversation_observer;
pub mod decision_oracle;
pub mod human_input;

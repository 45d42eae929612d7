//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All of these are bootstrap errors: they are raised while the persona
/// roster is assembled and abort the run before anything is dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Persona #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Duplicate persona name: {0}")]
    DuplicatePersona(String),

    #[error("Persona name `{0}` collides with a reserved topic or identity")]
    ReservedName(String),

    #[error("No personas configured")]
    EmptyRoster,
}

impl DomainError {
    /// Check if this error comes from a single malformed persona record
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingField { .. } | DomainError::DuplicatePersona(_)
        )
    }
}

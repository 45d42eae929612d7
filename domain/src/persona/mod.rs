//! Persona domain.
//!
//! - [`entities::PersonaRecord`] — a raw record as read from the persona file
//! - [`entities::Persona`] — a validated participant profile
//! - [`registry::PersonaRegistry`] — the ordered, immutable roster

pub mod entities;
pub mod registry;

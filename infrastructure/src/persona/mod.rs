//! Persona file loading

mod loader;

pub use loader::{PersonaLoadError, PersonaLoader};

//! Reads persona records from a JSON array file
//!
//! ```json
//! [
//!   { "name": "Luffy", "summary": "Captain of the Straw Hats...", "trait": "reckless" }
//! ]
//! ```

use crew_chat_domain::{DomainError, PersonaRecord, PersonaRegistry};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PersonaLoadError {
    #[error("Cannot read persona file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Persona file {path} is not a JSON array of records: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid persona file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Loads a [`PersonaRegistry`] from disk
pub struct PersonaLoader;

impl PersonaLoader {
    /// Read and validate `path`, rejecting names in `reserved`
    pub fn load(path: &Path, reserved: &[&str]) -> Result<PersonaRegistry, PersonaLoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PersonaLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let registry = Self::parse(&raw, reserved).map_err(|e| e.at(path))?;
        debug!("Loaded {} personas from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// Parse an in-memory JSON document
    pub fn parse(json: &str, reserved: &[&str]) -> Result<PersonaRegistry, ParseFailure> {
        let records: Vec<PersonaRecord> = serde_json::from_str(json).map_err(ParseFailure::Json)?;
        PersonaRegistry::from_records(&records, reserved).map_err(ParseFailure::Domain)
    }
}

/// Path-less failure from [`PersonaLoader::parse`]
#[derive(Debug)]
pub enum ParseFailure {
    Json(serde_json::Error),
    Domain(DomainError),
}

impl ParseFailure {
    fn at(self, path: &Path) -> PersonaLoadError {
        let path = path.to_path_buf();
        match self {
            ParseFailure::Json(source) => PersonaLoadError::Parse { path, source },
            ParseFailure::Domain(source) => PersonaLoadError::Invalid { path, source },
        }
    }
}

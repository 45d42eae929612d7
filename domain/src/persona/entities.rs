//! Persona entities

use crate::core::error::DomainError;
use crate::prompt::PromptTemplate;
use crate::util::char_prefix;
use serde::{Deserialize, Serialize};

/// Characters of the summary kept in the display description
pub const DESCRIPTION_CHARS: usize = 100;

/// Characters of the summary woven into the persona system text
pub const PERSONA_SUMMARY_CHARS: usize = 150;

/// A persona record exactly as it appears in the input file
///
/// Every field is optional here so that a missing field can be reported
/// with its position instead of as a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, rename = "trait")]
    pub trait_summary: Option<String>,
}

impl PersonaRecord {
    pub fn new(
        name: impl Into<String>,
        summary: impl Into<String>,
        trait_summary: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            summary: Some(summary.into()),
            trait_summary: Some(trait_summary.into()),
        }
    }
}

/// A validated participant profile (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    identity: String,
    description: String,
    persona_text: String,
    trait_summary: String,
}

impl Persona {
    /// Validate a raw record; `index` is its position in the input file
    pub fn from_record(index: usize, record: &PersonaRecord) -> Result<Self, DomainError> {
        let name = required(index, "name", &record.name)?;
        let summary = required(index, "summary", &record.summary)?;
        let trait_summary = required(index, "trait", &record.trait_summary)?;

        Ok(Self {
            identity: name.to_string(),
            description: char_prefix(summary, DESCRIPTION_CHARS).to_string(),
            persona_text: PromptTemplate::persona_system(
                name,
                char_prefix(summary, PERSONA_SUMMARY_CHARS),
            ),
            trait_summary: trait_summary.to_string(),
        })
    }

    /// Build a persona from already resolved parts
    pub fn new(
        identity: impl Into<String>,
        description: impl Into<String>,
        persona_text: impl Into<String>,
        trait_summary: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            description: description.into(),
            persona_text: persona_text.into(),
            trait_summary: trait_summary.into(),
        }
    }

    /// Unique name, also used as actor name and topic name
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// System text conditioning this participant's speech
    pub fn persona_text(&self) -> &str {
        &self.persona_text
    }

    pub fn trait_summary(&self) -> &str {
        &self.trait_summary
    }
}

fn required<'a>(
    index: usize,
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, DomainError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::MissingField { index, field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_builds_texts() {
        let record = PersonaRecord::new("Usopp", "A brave liar.", "Creative, cowardly, loyal");
        let persona = Persona::from_record(0, &record).unwrap();
        assert_eq!(persona.identity(), "Usopp");
        assert_eq!(persona.description(), "A brave liar.");
        assert_eq!(persona.trait_summary(), "Creative, cowardly, loyal");
        assert!(persona.persona_text().starts_with("You are Usopp."));
        assert!(persona.persona_text().contains("A brave liar."));
    }

    #[test]
    fn test_summary_is_truncated() {
        let summary = "x".repeat(400);
        let record = PersonaRecord::new("Robin", summary, "Calm");
        let persona = Persona::from_record(0, &record).unwrap();
        assert_eq!(persona.description().chars().count(), DESCRIPTION_CHARS);
        assert!(persona.persona_text().contains(&"x".repeat(PERSONA_SUMMARY_CHARS)));
        assert!(!persona.persona_text().contains(&"x".repeat(PERSONA_SUMMARY_CHARS + 1)));
    }

    #[test]
    fn test_missing_field_reports_index() {
        let record = PersonaRecord {
            name: Some("Franky".to_string()),
            summary: Some("SUPER".to_string()),
            trait_summary: None,
        };
        assert_eq!(
            Persona::from_record(4, &record),
            Err(DomainError::MissingField {
                index: 4,
                field: "trait"
            })
        );
    }

    #[test]
    fn test_blank_field_is_missing() {
        let record = PersonaRecord::new("  ", "summary", "trait");
        assert!(matches!(
            Persona::from_record(0, &record),
            Err(DomainError::MissingField { field: "name", .. })
        ));
    }

    #[test]
    fn test_record_deserializes_trait_key() {
        let record: PersonaRecord =
            serde_json::from_str(r#"{"name":"Nami","summary":"Navigator","trait":"Smart"}"#)
                .unwrap();
        assert_eq!(record.trait_summary.as_deref(), Some("Smart"));
    }
}

//! Persona registry

use super::entities::{Persona, PersonaRecord};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Ordered, immutable roster of participants
///
/// Registration order is significant: it is the order the turn selector
/// scans and the order its round-robin fallback follows.
#[derive(Debug, Clone, Default)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
}

impl PersonaRegistry {
    /// Validate every record, failing on the first bad one
    ///
    /// `reserved` lists names that are already taken by other bus
    /// subscribers (the shared topic, the human participant).
    pub fn from_records(records: &[PersonaRecord], reserved: &[&str]) -> Result<Self, DomainError> {
        let personas = records
            .iter()
            .enumerate()
            .map(|(i, r)| Persona::from_record(i, r))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(personas, reserved)
    }

    pub fn new(personas: Vec<Persona>, reserved: &[&str]) -> Result<Self, DomainError> {
        if personas.is_empty() {
            return Err(DomainError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for persona in &personas {
            let identity = persona.identity();
            if reserved.iter().any(|r| r.eq_ignore_ascii_case(identity)) {
                return Err(DomainError::ReservedName(identity.to_string()));
            }
            if !seen.insert(identity) {
                return Err(DomainError::DuplicatePersona(identity.to_string()));
            }
        }

        Ok(Self { personas })
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    pub fn get(&self, identity: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.identity() == identity)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Persona> {
        self.personas.iter()
    }

    /// Identities in registration order
    pub fn identities(&self) -> Vec<String> {
        self.personas
            .iter()
            .map(|p| p.identity().to_string())
            .collect()
    }
}

impl<'a> IntoIterator for &'a PersonaRegistry {
    type Item = &'a Persona;
    type IntoIter = std::slice::Iter<'a, Persona>;

    fn into_iter(self) -> Self::IntoIter {
        self.personas.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PersonaRecord> {
        vec![
            PersonaRecord::new("Luffy", "Rubber captain", "Free, hungry, loyal"),
            PersonaRecord::new("Zoro", "Swordsman", "Stoic, lost, strong"),
        ]
    }

    #[test]
    fn test_keeps_registration_order() {
        let registry = PersonaRegistry::from_records(&records(), &[]).unwrap();
        assert_eq!(registry.identities(), vec!["Luffy", "Zoro"]);
        assert_eq!(registry.get("Zoro").unwrap().trait_summary(), "Stoic, lost, strong");
        assert!(registry.get("Nami").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut recs = records();
        recs.push(PersonaRecord::new("Luffy", "again", "again"));
        assert_eq!(
            PersonaRegistry::from_records(&recs, &[]).unwrap_err(),
            DomainError::DuplicatePersona("Luffy".to_string())
        );
    }

    #[test]
    fn test_reserved_name_rejected() {
        let recs = vec![PersonaRecord::new("user", "sneaky", "sneaky")];
        assert_eq!(
            PersonaRegistry::from_records(&recs, &["User"]).unwrap_err(),
            DomainError::ReservedName("user".to_string())
        );
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert_eq!(
            PersonaRegistry::from_records(&[], &[]).unwrap_err(),
            DomainError::EmptyRoster
        );
    }

    #[test]
    fn test_one_bad_record_fails_whole_roster() {
        let mut recs = records();
        recs.push(PersonaRecord::default());
        assert!(matches!(
            PersonaRegistry::from_records(&recs, &[]),
            Err(DomainError::MissingField { index: 2, .. })
        ));
    }
}

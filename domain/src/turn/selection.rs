//! Next-speaker selection
//!
//! The oracle's answer is free text. The selector scans the roster in
//! registration order and picks the first identity whose lowercase form
//! occurs in the lowercase answer. The previous speaker is never picked by
//! the scan; if nothing usable matches, the floor passes round-robin to the
//! participant after the previous speaker (participant 0 on the first turn).

use serde::Serialize;

/// How the next speaker was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// The oracle named the speaker
    Matched,
    /// The oracle's answer was unusable; round-robin applied
    Fallback,
}

/// Result of one arbitration decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnDecision {
    pub speaker: String,
    pub outcome: SelectionOutcome,
}

impl TurnDecision {
    pub fn is_fallback(&self) -> bool {
        self.outcome == SelectionOutcome::Fallback
    }
}

/// Owner of the "previous speaker" pointer
#[derive(Debug, Clone)]
pub struct TurnSelector {
    participants: Vec<String>,
    previous: Option<usize>,
}

impl TurnSelector {
    /// # Panics
    /// Panics if `participants` is empty
    pub fn new(participants: Vec<String>) -> Self {
        assert!(!participants.is_empty(), "Turn selector needs participants");
        Self {
            participants,
            previous: None,
        }
    }

    /// Full roster in registration order
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn previous_speaker(&self) -> Option<&str> {
        self.previous.map(|i| self.participants[i].as_str())
    }

    /// Everyone except the previous speaker
    pub fn candidates(&self) -> Vec<&str> {
        self.participants
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != self.previous)
            .map(|(_, p)| p.as_str())
            .collect()
    }

    /// Resolve `choice` to the next speaker and move the pointer
    pub fn decide(&mut self, choice: &str) -> TurnDecision {
        let (index, outcome) = match self.match_choice(choice) {
            Some(i) => (i, SelectionOutcome::Matched),
            None => (self.fallback_index(), SelectionOutcome::Fallback),
        };
        self.previous = Some(index);
        TurnDecision {
            speaker: self.participants[index].clone(),
            outcome,
        }
    }

    fn match_choice(&self, choice: &str) -> Option<usize> {
        let choice = choice.trim().to_lowercase();
        if choice.is_empty() {
            return None;
        }
        self.participants
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != self.previous)
            .find(|(_, p)| choice.contains(&p.to_lowercase()))
            .map(|(i, _)| i)
    }

    fn fallback_index(&self) -> usize {
        match self.previous {
            Some(i) => (i + 1) % self.participants.len(),
            None => 0,
        }
    }
}

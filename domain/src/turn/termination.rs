//! Run termination policy

use crate::conversation::entities::ConversationMessage;
use serde::Serialize;

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Nobody had anything left to say
    Idle,
    /// The human typed the termination keyword
    TerminationKeyword,
    /// The configured number of turns was used up
    TurnLimit,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Idle => write!(f, "conversation went idle"),
            StopReason::TerminationKeyword => write!(f, "termination keyword received"),
            StopReason::TurnLimit => write!(f, "turn limit reached"),
        }
    }
}

/// When the arbiter stops handing out the floor
#[derive(Debug, Clone, Default)]
pub struct TerminationPolicy {
    keyword: Option<String>,
    max_turns: Option<usize>,
}

impl TerminationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop when the human sends exactly this word (case-insensitive).
    /// An empty keyword disables the check.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into().trim().to_string();
        self.keyword = (!keyword.is_empty()).then_some(keyword);
        self
    }

    pub fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn max_turns(&self) -> Option<usize> {
        self.max_turns
    }

    /// Check whether `message`, having arrived after `turns_taken`
    /// decisions, ends the conversation
    pub fn check(&self, message: &ConversationMessage, turns_taken: usize) -> Option<StopReason> {
        if message.is_from_human()
            && let Some(keyword) = &self.keyword
            && message.content().trim().eq_ignore_ascii_case(keyword)
        {
            return Some(StopReason::TerminationKeyword);
        }

        match self.max_turns {
            Some(max) if turns_taken >= max => Some(StopReason::TurnLimit),
            _ => None,
        }
    }
}

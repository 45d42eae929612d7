//! Live transcript printing

use super::console::ConsoleFormatter;
use crew_chat_application::ConversationObserver;
use crew_chat_domain::{ConversationMessage, StopReason, TurnDecision};

/// [`ConversationObserver`] echoing the shared transcript to stdout
///
/// Messages typed by the human are echoed too, so the printed transcript
/// reads the same as the one the manager keeps.
pub struct ConsolePrinter {
    show_fallbacks: bool,
}

impl ConsolePrinter {
    pub fn new() -> Self {
        Self {
            show_fallbacks: true,
        }
    }

    /// Hide the note printed when the oracle's pick is unusable
    pub fn without_fallback_notes(mut self) -> Self {
        self.show_fallbacks = false;
        self
    }
}

impl Default for ConsolePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationObserver for ConsolePrinter {
    fn on_message(&self, message: &ConversationMessage) {
        print!("{}", ConsoleFormatter::format_message(message));
    }

    fn on_decision(&self, decision: &TurnDecision, raw_choice: &str) {
        if self.show_fallbacks && decision.is_fallback() {
            eprintln!("{}", ConsoleFormatter::format_fallback(decision, raw_choice));
        }
    }

    fn on_stop(&self, reason: StopReason) {
        print!("{}", ConsoleFormatter::format_stop(reason));
    }
}

//! Console formatting for the group chat transcript and run summary

use colored::Colorize;
use crew_chat_application::GroupChatOutcome;
use crew_chat_domain::{ConversationMessage, PersonaRegistry, StopReason, TurnDecision};

/// Formats conversation events for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colors on or off for everything formatted afterwards
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Header listing who is in the chat
    pub fn format_roster(registry: &PersonaRegistry, human: Option<&str>) -> String {
        let mut output = Self::header("Crew");
        for persona in registry {
            output.push_str(&format!(
                "  {} [{}]: {}\n",
                persona.identity().yellow().bold(),
                persona.trait_summary(),
                persona.description()
            ));
        }
        if let Some(description) = human {
            output.push_str(&format!(
                "  {} [human]: {}\n",
                crew_chat_domain::HUMAN_SOURCE.green().bold(),
                description
            ));
        }
        output
    }

    /// One message on the shared topic
    pub fn format_message(message: &ConversationMessage) -> String {
        let label = format!("── {} ──", message.source());
        let label = if message.is_from_human() {
            label.green().bold()
        } else {
            label.yellow().bold()
        };
        format!("\n{}\n{}\n", label, message.content())
    }

    /// Note shown when the oracle's pick could not be used
    pub fn format_fallback(decision: &TurnDecision, raw_choice: &str) -> String {
        format!(
            "{} could not match {:?} to a participant, passing to {}",
            "note:".yellow().bold(),
            raw_choice.trim(),
            decision.speaker
        )
    }

    pub fn format_stop(reason: StopReason) -> String {
        format!("\n{} {}\n", "Stopped:".cyan().bold(), reason)
    }

    /// Short end-of-run summary
    pub fn format_summary(outcome: &GroupChatOutcome) -> String {
        let mut output = Self::header("Summary");
        output.push_str(&format!(
            "{} {}\n",
            "Stop reason:".cyan().bold(),
            outcome.stop_reason
        ));
        output.push_str(&format!("{} {}\n", "Turns:".cyan().bold(), outcome.turns));
        output.push_str(&format!(
            "{} {}\n",
            "Messages:".cyan().bold(),
            outcome.transcript.len()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Deliveries:".cyan().bold(),
            outcome.deliveries
        ));
        output
    }

    /// The whole outcome as pretty JSON
    pub fn format_json(outcome: &GroupChatOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        format!("{}\n", format!("=== {} ===", title).cyan().bold())
    }
}

//! Prompt templates for the group conversation

/// A line of the candidate roster shown to the selector
#[derive(Debug, Clone, Copy)]
pub struct RosterEntry<'a> {
    pub identity: &'a str,
    pub trait_summary: &'a str,
    pub description: &'a str,
}

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// System text that conditions a participant's speech
    pub fn persona_system(name: &str, summary: &str) -> String {
        format!(
            r#"You are {name}. Speak like {name} using the personality described here: {summary}.
Be very casual, as if talking to a very close friend, and do not use any honorifics.
Build upon the previous conversation, make jokes, banter with the others and show the human side of {name}."#
        )
    }

    /// Note recorded when another message is handed to a participant
    pub fn transferred_to(source: &str) -> String {
        format!("Transferred to {}", source)
    }

    /// Note recorded right before a participant is asked to speak
    pub fn adopt_persona(identity: &str) -> String {
        format!("Transferred to {}, adopt persona immediately.", identity)
    }

    /// Description of the human participant when it joins the roster
    pub fn default_human_description() -> &'static str {
        "The human in the group chat"
    }

    /// Prompt asking the oracle who should speak next
    ///
    /// `candidates` excludes the previous speaker, `participants` is the
    /// complete roster the answer must be drawn from.
    pub fn selection_prompt(
        topic_label: &str,
        candidates: &[RosterEntry<'_>],
        history: &str,
        participants: &[String],
    ) -> String {
        let roles = candidates
            .iter()
            .map(|c| format!("{} [{}]: {}", c.identity, c.trait_summary, c.description))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"You are orchestrating the {topic_label} group chat.
These are the participants:
{roles}

Conversation so far:
{history}

Choose the NEXT role to speak from [{}].
Return only the role name."#,
            participants.join(", ")
        )
    }
}

//! Scripted port doubles shared by the test modules

use crate::ports::conversation_observer::ConversationObserver;
use crate::ports::decision_oracle::{DecisionOracle, OracleError};
use crate::ports::human_input::{HumanInput, HumanInputError};
use async_trait::async_trait;
use crew_chat_domain::{ConversationMessage, Message, Role, StopReason, TurnDecision};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Oracle answering from two scripts: one for next-speaker selection
/// prompts, one for participant speech. Every request is recorded.
#[derive(Default)]
pub struct ScriptedOracle {
    selections: Mutex<VecDeque<String>>,
    speech: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedOracle {
    pub fn new<S: Into<String>>(
        selections: impl IntoIterator<Item = S>,
        speech: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            selections: Mutex::new(selections.into_iter().map(Into::into).collect()),
            speech: Mutex::new(speech.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }

    fn is_selection(messages: &[Message]) -> bool {
        matches!(messages, [only] if only.role == Role::System
            && only.content.starts_with("You are orchestrating"))
    }
}

#[async_trait]
impl DecisionOracle for ScriptedOracle {
    async fn complete(&self, messages: &[Message]) -> Result<String, OracleError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        let script = if Self::is_selection(messages) {
            &self.selections
        } else {
            &self.speech
        };
        script
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| OracleError::RequestFailed("No more responses".to_string()))
    }
}

/// Console double returning queued lines, then `Closed`
pub struct ScriptedHumanInput {
    lines: Mutex<VecDeque<String>>,
    prompts: Mutex<usize>,
}

impl ScriptedHumanInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(0),
        }
    }

    pub fn prompts(&self) -> usize {
        *self.prompts.lock().unwrap()
    }
}

#[async_trait]
impl HumanInput for ScriptedHumanInput {
    async fn read_line(&self, _prompt: &str) -> Result<String, HumanInputError> {
        *self.prompts.lock().unwrap() += 1;
        self.lines
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(HumanInputError::Closed)
    }
}

/// Observer keeping everything it is told
#[derive(Default)]
pub struct RecordingObserver {
    pub messages: Mutex<Vec<ConversationMessage>>,
    pub decisions: Mutex<Vec<TurnDecision>>,
    pub stops: Mutex<Vec<StopReason>>,
}

impl ConversationObserver for RecordingObserver {
    fn on_message(&self, message: &ConversationMessage) {
        self.messages.lock().unwrap().push(message.clone());
    }

    fn on_decision(&self, decision: &TurnDecision, _raw_choice: &str) {
        self.decisions.lock().unwrap().push(decision.clone());
    }

    fn on_stop(&self, reason: StopReason) {
        self.stops.lock().unwrap().push(reason);
    }
}

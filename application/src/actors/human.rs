//! Human actor

use crate::ports::human_input::{HumanInput, HumanInputError};
use crate::runtime::actor::{Actor, ActorContext, HandlerError};
use async_trait::async_trait;
use crew_chat_domain::{ConversationMessage, HUMAN_SOURCE, MessageKind, Topic};
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, warn};

/// The human participant
///
/// Stateless: it reads one line from the console when given the floor and
/// publishes it as a `User` message. Context comes from the shared
/// transcript the human has been watching.
pub struct HumanActor {
    group_topic: Topic,
    input: Arc<dyn HumanInput>,
    prompt: String,
}

impl HumanActor {
    pub fn new(group_topic: Topic, input: Arc<dyn HumanInput>) -> Self {
        Self {
            group_topic,
            input,
            prompt: "Enter your message: ".to_string(),
        }
    }

    /// Advertise the termination keyword in the console prompt
    pub fn with_termination_keyword(mut self, keyword: Option<&str>) -> Self {
        if let Some(keyword) = keyword {
            self.prompt = format!("Enter your message, type '{}' to finish: ", keyword);
        }
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[async_trait]
impl Actor for HumanActor {
    fn name(&self) -> &str {
        HUMAN_SOURCE
    }

    fn handled_kinds(&self) -> &'static [MessageKind] {
        &[MessageKind::SpeakRequest]
    }

    async fn on_speak_request(&mut self, ctx: &mut ActorContext) -> Result<(), HandlerError> {
        let line = match self.input.read_line(&self.prompt).await {
            Ok(line) => line,
            Err(HumanInputError::Closed) => {
                warn!("Console input closed, the human stays silent");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        debug!(bytes = line.len(), "Human spoke");
        ctx.publish(
            self.group_topic.clone(),
            ConversationMessage::from_human(line.trim_end()),
        );
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

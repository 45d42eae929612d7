//! Participant actor

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::decision_oracle::DecisionOracle;
use crate::runtime::actor::{Actor, ActorContext, HandlerError};
use async_trait::async_trait;
use crew_chat_domain::{
    ConversationMessage, Message, MessageKind, Persona, PromptTemplate, Topic, Transcript,
};
use std::any::Any;
use std::sync::Arc;
use tracing::debug;

/// One role-played persona
///
/// Keeps its own transcript of everything it has seen and said. When asked
/// to speak, the whole transcript goes to the oracle behind the persona's
/// system text, and the answer is published on the shared topic.
pub struct ParticipantActor {
    persona: Persona,
    group_topic: Topic,
    oracle: Arc<dyn DecisionOracle>,
    logger: Arc<dyn ConversationLogger>,
    transcript: Transcript<Message>,
}

impl ParticipantActor {
    pub fn new(persona: Persona, group_topic: Topic, oracle: Arc<dyn DecisionOracle>) -> Self {
        Self {
            persona,
            group_topic,
            oracle,
            logger: Arc::new(NoConversationLogger),
            transcript: Transcript::new(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn identity(&self) -> &str {
        self.persona.identity()
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn transcript(&self) -> &Transcript<Message> {
        &self.transcript
    }

    /// Record a message published by anyone (including ourselves)
    pub fn observe(&mut self, message: &ConversationMessage) {
        self.transcript
            .push(Message::attribution(PromptTemplate::transferred_to(
                message.source(),
            )));
        self.transcript.push(Message::from(message));
    }

    /// Oracle request: persona system text followed by the full transcript
    fn speech_request(&self) -> Vec<Message> {
        std::iter::once(Message::system(self.persona.persona_text()))
            .chain(self.transcript.iter().cloned())
            .collect()
    }
}

#[async_trait]
impl Actor for ParticipantActor {
    fn name(&self) -> &str {
        self.persona.identity()
    }

    fn handled_kinds(&self) -> &'static [MessageKind] {
        &[MessageKind::Conversation, MessageKind::SpeakRequest]
    }

    async fn on_conversation(
        &mut self,
        message: &ConversationMessage,
        _ctx: &mut ActorContext,
    ) -> Result<(), HandlerError> {
        self.observe(message);
        Ok(())
    }

    async fn on_speak_request(&mut self, ctx: &mut ActorContext) -> Result<(), HandlerError> {
        let identity = self.persona.identity().to_string();
        self.transcript
            .push(Message::attribution(PromptTemplate::adopt_persona(&identity)));

        let request = self.speech_request();
        debug!(participant = %identity, context = request.len(), "Asking oracle for speech");
        let speech = self.oracle.complete(&request).await?;

        self.logger.log(ConversationEvent::new(
            "participant_speech",
            serde_json::json!({
                "participant": identity,
                "context_messages": request.len(),
                "bytes": speech.len(),
            }),
        ));

        self.transcript
            .push(Message::assistant(speech.clone(), identity.clone()));
        ctx.publish(
            self.group_topic.clone(),
            ConversationMessage::new(identity, speech),
        );
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::decision_oracle::OracleError;
    use crate::test_support::ScriptedOracle;
    use crew_chat_domain::{BusMessage, Role};

    fn persona(name: &str) -> Persona {
        Persona::new(name, "desc", format!("You are {name}."), "Bold")
    }

    #[tokio::test]
    async fn test_observe_appends_attribution_then_message() {
        let oracle = Arc::new(ScriptedOracle::default());
        let mut actor = ParticipantActor::new(persona("Zoro"), Topic::new("chat"), oracle);
        let mut ctx = ActorContext::new();

        actor
            .on_conversation(&ConversationMessage::from_human("where are you"), &mut ctx)
            .await
            .unwrap();

        let entries = actor.transcript().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], Message::attribution("Transferred to User"));
        assert_eq!(entries[1], Message::user("where are you", "User"));
        assert!(ctx.published().is_empty());
    }

    #[tokio::test]
    async fn test_speak_sends_full_context_and_publishes() {
        let oracle = Arc::new(ScriptedOracle::new(Vec::<&str>::new(), vec!["On my way."]));
        let mut actor = ParticipantActor::new(
            persona("Zoro"),
            Topic::new("chat"),
            Arc::clone(&oracle) as Arc<dyn DecisionOracle>,
        );
        let mut ctx = ActorContext::new();
        actor.observe(&ConversationMessage::from_human("where are you"));

        actor.on_speak_request(&mut ctx).await.unwrap();

        let requests = oracle.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request[0], Message::system("You are Zoro."));
        assert_eq!(request.len(), 4);
        assert_eq!(
            request[3],
            Message::attribution("Transferred to Zoro, adopt persona immediately.")
        );

        let last = actor.transcript().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "On my way.");
        assert_eq!(actor.transcript().len(), 4);

        assert_eq!(
            ctx.published(),
            &[(
                Topic::new("chat"),
                BusMessage::Conversation(ConversationMessage::new("Zoro", "On my way."))
            )]
        );
    }

    #[tokio::test]
    async fn test_oracle_failure_propagates() {
        let oracle = Arc::new(ScriptedOracle::default());
        let mut actor = ParticipantActor::new(persona("Nami"), Topic::new("chat"), oracle);
        let mut ctx = ActorContext::new();

        let err = actor.on_speak_request(&mut ctx).await.unwrap_err();
        assert!(matches!(
            err,
            HandlerError::Oracle(OracleError::RequestFailed(_))
        ));
        assert!(ctx.published().is_empty());
    }
}

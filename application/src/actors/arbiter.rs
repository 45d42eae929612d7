//! Turn arbiter (group chat manager)
//!
//! Runs once per conversation message:
//!
//! ```text
//! message ──► shared transcript ──► stop? ──yes──► (silence, queue drains)
//!                                     │no
//!                                     ▼
//!        selection prompt ──► oracle ──► TurnSelector::decide ──► SpeakRequest
//! ```

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::conversation_observer::{ConversationObserver, NoObserver};
use crate::ports::decision_oracle::DecisionOracle;
use crate::runtime::actor::{Actor, ActorContext, HandlerError};
use async_trait::async_trait;
use crew_chat_domain::prompt::RosterEntry;
use crew_chat_domain::{
    BusMessage, ConversationMessage, Message, MessageKind, Persona, PromptTemplate, StopReason,
    TerminationPolicy, Topic, Transcript, TurnDecision, TurnSelector,
};
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a participant is presented to the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbiterParticipant {
    pub identity: String,
    pub trait_summary: String,
    pub description: String,
}

impl ArbiterParticipant {
    pub fn new(
        identity: impl Into<String>,
        trait_summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            trait_summary: trait_summary.into(),
            description: description.into(),
        }
    }
}

impl From<&Persona> for ArbiterParticipant {
    fn from(p: &Persona) -> Self {
        Self::new(p.identity(), p.trait_summary(), p.description())
    }
}

/// Owner of the shared transcript and the previous-speaker pointer
pub struct TurnArbiter {
    topic_label: String,
    roster: Vec<ArbiterParticipant>,
    selector: TurnSelector,
    transcript: Transcript<ConversationMessage>,
    oracle: Arc<dyn DecisionOracle>,
    policy: TerminationPolicy,
    turns: usize,
    stop_reason: Option<StopReason>,
    observer: Arc<dyn ConversationObserver>,
    logger: Arc<dyn ConversationLogger>,
}

impl TurnArbiter {
    /// # Panics
    /// Panics if `roster` is empty
    pub fn new(
        topic: &Topic,
        roster: Vec<ArbiterParticipant>,
        oracle: Arc<dyn DecisionOracle>,
    ) -> Self {
        let selector = TurnSelector::new(roster.iter().map(|p| p.identity.clone()).collect());
        Self {
            topic_label: topic.to_string(),
            roster,
            selector,
            transcript: Transcript::new(),
            oracle,
            policy: TerminationPolicy::default(),
            turns: 0,
            stop_reason: None,
            observer: Arc::new(NoObserver),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_policy(mut self, policy: TerminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ConversationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Authoritative shared transcript
    pub fn transcript(&self) -> &Transcript<ConversationMessage> {
        &self.transcript
    }

    pub fn previous_speaker(&self) -> Option<&str> {
        self.selector.previous_speaker()
    }

    /// Number of speak requests issued so far
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn participants(&self) -> &[String] {
        self.selector.participants()
    }

    fn selection_prompt(&self) -> String {
        let candidates: Vec<RosterEntry<'_>> = self
            .selector
            .candidates()
            .into_iter()
            .filter_map(|identity| self.roster.iter().find(|p| p.identity == identity))
            .map(|p| RosterEntry {
                identity: &p.identity,
                trait_summary: &p.trait_summary,
                description: &p.description,
            })
            .collect();

        PromptTemplate::selection_prompt(
            &self.topic_label,
            &candidates,
            &self.transcript.render(),
            self.selector.participants(),
        )
    }

    fn record(&mut self, message: &ConversationMessage) {
        self.transcript.push(message.clone());
        self.observer.on_message(message);
        self.logger.log(ConversationEvent::new(
            "message",
            serde_json::json!({
                "index": self.transcript.len() - 1,
                "source": message.source(),
                "content": message.content(),
            }),
        ));
    }

    fn stop(&mut self, reason: StopReason) {
        info!(turns = self.turns, "Arbiter stopping: {}", reason);
        self.stop_reason = Some(reason);
        self.observer.on_stop(reason);
        self.logger.log(ConversationEvent::new(
            "stop",
            serde_json::json!({ "reason": reason, "turns": self.turns }),
        ));
    }

    fn announce(&self, decision: &TurnDecision, choice: &str) {
        if decision.is_fallback() {
            warn!(
                choice = %choice,
                fallback = %decision.speaker,
                "Unusable selection, falling back to round-robin"
            );
        } else {
            debug!(speaker = %decision.speaker, "Next speaker selected");
        }
        self.observer.on_decision(decision, choice);
        self.logger.log(ConversationEvent::new(
            "turn_decision",
            serde_json::json!({
                "turn": self.turns,
                "speaker": decision.speaker,
                "outcome": decision.outcome,
                "choice": choice,
            }),
        ));
    }
}

#[async_trait]
impl Actor for TurnArbiter {
    fn name(&self) -> &str {
        "group_chat_manager"
    }

    fn handled_kinds(&self) -> &'static [MessageKind] {
        &[MessageKind::Conversation]
    }

    async fn on_conversation(
        &mut self,
        message: &ConversationMessage,
        ctx: &mut ActorContext,
    ) -> Result<(), HandlerError> {
        self.record(message);

        if self.stop_reason.is_some() {
            return Ok(());
        }
        if let Some(reason) = self.policy.check(message, self.turns) {
            self.stop(reason);
            return Ok(());
        }

        let prompt = self.selection_prompt();
        let choice = self.oracle.complete(&[Message::system(prompt)]).await?;
        let decision = self.selector.decide(&choice);
        self.turns += 1;
        self.announce(&decision, choice.trim());

        ctx.publish(Topic::new(decision.speaker), BusMessage::SpeakRequest);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingObserver, ScriptedOracle};
    use crew_chat_domain::SelectionOutcome;

    fn roster(names: &[&str]) -> Vec<ArbiterParticipant> {
        names
            .iter()
            .map(|n| ArbiterParticipant::new(*n, format!("{n}-trait"), format!("{n}-desc")))
            .collect()
    }

    fn arbiter(names: &[&str], oracle: &Arc<ScriptedOracle>) -> TurnArbiter {
        TurnArbiter::new(
            &Topic::new("crew_chat"),
            roster(names),
            Arc::clone(oracle) as Arc<dyn DecisionOracle>,
        )
    }

    fn speak_target(ctx: &ActorContext) -> &str {
        match ctx.published() {
            [(topic, BusMessage::SpeakRequest)] => topic.as_str(),
            other => panic!("expected one speak request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_matched_choice_requests_speaker() {
        let oracle = Arc::new(ScriptedOracle::new(["I think ZORO should go next"], []));
        let mut arbiter = arbiter(&["Luffy", "Zoro", "Nami"], &oracle);
        let mut ctx = ActorContext::new();

        arbiter
            .on_conversation(&ConversationMessage::from_human("Zoro is lost"), &mut ctx)
            .await
            .unwrap();

        assert_eq!(speak_target(&ctx), "Zoro");
        assert_eq!(arbiter.previous_speaker(), Some("Zoro"));
        assert_eq!(arbiter.turns(), 1);
        assert_eq!(arbiter.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_after_b_selects_c() {
        let oracle = Arc::new(ScriptedOracle::new(["B", "zzz"], []));
        let mut arbiter = arbiter(&["A", "B", "C"], &oracle);

        let mut ctx = ActorContext::new();
        arbiter
            .on_conversation(&ConversationMessage::from_human("go"), &mut ctx)
            .await
            .unwrap();
        assert_eq!(speak_target(&ctx), "B");

        let mut ctx = ActorContext::new();
        arbiter
            .on_conversation(&ConversationMessage::new("B", "hello"), &mut ctx)
            .await
            .unwrap();
        assert_eq!(speak_target(&ctx), "C");
        assert_eq!(arbiter.previous_speaker(), Some("C"));
    }

    #[tokio::test]
    async fn test_first_turn_unusable_answer_selects_first() {
        let oracle = Arc::new(ScriptedOracle::new([""], []));
        let observer = Arc::new(RecordingObserver::default());
        let mut arbiter = arbiter(&["A", "B", "C"], &oracle)
            .with_observer(Arc::clone(&observer) as Arc<dyn ConversationObserver>);
        let mut ctx = ActorContext::new();

        arbiter
            .on_conversation(&ConversationMessage::from_human("hi"), &mut ctx)
            .await
            .unwrap();

        assert_eq!(speak_target(&ctx), "A");
        let decisions = observer.decisions.lock().unwrap();
        assert_eq!(decisions[0].outcome, SelectionOutcome::Fallback);
    }

    #[tokio::test]
    async fn test_prompt_excludes_previous_speaker_from_roster() {
        let oracle = Arc::new(ScriptedOracle::new(["Luffy", "Nami"], []));
        let mut arbiter = arbiter(&["Luffy", "Zoro", "Nami"], &oracle);

        let mut ctx = ActorContext::new();
        arbiter
            .on_conversation(&ConversationMessage::from_human("hi"), &mut ctx)
            .await
            .unwrap();
        let mut ctx = ActorContext::new();
        arbiter
            .on_conversation(&ConversationMessage::new("Luffy", "meat!"), &mut ctx)
            .await
            .unwrap();

        let requests = oracle.requests();
        let first = &requests[0][0].content;
        let second = &requests[1][0].content;
        assert!(first.contains("Luffy [Luffy-trait]: Luffy-desc"));
        assert!(!second.contains("Luffy [Luffy-trait]"));
        assert!(second.contains("Zoro [Zoro-trait]: Zoro-desc"));
        assert!(second.contains("User: hi\nLuffy: meat!"));
        assert!(second.contains("[Luffy, Zoro, Nami]"));
    }

    #[tokio::test]
    async fn test_termination_keyword_from_human_stops() {
        let oracle = Arc::new(ScriptedOracle::new(Vec::<&str>::new(), []));
        let observer = Arc::new(RecordingObserver::default());
        let mut arbiter = arbiter(&["A", "B"], &oracle)
            .with_policy(TerminationPolicy::new().with_keyword("APPROVE"))
            .with_observer(Arc::clone(&observer) as Arc<dyn ConversationObserver>);
        let mut ctx = ActorContext::new();

        arbiter
            .on_conversation(&ConversationMessage::from_human("approve"), &mut ctx)
            .await
            .unwrap();

        assert!(ctx.published().is_empty());
        assert!(oracle.requests().is_empty());
        assert_eq!(arbiter.stop_reason(), Some(StopReason::TerminationKeyword));
        assert_eq!(arbiter.transcript().len(), 1);
        assert_eq!(
            *observer.stops.lock().unwrap(),
            vec![StopReason::TerminationKeyword]
        );
    }

    #[tokio::test]
    async fn test_turn_limit_stops_after_budget() {
        let oracle = Arc::new(ScriptedOracle::new(["A"], []));
        let mut arbiter = arbiter(&["A", "B"], &oracle)
            .with_policy(TerminationPolicy::new().with_max_turns(Some(1)));

        let mut ctx = ActorContext::new();
        arbiter
            .on_conversation(&ConversationMessage::from_human("hi"), &mut ctx)
            .await
            .unwrap();
        assert_eq!(speak_target(&ctx), "A");

        let mut ctx = ActorContext::new();
        arbiter
            .on_conversation(&ConversationMessage::new("A", "yo"), &mut ctx)
            .await
            .unwrap();
        assert!(ctx.published().is_empty());
        assert_eq!(arbiter.stop_reason(), Some(StopReason::TurnLimit));
        assert_eq!(arbiter.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_oracle_failure_leaves_pointer_untouched() {
        let oracle = Arc::new(ScriptedOracle::default());
        let mut arbiter = arbiter(&["A", "B"], &oracle);
        let mut ctx = ActorContext::new();

        let result = arbiter
            .on_conversation(&ConversationMessage::from_human("hi"), &mut ctx)
            .await;

        assert!(matches!(result, Err(HandlerError::Oracle(_))));
        assert_eq!(arbiter.previous_speaker(), None);
        assert_eq!(arbiter.turns(), 0);
        assert!(ctx.published().is_empty());
    }
}

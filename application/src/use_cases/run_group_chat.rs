//! Run Group Chat use case
//!
//! Wires the persona roster, the human and the arbiter onto one runtime,
//! seeds the conversation and drives it until nobody has anything to say.

use crate::actors::arbiter::{ArbiterParticipant, TurnArbiter};
use crate::actors::human::HumanActor;
use crate::actors::participant::ParticipantActor;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::conversation_observer::{ConversationObserver, NoObserver};
use crate::ports::decision_oracle::DecisionOracle;
use crate::ports::human_input::HumanInput;
use crate::runtime::actor::ActorId;
use crate::runtime::bus::AgentRuntime;
use crate::runtime::error::RuntimeError;
use crew_chat_domain::{
    ConversationMessage, DomainError, HUMAN_SOURCE, PersonaRegistry, PromptTemplate, StopReason,
    TerminationPolicy, Topic,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during a group chat run
#[derive(Error, Debug)]
pub enum RunGroupChatError {
    #[error("Invalid roster: {0}")]
    Roster(#[from] DomainError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Settings for one run
#[derive(Debug, Clone)]
pub struct GroupChatSettings {
    /// Shared conversation topic
    pub topic: Topic,
    /// The single message that starts the conversation
    pub seed: ConversationMessage,
    /// Whether the arbiter may hand the floor to the human
    pub include_human: bool,
    pub human_description: String,
    pub termination: TerminationPolicy,
}

impl GroupChatSettings {
    pub fn new(topic: impl Into<Topic>, seed: ConversationMessage) -> Self {
        Self {
            topic: topic.into(),
            seed,
            include_human: true,
            human_description: PromptTemplate::default_human_description().to_string(),
            termination: TerminationPolicy::default(),
        }
    }

    pub fn without_human(mut self) -> Self {
        self.include_human = false;
        self
    }

    pub fn with_human_description(mut self, description: impl Into<String>) -> Self {
        self.human_description = description.into();
        self
    }

    pub fn with_termination(mut self, termination: TerminationPolicy) -> Self {
        self.termination = termination;
        self
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct GroupChatOutcome {
    /// Speak requests issued by the arbiter
    pub turns: usize,
    /// Deliveries handled by the runtime
    pub deliveries: usize,
    pub transcript: Vec<ConversationMessage>,
    pub stop_reason: StopReason,
}

/// A wired-up runtime, ready to be seeded
pub struct GroupChatRun {
    runtime: AgentRuntime,
    topic: Topic,
    arbiter: ActorId,
    participants: Vec<(String, ActorId)>,
    human: ActorId,
}

impl GroupChatRun {
    pub fn runtime(&self) -> &AgentRuntime {
        &self.runtime
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn arbiter(&self) -> Option<&TurnArbiter> {
        self.runtime.actor::<TurnArbiter>(self.arbiter)
    }

    pub fn participant(&self, identity: &str) -> Option<&ParticipantActor> {
        self.participants
            .iter()
            .find(|(name, _)| name == identity)
            .and_then(|(_, id)| self.runtime.actor::<ParticipantActor>(*id))
    }

    pub fn human(&self) -> Option<&HumanActor> {
        self.runtime.actor::<HumanActor>(self.human)
    }

    /// Publish a message on the shared topic
    pub fn seed(&mut self, message: ConversationMessage) -> usize {
        self.runtime.publish(self.topic.clone(), message)
    }

    pub async fn stop_when_idle(&mut self) -> Result<usize, RuntimeError> {
        self.runtime.stop_when_idle().await
    }

    pub fn outcome(&self) -> GroupChatOutcome {
        let arbiter = self.arbiter();
        GroupChatOutcome {
            turns: arbiter.map_or(0, |a| a.turns()),
            deliveries: self.runtime.delivered(),
            transcript: arbiter
                .map(|a| a.transcript().entries().to_vec())
                .unwrap_or_default(),
            stop_reason: arbiter
                .and_then(|a| a.stop_reason())
                .unwrap_or(StopReason::Idle),
        }
    }
}

/// Use case for running a group conversation
pub struct RunGroupChatUseCase<O: DecisionOracle + 'static> {
    oracle: Arc<O>,
    human_input: Arc<dyn HumanInput>,
    observer: Arc<dyn ConversationObserver>,
    logger: Arc<dyn ConversationLogger>,
}

impl<O: DecisionOracle + 'static> RunGroupChatUseCase<O> {
    pub fn new(oracle: Arc<O>, human_input: Arc<dyn HumanInput>) -> Self {
        Self {
            oracle,
            human_input,
            observer: Arc::new(NoObserver),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ConversationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Register every actor and bind every subscription
    ///
    /// Each persona listens on its own identity topic and on the shared
    /// topic, then the arbiter on the shared topic, then the human on
    /// `User` and the shared topic.
    pub fn bootstrap(
        &self,
        registry: &PersonaRegistry,
        settings: &GroupChatSettings,
    ) -> Result<GroupChatRun, RunGroupChatError> {
        let reserved = [settings.topic.as_str(), HUMAN_SOURCE];
        if let Some(persona) = registry
            .iter()
            .find(|p| reserved.iter().any(|r| r.eq_ignore_ascii_case(p.identity())))
        {
            return Err(DomainError::ReservedName(persona.identity().to_string()).into());
        }
        if registry.is_empty() {
            return Err(DomainError::EmptyRoster.into());
        }

        let oracle: Arc<dyn DecisionOracle> = self.oracle.clone();
        let mut runtime = AgentRuntime::new();
        let mut participants = Vec::with_capacity(registry.len());

        for persona in registry {
            let actor = ParticipantActor::new(persona.clone(), settings.topic.clone(), oracle.clone())
                .with_logger(Arc::clone(&self.logger));
            let id = runtime.register(actor);
            runtime.subscribe(persona.identity(), id)?;
            runtime.subscribe(settings.topic.clone(), id)?;
            participants.push((persona.identity().to_string(), id));
        }

        let mut roster: Vec<ArbiterParticipant> = registry.iter().map(Into::into).collect();
        if settings.include_human {
            roster.push(ArbiterParticipant::new(
                HUMAN_SOURCE,
                "human",
                settings.human_description.clone(),
            ));
        }

        let arbiter = TurnArbiter::new(&settings.topic, roster, oracle)
            .with_policy(settings.termination.clone())
            .with_observer(Arc::clone(&self.observer))
            .with_logger(Arc::clone(&self.logger));
        let arbiter = runtime.register(arbiter);
        runtime.subscribe(settings.topic.clone(), arbiter)?;

        let human = HumanActor::new(settings.topic.clone(), Arc::clone(&self.human_input))
            .with_termination_keyword(settings.termination.keyword());
        let human = runtime.register(human);
        runtime.subscribe(HUMAN_SOURCE, human)?;
        runtime.subscribe(settings.topic.clone(), human)?;

        info!(
            participants = participants.len(),
            include_human = settings.include_human,
            topic = %settings.topic,
            "Group chat wired"
        );

        Ok(GroupChatRun {
            runtime,
            topic: settings.topic.clone(),
            arbiter,
            participants,
            human,
        })
    }

    /// Bootstrap, seed and drive the conversation to idle
    pub async fn execute(
        &self,
        registry: &PersonaRegistry,
        settings: &GroupChatSettings,
    ) -> Result<GroupChatOutcome, RunGroupChatError> {
        let mut run = self.bootstrap(registry, settings)?;

        self.logger.log(ConversationEvent::new(
            "run_start",
            serde_json::json!({
                "topic": settings.topic,
                "participants": registry.identities(),
                "include_human": settings.include_human,
            }),
        ));

        run.seed(settings.seed.clone());
        run.stop_when_idle().await?;

        let outcome = run.outcome();
        info!(
            turns = outcome.turns,
            deliveries = outcome.deliveries,
            messages = outcome.transcript.len(),
            "Group chat finished: {}",
            outcome.stop_reason
        );
        Ok(outcome)
    }
}

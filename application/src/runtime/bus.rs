//! Topic-based message bus and its dispatch loop

use super::actor::{Actor, ActorContext, ActorId};
use super::error::RuntimeError;
use crew_chat_domain::{BusMessage, MessageKind, Topic};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, trace, warn};

struct RegisteredActor {
    actor: Box<dyn Actor>,
    /// Handler table, resolved once at registration
    kinds: HashSet<MessageKind>,
}

/// One pending (topic, message, actor) delivery
#[derive(Debug)]
struct Delivery {
    topic: Topic,
    message: BusMessage,
    actor: ActorId,
}

/// Single-threaded publish/subscribe runtime
///
/// Exactly one handler runs at a time, so every delivery in the system
/// happens in a single total order and no actor state needs locking.
#[derive(Default)]
pub struct AgentRuntime {
    actors: Vec<RegisteredActor>,
    subscriptions: HashMap<Topic, Vec<ActorId>>,
    queue: VecDeque<Delivery>,
    delivered: usize,
}

impl AgentRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `actor` and return its handle
    pub fn register(&mut self, actor: impl Actor) -> ActorId {
        let id = ActorId(self.actors.len());
        let kinds = actor.handled_kinds().iter().copied().collect();
        debug!(actor = actor.name(), %id, "Registered actor");
        self.actors.push(RegisteredActor {
            actor: Box::new(actor),
            kinds,
        });
        id
    }

    /// Bind `actor` to `topic`. Binding twice is a no-op.
    pub fn subscribe(&mut self, topic: impl Into<Topic>, actor: ActorId) -> Result<(), RuntimeError> {
        if actor.0 >= self.actors.len() {
            return Err(RuntimeError::UnknownActor(actor));
        }
        let topic = topic.into();
        let subscribers = self.subscriptions.entry(topic.clone()).or_default();
        if !subscribers.contains(&actor) {
            trace!(%topic, %actor, "Subscribed");
            subscribers.push(actor);
        }
        Ok(())
    }

    /// Queue `message` for every subscriber of `topic` that handles its kind
    ///
    /// Returns the number of deliveries queued. A topic nobody listens to
    /// swallows the message.
    pub fn publish(&mut self, topic: impl Into<Topic>, message: impl Into<BusMessage>) -> usize {
        let topic = topic.into();
        let message = message.into();
        let kind = message.kind();

        let Some(subscribers) = self.subscriptions.get(&topic) else {
            trace!(%topic, ?kind, "Publish to topic without subscribers");
            return 0;
        };

        let mut queued = 0;
        for &actor in subscribers {
            if !self.actors[actor.0].kinds.contains(&kind) {
                continue;
            }
            self.queue.push_back(Delivery {
                topic: topic.clone(),
                message: message.clone(),
                actor,
            });
            queued += 1;
        }
        queued
    }

    /// Drive the queue until nothing is pending
    ///
    /// Returns the number of deliveries handled by this call; calling it
    /// again on an idle runtime returns 0 and touches nothing. If a handler
    /// fails, the remaining queue is dropped and the error is returned.
    pub async fn stop_when_idle(&mut self) -> Result<usize, RuntimeError> {
        let mut handled = 0;
        while let Some(delivery) = self.queue.pop_front() {
            if let Err(e) = self.dispatch(delivery).await {
                warn!(dropped = self.queue.len(), "Handler failed, abandoning run: {}", e);
                self.queue.clear();
                return Err(e);
            }
            handled += 1;
            self.delivered += 1;
        }
        debug!(handled, total = self.delivered, "Runtime idle");
        Ok(handled)
    }

    async fn dispatch(&mut self, delivery: Delivery) -> Result<(), RuntimeError> {
        let Delivery {
            topic,
            message,
            actor,
        } = delivery;
        let kind = message.kind();
        let entry = self
            .actors
            .get_mut(actor.0)
            .ok_or(RuntimeError::UnknownActor(actor))?;

        debug!(%topic, actor = entry.actor.name(), ?kind, "Delivering");

        let mut ctx = ActorContext::new();
        let result = match &message {
            BusMessage::Conversation(msg) => entry.actor.on_conversation(msg, &mut ctx).await,
            BusMessage::SpeakRequest => entry.actor.on_speak_request(&mut ctx).await,
        };
        result.map_err(|source| RuntimeError::Handler {
            actor: entry.actor.name().to_string(),
            kind,
            source,
        })?;

        for (topic, message) in ctx.drain() {
            self.publish(topic, message);
        }
        Ok(())
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Deliveries handled over the runtime's lifetime
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Subscribers of `topic`, in subscription order
    pub fn subscribers(&self, topic: &str) -> &[ActorId] {
        self.subscriptions
            .get(topic)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Borrow a registered actor as its concrete type
    pub fn actor<T: Actor>(&self, id: ActorId) -> Option<&T> {
        self.actors
            .get(id.0)
            .and_then(|entry| entry.actor.as_any().downcast_ref::<T>())
    }
}

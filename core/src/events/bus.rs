//! Topic-keyed publish/subscribe bus.
//!
//! In-process only: there is no persistence and no delivery across
//! restarts. A handler registered after an event was published never sees
//! that event. Handlers are isolated from each other — each delivery runs
//! on its own task, so one handler failing (or panicking) cannot affect
//! another's invocation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::errors::DomainError;

/// A fire-and-forget notification.
///
/// The publisher gets no delivery receipt beyond the number of handlers
/// that were attached at publish time.
#[derive(Debug, Clone)]
pub struct DomainEvent {
    /// Topic the event was published under
    pub topic: String,

    /// Topic-specific payload (see [`super::topics`] for the contracts)
    pub payload: Value,

    /// When the event was published
    pub emitted_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn new(topic: impl Into<String>, payload: Value) -> Self {
        Self {
            topic: topic.into(),
            payload,
            emitted_at: Utc::now(),
        }
    }
}

/// A subscriber on the bus.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Name used in logs when a delivery fails
    fn name(&self) -> &'static str;

    async fn handle(&self, event: DomainEvent) -> Result<(), DomainError>;
}

/// Topic-keyed in-process event bus.
///
/// The handler registry is mutated only during startup wiring
/// (`subscribe` takes `&mut self`) and read-only afterwards, so steady
/// state needs no locking.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a topic.
    ///
    /// Multiple handlers per topic are allowed and invoked independently.
    pub fn subscribe(&mut self, topic: impl Into<String>, handler: Arc<dyn EventHandler>) {
        self.handlers.entry(topic.into()).or_default().push(handler);
    }

    /// Number of handlers attached to a topic.
    pub fn handler_count(&self, topic: &str) -> usize {
        self.handlers.get(topic).map_or(0, Vec::len)
    }

    /// Publish fire-and-forget.
    ///
    /// Hands the event to every currently-registered handler, each on its
    /// own spawned task, and returns immediately with the number of
    /// handlers notified. Handler failures are logged, never surfaced.
    pub fn publish(&self, topic: &str, payload: Value) -> usize {
        let event = DomainEvent::new(topic, payload);
        let handlers = match self.handlers.get(topic) {
            Some(handlers) => handlers,
            None => return 0,
        };

        for handler in handlers {
            let handler = Arc::clone(handler);
            let event = event.clone();
            tokio::spawn(async move {
                if let Err(error) = handler.handle(event).await {
                    tracing::warn!(handler = handler.name(), %error, "event handler failed");
                }
            });
        }

        handlers.len()
    }

    /// Publish and wait for every handler to finish.
    ///
    /// Used where the caller needs completion acknowledgment. Failures and
    /// panics are still isolated per handler: all handlers run to
    /// completion regardless, and the number that succeeded is returned.
    pub async fn publish_and_wait(&self, topic: &str, payload: Value) -> usize {
        let event = DomainEvent::new(topic, payload);
        let handlers = match self.handlers.get(topic) {
            Some(handlers) => handlers,
            None => return 0,
        };

        let tasks: Vec<_> = handlers
            .iter()
            .map(|handler| {
                let handler = Arc::clone(handler);
                let event = event.clone();
                tokio::spawn(async move {
                    let name = handler.name();
                    handler.handle(event).await.map_err(|error| (name, error))
                })
            })
            .collect();

        let mut succeeded = 0;
        for task in tasks {
            match task.await {
                Ok(Ok(())) => succeeded += 1,
                Ok(Err((name, error))) => {
                    tracing::warn!(handler = name, %error, "event handler failed");
                }
                Err(join_error) => {
                    tracing::warn!(%join_error, "event handler panicked");
                }
            }
        }

        succeeded
    }
}

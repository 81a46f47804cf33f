//! In-process event distribution.
//!
//! Producers publish [`DomainEvent`]s on the [`EventBus`]; consumers
//! implement [`EventHandler`] and are subscribed during startup wiring.
//! The bus is constructed explicitly and passed where it is needed —
//! there is no process-wide singleton.

pub mod bus;
pub mod cascade;
pub mod topics;

pub use bus::{DomainEvent, EventBus, EventHandler};
pub use cascade::{ProductDeletedHandler, RetryPolicy};

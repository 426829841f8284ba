//! Carteira event bus.
//!
//! In-process publish/subscribe for domain events (PRD-10):
//!
//! - [`EventBus`]: fan-out hub backed by `tokio::sync::broadcast`.
//! - [`DomainEvent`]: the canonical event envelope.
//!
//! Event names in use: `client.created`, `client.updated`,
//! `client.deleted`, `clients.reloaded`, `contact.received`.

pub mod bus;

pub use bus::{DomainEvent, EventBus};

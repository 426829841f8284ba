//! HTTP handlers, one module per resource.

pub mod clients;
pub mod contact;
pub mod events;
pub mod reports;

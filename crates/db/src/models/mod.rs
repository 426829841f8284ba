//! Row types and write DTOs for the carteira tables.

pub mod client;
pub mod contact;

pub use client::ClientRow;
pub use contact::{ContactMessage, CreateContactMessage};

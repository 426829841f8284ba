//! Repository structs, one per table.
//!
//! All methods take the pool as their first argument and surface
//! `sqlx::Error` unchanged; callers decide how failures map outward.

pub mod client_repo;
pub mod contact_repo;

pub use client_repo::ClientRepo;
pub use contact_repo::ContactRepo;

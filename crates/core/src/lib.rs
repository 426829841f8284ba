//! Carteira domain logic.
//!
//! Pure types and functions only: no I/O, no async, no database access.
//! Everything the HTTP layer enforces or displays is defined here so it can
//! be tested in isolation:
//!
//! - [`client`]: the normalized client record and lifecycle status
//! - [`normalize`]: stored-document coercion (never drops a record)
//! - [`payment`]: derived payment state and progress percentage
//! - [`filter`]: AND-composed list filtering
//! - [`view`]: escaped, pt-BR-formatted table rows
//! - [`validation`]: the write-path gate for admin submissions
//! - [`contact`]: public contact-form validation and intake constants
//! - [`stats`] / [`report`]: aggregates and chart series
//! - [`session`]: the single-admin edit-session state machine

pub mod client;
pub mod contact;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod payment;
pub mod report;
pub mod session;
pub mod stats;
pub mod types;
pub mod validation;
pub mod view;

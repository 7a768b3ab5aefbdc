//! Roster - organisation, employee and user records over a REST interface
//!
//! This library provides the entity definitions, the presence validation for
//! incoming records, a generic SQLite-backed repository and the axum handlers
//! that expose them.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod validation;

//! Database models and ORM layer for the gate service.
//!
//! Provides the Diesel-based credential store: the `users` table, its
//! query helpers, and connection pool management. The store is the
//! authoritative guard for email uniqueness; callers may pre-check, but
//! only the unique constraint decides races.

pub mod db;
pub mod error;
pub mod prelude;
mod schema;
pub mod user;

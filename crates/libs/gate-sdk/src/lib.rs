//! Shared API types and client SDK for the gate service.
//!
//! The request/response types in [`account`] are the single source of
//! truth for the wire contract; both the service and this SDK use them.
//! [`client`] performs real network round trips against a running service
//! and [`session`] holds the client-side session context with an explicit
//! hydrate/clear lifecycle.

pub mod account;
pub mod client;
pub mod error;
pub mod prelude;
pub mod requests;
pub mod session;

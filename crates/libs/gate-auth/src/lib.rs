//! Authentication primitives for the gate service.
//!
//! This crate holds the two security-sensitive building blocks that the
//! rest of the system composes: salted password hashing ([`secret_hash`])
//! and signed, time-bounded bearer tokens ([`jwt`]). Neither module talks
//! to the network or the database.

pub mod error;
pub mod jwt;
pub mod prelude;
pub mod secret_hash;

/// Header carrying the bearer credential.
pub const AUTH_HEADER: &str = "Authorization";
/// Expected prefix of the credential header value.
pub const AUTH_HEADER_PREFIX: &str = "Bearer ";
/// Issuer claim embedded in every token.
pub const ISS: &str = "gate";

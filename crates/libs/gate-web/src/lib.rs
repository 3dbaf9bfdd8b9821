//! Web layer for the gate service.
//!
//! [`account`] implements the register/login flows, [`ctx`] resolves a
//! request's bearer token into an authenticated context, and [`mw_auth`]
//! gates protected routes on that context. Errors translate uniformly
//! into the JSON response envelope via [`error::Error`].

pub mod account;
pub mod auth_token;
pub mod ctx;
pub mod error;
pub mod mw_auth;
pub mod prelude;
pub mod state;

//! Request context for authenticated requests.
//!
//! The resolver middleware decides admit/reject once per request and
//! stores the outcome in the request extensions; the [`Ctx`] extractor
//! hands the admitted identity to handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use gate_sdk::account::UserApi;

use crate::prelude::*;

pub mod resolver;

/// Why a request was not admitted.
///
/// Kept separate from [`Error`] so the resolved outcome can be cloned out
/// of the request extensions; the response mapping collapses the token
/// variants into one indistinguishable 401.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CtxError {
    #[error("Auth Token Missing")]
    TokenMissing,
    #[error("Invalid Token")]
    TokenInvalid,
    #[error("Auth Token Expired")]
    TokenExpired,
    #[error("Identity Gone")]
    IdentityGone,
    #[error("Credential Store Unavailable")]
    Store,
}

/// Identity attached to an admitted request.
#[derive(Debug, Clone)]
pub struct Ctx {
    /// The authenticated user, re-resolved from the credential store.
    pub user: UserApi,
}

impl Ctx {
    pub fn new(user: UserApi) -> Self {
        Self { user }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        Ok(parts
            .extensions
            .get::<core::result::Result<Ctx, CtxError>>()
            .ok_or(Error::CtxMissing)?
            .clone()?)
    }
}

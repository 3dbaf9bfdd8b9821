//! Context resolver: one linear admit/reject decision per request.

use axum::{
    body::Body,
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use gate_auth::{AUTH_HEADER, AUTH_HEADER_PREFIX};
use gate_models::user::UserSummary;
use gate_sdk::account::UserApi;
use tracing::warn;

use super::{Ctx, CtxError};
use crate::{auth_token::decode_token, error::Error, state::ApiState};

/// Middleware that resolves the bearer token (if any) into a [`Ctx`] and
/// stores the outcome in the request extensions. It never short-circuits
/// itself; [`crate::mw_auth::mw_require_auth`] does the rejecting so that
/// public routes pass through untouched.
pub async fn mw_ctx_resolver(
    State(state): State<ApiState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let ctx = resolve_ctx(&state, req.headers());
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// The gate's decision tree: extract, verify, then re-resolve the subject
/// against the credential store so a deleted identity is rejected even
/// with a structurally valid token.
fn resolve_ctx(state: &ApiState, headers: &HeaderMap) -> core::result::Result<Ctx, CtxError> {
    let token = bearer_token(headers).ok_or(CtxError::TokenMissing)?;

    let claims = decode_token(&state.keys, &token).map_err(|err| match err {
        Error::Auth(gate_auth::error::Error::TokenExpired) => CtxError::TokenExpired,
        _ => CtxError::TokenInvalid,
    })?;

    let user = UserSummary::fetch_by_id(&claims.sub, &state.connection)
        .map_err(|err| {
            warn!("credential store lookup failed during auth: {err}");
            CtxError::Store
        })?
        .ok_or(CtxError::IdentityGone)?;

    Ok(Ctx::new(UserApi {
        id: user.id,
        email: user.email,
    }))
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
/// Any other header shape is treated as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTH_HEADER)?
        .to_str()
        .ok()?
        .strip_prefix(AUTH_HEADER_PREFIX)
        .map(String::from)
}

//! Authentication middleware for protecting routes.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::ctx::Ctx;
use crate::prelude::*;

/// Middleware that requires an authenticated context for a route.
///
/// The resolver middleware has already decided admit/reject; this layer
/// turns a reject into the unauthorized response before the downstream
/// handler runs.
pub async fn mw_require_auth(ctx: Result<Ctx>, req: Request, next: Next) -> Result<Response> {
    ctx?;
    Ok(next.run(req).await)
}

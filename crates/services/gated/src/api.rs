//! HTTP surface of the gate service.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use gate_sdk::account::{ApiResponse, AuthData, LoginRequest, RegisterRequest, UserData};
use gate_web::{
    account,
    ctx::{Ctx, resolver::mw_ctx_resolver},
    mw_auth::mw_require_auth,
    prelude::*,
    state::ApiState,
};
use serde_json::json;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Builds the service router. The context resolver runs on every request;
/// only routes behind `mw_require_auth` reject on a failed resolution.
pub fn router(state: ApiState) -> Router {
    let protected_routes = Router::new()
        .route("/api/auth/validate", get(validate))
        .route_layer(middleware::from_fn(mw_require_auth));

    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/health", get(health));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            mw_ctx_resolver,
        ))
        .with_state(state)
}

async fn register(
    State(state): State<ApiState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let data = account::register(payload, &state)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

async fn login(
    State(state): State<ApiState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>> {
    Ok(Json(ApiResponse::success(account::login(payload, &state)?)))
}

/// Echoes the gate-resolved identity; the middleware already did every
/// check there is.
async fn validate(ctx: Ctx) -> Result<Json<ApiResponse<UserData>>> {
    Ok(Json(ApiResponse::success(UserData { user: ctx.user })))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "message": "Server is running" }))
}

//! The gate service binary.

use gate_auth::jwt::JwtKeys;
use gate_models::db::{config::DbConfig, connection::DbConnection};
use gate_web::state::ApiState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // No fallback secret: refuse to start without an explicit JWT_SECRET.
    let keys = JwtKeys::from_env().expect("JWT_SECRET must be set");
    let db = DbConnection::new(&DbConfig::from_env()).setup();
    let state = ApiState::new(db, keys);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(5000);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .expect("Couldn't bind server address");
    tracing::debug!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("shutting down");
}

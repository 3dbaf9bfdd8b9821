//! Shared service state.

use std::sync::Arc;

use gate_auth::jwt::JwtKeys;
use gate_models::db::connection::DbConnection;

/// State shared by every handler and middleware: the credential store
/// pool and the signing keys, both read-only after startup.
#[derive(Clone)]
pub struct ApiState {
    pub connection: DbConnection,
    pub keys: Arc<JwtKeys>,
}

impl ApiState {
    pub fn new(connection: DbConnection, keys: JwtKeys) -> Self {
        Self {
            connection,
            keys: Arc::new(keys),
        }
    }
}

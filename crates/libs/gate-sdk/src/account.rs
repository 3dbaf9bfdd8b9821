//! Wire contract for the auth endpoints.
//!
//! Every payload travels inside the response envelope:
//!
//! ```json
//! { "status": "success", "data": { "user": { "id": "...", "email": "..." }, "token": "..." } }
//! { "status": "error", "message": "Invalid credentials" }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/auth/register`.
///
/// Absent fields deserialize as empty so that presence validation lives
/// in one place, behind the same 400 response as an empty value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public projection of an identity record. Never carries the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserApi {
    pub id: Uuid,
    pub email: String,
}

/// Successful register/login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub user: UserApi,
    pub token: String,
}

/// Successful validate payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub user: UserApi,
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            status: String::from("success"),
            data: Some(data),
            message: None,
        }
    }

    /// Builds an error envelope carrying only a generic message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: String::from("error"),
            data: None,
            message: Some(message.into()),
        }
    }
}

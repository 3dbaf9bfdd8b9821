//! Main Crate Error

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

use crate::ctx::CtxError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Models(#[from] gate_models::error::Error),

    #[error(transparent)]
    Auth(#[from] gate_auth::error::Error),

    /* Api Errors */
    #[error("Missing Fields")]
    MissingFields,

    #[error("Wrong Credentials")]
    WrongCredentials,

    #[error("Auth Token Creation")]
    AuthTokenCreation,

    #[error("Context Missing")]
    CtxMissing,

    #[error(transparent)]
    Ctx(#[from] CtxError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        let (status, message) = match self {
            Error::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Email and password are required",
            ),
            Error::Models(gate_models::error::Error::DuplicateEmail) => (
                StatusCode::BAD_REQUEST,
                "User with this email already exists",
            ),
            Error::WrongCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Error::Ctx(CtxError::IdentityGone) => (
                StatusCode::UNAUTHORIZED,
                "The user belonging to this token no longer exists",
            ),
            // Missing, invalid and expired tokens are deliberately
            // indistinguishable to the caller.
            Error::Ctx(CtxError::TokenMissing)
            | Error::Ctx(CtxError::TokenInvalid)
            | Error::Ctx(CtxError::TokenExpired)
            | Error::CtxMissing => (
                StatusCode::UNAUTHORIZED,
                "Not authorized to access this route",
            ),
            Error::Ctx(CtxError::Store)
            | Error::Models(_)
            | Error::Auth(_)
            | Error::AuthTokenCreation => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": message,
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: Error) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_and_duplicate_are_bad_request() {
        assert_eq!(status_of(Error::MissingFields), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(Error::Models(gate_models::error::Error::DuplicateEmail)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_credential_and_token_failures_are_unauthorized() {
        assert_eq!(status_of(Error::WrongCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(Error::Ctx(CtxError::TokenMissing)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(Error::Ctx(CtxError::TokenInvalid)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(Error::Ctx(CtxError::TokenExpired)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(Error::Ctx(CtxError::IdentityGone)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_everything_else_is_internal() {
        assert_eq!(
            status_of(Error::Ctx(CtxError::Store)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(Error::Auth(gate_auth::error::Error::MissingSecret)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(Error::AuthTokenCreation),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

//! Session token management.
//!
//! A token asserts possession of an identity's id for a fixed window; it
//! is never persisted or revoked server-side. Expiry is the only
//! termination mechanism.

use chrono::{TimeDelta, Utc};
use gate_auth::{
    ISS,
    jwt::{JwtKeys, jwt_decode, jwt_encode},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prelude::*;

/// Lifetime of a session token from issuance.
pub const TOKEN_EXPIRATION_TIME: TimeDelta = TimeDelta::days(1);

/// JWT claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthToken {
    /// Subject (user id).
    pub sub: Uuid,
    /// Issuer.
    pub iss: String,
    /// Issued at time.
    pub iat: i64,
    /// Expiration time.
    pub exp: i64,
}

impl AuthToken {
    pub fn new(id: &Uuid, token_duration: TimeDelta) -> Result<Self> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(token_duration)
            .ok_or(Error::AuthTokenCreation)?;

        Ok(Self {
            sub: *id,
            iss: String::from(ISS),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        })
    }
}

/// Issues a signed session token for the given user id.
pub fn issue_token(keys: &JwtKeys, id: &Uuid) -> Result<String> {
    let claims = AuthToken::new(id, TOKEN_EXPIRATION_TIME)?;
    Ok(jwt_encode(keys, &claims)?)
}

/// Verifies a session token and returns its claims.
pub fn decode_token(keys: &JwtKeys, token: &str) -> Result<AuthToken> {
    Ok(jwt_decode::<AuthToken>(keys, token)?.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::new(b"test-secret-key-for-testing-only")
    }

    #[test]
    fn test_issue_and_decode_roundtrip() {
        let keys = keys();
        let id = Uuid::new_v4();

        let token = issue_token(&keys, &id).expect("should issue token");
        let claims = decode_token(&keys, &token).expect("should decode token");

        assert_eq!(claims.sub, id);
        assert_eq!(claims.iss, gate_auth::ISS);
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRATION_TIME.num_seconds());
    }

    #[test]
    fn test_two_issued_tokens_both_decode_to_same_subject() {
        let keys = keys();
        let id = Uuid::new_v4();

        let first = issue_token(&keys, &id).unwrap();
        let second = issue_token(&keys, &id).unwrap();

        assert_eq!(decode_token(&keys, &first).unwrap().sub, id);
        assert_eq!(decode_token(&keys, &second).unwrap().sub, id);
    }

    #[test]
    fn test_elapsed_token_is_expired() {
        let keys = keys();
        let id = Uuid::new_v4();

        let claims = AuthToken::new(&id, TimeDelta::days(-2)).unwrap();
        let token = gate_auth::jwt::jwt_encode(&keys, &claims).unwrap();

        let result = decode_token(&keys, &token);
        assert!(matches!(
            result,
            Err(Error::Auth(gate_auth::error::Error::TokenExpired))
        ));
    }

    #[test]
    fn test_token_from_another_secret_is_invalid() {
        let id = Uuid::new_v4();
        let token = issue_token(&JwtKeys::new(b"other-secret"), &id).unwrap();

        let result = decode_token(&keys(), &token);
        assert!(matches!(
            result,
            Err(Error::Auth(gate_auth::error::Error::InvalidToken))
        ));
    }
}

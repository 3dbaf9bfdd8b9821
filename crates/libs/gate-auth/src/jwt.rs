//! JWT token management for the gate service.
//!
//! Tokens are signed with HS256 using a single process-wide secret that is
//! read once at startup. There is deliberately no fallback secret: a
//! missing `JWT_SECRET` is a startup failure, never a silent default.
//!
//! # Examples
//!
//! ```rust
//! use gate_auth::jwt::{JwtKeys, jwt_decode, jwt_encode};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
//! struct UserClaims {
//!     sub: String,
//!     exp: i64,
//! }
//!
//! let keys = JwtKeys::new(b"MySuperSecret");
//! let claims = UserClaims {
//!     sub: "some-user".to_string(),
//!     exp: 4118335200,
//! };
//!
//! let token = jwt_encode(&keys, &claims).unwrap();
//! let decoded = jwt_decode::<UserClaims>(&keys, &token).unwrap();
//! assert_eq!(claims, decoded.claims);
//! ```

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::prelude::*;

/// Signing algorithm used for all tokens.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Cryptographic key pair for JWT signing and verification.
pub struct JwtKeys {
    /// Key used for signing new JWT tokens.
    encoding: EncodingKey,
    /// Key used for verifying existing JWT tokens.
    decoding: DecodingKey,
}

impl JwtKeys {
    /// Creates a key pair from the provided secret bytes.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Loads the signing secret from the `JWT_SECRET` environment variable.
    ///
    /// Fails with [`Error::MissingSecret`] when the variable is unset so
    /// that a misconfigured service refuses to start.
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("JWT_SECRET").map_err(|_| Error::MissingSecret)?;
        Ok(Self::new(secret.as_bytes()))
    }
}

/// Creates a signed JWT token from the provided claims.
///
/// Claims are signed for integrity, not encrypted; keep the payload
/// minimal and always include an `exp` claim.
pub fn jwt_encode<T>(keys: &JwtKeys, claims: &T) -> Result<String>
where
    T: Serialize,
{
    let header = Header::new(ALGORITHM);
    Ok(encode(&header, claims, &keys.encoding)?)
}

/// Validates a JWT token and extracts its claims.
///
/// Expiry is checked as part of validation. An elapsed token surfaces as
/// [`Error::TokenExpired`]; every other failure (bad signature, malformed
/// structure, wrong algorithm) collapses into [`Error::InvalidToken`] so
/// callers cannot leak which check rejected the credential.
pub fn jwt_decode<T>(keys: &JwtKeys, token: &str) -> Result<TokenData<T>>
where
    T: DeserializeOwned,
{
    decode::<T>(token, &keys.decoding, &Validation::new(ALGORITHM)).map_err(|err| {
        match err.kind() {
            ErrorKind::ExpiredSignature => Error::TokenExpired,
            _ => Error::InvalidToken,
        }
    })
}

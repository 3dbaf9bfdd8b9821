//! Main Crate Error

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid Token")]
    InvalidToken,
    #[error("Token Expired")]
    TokenExpired,
    #[error("JWT_SECRET must be set")]
    MissingSecret,
    #[error(transparent)]
    TokenCreation(#[from] jsonwebtoken::errors::Error),

    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),
}

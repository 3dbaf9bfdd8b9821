//! Registration and login flows.
//!
//! Both flows end with a freshly issued session token; neither ever
//! returns the password or its hash. Login failures collapse into one
//! `WrongCredentials` error so callers cannot tell a missing account from
//! a wrong password.

use gate_auth::secret_hash::{generate_secret_hash, is_secret_valid};
use gate_models::user::{User, UserCreate};
use gate_sdk::account::{AuthData, LoginRequest, RegisterRequest, UserApi};
use tracing::info;

use crate::{auth_token::issue_token, prelude::*, state::ApiState};

/// Registers a new identity and issues its first session token.
pub fn register(payload: RegisterRequest, state: &ApiState) -> Result<AuthData> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(Error::MissingFields);
    }

    // Pre-check is an optimization for a friendly error; the store's
    // unique constraint stays authoritative under concurrent registration.
    if User::fetch_by_email(&payload.email, &state.connection)?.is_some() {
        return Err(gate_models::error::Error::DuplicateEmail.into());
    }

    let password_hash = generate_secret_hash(&payload.password)?;
    let user = UserCreate {
        email: payload.email,
        password_hash,
    }
    .save(&state.connection)?;

    let token = issue_token(&state.keys, &user.id)?;
    info!("registered new account {}", user.id);

    Ok(AuthData {
        user: UserApi {
            id: user.id,
            email: user.email,
        },
        token,
    })
}

/// Verifies credentials and issues a fresh session token.
pub fn login(payload: LoginRequest, state: &ApiState) -> Result<AuthData> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(Error::MissingFields);
    }

    let user = User::fetch_by_email(&payload.email, &state.connection)?
        .ok_or(Error::WrongCredentials)?;

    if !is_secret_valid(&payload.password, &user.password_hash)? {
        return Err(Error::WrongCredentials);
    }

    let token = issue_token(&state.keys, &user.id)?;

    Ok(AuthData {
        user: UserApi {
            id: user.id,
            email: user.email,
        },
        token,
    })
}

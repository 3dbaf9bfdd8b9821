//! Auth flows against a running gate service.
//!
//! Every call here is a real network round trip; there is no offline or
//! mocked path. Callers that want to keep the issued credential across
//! restarts pair this with [`crate::session`].

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::account::{ApiResponse, AuthData, LoginRequest, RegisterRequest, UserApi, UserData};
use crate::prelude::*;
use crate::requests::ApiClient;
use crate::session::Session;

/// Client for the auth endpoints of a gate service.
///
/// # Examples
///
/// ```rust,no_run
/// use gate_sdk::client::AuthClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AuthClient::new("http://127.0.0.1:5000/api");
/// let auth = client.login("a@x.com", "secret123").await?;
/// let user = client.validate(&auth.token).await?;
/// assert_eq!(user, auth.user);
/// # Ok(())
/// # }
/// ```
pub struct AuthClient {
    pub api: ApiClient,
}

impl AuthClient {
    /// Creates a client for a service rooted at `base_url`
    /// (e.g. `http://127.0.0.1:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    /// Registers a new account and returns the issued credential.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthData> {
        let payload = RegisterRequest {
            email: email.into(),
            password: password.into(),
        };
        let response = self.api.post("auth/register", &payload).await?;
        unwrap_envelope(response).await
    }

    /// Logs in with existing credentials and returns a fresh credential.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthData> {
        let payload = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        let response = self.api.post("auth/login", &payload).await?;
        unwrap_envelope(response).await
    }

    /// Asks the service whether `token` is still accepted, returning the
    /// identity it resolves to.
    pub async fn validate(&self, token: &str) -> Result<UserApi> {
        let response = self.api.get_authed("auth/validate", token).await?;
        let data: UserData = unwrap_envelope(response).await?;
        Ok(data.user)
    }

    /// Logs in and captures the result as a [`Session`].
    pub async fn login_session(&self, email: &str, password: &str) -> Result<Session> {
        let auth = self.login(email, password).await?;
        Ok(Session::new(auth.token, auth.user))
    }
}

/// Parses the response envelope, turning error envelopes into
/// [`Error::Api`] carrying the service's generic message.
async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let envelope: ApiResponse<T> = response.json().await?;
    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            message: envelope.message.unwrap_or_default(),
        });
    }
    envelope.data.ok_or(Error::MissingData)
}

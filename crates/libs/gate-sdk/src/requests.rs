//! Thin HTTP client wrapper used by the SDK.
//!
//! A simplified wrapper around reqwest with JSON defaults and bearer
//! support, shared by the auth flows and the integration tests.

use reqwest::{Response, header};
use serde::Serialize;

use crate::prelude::*;

/// HTTP client for making API requests with JSON support.
pub struct ApiClient {
    url: String,
    pub client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new API client with the given base URL.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gate_sdk::requests::ApiClient;
    ///
    /// let client = ApiClient::new("http://127.0.0.1:5000/api");
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "content-type",
            header::HeaderValue::from_static("application/json"),
        );
        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .expect("Failed to build reqwest Client");
        Self {
            url: url.into(),
            client,
        }
    }

    /// Constructs the full URL for an endpoint.
    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.url)
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.path(endpoint)).json(body).send().await?)
    }

    /// Makes a GET request without credentials.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        Ok(self.client.get(self.path(endpoint)).send().await?)
    }

    /// Makes a GET request carrying a bearer token.
    pub async fn get_authed(&self, endpoint: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.path(endpoint))
            .bearer_auth(token)
            .send()
            .await?)
    }
}

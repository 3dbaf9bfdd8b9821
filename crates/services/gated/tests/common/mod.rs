use gate_sdk::client::AuthClient;

/// Base URL of a running gated instance, e.g. `http://127.0.0.1:5000/api`.
pub const ENV_URL: &str = "GATED_URL";

/// Live-API tests only run when a service address is provided.
pub fn client_from_env() -> Option<AuthClient> {
    match std::env::var(ENV_URL) {
        Ok(url) => Some(AuthClient::new(url)),
        Err(_) => {
            eprintln!("{ENV_URL} not set; skipping live API test");
            None
        }
    }
}

pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4())
}

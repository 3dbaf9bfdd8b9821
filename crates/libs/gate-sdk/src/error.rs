//! Main Crate Error

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    /// The service answered with an error envelope.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    /// A success envelope arrived without its `data` field.
    #[error("response envelope missing data")]
    MissingData,
}

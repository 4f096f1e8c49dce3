use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("Email is required to reach cloud storage")]
    MissingEmail,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cloud storage returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Decode error: {0}")]
    Decode(String),
}

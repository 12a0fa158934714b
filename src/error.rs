//! Error types for the vaultlib library.

use thiserror::Error;

/// Main error type for vaultlib operations.
#[derive(Error, Debug)]
pub enum VaultError {
    /// HTTP request failed with status code.
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server reported an application error in the response body.
    #[error("Server error: {0}")]
    Api(String),

    /// Invalid or unexpected response from server.
    #[error("Invalid response from server")]
    InvalidResponse,

    /// Download request was rejected by the server.
    #[error("Download failed with status {0}")]
    DownloadFailed(u16),

    /// A file or folder name was empty.
    #[error("Name must not be empty")]
    EmptyName,

    /// No access token is configured for an authenticated call.
    #[error("Not logged in")]
    NotAuthenticated,

    /// Local I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for vaultlib operations.
pub type Result<T> = std::result::Result<T, VaultError>;

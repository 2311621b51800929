//! Client errors

use thiserror::Error;

use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, timeout or invalid request
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{method} {url} returned {status}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    /// The API rejected the access token
    #[error("Access token rejected by {url}")]
    Unauthorized { url: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] meater_core::Error),

    #[error("Login required but no credentials were provided")]
    MissingCredentials,

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("No cook with id {0}")]
    CookNotFound(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

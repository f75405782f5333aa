//! Defines the custom error types for the listwise client.

use std::io;
use thiserror::Error;
use url::ParseError as UrlParseError;

/// The primary error type for deep-clean API operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Error occurring during configuration loading or validation.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// No API key is configured; raised before any network I/O happens.
    #[error("Missing Credential: no API key configured")]
    MissingApiKey,

    /// Error related to file input/output operations.
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing a URL.
    #[error("URL Parsing Error: {0}")]
    UrlParse(#[from] UrlParseError),

    /// Network or I/O failure while talking to the API. Callers may retry.
    #[error("Transport Error: {0}")]
    Transport(#[source] anyhow::Error),

    /// The response body was not the JSON object the API documents.
    /// Callers may retry, as this can indicate a transient server issue.
    #[error("Response Decode Error: {0}")]
    Decode(String),

    /// The API reported a hard error (`error_code` other than 1).
    /// Unrecoverable for this input; not retried internally.
    #[error("ListWise API Error: code={code}, message='{message}', email='{email}'")]
    Api {
        /// The `error_code` value reported by the API.
        code: i64,
        /// The `error_msg` value reported by the API.
        message: String,
        /// The email address the failed call was made for.
        email: String,
    },

    /// The response carried an `email_status` string outside the known set,
    /// meaning the API contract has drifted since this client was written.
    #[error("Unknown email status string: '{0}'")]
    UnknownStatus(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(anyhow::Error::new(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

//! Error types for taskdeck HTTP store operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during `HttpStore` operations.
#[derive(Error, Debug)]
pub enum HttpStoreError {
    /// Base URL was empty or not an absolute http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport-level failure (connect, timeout, body decode).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// Other unclassified error.
    #[error("Other error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for HttpStoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

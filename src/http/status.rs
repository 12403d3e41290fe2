//! Classification of HTTP error statuses returned by the package index.

use reqwest::StatusCode;
use thiserror::Error;

/// An error status from the index, turned into something a user can act on.
#[derive(Error, Debug)]
pub enum StatusError {
    /// HTTP 429
    #[error("Rate limit exceeded: {0}. Try again later.")]
    RateLimitExceeded(String),
    /// HTTP 404
    #[error("Not found: {0}")]
    NotFound(String),
    /// HTTP 401 / 403
    #[error("Access forbidden: {0}")]
    Forbidden(String),
    /// Other 4xx
    #[error("Request error: {0}")]
    ClientError(String),
    /// 5xx
    #[error("Index server error: {0}")]
    ServerError(String),
}

/// Maps a failed `error_for_status()` onto a [`StatusError`].
///
/// Returns `None` for errors that carry no status (connection failures,
/// timeouts); those are reported as the raw transport error.
pub fn classify_error(error: &reqwest::Error) -> Option<StatusError> {
    let status = error.status()?;
    let url = error
        .url()
        .map(|u| u.to_string())
        .unwrap_or_else(|| "<unknown url>".to_string());

    let classified = match status {
        StatusCode::TOO_MANY_REQUESTS => StatusError::RateLimitExceeded(url),
        StatusCode::NOT_FOUND => StatusError::NotFound(url),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StatusError::Forbidden(url),
        s if s.is_client_error() => {
            StatusError::ClientError(format!("HTTP {} from {}", s.as_u16(), url))
        }
        s => StatusError::ServerError(format!("HTTP {} from {}", s.as_u16(), url)),
    };
    Some(classified)
}

/// Converts a reqwest error into an `anyhow::Error`, classifying it when it
/// carries an HTTP status.
pub fn check_status(error: reqwest::Error) -> anyhow::Error {
    match classify_error(&error) {
        Some(classified) => anyhow::Error::from(classified),
        None => anyhow::Error::from(error),
    }
}

//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Shown as the underlying message, so the error slot reads exactly as the
    /// upstream failure does.
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// Every non-2xx response becomes [`HttpError::Status`], carrying the raw body
/// text; error bodies are never parsed as JSON.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Network response was not ok: {status} - {status_text} - {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Malformed response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// HTTP status code, if the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_status_text_and_body() {
        let err = HttpError::Status {
            status: 429,
            status_text: "Too Many Requests".to_string(),
            body: "{\"error\":\"slow down\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Network response was not ok: 429 - Too Many Requests - {\"error\":\"slow down\"}"
        );
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_sdk_error_wraps_http_error() {
        let err: SdkError = HttpError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            body: "coin not found".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Network response was not ok: 404 - Not Found - coin not found"
        );
    }
}

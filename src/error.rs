//! Error types for the Hyperswitch API client.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side is the [`Error`] enum below. API failures carry the decoded
//! Hyperswitch error envelope alongside the raw body.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Hyperswitch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Seconds to wait after a 429 when the server sends no `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// The main error type for all Hyperswitch API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a documented error response
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error category from the envelope (`invalid_request`, `api`, ...)
        error_type: Option<String>,
        /// Hyperswitch error code (`IR_06`, `HE_02`, ...)
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Extra detail some errors carry, such as the failing field
        reason: Option<String>,
        /// Raw response body for debugging
        body: Value,
    },

    /// Authentication failed (missing, invalid or expired key)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found (404)
    #[error("Not found: {message}")]
    NotFound {
        /// Hyperswitch error code, when present
        code: Option<String>,
        /// Human-readable error message
        message: String,
    },

    /// Rate limited by the API
    #[error("Rate limited; retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds the server asked us to wait
        retry_after_secs: u64,
    },

    /// The server answered with a status the endpoint does not document.
    ///
    /// Only produced when
    /// [`ClientConfig::raise_on_unexpected_status`](crate::ClientConfig::raise_on_unexpected_status)
    /// is enabled.
    #[error("Unexpected status {status}: {content}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body, lossily decoded as UTF-8
        content: String,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing failed
    #[cfg(feature = "tools")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Returns `true` if the failure is likely transient.
    ///
    /// The client itself never retries; this is only a hint for callers
    /// that implement their own policy.
    ///
    /// # Example
    ///
    /// ```
    /// use hyperswitch_rs::Error;
    ///
    /// let err = Error::RateLimited { retry_after_secs: 5 };
    /// assert!(err.is_transient());
    /// ```
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::RateLimited { .. } => true,
            Error::Api { status, .. } | Error::UnexpectedStatus { status, .. } => {
                matches!(status, 502..=504)
            }
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) => true,
            Error::Api { status, .. } => *status == 403,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } | Error::UnexpectedStatus { status, .. } => {
                (400..500).contains(status)
            }
            Error::NotFound { .. }
            | Error::Authentication(_)
            | Error::RateLimited { .. }
            | Error::InvalidInput(_)
            | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } | Error::UnexpectedStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The Hyperswitch error code, if the server provided one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } | Error::NotFound { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Build an error from a non-success response.
    ///
    /// Hyperswitch wraps failures as
    /// `{"error": {"type": ..., "message": ..., "code": ..., "reason": ...}}`.
    pub(crate) fn from_api_response(status: u16, content: &[u8], headers: &HeaderMap) -> Self {
        let body: Value = serde_json::from_slice(content)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(content).into_owned()));

        let envelope = body.get("error");
        let field = |name: &str| {
            envelope
                .and_then(|e| e.get(name))
                .and_then(Value::as_str)
                .map(String::from)
        };

        let code = field("code");
        let error_type = field("type");
        let message = field("message");
        let reason = field("reason");

        match status {
            401 => Error::Authentication(
                message.unwrap_or_else(|| "API key not provided or invalid".to_string()),
            ),
            404 => Error::NotFound {
                code,
                message: message.unwrap_or_else(|| "Resource not found".to_string()),
            },
            429 => Error::RateLimited {
                retry_after_secs: headers
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS),
            },
            _ => Error::Api {
                status,
                error_type,
                code,
                message: message.unwrap_or_else(|| "Unknown API error".to_string()),
                reason,
                body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_from_api_response_envelope() {
        let body = serde_json::json!({
            "error": {
                "type": "invalid_request",
                "message": "Missing required param: currency",
                "code": "IR_04"
            }
        });

        let err = Error::from_api_response(400, body.to_string().as_bytes(), &HeaderMap::new());
        match err {
            Error::Api {
                status,
                error_type,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(error_type.as_deref(), Some("invalid_request"));
                assert_eq!(code.as_deref(), Some("IR_04"));
                assert_eq!(message, "Missing required param: currency");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_api_response_reason() {
        let body = serde_json::json!({
            "error": {
                "type": "invalid_request",
                "message": "Invalid value provided: amount_to_capture",
                "code": "IR_05",
                "reason": "amount_to_capture is greater than amount"
            }
        });

        match Error::from_api_response(422, body.to_string().as_bytes(), &HeaderMap::new()) {
            Error::Api { reason, .. } => {
                assert_eq!(
                    reason.as_deref(),
                    Some("amount_to_capture is greater than amount")
                );
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_api_response_non_json_body() {
        let err = Error::from_api_response(500, b"upstream exploded", &HeaderMap::new());
        match err {
            Error::Api { message, body, .. } => {
                assert_eq!(message, "Unknown API error");
                assert_eq!(body, Value::String("upstream exploded".into()));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_specific_variants() {
        let not_found = serde_json::json!({
            "error": {"type": "invalid_request", "message": "Payment does not exist", "code": "HE_02"}
        });
        let err = Error::from_api_response(404, not_found.to_string().as_bytes(), &HeaderMap::new());
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.error_code(), Some("HE_02"));

        let err = Error::from_api_response(401, b"", &HeaderMap::new());
        assert!(err.is_auth_error());

        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        let err = Error::from_api_response(429, b"{}", &headers);
        assert!(matches!(err, Error::RateLimited { retry_after_secs: 7 }));
    }

    #[test]
    fn test_classification() {
        assert!(Error::RateLimited { retry_after_secs: 1 }.is_transient());
        assert!(!Error::InvalidInput("bad".into()).is_transient());
        assert!(Error::InvalidInput("bad".into()).is_client_error());

        let unexpected = Error::UnexpectedStatus {
            status: 503,
            content: String::new(),
        };
        assert!(unexpected.is_server_error());
        assert!(unexpected.is_transient());
    }
}

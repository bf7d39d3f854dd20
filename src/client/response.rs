//! Raw responses and the status dispatch rules.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::{Error, Result};

/// Error statuses the Hyperswitch API documents for its endpoints.
///
/// Responses with these statuses carry the standard error envelope. Any
/// other non-success status is "unexpected".
pub const DOCUMENTED_ERROR_STATUSES: [u16; 8] = [400, 401, 403, 404, 409, 422, 429, 500];

/// Whether `status` is a success or a documented error status.
pub fn is_documented_status(status: StatusCode) -> bool {
    status.is_success() || DOCUMENTED_ERROR_STATUSES.contains(&status.as_u16())
}

/// A response with its raw body and, for successes, the decoded value.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub content: Vec<u8>,
    /// Decoded body; `None` for every non-success status
    pub parsed: Option<T>,
}

impl<T> Response<T> {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// The decoded value, or the error the status maps to.
    ///
    /// ```
    /// use hyperswitch_rs::{Error, Response};
    /// use reqwest::{header::HeaderMap, StatusCode};
    ///
    /// let response: Response<()> = Response {
    ///     status: StatusCode::NOT_FOUND,
    ///     headers: HeaderMap::new(),
    ///     content: br#"{"error":{"type":"invalid_request","message":"Payment does not exist in our records","code":"HE_02"}}"#.to_vec(),
    ///     parsed: None,
    /// };
    /// assert!(matches!(response.into_result(), Err(Error::NotFound { .. })));
    /// ```
    pub fn into_result(self) -> Result<T> {
        match self.parsed {
            Some(value) if self.status.is_success() => Ok(value),
            _ => Err(Error::from_api_response(
                self.status.as_u16(),
                &self.content,
                &self.headers,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> Response<serde_json::Value> {
        Response {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            content: body.as_bytes().to_vec(),
            parsed: None,
        }
    }

    #[test]
    fn test_documented_statuses() {
        assert!(is_documented_status(StatusCode::OK));
        assert!(is_documented_status(StatusCode::NO_CONTENT));
        assert!(is_documented_status(StatusCode::UNPROCESSABLE_ENTITY));
        assert!(!is_documented_status(StatusCode::IM_A_TEAPOT));
        assert!(!is_documented_status(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_into_result_maps_errors() {
        let err = response(
            422,
            r#"{"error":{"type":"invalid_request","message":"Missing required param: currency","code":"IR_04"}}"#,
        )
        .into_result()
        .unwrap_err();
        assert_eq!(err.error_code(), Some("IR_04"));

        let err = response(401, "").into_result().unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));

        let err = response(502, "<html>bad gateway</html>").into_result().unwrap_err();
        assert!(matches!(err, Error::Api { status: 502, .. }));
    }

    #[test]
    fn test_into_result_success() {
        let mut ok = response(200, "{}");
        ok.parsed = Some(serde_json::json!({}));
        assert!(ok.is_success());
        assert_eq!(ok.text(), "{}");
        assert!(ok.into_result().is_ok());
    }
}

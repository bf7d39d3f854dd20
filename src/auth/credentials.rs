//! Credential variants and header application.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Header carrying API keys.
pub(crate) const API_KEY_HEADER: &str = "api-key";

/// Environment variable holding a secret or publishable API key.
pub const API_KEY_ENV: &str = "HYPERSWITCH_API_KEY";

/// Environment variable holding a dashboard JWT.
pub const JWT_ENV: &str = "HYPERSWITCH_JWT";

/// How requests are authenticated.
///
/// Secrets are held in [`SecretString`] and never appear in `Debug` output.
pub enum Credentials {
    /// Secret API key (`snd_...`, `dev_...`) for server-side calls
    ApiKey(SecretString),
    /// Publishable key (`pk_...`) for client-side calls such as confirm with
    /// a client secret
    PublishableKey(SecretString),
    /// Admin API key for merchant account management
    AdminApiKey(SecretString),
    /// Dashboard JWT, sent as `Authorization: Bearer`
    Bearer(SecretString),
}

impl Credentials {
    /// Secret API key credentials.
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey(SecretString::from(key.into()))
    }

    /// Publishable key credentials.
    pub fn publishable_key(key: impl Into<String>) -> Self {
        Credentials::PublishableKey(SecretString::from(key.into()))
    }

    /// Admin API key credentials.
    pub fn admin_api_key(key: impl Into<String>) -> Self {
        Credentials::AdminApiKey(SecretString::from(key.into()))
    }

    /// Bearer token credentials.
    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(SecretString::from(token.into()))
    }

    /// Read credentials from `HYPERSWITCH_API_KEY`, falling back to
    /// `HYPERSWITCH_JWT` as a bearer token.
    pub fn from_env() -> Result<Self> {
        if let Some(key) = non_empty_var(API_KEY_ENV) {
            return Ok(Self::api_key(key));
        }
        if let Some(token) = non_empty_var(JWT_ENV) {
            return Ok(Self::bearer(token));
        }
        Err(Error::Config(format!(
            "neither {API_KEY_ENV} nor {JWT_ENV} is set"
        )))
    }

    /// Whether these credentials are sent as a bearer token.
    pub fn is_bearer(&self) -> bool {
        matches!(self, Credentials::Bearer(_))
    }

    fn kind(&self) -> &'static str {
        match self {
            Credentials::ApiKey(_) => "ApiKey",
            Credentials::PublishableKey(_) => "PublishableKey",
            Credentials::AdminApiKey(_) => "AdminApiKey",
            Credentials::Bearer(_) => "Bearer",
        }
    }

    /// Insert the authentication header.
    pub(crate) fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        match self {
            Credentials::ApiKey(key)
            | Credentials::PublishableKey(key)
            | Credentials::AdminApiKey(key) => {
                let mut value = HeaderValue::from_str(key.expose_secret())
                    .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?;
                value.set_sensitive(true);
                headers.insert(API_KEY_HEADER, value);
            }
            Credentials::Bearer(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                    .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
        }
        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(self.kind()).field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_header() {
        let mut headers = HeaderMap::new();
        Credentials::api_key("snd_abc").apply(&mut headers).unwrap();
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "snd_abc");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_bearer_header() {
        let mut headers = HeaderMap::new();
        let credentials = Credentials::bearer("eyJhbGciOi");
        assert!(credentials.is_bearer());
        credentials.apply(&mut headers).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer eyJhbGciOi");
        assert!(headers.get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let mut headers = HeaderMap::new();
        let err = Credentials::api_key("bad\nkey").apply(&mut headers).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_debug_redacts() {
        let debug = format!("{:?}", Credentials::publishable_key("pk_snd_secret"));
        assert_eq!(debug, "PublishableKey(\"[REDACTED]\")");
        assert!(!debug.contains("pk_snd_secret"));
    }
}

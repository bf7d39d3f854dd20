//! Client configuration options.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::models::{MerchantId, ProfileId};
use crate::{Error, Result};

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "HYPERSWITCH_BASE_URL";
/// Environment variable with the request timeout in seconds.
pub const TIMEOUT_SECS_ENV: &str = "HYPERSWITCH_TIMEOUT_SECS";
/// Environment variable with the business profile id.
pub const PROFILE_ID_ENV: &str = "HYPERSWITCH_PROFILE_ID";
/// Environment variable enabling [`ClientConfig::raise_on_unexpected_status`].
pub const RAISE_ON_UNEXPECTED_STATUS_ENV: &str = "HYPERSWITCH_RAISE_ON_UNEXPECTED_STATUS";

/// Configuration for the Hyperswitch client.
///
/// # Example
///
/// ```
/// use hyperswitch_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_profile_id("pro_abc")
///     .with_raise_on_unexpected_status(true);
/// assert!(config.raise_on_unexpected_status);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL to use instead of the environment's (self-hosted servers, mocks)
    pub base_url: Option<Url>,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Fail with [`Error::UnexpectedStatus`] on statuses no endpoint documents
    pub raise_on_unexpected_status: bool,
    /// Business profile sent as `X-Profile-Id`
    pub profile_id: Option<ProfileId>,
    /// Merchant sent as `X-Merchant-Id`
    pub merchant_id: Option<MerchantId>,
    /// Extra headers added to every request
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("hyperswitch-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            raise_on_unexpected_status: false,
            profile_id: None,
            merchant_id: None,
            default_headers: HeaderMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `HYPERSWITCH_*` environment variables.
    ///
    /// Unset variables keep their defaults; malformed ones are a
    /// [`Error::Config`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = var(BASE_URL_ENV) {
            config.base_url = Some(Url::parse(url.trim())?);
        }
        if let Some(secs) = var(TIMEOUT_SECS_ENV) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("{TIMEOUT_SECS_ENV} must be whole seconds, got {secs:?}")))?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(profile_id) = var(PROFILE_ID_ENV) {
            config.profile_id = Some(ProfileId::new(profile_id.trim()));
        }
        if let Some(flag) = var(RAISE_ON_UNEXPECTED_STATUS_ENV) {
            config.raise_on_unexpected_status = parse_flag(&flag).ok_or_else(|| {
                Error::Config(format!(
                    "{RAISE_ON_UNEXPECTED_STATUS_ENV} must be true or false, got {flag:?}"
                ))
            })?;
        }
        Ok(config)
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fail on statuses the endpoint does not document.
    pub fn with_raise_on_unexpected_status(mut self, enabled: bool) -> Self {
        self.raise_on_unexpected_status = enabled;
        self
    }

    /// Send `X-Profile-Id` with every request.
    pub fn with_profile_id(mut self, profile_id: impl Into<ProfileId>) -> Self {
        self.profile_id = Some(profile_id.into());
        self
    }

    /// Send `X-Merchant-Id` with every request.
    pub fn with_merchant_id(mut self, merchant_id: impl Into<MerchantId>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    /// Add a header to every request.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::InvalidInput(format!("Invalid header name: {name}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| Error::InvalidInput(format!("Invalid value for header {name}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.raise_on_unexpected_status);
        assert!(config.user_agent.starts_with("hyperswitch-rs/"));
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_from_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "http://localhost:8080"),
            (TIMEOUT_SECS_ENV, "5"),
            (PROFILE_ID_ENV, "pro_env"),
            (RAISE_ON_UNEXPECTED_STATUS_ENV, "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.unwrap().as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.profile_id.unwrap().as_str(), "pro_env");
        assert!(config.raise_on_unexpected_status);
    }

    #[test]
    fn test_from_env_rejects_garbage() {
        let err = ClientConfig::from_lookup(lookup(&[(TIMEOUT_SECS_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[(RAISE_ON_UNEXPECTED_STATUS_ENV, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[(BASE_URL_ENV, "not a url")])).unwrap_err();
        assert!(matches!(err, Error::UrlParse(_)));
    }

    #[test]
    fn test_with_header() {
        let config = ClientConfig::new().with_header("x-request-id", "abc").unwrap();
        assert_eq!(config.default_headers.get("x-request-id").unwrap(), "abc");
        assert!(ClientConfig::new().with_header("bad header", "x").is_err());
    }
}

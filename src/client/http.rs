//! HTTP client implementation for the Hyperswitch API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::api::{
    CustomersService, EventsService, MandatesService, PaymentsService, PayoutsService,
    PollService, RefundsService, RelayService, RoutingService,
};
use crate::auth::Credentials;
use crate::{Environment, Error, Result};

use super::config::ClientConfig;
use super::response::{is_documented_status, Response};

const PROFILE_ID_HEADER: &str = "x-profile-id";
const MERCHANT_ID_HEADER: &str = "x-merchant-id";

/// The main client for interacting with the Hyperswitch API.
///
/// Services are obtained through accessor methods and share one connection
/// pool. Cloning the client is cheap.
///
/// # Example
///
/// ```no_run
/// use hyperswitch_rs::{Credentials, Environment, HyperswitchClient, MinorUnit, PaymentId};
/// use hyperswitch_rs::models::{Currency, PaymentCreateRequestBuilder};
///
/// # async fn example() -> hyperswitch_rs::Result<()> {
/// let client = HyperswitchClient::new(Credentials::api_key("snd_..."), Environment::Sandbox)?;
///
/// let request = PaymentCreateRequestBuilder::new()
///     .amount(MinorUnit::new(6540))
///     .currency(Currency::USD)
///     .build()?;
/// let payment = client.payments().create(request).await?;
///
/// let refreshed = client.payments().retrieve(&payment.payment_id, None).await?;
/// println!("{} is {:?}", refreshed.payment_id, refreshed.status);
/// # Ok(())
/// # }
/// ```
pub struct HyperswitchClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
    pub(crate) config: ClientConfig,
}

impl HyperswitchClient {
    /// Create a client with default configuration.
    pub fn new(credentials: Credentials, env: Environment) -> Result<Self> {
        Self::with_config(credentials, env, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    ///
    /// [`ClientConfig::base_url`] takes precedence over `env`.
    pub fn with_config(credentials: Credentials, env: Environment, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = match &config.base_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => env.api_base_url().to_string(),
        };
        debug!(%env, base_url = %base_url, "created Hyperswitch client");

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                base_url,
                config,
            }),
        })
    }

    /// Create a client from `HYPERSWITCH_*` environment variables.
    ///
    /// Targets the sandbox unless `HYPERSWITCH_ENVIRONMENT=production` or a
    /// base URL is set.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let config = ClientConfig::from_env()?;
        let env = match std::env::var("HYPERSWITCH_ENVIRONMENT") {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ => Environment::Sandbox,
        };
        Self::with_config(credentials, env, config)
    }

    /// Get the payments service.
    pub fn payments(&self) -> PaymentsService {
        PaymentsService::new(self.inner.clone())
    }

    /// Get the refunds service.
    pub fn refunds(&self) -> RefundsService {
        RefundsService::new(self.inner.clone())
    }

    /// Get the payouts service.
    pub fn payouts(&self) -> PayoutsService {
        PayoutsService::new(self.inner.clone())
    }

    /// Get the mandates service.
    pub fn mandates(&self) -> MandatesService {
        MandatesService::new(self.inner.clone())
    }

    /// Get the customers service.
    pub fn customers(&self) -> CustomersService {
        CustomersService::new(self.inner.clone())
    }

    /// Get the poll service.
    pub fn poll(&self) -> PollService {
        PollService::new(self.inner.clone())
    }

    /// Get the relay service.
    pub fn relay(&self) -> RelayService {
        RelayService::new(self.inner.clone())
    }

    /// Get the routing service.
    pub fn routing(&self) -> RoutingService {
        RoutingService::new(self.inner.clone())
    }

    /// Get the events service.
    pub fn events(&self) -> EventsService {
        EventsService::new(self.inner.clone())
    }

    /// Call an endpoint this crate does not model.
    ///
    /// The status dispatch rules are the same as for typed calls, but a
    /// non-success status is returned as a [`Response`] with `parsed: None`
    /// instead of an error.
    ///
    /// ```no_run
    /// use hyperswitch_rs::Method;
    ///
    /// # async fn example(client: hyperswitch_rs::HyperswitchClient) -> hyperswitch_rs::Result<()> {
    /// let response = client
    ///     .request_detailed(Method::GET, "/account/payment_methods", None::<&()>)
    ///     .await?;
    /// println!("{} {}", response.status, response.text());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request_detailed<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response<Value>> {
        let mut builder = self.inner.request(method.clone(), path)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.inner.send_detailed(builder, &method, path).await
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

/// Join path segments into an absolute request path.
///
/// Each segment is percent-encoded, so an id containing `/`, `?` or `#`
/// stays a single segment.
pub(crate) fn encode_path(segments: &[&str]) -> Result<String> {
    let mut url = Url::parse("http://localhost/")?;
    url.path_segments_mut()
        .map_err(|_| Error::Config("URL cannot carry a path".to_string()))?
        .clear()
        .extend(segments);
    Ok(url.path().to_string())
}

impl ClientInner {
    /// Build request headers with authentication.
    pub(crate) fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = self.config.default_headers.clone();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        self.credentials.apply(&mut headers)?;

        if let Some(ref profile_id) = self.config.profile_id {
            headers.insert(
                PROFILE_ID_HEADER,
                HeaderValue::from_str(profile_id.as_str())
                    .map_err(|_| Error::InvalidInput("Invalid profile id".to_string()))?,
            );
        }
        if let Some(ref merchant_id) = self.config.merchant_id {
            headers.insert(
                MERCHANT_ID_HEADER,
                HeaderValue::from_str(merchant_id.as_str())
                    .map_err(|_| Error::InvalidInput("Invalid merchant id".to_string()))?,
            );
        }

        Ok(headers)
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        let headers = self.build_headers()?;
        Ok(self.http.request(method, url).headers(headers))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::GET, path)?;
        self.send_detailed(builder, &Method::GET, path)
            .await?
            .into_result()
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let builder = self.request(Method::GET, path)?.query(query);
        self.send_detailed(builder, &Method::GET, path)
            .await?
            .into_result()
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.request(Method::POST, path)?.json(body);
        self.send_detailed(builder, &Method::POST, path)
            .await?
            .into_result()
    }

    /// Make a PUT request.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.request(Method::PUT, path)?.json(body);
        self.send_detailed(builder, &Method::PUT, path)
            .await?
            .into_result()
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::DELETE, path)?;
        self.send_detailed(builder, &Method::DELETE, path)
            .await?
            .into_result()
    }

    /// Send a request and apply the status dispatch rules.
    ///
    /// 2xx bodies are decoded into `T`, an empty body as JSON `null`.
    /// Documented error statuses yield `parsed: None`. Other statuses fail
    /// with [`Error::UnexpectedStatus`] when configured to, and otherwise
    /// also yield `parsed: None`.
    pub(crate) async fn send_detailed<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &Method,
        path: &str,
    ) -> Result<Response<T>> {
        debug!(%method, path, "sending request");
        let response = builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let content = response.bytes().await?.to_vec();
        debug!(%method, path, status = status.as_u16(), bytes = content.len(), "received response");

        let parsed = if status.is_success() {
            let body: &[u8] = if content.iter().all(u8::is_ascii_whitespace) {
                b"null"
            } else {
                &content
            };
            Some(serde_json::from_slice(body)?)
        } else {
            if !is_documented_status(status) {
                warn!(%method, path, status = status.as_u16(), "unexpected response status");
                if self.config.raise_on_unexpected_status {
                    return Err(Error::UnexpectedStatus {
                        status: status.as_u16(),
                        content: String::from_utf8_lossy(&content).into_owned(),
                    });
                }
            }
            None
        };

        Ok(Response {
            status,
            headers,
            content,
            parsed,
        })
    }
}

impl Clone for HyperswitchClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for HyperswitchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperswitchClient")
            .field("base_url", &self.inner.base_url)
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: ClientConfig) -> HyperswitchClient {
        HyperswitchClient::with_config(Credentials::api_key("snd_test"), Environment::Sandbox, config)
            .unwrap()
    }

    #[test]
    fn test_encode_path_escapes_segments() {
        assert_eq!(encode_path(&["refunds", "ref_1"]).unwrap(), "/refunds/ref_1");
        assert_eq!(
            encode_path(&["customers", "cus/1?x#y", "mandates"]).unwrap(),
            "/customers/cus%2F1%3Fx%23y/mandates"
        );
    }

    #[test]
    fn test_base_url_selection() {
        let sandbox = client(ClientConfig::default());
        assert_eq!(sandbox.base_url(), "https://sandbox.hyperswitch.io");

        let local = client(
            ClientConfig::default().with_base_url(Url::parse("http://localhost:8080/").unwrap()),
        );
        assert_eq!(local.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_headers() {
        let client = client(
            ClientConfig::default()
                .with_profile_id("pro_1")
                .with_merchant_id("merchant_1"),
        );
        let headers = client.inner.build_headers().unwrap();
        assert_eq!(headers.get("api-key").unwrap(), "snd_test");
        assert_eq!(headers.get("x-profile-id").unwrap(), "pro_1");
        assert_eq!(headers.get("x-merchant-id").unwrap(), "merchant_1");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", client(ClientConfig::default()));
        assert!(debug.contains("HyperswitchClient"));
        assert!(!debug.contains("snd_test"));
    }
}

//! HTTP client and service layer for the Hyperswitch API.
//!
//! [`HyperswitchClient`] is the entry point. Every typed call goes through
//! the same status dispatch, see [`Response`].
//!
//! # Example
//!
//! ```no_run
//! use hyperswitch_rs::{ClientConfig, Credentials, Environment, HyperswitchClient};
//!
//! # async fn example() -> hyperswitch_rs::Result<()> {
//! let client = HyperswitchClient::with_config(
//!     Credentials::api_key("snd_..."),
//!     Environment::Sandbox,
//!     ClientConfig::default().with_profile_id("pro_abc"),
//! )?;
//!
//! let mandate = client.mandates().retrieve(&"man_123".into()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
mod response;

pub use config::{
    ClientConfig, BASE_URL_ENV, PROFILE_ID_ENV, RAISE_ON_UNEXPECTED_STATUS_ENV, TIMEOUT_SECS_ENV,
};
pub use http::HyperswitchClient;
pub use paginated::{Page, PaginatedStream, DEFAULT_PAGE_SIZE};
pub use response::{is_documented_status, Response, DOCUMENTED_ERROR_STATUSES};
pub(crate) use http::{encode_path, ClientInner};

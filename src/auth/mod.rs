//! Credentials for the Hyperswitch API.
//!
//! Server-side endpoints authenticate with a secret API key sent in the
//! `api-key` header. Dashboard endpoints (routing defaults, event listing)
//! take a JWT as a bearer token instead.
//!
//! ```no_run
//! use hyperswitch_rs::{Credentials, Environment, HyperswitchClient};
//!
//! # fn example() -> hyperswitch_rs::Result<()> {
//! let client = HyperswitchClient::new(
//!     Credentials::api_key("snd_c691ade6995743bd88c166ba509ff5da"),
//!     Environment::Sandbox,
//! )?;
//! # Ok(())
//! # }
//! ```

mod credentials;

pub use credentials::Credentials;

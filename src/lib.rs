//! # hyperswitch-rs
//!
//! An async Rust client for the [Hyperswitch](https://hyperswitch.io)
//! payments API.
//!
//! ## Features
//!
//! - **Payments**: create, confirm, capture, cancel, incremental authorization
//! - **Refunds and payouts**, with lazily paginated list streams
//! - **Mandates, customers, relay and poll**
//! - **Dashboard endpoints**: profile default routing and webhook events
//! - **Type Safety**: typed ids, [`MinorUnit`] amounts, serde unions for
//!   payment method data
//! - **Tools** (feature `tools`): a CSV splitter and a payment flow load test
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hyperswitch_rs::{Credentials, Environment, HyperswitchClient, MinorUnit};
//! use hyperswitch_rs::models::{Card, Currency, PaymentCreateRequestBuilder, PaymentMethodData};
//!
//! #[tokio::main]
//! async fn main() -> hyperswitch_rs::Result<()> {
//!     let client = HyperswitchClient::new(
//!         Credentials::api_key("snd_c691ade6995743bd88c166ba509ff5da"),
//!         Environment::Sandbox,
//!     )?;
//!
//!     let request = PaymentCreateRequestBuilder::new()
//!         .amount(MinorUnit::new(6540))
//!         .currency(Currency::USD)
//!         .confirm(true)
//!         .payment_method_data(PaymentMethodData::Card(Card::new(
//!             "4242424242424242", "10", "30", "123",
//!         )))
//!         .build()?;
//!
//!     let payment = client.payments().create(request).await?;
//!     println!("{} is {:?}", payment.payment_id, payment.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Status handling
//!
//! Successful responses decode into the endpoint's model. Error statuses the
//! API documents become [`Error::Api`], [`Error::Authentication`],
//! [`Error::NotFound`] or [`Error::RateLimited`]. Other statuses are reported
//! the same way unless
//! [`ClientConfig::with_raise_on_unexpected_status`] is set, in which case
//! they fail with [`Error::UnexpectedStatus`]. The client never retries.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
#[cfg(feature = "tools")]
pub mod tools;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{ClientConfig, HyperswitchClient, PaginatedStream, Response};
pub use error::{Error, Result};
pub use models::{
    CustomerId, Environment, EventId, MandateId, MerchantConnectorId, MerchantId, MinorUnit,
    PaymentId, PayoutId, PollId, ProfileId, RefundId, RelayId, Secret,
};
pub use reqwest::Method;

/// Prelude module for convenient imports.
///
/// ```rust
/// use hyperswitch_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Credentials;
    pub use crate::client::{ClientConfig, HyperswitchClient, Response};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        CustomerId, Environment, MandateId, MinorUnit, PaymentId, PayoutId, ProfileId, RefundId,
        // Enums
        CaptureMethod, Currency, IntentStatus, PayoutStatus, RefundStatus,
        // Payments
        Card, Payment, PaymentConfirmRequest, PaymentCreateRequestBuilder, PaymentMethodData,
        // Refunds and payouts
        Payout, PayoutCreateRequest, PayoutMethodData, Refund, RefundRequest,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_id_creation() {
        let id = PaymentId::new("pay_mbabizu24mvu3mela5njyhpit4");
        assert_eq!(id.as_str(), "pay_mbabizu24mvu3mela5njyhpit4");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://api.hyperswitch.io"
        );
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://sandbox.hyperswitch.io"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<HyperswitchClient>();
    }
}

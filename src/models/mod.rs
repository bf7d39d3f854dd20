//! Request and response models for the Hyperswitch API.
//!
//! - [`primitives`] - identifiers, [`MinorUnit`] amounts, [`Environment`]
//! - [`enums`] - currencies and status enums
//! - [`payment`], [`payment_method`] - payment intents and what pays for them
//! - [`refund`], [`payout`], [`mandate`], [`customer`]
//! - [`relay`] - relay and poll
//! - [`routing`], [`event`] - dashboard endpoints

pub mod primitives;
pub mod enums;
pub mod secret;
pub mod customer;
pub mod payment_method;
pub mod payment;
pub mod mandate;
pub mod refund;
pub mod payout;
pub mod relay;
pub mod routing;
pub mod event;

pub use primitives::*;
pub use enums::*;
pub use secret::Secret;
pub use customer::*;
pub use payment_method::*;
pub use payment::*;
pub use mandate::*;
pub use refund::*;
pub use payout::*;
pub use relay::*;
pub use routing::*;
pub use event::*;

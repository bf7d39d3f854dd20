//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! to prevent mixing up different types of IDs at compile time, plus the
//! [`MinorUnit`] amount type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::enums::Currency;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// A payment intent identifier (`pay_...`).
    ///
    /// # Example
    ///
    /// ```
    /// use hyperswitch_rs::PaymentId;
    ///
    /// let id = PaymentId::new("pay_mbabizu24mvu3mela5njyhpit4");
    /// assert_eq!(id.to_string(), "pay_mbabizu24mvu3mela5njyhpit4");
    /// ```
    PaymentId
);
string_id!(
    /// A refund identifier (`ref_...`).
    RefundId
);
string_id!(
    /// A payout identifier.
    PayoutId
);
string_id!(
    /// A mandate identifier (`man_...`).
    MandateId
);
string_id!(
    /// A customer identifier.
    CustomerId
);
string_id!(
    /// A business profile identifier (`pro_...`).
    ProfileId
);
string_id!(
    /// A merchant account identifier.
    MerchantId
);
string_id!(
    /// A merchant connector account identifier (`mca_...`).
    MerchantConnectorId
);
string_id!(
    /// A relay identifier (`relay_...`).
    RelayId
);
string_id!(
    /// A poll identifier.
    PollId
);
string_id!(
    /// An outgoing webhook event identifier (`evt_...`).
    EventId
);

/// An amount in the smallest unit of its currency (cents for USD).
///
/// Hyperswitch exchanges all amounts as integers in minor units. Use
/// [`MinorUnit::to_major`] and [`MinorUnit::from_major`] to convert to and
/// from a decimal amount for display.
///
/// # Example
///
/// ```
/// use hyperswitch_rs::MinorUnit;
/// use hyperswitch_rs::models::Currency;
/// use rust_decimal_macros::dec;
///
/// let amount = MinorUnit::new(6540);
/// assert_eq!(amount.to_major(Currency::USD), dec!(65.40));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create an amount from minor units.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw minor-unit value.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns `true` for a zero amount.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert to a major-unit decimal using the currency's exponent.
    pub fn to_major(self, currency: Currency) -> Decimal {
        Decimal::new(self.0, currency.exponent())
    }

    /// Convert a major-unit decimal into minor units.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the
    /// amount has more fractional digits than the currency allows or does
    /// not fit in an `i64`.
    pub fn from_major(amount: Decimal, currency: Currency) -> crate::Result<Self> {
        let factor = Decimal::from(10_i64.pow(currency.exponent()));
        let scaled = amount
            .checked_mul(factor)
            .ok_or_else(|| crate::Error::InvalidInput(format!("amount {amount} overflows")))?;

        if !scaled.fract().is_zero() {
            return Err(crate::Error::InvalidInput(format!(
                "amount {amount} has more than {} decimal places for {currency}",
                currency.exponent()
            )));
        }

        i64::try_from(scaled.trunc())
            .map(Self)
            .map_err(|_| crate::Error::InvalidInput(format!("amount {amount} overflows")))
    }
}

impl fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MinorUnit {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MinorUnit> for i64 {
    fn from(value: MinorUnit) -> Self {
        value.0
    }
}

/// Hosted Hyperswitch environments.
///
/// Self-hosted deployments and mock servers are reached by overriding the
/// base URL in [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live environment.
    #[default]
    Production,
    /// Sandbox environment with test connectors.
    Sandbox,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.hyperswitch.io",
            Environment::Sandbox => "https://sandbox.hyperswitch.io",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" | "live" => Ok(Environment::Production),
            "sandbox" | "test" => Ok(Environment::Sandbox),
            other => Err(crate::Error::Config(format!("unknown environment: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ids() {
        let id: PaymentId = "pay_123".into();
        assert_eq!(id.as_str(), "pay_123");
        assert_eq!(
            serde_json::to_string(&RefundId::new("ref_1")).unwrap(),
            "\"ref_1\""
        );
    }

    #[test]
    fn test_minor_unit_to_major() {
        assert_eq!(MinorUnit::new(6540).to_major(Currency::USD), dec!(65.40));
        assert_eq!(MinorUnit::new(6540).to_major(Currency::JPY), dec!(6540));
        assert_eq!(MinorUnit::new(6540).to_major(Currency::KWD), dec!(6.540));
    }

    #[test]
    fn test_minor_unit_from_major() {
        assert_eq!(
            MinorUnit::from_major(dec!(65.4), Currency::USD).unwrap(),
            MinorUnit::new(6540)
        );
        assert_eq!(
            MinorUnit::from_major(dec!(100), Currency::JPY).unwrap(),
            MinorUnit::new(100)
        );
        assert!(MinorUnit::from_major(dec!(1.005), Currency::USD).is_err());
        assert!(MinorUnit::from_major(dec!(1.5), Currency::JPY).is_err());
    }

    #[test]
    fn test_environment() {
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://sandbox.hyperswitch.io"
        );
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }
}

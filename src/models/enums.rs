//! Enumeration types for the Hyperswitch API.
//!
//! Status enums decode unknown server values into an `Unknown` variant so a
//! newer server never breaks an older client.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! currencies {
    ($($code:ident),+ $(,)?) => {
        /// ISO 4217 currency code.
        ///
        /// Codes missing from this list decode as [`Currency::Unknown`] and
        /// use two minor-unit digits.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Currency {
            $(
                #[allow(missing_docs)]
                $code,
            )+
            /// Currency not known to this client version
            #[serde(other, rename = "UNKNOWN")]
            Unknown,
        }

        impl Currency {
            /// The three-letter currency code.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Currency::$code => stringify!($code),)+
                    Currency::Unknown => "UNKNOWN",
                }
            }
        }

        impl std::str::FromStr for Currency {
            type Err = crate::Error;

            fn from_str(s: &str) -> crate::Result<Self> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($code) => Ok(Currency::$code),)+
                    other => Err(crate::Error::InvalidInput(format!("unknown currency: {other}"))),
                }
            }
        }
    };
}

currencies!(
    AED, ARS, AUD, BDT, BHD, BRL, CAD, CHF, CLP, CNY, COP, CZK, DKK, EGP, EUR, GBP, HKD, HUF,
    IDR, ILS, INR, ISK, JOD, JPY, KES, KRW, KWD, MAD, MXN, MYR, NGN, NOK, NZD, OMR, PAB, PEN,
    PHP, PKR, PLN, PYG, QAR, RON, RUB, SAR, SEK, SGD, THB, TND, TRY, TWD, UAH, UGX, USD, UYU,
    VND, XAF, XOF, ZAR,
);

impl Currency {
    /// Number of minor-unit digits (2 for USD, 0 for JPY, 3 for KWD).
    pub fn exponent(&self) -> u32 {
        match self {
            Currency::CLP
            | Currency::ISK
            | Currency::JPY
            | Currency::KRW
            | Currency::PYG
            | Currency::UGX
            | Currency::VND
            | Currency::XAF
            | Currency::XOF => 0,
            Currency::BHD | Currency::JOD | Currency::KWD | Currency::OMR | Currency::TND => 3,
            _ => 2,
        }
    }

    /// Returns `true` for currencies without a minor unit.
    pub fn is_zero_decimal(&self) -> bool {
        self.exponent() == 0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a payment intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    /// Payment completed successfully
    Succeeded,
    /// Payment failed
    Failed,
    /// Payment was cancelled
    Cancelled,
    /// Payment is being processed by the connector
    Processing,
    /// Customer must act (3DS, redirect)
    RequiresCustomerAction,
    /// Merchant must act (manual review)
    RequiresMerchantAction,
    /// A payment method has to be attached
    RequiresPaymentMethod,
    /// Waiting for confirm
    RequiresConfirmation,
    /// Authorized, waiting for capture
    RequiresCapture,
    /// Part of the authorized amount was captured
    PartiallyCaptured,
    /// Partially captured, remainder still capturable
    PartiallyCapturedAndCapturable,
    /// Status not known to this client version
    #[serde(other)]
    Unknown,
}

impl IntentStatus {
    /// Returns `true` if the payment will not change status anymore.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            IntentStatus::Succeeded
                | IntentStatus::Failed
                | IntentStatus::Cancelled
                | IntentStatus::PartiallyCaptured
        )
    }
}

/// Status of a single payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum AttemptStatus {
    Started,
    AuthenticationFailed,
    RouterDeclined,
    AuthenticationPending,
    AuthenticationSuccessful,
    Authorized,
    AuthorizationFailed,
    Charged,
    Authorizing,
    CodInitiated,
    Voided,
    VoidInitiated,
    CaptureInitiated,
    CaptureFailed,
    VoidFailed,
    AutoRefunded,
    PartialCharged,
    Unresolved,
    Pending,
    Failure,
    PaymentMethodAwaited,
    ConfirmationAwaited,
    DeviceDataCollectionPending,
    #[serde(other)]
    Unknown,
}

/// How the authorized amount is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    /// Capture immediately after authorization
    #[default]
    Automatic,
    /// Capture explicitly with a capture call
    Manual,
    /// Several partial manual captures
    ManualMultiple,
    /// Capture at a scheduled time
    Scheduled,
    /// Sequential automatic capture
    SequentialAutomatic,
}

/// Whether 3DS authentication is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationType {
    /// Request 3DS
    ThreeDs,
    /// Skip 3DS
    NoThreeDs,
}

/// Whether the payment method will be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FutureUsage {
    /// Merchant-initiated reuse (recurring, mandates)
    OffSession,
    /// Customer-present reuse
    OnSession,
}

/// High-level payment method category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PaymentMethod {
    Card,
    CardRedirect,
    PayLater,
    Wallet,
    BankRedirect,
    BankTransfer,
    Crypto,
    BankDebit,
    Reward,
    RealTimePayment,
    Upi,
    Voucher,
    GiftCard,
    OpenBanking,
    MobilePayment,
    #[serde(other)]
    Unknown,
}

/// Status of a refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    /// Refund completed
    Succeeded,
    /// Refund failed
    Failed,
    /// Refund in flight
    Pending,
    /// Refund under manual review
    Review,
    /// Status not known to this client version
    #[serde(other)]
    Unknown,
}

impl RefundStatus {
    /// Returns `true` if the refund will not change status anymore.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RefundStatus::Succeeded | RefundStatus::Failed)
    }
}

/// Whether a refund is processed immediately or batched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefundType {
    /// Refund batched by the connector
    #[default]
    Scheduled,
    /// Refund processed right away
    Instant,
}

/// Status of a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PayoutStatus {
    Success,
    Failed,
    Cancelled,
    Initiated,
    Expired,
    Reversed,
    Pending,
    Ineligible,
    RequiresCreation,
    RequiresConfirmation,
    RequiresPayoutMethodData,
    RequiresFulfillment,
    RequiresVendorAccountCreation,
    #[serde(other)]
    Unknown,
}

impl PayoutStatus {
    /// Returns `true` if the payout will not change status anymore.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PayoutStatus::Success
                | PayoutStatus::Failed
                | PayoutStatus::Cancelled
                | PayoutStatus::Expired
                | PayoutStatus::Reversed
                | PayoutStatus::Ineligible
        )
    }
}

/// Payout rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PayoutType {
    Card,
    Bank,
    Wallet,
}

/// Kind of entity receiving a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PayoutEntityType {
    Individual,
    Company,
    NonProfit,
    PublicSector,
    NaturalPerson,
    Business,
    Personal,
}

/// Status of a mandate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum MandateStatus {
    Active,
    Inactive,
    Pending,
    Revoked,
    #[serde(other)]
    Unknown,
}

/// Status reported by the poll endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PollStatus {
    Pending,
    Completed,
    NotFound,
    #[serde(other)]
    Unknown,
}

/// Status of a relay request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum RelayStatus {
    Created,
    Pending,
    Success,
    Processing,
    Failure,
    #[serde(other)]
    Unknown,
}

/// Kind of operation being relayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayType {
    /// Refund a payment that exists only at the connector
    Refund,
}

/// Resource family an outgoing event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum EventClass {
    Payments,
    Refunds,
    Disputes,
    Mandates,
    Payouts,
    Subscriptions,
    #[serde(other)]
    Unknown,
}

/// Outgoing webhook event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum EventType {
    PaymentSucceeded,
    PaymentFailed,
    PaymentProcessing,
    PaymentCancelled,
    PaymentAuthorized,
    PaymentCaptured,
    ActionRequired,
    RefundSucceeded,
    RefundFailed,
    DisputeOpened,
    DisputeExpired,
    DisputeAccepted,
    DisputeCancelled,
    DisputeChallenged,
    DisputeWon,
    DisputeLost,
    MandateActive,
    MandateRevoked,
    PayoutSuccess,
    PayoutFailed,
    PayoutInitiated,
    PayoutProcessing,
    PayoutCancelled,
    PayoutExpired,
    PayoutReversed,
    #[serde(other)]
    Unknown,
}

/// Why a webhook was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum WebhookDeliveryAttempt {
    InitialAttempt,
    AutomaticRetry,
    ManualRetry,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::USD.as_str(), "USD");
        assert_eq!(serde_json::to_string(&Currency::EUR).unwrap(), "\"EUR\"");
        assert_eq!("gbp".parse::<Currency>().unwrap(), Currency::GBP);
        assert!("XYZ".parse::<Currency>().is_err());
        assert!(Currency::JPY.is_zero_decimal());
        assert_eq!(Currency::BHD.exponent(), 3);
    }

    #[test]
    fn test_currency_unknown_fallback() {
        let currency: Currency = serde_json::from_str("\"LKR\"").unwrap();
        assert_eq!(currency, Currency::Unknown);
        assert_eq!(currency.exponent(), 2);
        assert_eq!(currency.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_status_unknown_fallback() {
        let status: IntentStatus = serde_json::from_str("\"requires_capture\"").unwrap();
        assert_eq!(status, IntentStatus::RequiresCapture);

        let status: IntentStatus = serde_json::from_str("\"conflicted\"").unwrap();
        assert_eq!(status, IntentStatus::Unknown);

        let status: PayoutStatus = serde_json::from_str("\"requires_fulfillment\"").unwrap();
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_terminal_states() {
        assert!(IntentStatus::Succeeded.is_terminal());
        assert!(!IntentStatus::RequiresCustomerAction.is_terminal());
        assert!(RefundStatus::Failed.is_terminal());
        assert!(!RefundStatus::Review.is_terminal());
        assert!(PayoutStatus::Reversed.is_terminal());
    }
}

//! Payment method data: cards, wallets, bank redirects and pay-later.
//!
//! Request-side unions are externally tagged by a snake_case key, exactly
//! as the server expects them (`{"card": {...}}`,
//! `{"wallet": {"google_pay": {...}}}`). Response-side unions are decoded
//! by trying each known shape in turn and falling back to
//! [`PaymentMethodDataResponse::Other`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::customer::Address;
use super::secret::Secret;

/// Payment method details sent with a create or confirm request.
///
/// # Example
///
/// ```
/// use hyperswitch_rs::models::{Card, PaymentMethodData, PaymentMethodDataRequest};
///
/// let data = PaymentMethodDataRequest::from(PaymentMethodData::Card(
///     Card::new("4242424242424242", "10", "30", "123").with_holder_name("Joseph Doe"),
/// ));
/// let json = serde_json::to_value(&data).unwrap();
/// assert_eq!(json["card"]["card_exp_year"], "30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDataRequest {
    /// The payment method itself
    #[serde(flatten)]
    pub payment_method_data: PaymentMethodData,
    /// Billing address tied to the payment method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
}

impl From<PaymentMethodData> for PaymentMethodDataRequest {
    fn from(payment_method_data: PaymentMethodData) -> Self {
        Self {
            payment_method_data,
            billing: None,
        }
    }
}

/// A payment method, tagged by its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodData {
    /// Raw card details
    Card(Card),
    /// Digital wallet
    Wallet(WalletData),
    /// Buy-now-pay-later provider
    PayLater(PayLaterData),
    /// Bank redirect scheme
    BankRedirect(BankRedirectData),
    /// Cryptocurrency payment
    Crypto(CryptoData),
    /// Card redirect flows (Knet, Benefit, ...)
    CardRedirect(Value),
    /// Bank debit (ACH, SEPA, BACS, BECS)
    BankDebit(Value),
    /// Bank transfer (ACH, SEPA, Pix, ...)
    BankTransfer(Value),
}

impl PaymentMethodData {
    /// The `payment_method` category this data belongs to.
    pub fn payment_method(&self) -> super::enums::PaymentMethod {
        use super::enums::PaymentMethod;
        match self {
            PaymentMethodData::Card(_) => PaymentMethod::Card,
            PaymentMethodData::Wallet(_) => PaymentMethod::Wallet,
            PaymentMethodData::PayLater(_) => PaymentMethod::PayLater,
            PaymentMethodData::BankRedirect(_) => PaymentMethod::BankRedirect,
            PaymentMethodData::Crypto(_) => PaymentMethod::Crypto,
            PaymentMethodData::CardRedirect(_) => PaymentMethod::CardRedirect,
            PaymentMethodData::BankDebit(_) => PaymentMethod::BankDebit,
            PaymentMethodData::BankTransfer(_) => PaymentMethod::BankTransfer,
        }
    }
}

/// Raw card details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Primary account number
    pub card_number: Secret,
    /// Two-digit expiry month
    pub card_exp_month: Secret,
    /// Expiry year, two or four digits
    pub card_exp_year: Secret,
    /// Card verification code
    pub card_cvc: Secret,
    /// Name printed on the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<Secret>,
    /// Preferred network for co-badged cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_network: Option<String>,
    /// Friendly name for a saved card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<Secret>,
}

impl Card {
    /// Create card details from number, expiry and CVC.
    pub fn new(
        number: impl Into<String>,
        exp_month: impl Into<String>,
        exp_year: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            card_number: Secret::new(number),
            card_exp_month: Secret::new(exp_month),
            card_exp_year: Secret::new(exp_year),
            card_cvc: Secret::new(cvc),
            card_holder_name: None,
            card_network: None,
            nick_name: None,
        }
    }

    /// Set the card holder name.
    pub fn with_holder_name(mut self, name: impl Into<String>) -> Self {
        self.card_holder_name = Some(Secret::new(name));
        self
    }

    /// The last four digits of the card number.
    pub fn last4(&self) -> &str {
        let number = self.card_number.expose();
        number.get(number.len().saturating_sub(4)..).unwrap_or(number)
    }
}

/// Empty payload for variants that carry no fields (`{"giropay": {}}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoData {}

/// Digital wallet payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletData {
    /// Apple Pay token from the device
    ApplePay(ApplePayWalletData),
    /// Google Pay token from the device
    GooglePay(GooglePayWalletData),
    /// Redirect to PayPal
    PaypalRedirect(PaypalRedirection),
    /// PayPal SDK token
    PaypalSdk(Value),
    /// Samsung Pay token
    SamsungPay(Value),
    /// Redirect to Alipay
    AliPayRedirect(NoData),
    /// WeChat Pay QR flow
    WeChatPayQr(NoData),
    /// Redirect to MobilePay
    MobilePayRedirect(NoData),
}

/// Apple Pay token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayWalletData {
    /// Encrypted payment data (base64)
    pub payment_data: Secret,
    /// Card descriptor from the device
    pub payment_method: ApplePayPaymentMethod,
    /// Device transaction identifier
    pub transaction_identifier: String,
}

/// Card descriptor inside an Apple Pay token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayPaymentMethod {
    /// e.g. "Visa 0326"
    pub display_name: String,
    /// Card network
    pub network: String,
    /// "debit" or "credit"
    #[serde(rename = "type")]
    pub pm_type: String,
}

/// Google Pay token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GooglePayWalletData {
    /// Token type, usually "CARD"
    #[serde(rename = "type")]
    pub pm_type: String,
    /// e.g. "Visa •••• 1111"
    pub description: String,
    /// Card network and last digits
    pub info: GooglePayPaymentMethodInfo,
    /// Opaque token
    pub tokenization_data: GooglePayTokenizationData,
}

/// Card info inside a Google Pay token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GooglePayPaymentMethodInfo {
    /// Card network
    pub card_network: String,
    /// Last four digits
    pub card_details: String,
}

/// Tokenization payload inside a Google Pay token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GooglePayTokenizationData {
    /// e.g. "PAYMENT_GATEWAY"
    #[serde(rename = "type")]
    pub token_type: String,
    /// The token itself
    pub token: Secret,
}

/// PayPal redirect payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaypalRedirection {
    /// Payer email, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Buy-now-pay-later payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayLaterData {
    /// Redirect to Klarna
    KlarnaRedirect {
        /// Billing email
        #[serde(default, skip_serializing_if = "Option::is_none")]
        billing_email: Option<String>,
        /// Billing country
        #[serde(default, skip_serializing_if = "Option::is_none")]
        billing_country: Option<String>,
    },
    /// Klarna SDK token
    KlarnaSdk {
        /// Token from the Klarna SDK
        token: String,
    },
    /// Redirect to Affirm
    AffirmRedirect(NoData),
    /// Redirect to Afterpay/Clearpay
    AfterpayClearpayRedirect {
        /// Billing email
        #[serde(default, skip_serializing_if = "Option::is_none")]
        billing_email: Option<String>,
        /// Billing name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        billing_name: Option<Secret>,
    },
}

/// Bank redirect payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankRedirectData {
    /// iDEAL (NL)
    Ideal {
        /// Issuing bank
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bank_name: Option<String>,
    },
    /// Sofort
    Sofort {
        /// Customer country
        #[serde(default, skip_serializing_if = "Option::is_none")]
        country: Option<String>,
        /// Page language
        #[serde(default, skip_serializing_if = "Option::is_none")]
        preferred_language: Option<String>,
    },
    /// EPS (AT)
    Eps {
        /// Issuing bank
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bank_name: Option<String>,
    },
    /// BLIK (PL)
    Blik {
        /// Six-digit code from the banking app
        blik_code: Option<String>,
    },
    /// Giropay (DE)
    Giropay(NoData),
    /// Trustly
    Trustly {
        /// Customer country
        country: String,
    },
}

/// Crypto payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoData {
    /// Currency the customer pays with (BTC, ETH, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_currency: Option<String>,
    /// Blockchain network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

/// Payment method details echoed back in a payment response.
///
/// Variants are tried in order; anything not matching a known shape is
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentMethodDataResponse {
    /// Masked card details
    Card {
        /// Card details
        card: CardResponse,
        /// Billing address
        #[serde(default, skip_serializing_if = "Option::is_none")]
        billing: Option<Address>,
    },
    /// Wallet details, keyed by wallet name
    Wallet {
        /// Wallet details
        wallet: Value,
        /// Billing address
        #[serde(default, skip_serializing_if = "Option::is_none")]
        billing: Option<Address>,
    },
    /// Bank redirect details
    BankRedirect {
        /// Bank redirect details
        bank_redirect: Value,
        /// Billing address
        #[serde(default, skip_serializing_if = "Option::is_none")]
        billing: Option<Address>,
    },
    /// Pay-later details
    PayLater {
        /// Pay-later details
        pay_later: Value,
        /// Billing address
        #[serde(default, skip_serializing_if = "Option::is_none")]
        billing: Option<Address>,
    },
    /// Any other shape
    Other(Value),
}

impl PaymentMethodDataResponse {
    /// Category name of the decoded variant.
    pub fn kind(&self) -> &str {
        match self {
            PaymentMethodDataResponse::Card { .. } => "card",
            PaymentMethodDataResponse::Wallet { .. } => "wallet",
            PaymentMethodDataResponse::BankRedirect { .. } => "bank_redirect",
            PaymentMethodDataResponse::PayLater { .. } => "pay_later",
            PaymentMethodDataResponse::Other(_) => "other",
        }
    }

    /// Masked card details, if this is a card.
    pub fn card(&self) -> Option<&CardResponse> {
        match self {
            PaymentMethodDataResponse::Card { card, .. } => Some(card),
            _ => None,
        }
    }
}

/// Masked card details returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResponse {
    /// Last four digits
    pub last4: Option<String>,
    /// "credit" / "debit"
    pub card_type: Option<String>,
    /// Card network
    pub card_network: Option<String>,
    /// Issuing bank
    pub card_issuer: Option<String>,
    /// Issuing country
    pub card_issuing_country: Option<String>,
    /// First six digits
    pub card_isin: Option<String>,
    /// First eight digits
    pub card_extended_bin: Option<String>,
    /// Expiry month
    pub card_exp_month: Option<String>,
    /// Expiry year
    pub card_exp_year: Option<String>,
    /// Name on the card
    pub card_holder_name: Option<Secret>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_request_shape() {
        let data = PaymentMethodDataRequest::from(PaymentMethodData::Card(Card::new(
            "4242424242424242",
            "10",
            "25",
            "123",
        )));
        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(value["card"]["card_number"], "4242424242424242");
        assert_eq!(value["card"]["card_cvc"], "123");
        assert!(value.get("billing").is_none());
        assert!(value["card"].get("card_holder_name").is_none());
    }

    #[test]
    fn test_nested_wallet_tag() {
        let data = PaymentMethodData::Wallet(WalletData::PaypalRedirect(PaypalRedirection {
            email: None,
        }));
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"wallet": {"paypal_redirect": {}}})
        );

        let decoded: PaymentMethodData =
            serde_json::from_value(json!({"wallet": {"ali_pay_redirect": {}}})).unwrap();
        assert_eq!(decoded, PaymentMethodData::Wallet(WalletData::AliPayRedirect(NoData {})));
        assert_eq!(decoded.payment_method(), crate::models::PaymentMethod::Wallet);
    }

    #[test]
    fn test_pay_later_struct_variant() {
        let data = PaymentMethodData::PayLater(PayLaterData::KlarnaRedirect {
            billing_email: Some("guest@example.com".into()),
            billing_country: Some("SE".into()),
        });
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["pay_later"]["klarna_redirect"]["billing_country"], "SE");
    }

    #[test]
    fn test_response_union_card() {
        let decoded: PaymentMethodDataResponse = serde_json::from_value(json!({
            "card": {
                "last4": "4242",
                "card_type": "CREDIT",
                "card_network": "Visa",
                "card_exp_month": "10",
                "card_exp_year": "25"
            },
            "billing": null
        }))
        .unwrap();

        assert_eq!(decoded.kind(), "card");
        assert_eq!(decoded.card().and_then(|c| c.last4.as_deref()), Some("4242"));
    }

    #[test]
    fn test_response_union_fallback() {
        let wallet: PaymentMethodDataResponse =
            serde_json::from_value(json!({"wallet": {"apple_pay": {"last4": "0326"}}})).unwrap();
        assert_eq!(wallet.kind(), "wallet");

        let other: PaymentMethodDataResponse =
            serde_json::from_value(json!({"reward": {}})).unwrap();
        assert_eq!(other.kind(), "other");
    }

    #[test]
    fn test_card_last4() {
        let card = Card::new("4000000000003063", "01", "30", "737");
        assert_eq!(card.last4(), "3063");
        assert!(!format!("{card:?}").contains("4000000000003063"));
    }
}

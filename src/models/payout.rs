//! Payout models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::customer::Address;
use super::enums::{Currency, PayoutEntityType, PayoutStatus, PayoutType};
use super::primitives::{CustomerId, MerchantId, MinorUnit, PayoutId, ProfileId};
use super::refund::TimeRange;
use super::secret::Secret;

/// Destination of a payout, tagged by rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethodData {
    /// Push to card
    Card(PayoutCard),
    /// Bank account
    Bank(PayoutBank),
    /// Wallet account
    Wallet(PayoutWallet),
}

impl PayoutMethodData {
    /// The payout rail for this destination.
    pub fn payout_type(&self) -> PayoutType {
        match self {
            PayoutMethodData::Card(_) => PayoutType::Card,
            PayoutMethodData::Bank(_) => PayoutType::Bank,
            PayoutMethodData::Wallet(_) => PayoutType::Wallet,
        }
    }
}

/// Card destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutCard {
    /// Card number
    pub card_number: Secret,
    /// Expiry month
    pub expiry_month: Secret,
    /// Expiry year
    pub expiry_year: Secret,
    /// Name on the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<Secret>,
}

/// Bank destination, tagged by scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayoutBank {
    /// US ACH
    Ach {
        /// Account number
        bank_account_number: Secret,
        /// ABA routing number
        bank_routing_number: Secret,
        /// Bank name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bank_name: Option<String>,
    },
    /// UK BACS
    Bacs {
        /// Account number
        bank_account_number: Secret,
        /// Sort code
        bank_sort_code: Secret,
        /// Bank name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bank_name: Option<String>,
    },
    /// SEPA
    Sepa {
        /// IBAN
        iban: Secret,
        /// BIC
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bic: Option<Secret>,
        /// Bank name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bank_name: Option<String>,
    },
    /// Any other scheme
    Other(Value),
}

/// Wallet destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutWallet {
    /// PayPal account
    Paypal {
        /// PayPal email
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        /// PayPal payer id
        #[serde(default, skip_serializing_if = "Option::is_none")]
        paypal_id: Option<Secret>,
    },
    /// Venmo account
    Venmo {
        /// Phone number
        telephone_number: Secret,
    },
}

/// Body of `POST /payouts/create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayoutCreateRequest {
    /// Amount in minor units
    pub amount: MinorUnit,
    /// Currency
    pub currency: Option<Currency>,
    /// Merchant-chosen payout id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<PayoutId>,
    /// Recipient customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Payout rail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_type: Option<PayoutType>,
    /// Destination details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_method_data: Option<PayoutMethodData>,
    /// Stored payout method token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_token: Option<String>,
    /// Confirm in the same call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    /// Fulfill right after confirm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_fulfill: Option<bool>,
    /// Recipient billing address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    /// Recipient entity type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<PayoutEntityType>,
    /// Store the destination for later payouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    /// Restrict routing to these connectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector: Option<Vec<String>>,
    /// Business profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
    /// Recipient email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Recipient name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Secret>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Return URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl PayoutCreateRequest {
    /// A payout of `amount` to the given destination.
    pub fn new(amount: MinorUnit, currency: Currency, method: PayoutMethodData) -> Self {
        Self {
            amount,
            currency: Some(currency),
            payout_type: Some(method.payout_type()),
            payout_method_data: Some(method),
            ..Default::default()
        }
    }
}

/// Body of `PUT /payouts/{id}` and `POST /payouts/{id}/confirm`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct PayoutUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<MinorUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<Secret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_type: Option<PayoutType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_method_data: Option<PayoutMethodData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_fulfill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// A payout as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    /// Payout identifier
    pub payout_id: PayoutId,
    /// Owning merchant
    #[serde(default)]
    pub merchant_id: Option<MerchantId>,
    /// Amount
    pub amount: MinorUnit,
    /// Currency
    pub currency: Currency,
    /// Current status
    pub status: PayoutStatus,
    /// Connector
    #[serde(default)]
    pub connector: Option<String>,
    /// Payout rail
    #[serde(default)]
    pub payout_type: Option<PayoutType>,
    /// Recipient billing address
    #[serde(default)]
    pub billing: Option<Address>,
    /// Auto-fulfill flag
    #[serde(default)]
    pub auto_fulfill: Option<bool>,
    /// Recipient customer
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// Client secret
    #[serde(default)]
    pub client_secret: Option<Secret>,
    /// Entity type
    #[serde(default)]
    pub entity_type: Option<PayoutEntityType>,
    /// Recurring flag
    #[serde(default)]
    pub recurring: Option<bool>,
    /// Connector error code
    #[serde(default)]
    pub error_code: Option<String>,
    /// Connector error message
    #[serde(default)]
    pub error_message: Option<String>,
    /// Business profile
    #[serde(default)]
    pub profile_id: Option<ProfileId>,
    /// Creation time
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Connector transaction id
    #[serde(default)]
    pub connector_transaction_id: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Metadata
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Body of `POST /payouts/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct PayoutListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<PayoutId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Vec<Currency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<PayoutStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<PayoutEntityType>,
}

/// Response of `POST /payouts/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutListResponse {
    /// Number of payouts in `data`
    pub size: usize,
    /// Payouts
    pub data: Vec<Payout>,
    /// Total number of matching payouts
    #[serde(default)]
    pub total_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payout_unlisted_currency_decodes() {
        let payout: Payout = serde_json::from_value(json!({
            "payout_id": "po_1",
            "amount": 1000,
            "currency": "LKR",
            "status": "success"
        }))
        .unwrap();
        assert_eq!(payout.currency, Currency::Unknown);
        assert_eq!(payout.amount, MinorUnit::new(1000));
    }

    #[test]
    fn test_payout_create_shape() {
        let request = PayoutCreateRequest::new(
            MinorUnit::new(1000),
            Currency::EUR,
            PayoutMethodData::Bank(PayoutBank::Sepa {
                iban: Secret::new("NL46TEST0136169112"),
                bic: Some(Secret::new("ABNANL2A")),
                bank_name: None,
            }),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["payout_type"], "bank");
        assert_eq!(value["payout_method_data"]["bank"]["iban"], "NL46TEST0136169112");
        assert!(value["payout_method_data"]["bank"].get("bank_name").is_none());
    }

    #[test]
    fn test_payout_bank_untagged_decode() {
        let ach: PayoutBank = serde_json::from_value(json!({
            "bank_account_number": "000123456789",
            "bank_routing_number": "110000000"
        }))
        .unwrap();
        assert!(matches!(ach, PayoutBank::Ach { .. }));

        let other: PayoutBank = serde_json::from_value(json!({"pix_key": "abc"})).unwrap();
        assert!(matches!(other, PayoutBank::Other(_)));
    }

    #[test]
    fn test_wallet_destination() {
        let method = PayoutMethodData::Wallet(PayoutWallet::Paypal {
            email: Some("payee@example.com".into()),
            paypal_id: None,
        });
        assert_eq!(method.payout_type(), PayoutType::Wallet);
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"wallet": {"paypal": {"email": "payee@example.com"}}})
        );
    }
}

//! Mandate models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{Currency, MandateStatus, PaymentMethod};
use super::primitives::{CustomerId, MandateId, MinorUnit};
use super::secret::Secret;

/// Mandate to set up alongside a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandateData {
    /// How the customer agreed to the mandate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_acceptance: Option<CustomerAcceptance>,
    /// Single or multi use
    pub mandate_type: MandateType,
}

/// Single-use or multi-use mandate with its amount limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MandateType {
    /// Can be charged once
    SingleUse(MandateAmountData),
    /// Can be charged repeatedly
    MultiUse(Option<MandateAmountData>),
}

/// Amount limits of a mandate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandateAmountData {
    /// Maximum amount per charge
    pub amount: MinorUnit,
    /// Currency
    pub currency: Currency,
    /// Valid from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Valid until
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Record of a customer agreeing to a mandate or to saving a payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAcceptance {
    /// Online or offline acceptance
    pub acceptance_type: AcceptanceType,
    /// Acceptance time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
    /// Browser details for online acceptance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<OnlineMandate>,
}

impl CustomerAcceptance {
    /// Online acceptance from the given IP and user agent.
    pub fn online(ip_address: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            acceptance_type: AcceptanceType::Online,
            accepted_at: Some(Utc::now()),
            online: Some(OnlineMandate {
                ip_address: Some(Secret::new(ip_address)),
                user_agent: user_agent.into(),
            }),
        }
    }

    /// Offline acceptance (signed paper form, phone call).
    pub fn offline() -> Self {
        Self {
            acceptance_type: AcceptanceType::Offline,
            accepted_at: Some(Utc::now()),
            online: None,
        }
    }
}

/// How the customer accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum AcceptanceType {
    Online,
    Offline,
}

/// Browser details of an online acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineMandate {
    /// Customer IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Secret>,
    /// Customer user agent
    pub user_agent: String,
}

/// A mandate as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mandate {
    /// Mandate identifier
    pub mandate_id: MandateId,
    /// Current status
    pub status: MandateStatus,
    /// Stored payment method
    pub payment_method_id: String,
    /// Payment method category
    pub payment_method: PaymentMethod,
    /// Payment method sub-type
    #[serde(default)]
    pub payment_method_type: Option<String>,
    /// Masked card, for card mandates
    #[serde(default)]
    pub card: Option<MandateCardDetails>,
    /// Acceptance record
    #[serde(default)]
    pub customer_acceptance: Option<CustomerAcceptance>,
}

/// Masked card stored with a mandate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct MandateCardDetails {
    #[serde(default)]
    pub last4_digits: Option<String>,
    #[serde(default)]
    pub card_exp_month: Option<Secret>,
    #[serde(default)]
    pub card_exp_year: Option<Secret>,
    #[serde(default)]
    pub card_holder_name: Option<Secret>,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub issuer_country: Option<String>,
    #[serde(default)]
    pub card_network: Option<String>,
}

/// Response of `POST /mandates/revoke/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MandateRevokedResponse {
    /// Mandate identifier
    pub mandate_id: MandateId,
    /// Status after revocation
    pub status: MandateStatus,
    /// Connector error code, if revocation failed there
    #[serde(default)]
    pub error_code: Option<String>,
    /// Connector error message
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Query parameters for `GET /mandates/list`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MandateListConstraints {
    /// Maximum number of mandates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Filter by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_status: Option<MandateStatus>,
    /// Filter by connector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<String>,
    /// Filter by customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Created before
    #[serde(rename = "created_time.lt", skip_serializing_if = "Option::is_none")]
    pub created_time_lt: Option<DateTime<Utc>>,
    /// Created after
    #[serde(rename = "created_time.gt", skip_serializing_if = "Option::is_none")]
    pub created_time_gt: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mandate_type_shape() {
        let data = MandateData {
            customer_acceptance: None,
            mandate_type: MandateType::SingleUse(MandateAmountData {
                amount: MinorUnit::new(8000),
                currency: Currency::USD,
                start_date: None,
                end_date: None,
            }),
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"mandate_type": {"single_use": {"amount": 8000, "currency": "USD"}}})
        );

        let multi: MandateType = serde_json::from_value(json!({"multi_use": null})).unwrap();
        assert_eq!(multi, MandateType::MultiUse(None));
    }

    #[test]
    fn test_online_acceptance() {
        let acceptance = CustomerAcceptance::online("127.0.0.1", "Mozilla/5.0");
        let value = serde_json::to_value(&acceptance).unwrap();
        assert_eq!(value["acceptance_type"], "online");
        assert_eq!(value["online"]["ip_address"], "127.0.0.1");
    }

    #[test]
    fn test_mandate_decode() {
        let mandate: Mandate = serde_json::from_value(json!({
            "mandate_id": "man_abc",
            "status": "active",
            "payment_method_id": "pm_abc",
            "payment_method": "card",
            "card": {"last4_digits": "4242", "card_exp_month": "10"}
        }))
        .unwrap();
        assert_eq!(mandate.status, MandateStatus::Active);
        assert_eq!(
            mandate.card.and_then(|c| c.last4_digits).as_deref(),
            Some("4242")
        );
    }
}

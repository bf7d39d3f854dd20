//! Relay and poll models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{Currency, PollStatus, RelayStatus, RelayType};
use super::primitives::{MerchantConnectorId, MinorUnit, PollId, ProfileId, RelayId};

/// Body of `POST /relay`.
///
/// ```
/// use hyperswitch_rs::models::{RelayRequest, Currency};
/// use hyperswitch_rs::MinorUnit;
///
/// let relay = RelayRequest::refund(
///     "7256228702616471803954",
///     "mca_5apGeP94tMts6rg3U3kR",
///     MinorUnit::new(6540),
///     Currency::USD,
/// );
/// let json = serde_json::to_value(&relay).unwrap();
/// assert_eq!(json["type"], "refund");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayRequest {
    /// Resource id at the connector
    pub connector_resource_id: String,
    /// Merchant connector account to relay through
    pub connector_id: MerchantConnectorId,
    /// Operation to relay
    #[serde(rename = "type")]
    pub relay_type: RelayType,
    /// Operation payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RelayData>,
}

impl RelayRequest {
    /// Relay a refund of `amount` for a payment that lives at the connector.
    pub fn refund(
        connector_resource_id: impl Into<String>,
        connector_id: impl Into<MerchantConnectorId>,
        amount: MinorUnit,
        currency: Currency,
    ) -> Self {
        Self {
            connector_resource_id: connector_resource_id.into(),
            connector_id: connector_id.into(),
            relay_type: RelayType::Refund,
            data: Some(RelayData::Refund(RelayRefundData {
                amount,
                currency,
                reason: None,
            })),
        }
    }
}

/// Payload of a relay request.
///
/// The wire format carries no tag; the variant follows from the request's
/// `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayData {
    /// Refund payload
    Refund(RelayRefundData),
    /// Payload this client does not model
    Other(Value),
}

/// Refund payload of a relay request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRefundData {
    /// Amount to refund
    pub amount: MinorUnit,
    /// Currency
    pub currency: Currency,
    /// Refund reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A relay as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relay {
    /// Relay identifier
    pub id: RelayId,
    /// Current status
    pub status: RelayStatus,
    /// Reference id returned by the connector
    #[serde(default)]
    pub connector_reference_id: Option<String>,
    /// Failure details
    #[serde(default)]
    pub error: Option<RelayError>,
    /// Resource id at the connector
    pub connector_resource_id: String,
    /// Merchant connector account
    pub connector_id: MerchantConnectorId,
    /// Business profile
    pub profile_id: ProfileId,
    /// Operation
    #[serde(rename = "type")]
    pub relay_type: RelayType,
    /// Operation payload
    #[serde(default)]
    pub data: Option<RelayData>,
}

/// Failure details of a relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayError {
    /// Error code
    pub code: String,
    /// Error message
    pub message: String,
}

/// Response of `GET /poll/status/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResponse {
    /// Poll identifier
    pub poll_id: PollId,
    /// Current status
    pub status: PollStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relay_decode() {
        let relay: Relay = serde_json::from_value(json!({
            "id": "relay_mbabizu24mvu3mela5njyhpit4",
            "status": "failure",
            "connector_reference_id": null,
            "error": {"code": "E01", "message": "charge not found"},
            "connector_resource_id": "7256228702616471803954",
            "connector_id": "mca_5apGeP94tMts6rg3U3kR",
            "profile_id": "pro_abc",
            "type": "refund",
            "data": {"amount": 6540, "currency": "USD"}
        }))
        .unwrap();

        assert_eq!(relay.status, RelayStatus::Failure);
        assert_eq!(relay.error.map(|e| e.code).as_deref(), Some("E01"));
        assert!(matches!(relay.data, Some(RelayData::Refund(_))));
    }

    #[test]
    fn test_poll_decode() {
        let poll: PollResponse =
            serde_json::from_value(json!({"poll_id": "poll_1", "status": "completed"})).unwrap();
        assert_eq!(poll.status, PollStatus::Completed);
    }
}

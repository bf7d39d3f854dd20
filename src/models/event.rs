//! Outgoing webhook event models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{EventClass, EventType, WebhookDeliveryAttempt};
use super::primitives::{EventId, MerchantId, ProfileId};

/// Body of `POST /events/profile/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventListConstraints {
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Items to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Only events about this object (payment id, refund id...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    /// Business profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
    /// Created at or after
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    /// Created at or before
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    /// Only these classes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_classes: Option<Vec<EventClass>>,
    /// Only these types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<EventType>>,
    /// Only delivered or undelivered events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_delivered: Option<bool>,
}

/// Summary of an event in a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListItem {
    /// Event identifier
    pub event_id: EventId,
    /// Owning merchant
    pub merchant_id: MerchantId,
    /// Business profile
    pub profile_id: ProfileId,
    /// Id of the object the event is about
    pub object_id: String,
    /// Event type
    pub event_type: EventType,
    /// Event class
    pub event_class: EventClass,
    /// Whether the webhook was delivered
    #[serde(default)]
    pub is_delivery_successful: Option<bool>,
    /// First attempt of this delivery chain
    pub initial_attempt_id: String,
    /// Creation time
    pub created: DateTime<Utc>,
}

/// Response of `POST /events/profile/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalEventsResponse {
    /// Events on this page
    pub events: Vec<EventListItem>,
    /// Total number of matching events
    pub total_count: i64,
}

/// One delivery attempt of an event, including what was sent and received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRetrieveResponse {
    /// Summary fields
    #[serde(flatten)]
    pub event_information: EventListItem,
    /// Outgoing request
    pub request: OutgoingWebhookRequestContent,
    /// Response from the merchant endpoint
    pub response: OutgoingWebhookResponseContent,
    /// Why this attempt happened
    pub delivery_attempt: Option<WebhookDeliveryAttempt>,
}

/// Request sent to the merchant webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingWebhookRequestContent {
    /// Payload as a JSON string
    #[serde(rename = "body")]
    pub payload: String,
    /// Headers as name/value pairs
    #[serde(default)]
    pub headers: Vec<(String, String)>,
}

impl OutgoingWebhookRequestContent {
    /// Parse the payload as JSON.
    pub fn payload_json(&self) -> crate::Result<Value> {
        Ok(serde_json::from_str(&self.payload)?)
    }
}

/// Response received from the merchant webhook endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct OutgoingWebhookResponseContent {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub headers: Option<Vec<(String, String)>>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item() -> Value {
        json!({
            "event_id": "evt_1",
            "merchant_id": "merchant_1",
            "profile_id": "pro_1",
            "object_id": "pay_1",
            "event_type": "payment_succeeded",
            "event_class": "payments",
            "is_delivery_successful": false,
            "initial_attempt_id": "evt_1",
            "created": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn test_constraints_skip_unset() {
        let constraints = EventListConstraints {
            limit: Some(10),
            event_classes: Some(vec![EventClass::Payments]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&constraints).unwrap(),
            json!({"limit": 10, "event_classes": ["payments"]})
        );
    }

    #[test]
    fn test_attempt_decode() {
        let mut attempt = item();
        attempt["request"] = json!({"body": "{\"type\":\"payment_succeeded\"}", "headers": [["content-type", "application/json"]]});
        attempt["response"] = json!({"status_code": 500, "body": "oops"});
        attempt["delivery_attempt"] = json!("manual_retry");

        let attempt: EventRetrieveResponse = serde_json::from_value(attempt).unwrap();
        assert_eq!(attempt.event_information.event_type, EventType::PaymentSucceeded);
        assert_eq!(attempt.response.status_code, Some(500));
        assert_eq!(attempt.delivery_attempt, Some(WebhookDeliveryAttempt::ManualRetry));
        assert_eq!(attempt.request.payload_json().unwrap()["type"], "payment_succeeded");
    }
}

//! Refund models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{Currency, RefundStatus, RefundType};
use super::primitives::{MinorUnit, PaymentId, ProfileId, RefundId};

/// Body of `POST /refunds`.
///
/// ```
/// use hyperswitch_rs::models::RefundRequest;
/// use hyperswitch_rs::MinorUnit;
///
/// let refund = RefundRequest::new("pay_123")
///     .amount(MinorUnit::new(600))
///     .reason("Customer returned product");
/// assert_eq!(refund.payment_id.as_str(), "pay_123");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    /// Payment to refund
    pub payment_id: PaymentId,
    /// Merchant-chosen refund id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<RefundId>,
    /// Amount to refund; the full amount when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<MinorUnit>,
    /// Reason shown to the connector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Scheduled or instant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_type: Option<RefundType>,
    /// Arbitrary key/value metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl RefundRequest {
    /// Refund the full amount of a payment.
    pub fn new(payment_id: impl Into<PaymentId>) -> Self {
        Self {
            payment_id: payment_id.into(),
            refund_id: None,
            amount: None,
            reason: None,
            refund_type: None,
            metadata: None,
        }
    }

    /// Refund only part of the payment.
    pub fn amount(mut self, amount: MinorUnit) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the refund reason.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set the refund type.
    pub fn refund_type(mut self, refund_type: RefundType) -> Self {
        self.refund_type = Some(refund_type);
        self
    }
}

/// Body of `POST /refunds/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefundUpdateRequest {
    /// New reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// New metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// A refund as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    /// Refund identifier
    pub refund_id: RefundId,
    /// Refunded payment
    pub payment_id: PaymentId,
    /// Refunded amount
    pub amount: MinorUnit,
    /// Currency code
    pub currency: String,
    /// Current status
    pub status: RefundStatus,
    /// Reason
    #[serde(default)]
    pub reason: Option<String>,
    /// Metadata
    #[serde(default)]
    pub metadata: Option<Value>,
    /// Connector error code
    #[serde(default)]
    pub error_code: Option<String>,
    /// Connector error message
    #[serde(default)]
    pub error_message: Option<String>,
    /// Connector that processed the refund
    #[serde(default)]
    pub connector: Option<String>,
    /// Business profile
    #[serde(default)]
    pub profile_id: Option<ProfileId>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /refunds/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefundListRequest {
    /// Only refunds of this payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    /// Only this refund
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<RefundId>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Items to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Only these connectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector: Option<Vec<String>>,
    /// Only these currencies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Vec<Currency>>,
    /// Only these statuses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_status: Option<Vec<RefundStatus>>,
    /// Creation time window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

/// Inclusive creation time window used by list filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Window start
    pub start_time: DateTime<Utc>,
    /// Window end; open-ended when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Response of `POST /refunds/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundListResponse {
    /// Number of refunds in `data`
    pub count: usize,
    /// Total number of matching refunds
    pub total_count: i64,
    /// Refunds
    pub data: Vec<Refund>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refund_request_shape() {
        let request = RefundRequest::new("pay_1")
            .amount(MinorUnit::new(600))
            .refund_type(RefundType::Instant);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"payment_id": "pay_1", "amount": 600, "refund_type": "instant"})
        );
    }

    #[test]
    fn test_refund_list_decode() {
        let list: RefundListResponse = serde_json::from_value(json!({
            "count": 1,
            "total_count": 12,
            "data": [{
                "refund_id": "ref_1",
                "payment_id": "pay_1",
                "amount": 600,
                "currency": "USD",
                "status": "pending"
            }]
        }))
        .unwrap();
        assert_eq!(list.total_count, 12);
        assert_eq!(list.data[0].status, RefundStatus::Pending);
    }
}

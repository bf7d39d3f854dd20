//! Payment intent models: create, confirm, capture, cancel and responses.
//!
//! Use [`PaymentCreateRequestBuilder`] to construct a validated create
//! request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::customer::Address;
use super::enums::{
    AttemptStatus, AuthenticationType, CaptureMethod, Currency, FutureUsage, IntentStatus,
    PaymentMethod,
};
use super::mandate::{CustomerAcceptance, MandateData};
use super::payment_method::{PaymentMethodDataRequest, PaymentMethodDataResponse};
use super::primitives::{CustomerId, MandateId, MerchantId, MinorUnit, PaymentId, ProfileId};
use super::refund::Refund;
use super::secret::Secret;
use crate::{Error, Result};

/// Body of `POST /payments`.
///
/// # Example
///
/// ```
/// use hyperswitch_rs::models::{PaymentCreateRequestBuilder, Currency, CaptureMethod};
/// use hyperswitch_rs::MinorUnit;
///
/// let request = PaymentCreateRequestBuilder::new()
///     .amount(MinorUnit::new(6540))
///     .currency(Currency::USD)
///     .capture_method(CaptureMethod::Manual)
///     .customer_id("cus_123")
///     .build()
///     .unwrap();
/// assert_eq!(request.amount, MinorUnit::new(6540));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentCreateRequest {
    /// Amount in minor units
    pub amount: MinorUnit,
    /// Currency of the amount
    pub currency: Option<Currency>,
    /// Merchant-chosen payment id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    /// Confirm in the same call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    /// How the payment is captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,
    /// Amount to capture when the capture method is automatic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_to_capture: Option<MinorUnit>,
    /// Scheduled capture time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_on: Option<DateTime<Utc>>,
    /// Existing customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Customer email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Customer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Secret>,
    /// Description shown on dashboards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the customer lands after a redirect flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Reuse intent for the payment method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<FutureUsage>,
    /// Merchant-initiated payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_session: Option<bool>,
    /// 3DS preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationType>,
    /// Payment method category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// Payment method sub-type (credit, klarna, google_pay, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,
    /// Payment method details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodDataRequest>,
    /// Saved payment method token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    /// Billing address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    /// Shipping address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    /// Mandate to set up with this payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate_data: Option<MandateData>,
    /// Existing mandate to charge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<MandateId>,
    /// Customer acceptance for saving the payment method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_acceptance: Option<CustomerAcceptance>,
    /// Restrict routing to these connectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector: Option<Vec<String>>,
    /// Business profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
    /// Statement descriptor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_name: Option<String>,
    /// Statement descriptor suffix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_suffix: Option<String>,
    /// Browser details for 3DS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<Value>,
    /// Arbitrary key/value metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Builder for [`PaymentCreateRequest`] with validation.
#[derive(Debug, Default, Clone)]
pub struct PaymentCreateRequestBuilder {
    request: PaymentCreateRequest,
}

impl PaymentCreateRequestBuilder {
    /// Create a new payment builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the amount in minor units.
    pub fn amount(mut self, amount: MinorUnit) -> Self {
        self.request.amount = amount;
        self
    }

    /// Set the currency.
    pub fn currency(mut self, currency: Currency) -> Self {
        self.request.currency = Some(currency);
        self
    }

    /// Set a merchant-chosen payment id.
    pub fn payment_id(mut self, payment_id: impl Into<PaymentId>) -> Self {
        self.request.payment_id = Some(payment_id.into());
        self
    }

    /// Confirm the payment in the create call.
    pub fn confirm(mut self, confirm: bool) -> Self {
        self.request.confirm = Some(confirm);
        self
    }

    /// Set the capture method.
    pub fn capture_method(mut self, capture_method: CaptureMethod) -> Self {
        self.request.capture_method = Some(capture_method);
        self
    }

    /// Capture only part of the amount.
    pub fn amount_to_capture(mut self, amount: MinorUnit) -> Self {
        self.request.amount_to_capture = Some(amount);
        self
    }

    /// Attach an existing customer.
    pub fn customer_id(mut self, customer_id: impl Into<CustomerId>) -> Self {
        self.request.customer_id = Some(customer_id.into());
        self
    }

    /// Set the customer email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.request.email = Some(email.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    /// Set the return URL for redirect flows.
    pub fn return_url(mut self, url: impl Into<String>) -> Self {
        self.request.return_url = Some(url.into());
        self
    }

    /// Declare future reuse of the payment method.
    pub fn setup_future_usage(mut self, usage: FutureUsage) -> Self {
        self.request.setup_future_usage = Some(usage);
        self
    }

    /// Mark the payment as merchant-initiated.
    pub fn off_session(mut self, off_session: bool) -> Self {
        self.request.off_session = Some(off_session);
        self
    }

    /// Set the 3DS preference.
    pub fn authentication_type(mut self, authentication_type: AuthenticationType) -> Self {
        self.request.authentication_type = Some(authentication_type);
        self
    }

    /// Attach payment method details; also sets the `payment_method` category.
    pub fn payment_method_data(mut self, data: impl Into<PaymentMethodDataRequest>) -> Self {
        let data = data.into();
        self.request.payment_method = Some(data.payment_method_data.payment_method());
        self.request.payment_method_data = Some(data);
        self
    }

    /// Set the payment method sub-type.
    pub fn payment_method_type(mut self, pm_type: impl Into<String>) -> Self {
        self.request.payment_method_type = Some(pm_type.into());
        self
    }

    /// Pay with a saved payment method token.
    pub fn payment_token(mut self, token: impl Into<String>) -> Self {
        self.request.payment_token = Some(token.into());
        self
    }

    /// Set the billing address.
    pub fn billing(mut self, address: Address) -> Self {
        self.request.billing = Some(address);
        self
    }

    /// Set the shipping address.
    pub fn shipping(mut self, address: Address) -> Self {
        self.request.shipping = Some(address);
        self
    }

    /// Set up a mandate with this payment.
    pub fn mandate_data(mut self, mandate: MandateData) -> Self {
        self.request.mandate_data = Some(mandate);
        self
    }

    /// Charge an existing mandate.
    pub fn mandate_id(mut self, mandate_id: impl Into<MandateId>) -> Self {
        self.request.mandate_id = Some(mandate_id.into());
        self
    }

    /// Record the customer's acceptance.
    pub fn customer_acceptance(mut self, acceptance: CustomerAcceptance) -> Self {
        self.request.customer_acceptance = Some(acceptance);
        self
    }

    /// Restrict routing to the given connectors.
    pub fn connectors<I, S>(mut self, connectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.connector = Some(connectors.into_iter().map(Into::into).collect());
        self
    }

    /// Set the business profile.
    pub fn profile_id(mut self, profile_id: impl Into<ProfileId>) -> Self {
        self.request.profile_id = Some(profile_id.into());
        self
    }

    /// Set arbitrary metadata.
    pub fn metadata(mut self, metadata: Value) -> Self {
        self.request.metadata = Some(metadata);
        self
    }

    /// Build the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency is missing, the amount is negative,
    /// `amount_to_capture` exceeds the amount, or a zero amount is used
    /// outside an off-session mandate setup.
    pub fn build(self) -> Result<PaymentCreateRequest> {
        let request = self.request;

        if request.currency.is_none() {
            return Err(Error::InvalidInput("currency is required".to_string()));
        }

        if request.amount.get() < 0 {
            return Err(Error::InvalidInput(format!(
                "amount must not be negative, got {}",
                request.amount
            )));
        }

        if let Some(to_capture) = request.amount_to_capture {
            if to_capture > request.amount {
                return Err(Error::InvalidInput(format!(
                    "amount_to_capture {} exceeds amount {}",
                    to_capture, request.amount
                )));
            }
        }

        if request.amount.is_zero() && request.setup_future_usage != Some(FutureUsage::OffSession)
        {
            return Err(Error::InvalidInput(
                "zero amount is only allowed when setting up off_session usage".to_string(),
            ));
        }

        Ok(request)
    }
}

/// Body of `POST /payments/{id}` (partial update before confirm).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct PaymentUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<MinorUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Body of `POST /payments/{id}/confirm`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentConfirmRequest {
    /// Client secret, required with a publishable key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<Secret>,
    /// Payment method category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// Payment method sub-type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,
    /// Payment method details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodDataRequest>,
    /// Saved payment method token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    /// Return URL for redirect flows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Customer acceptance for saving the payment method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_acceptance: Option<CustomerAcceptance>,
    /// Browser details for 3DS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<Value>,
}

impl PaymentConfirmRequest {
    /// Confirm with the given payment method details.
    pub fn with_payment_method_data(data: impl Into<PaymentMethodDataRequest>) -> Self {
        let data = data.into();
        Self {
            payment_method: Some(data.payment_method_data.payment_method()),
            payment_method_data: Some(data),
            ..Default::default()
        }
    }

    /// Attach the payment's client secret.
    pub fn client_secret(mut self, secret: impl Into<Secret>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }
}

/// Body of `POST /payments/{id}/capture`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentCaptureRequest {
    /// Amount to capture; the full capturable amount when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_to_capture: Option<MinorUnit>,
    /// Refund what remains uncaptured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_uncaptured_amount: Option<bool>,
    /// Statement descriptor suffix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_suffix: Option<String>,
    /// Statement descriptor prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_prefix: Option<String>,
}

/// Body of `POST /payments/{id}/cancel`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentCancelRequest {
    /// Why the payment is cancelled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

/// Body of `POST /payments/{id}/incremental_authorization`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncrementalAuthorizationRequest {
    /// New total amount to authorize
    pub amount: MinorUnit,
    /// Why the amount changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Query parameters for `GET /payments/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentRetrieveQuery {
    /// Ask the connector for the latest status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_sync: Option<bool>,
    /// Client secret, required with a publishable key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// Include the attempts list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_attempts: Option<bool>,
}

/// Query parameters for `GET /payments/list`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentListConstraints {
    /// Only payments for this customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Cursor: payments created after this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<PaymentId>,
    /// Cursor: payments created before this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<PaymentId>,
    /// Page size (server default 10, maximum 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Created at exactly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Created before
    #[serde(rename = "created.lt", skip_serializing_if = "Option::is_none")]
    pub created_lt: Option<DateTime<Utc>>,
    /// Created after
    #[serde(rename = "created.gt", skip_serializing_if = "Option::is_none")]
    pub created_gt: Option<DateTime<Utc>>,
    /// Created at or before
    #[serde(rename = "created.lte", skip_serializing_if = "Option::is_none")]
    pub created_lte: Option<DateTime<Utc>>,
    /// Created at or after
    #[serde(rename = "created.gte", skip_serializing_if = "Option::is_none")]
    pub created_gte: Option<DateTime<Utc>>,
}

/// Next step the customer or SDK must take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NextAction {
    /// Redirect the customer
    RedirectToUrl {
        /// Where to send the customer
        redirect_to_url: String,
    },
    /// Show a QR code
    QrCodeInformation {
        /// Image data URL
        #[serde(default)]
        image_data_url: Option<String>,
        /// Expiry timestamp (ms)
        #[serde(default)]
        display_to_timestamp: Option<i64>,
    },
    /// Hand over to the connector SDK
    InvokeSdkClient {
        /// SDK-specific payload
        #[serde(default)]
        next_action_data: Value,
    },
    /// Poll a status endpoint
    WaitScreenInformation {
        /// Start of the waiting window (ms)
        #[serde(default)]
        display_from_timestamp: Option<i64>,
        /// End of the waiting window (ms)
        #[serde(default)]
        display_to_timestamp: Option<i64>,
    },
    /// Any other action kind
    #[serde(other)]
    Unknown,
}

/// Connector-side attempt of a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAttempt {
    /// Attempt identifier
    pub attempt_id: String,
    /// Attempt status
    pub status: AttemptStatus,
    /// Attempted amount
    pub amount: MinorUnit,
    /// Connector used
    #[serde(default)]
    pub connector: Option<String>,
    /// Error message from the connector
    #[serde(default)]
    pub error_message: Option<String>,
    /// Connector transaction id
    #[serde(default)]
    pub connector_transaction_id: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A payment intent as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Payment identifier
    pub payment_id: PaymentId,
    /// Owning merchant
    #[serde(default)]
    pub merchant_id: Option<MerchantId>,
    /// Current status
    pub status: IntentStatus,
    /// Total amount
    pub amount: MinorUnit,
    /// Amount including surcharge and tax
    #[serde(default)]
    pub net_amount: Option<MinorUnit>,
    /// Amount that can still be captured
    #[serde(default)]
    pub amount_capturable: Option<MinorUnit>,
    /// Amount received so far
    #[serde(default)]
    pub amount_received: Option<MinorUnit>,
    /// Currency code
    pub currency: String,
    /// Connector that processed the payment
    #[serde(default)]
    pub connector: Option<String>,
    /// Client secret for client-side confirm
    #[serde(default)]
    pub client_secret: Option<Secret>,
    /// Creation time
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Customer
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Refunds against this payment
    #[serde(default)]
    pub refunds: Option<Vec<Refund>>,
    /// Mandate created or used
    #[serde(default)]
    pub mandate_id: Option<MandateId>,
    /// Future usage
    #[serde(default)]
    pub setup_future_usage: Option<FutureUsage>,
    /// Merchant-initiated flag
    #[serde(default)]
    pub off_session: Option<bool>,
    /// Capture method
    #[serde(default)]
    pub capture_method: Option<CaptureMethod>,
    /// Payment method category
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// Payment method sub-type
    #[serde(default)]
    pub payment_method_type: Option<String>,
    /// Masked payment method details
    #[serde(default)]
    pub payment_method_data: Option<PaymentMethodDataResponse>,
    /// Saved payment method token
    #[serde(default)]
    pub payment_token: Option<String>,
    /// Billing address
    #[serde(default)]
    pub billing: Option<Address>,
    /// Shipping address
    #[serde(default)]
    pub shipping: Option<Address>,
    /// Customer email
    #[serde(default)]
    pub email: Option<String>,
    /// Return URL
    #[serde(default)]
    pub return_url: Option<String>,
    /// 3DS preference
    #[serde(default)]
    pub authentication_type: Option<AuthenticationType>,
    /// Next step for the customer, if any
    #[serde(default)]
    pub next_action: Option<NextAction>,
    /// Cancellation reason
    #[serde(default)]
    pub cancellation_reason: Option<String>,
    /// Error code from the connector
    #[serde(default)]
    pub error_code: Option<String>,
    /// Error message from the connector
    #[serde(default)]
    pub error_message: Option<String>,
    /// Business profile
    #[serde(default)]
    pub profile_id: Option<ProfileId>,
    /// Attempts, when `expand_attempts` was set
    #[serde(default)]
    pub attempts: Option<Vec<PaymentAttempt>>,
    /// Connector transaction id
    #[serde(default)]
    pub connector_transaction_id: Option<String>,
    /// Metadata
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl Payment {
    /// The redirect URL, if the next action is a redirect.
    pub fn redirect_url(&self) -> Option<&str> {
        match &self.next_action {
            Some(NextAction::RedirectToUrl { redirect_to_url }) => Some(redirect_to_url),
            _ => None,
        }
    }
}

/// Response of `GET /payments/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentListResponse {
    /// Number of payments in `data`
    pub size: usize,
    /// Payments
    pub data: Vec<Payment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, PaymentMethodData};
    use serde_json::json;

    fn card() -> PaymentMethodData {
        PaymentMethodData::Card(Card::new("4242424242424242", "10", "25", "123"))
    }

    #[test]
    fn test_builder_valid() {
        let request = PaymentCreateRequestBuilder::new()
            .amount(MinorUnit::new(6540))
            .currency(Currency::USD)
            .confirm(true)
            .payment_method_data(card())
            .build()
            .unwrap();

        assert_eq!(request.payment_method, Some(PaymentMethod::Card));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], 6540);
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["payment_method"], "card");
        assert_eq!(value["payment_method_data"]["card"]["card_exp_month"], "10");
        assert!(value.get("customer_id").is_none());
    }

    #[test]
    fn test_builder_missing_currency() {
        let result = PaymentCreateRequestBuilder::new()
            .amount(MinorUnit::new(100))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_amount_rules() {
        assert!(PaymentCreateRequestBuilder::new()
            .amount(MinorUnit::new(-1))
            .currency(Currency::USD)
            .build()
            .is_err());

        assert!(PaymentCreateRequestBuilder::new()
            .amount(MinorUnit::new(100))
            .amount_to_capture(MinorUnit::new(101))
            .currency(Currency::USD)
            .build()
            .is_err());

        assert!(PaymentCreateRequestBuilder::new()
            .amount(MinorUnit::ZERO)
            .currency(Currency::USD)
            .build()
            .is_err());

        assert!(PaymentCreateRequestBuilder::new()
            .amount(MinorUnit::ZERO)
            .currency(Currency::USD)
            .setup_future_usage(FutureUsage::OffSession)
            .build()
            .is_ok());
    }

    #[test]
    fn test_payment_decode_with_next_action() {
        let payment: Payment = serde_json::from_value(json!({
            "payment_id": "pay_mbabizu24mvu3mela5njyhpit4",
            "merchant_id": "merchant_1668273825",
            "status": "requires_customer_action",
            "amount": 6540,
            "currency": "USD",
            "client_secret": "pay_mbabizu24mvu3mela5njyhpit4_secret_abc",
            "created": "2022-09-10T10:11:12Z",
            "next_action": {
                "type": "redirect_to_url",
                "redirect_to_url": "https://sandbox.hyperswitch.io/payments/redirect/pay_1"
            },
            "payment_method_data": {"card": {"last4": "4242"}, "billing": null}
        }))
        .unwrap();

        assert_eq!(payment.status, IntentStatus::RequiresCustomerAction);
        assert_eq!(
            payment.redirect_url(),
            Some("https://sandbox.hyperswitch.io/payments/redirect/pay_1")
        );
        assert_eq!(payment.amount, MinorUnit::new(6540));
    }

    #[test]
    fn test_unknown_next_action() {
        let action: NextAction =
            serde_json::from_value(json!({"type": "trigger_api", "foo": 1})).unwrap();
        assert_eq!(action, NextAction::Unknown);
    }

    #[test]
    fn test_list_constraints_query_names() {
        let query = PaymentListConstraints {
            limit: Some(5),
            created_gte: Some("2024-01-01T00:00:00Z".parse().unwrap()),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["limit"], 5);
        assert!(value.get("created.gte").is_some());
    }
}

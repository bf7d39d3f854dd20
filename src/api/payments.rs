//! Payments service for the payment intent lifecycle.

use std::sync::Arc;

use crate::client::{encode_path, ClientInner};
use crate::models::{
    IncrementalAuthorizationRequest, Payment, PaymentCancelRequest, PaymentCaptureRequest,
    PaymentConfirmRequest, PaymentCreateRequest, PaymentId, PaymentListConstraints,
    PaymentListResponse, PaymentRetrieveQuery, PaymentUpdateRequest,
};
use crate::Result;

/// Service for payment operations.
///
/// # Example
///
/// ```no_run
/// use hyperswitch_rs::MinorUnit;
/// use hyperswitch_rs::models::{
///     Card, CaptureMethod, Currency, PaymentCaptureRequest, PaymentConfirmRequest,
///     PaymentCreateRequestBuilder, PaymentMethodData,
/// };
///
/// # async fn example(client: hyperswitch_rs::HyperswitchClient) -> hyperswitch_rs::Result<()> {
/// let request = PaymentCreateRequestBuilder::new()
///     .amount(MinorUnit::new(6540))
///     .currency(Currency::USD)
///     .capture_method(CaptureMethod::Manual)
///     .build()?;
/// let payment = client.payments().create(request).await?;
///
/// let card = Card::new("4242424242424242", "10", "30", "123");
/// let confirm = PaymentConfirmRequest::with_payment_method_data(PaymentMethodData::Card(card));
/// client.payments().confirm(&payment.payment_id, confirm).await?;
///
/// let captured = client
///     .payments()
///     .capture(&payment.payment_id, PaymentCaptureRequest::default())
///     .await?;
/// println!("{:?}", captured.status);
/// # Ok(())
/// # }
/// ```
pub struct PaymentsService {
    inner: Arc<ClientInner>,
}

impl PaymentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a payment intent.
    ///
    /// With `confirm: true` the payment is also authorized in the same call.
    pub async fn create(&self, request: PaymentCreateRequest) -> Result<Payment> {
        self.inner.post("/payments", &request).await
    }

    /// Retrieve a payment.
    ///
    /// Pass `force_sync` in the query to have the server ask the connector
    /// for the latest status first.
    pub async fn retrieve(
        &self,
        payment_id: &PaymentId,
        query: Option<PaymentRetrieveQuery>,
    ) -> Result<Payment> {
        let path = encode_path(&["payments", payment_id.as_str()])?;
        match query {
            Some(q) => self.inner.get_with_query(&path, &q).await,
            None => self.inner.get(&path).await,
        }
    }

    /// Update a payment that has not been confirmed yet.
    pub async fn update(
        &self,
        payment_id: &PaymentId,
        request: PaymentUpdateRequest,
    ) -> Result<Payment> {
        self.inner
            .post(&encode_path(&["payments", payment_id.as_str()])?, &request)
            .await
    }

    /// Confirm a payment, authorizing it with the connector.
    pub async fn confirm(
        &self,
        payment_id: &PaymentId,
        request: PaymentConfirmRequest,
    ) -> Result<Payment> {
        self.inner
            .post(&encode_path(&["payments", payment_id.as_str(), "confirm"])?, &request)
            .await
    }

    /// Capture an authorized payment, fully or partially.
    pub async fn capture(
        &self,
        payment_id: &PaymentId,
        request: PaymentCaptureRequest,
    ) -> Result<Payment> {
        self.inner
            .post(&encode_path(&["payments", payment_id.as_str(), "capture"])?, &request)
            .await
    }

    /// Cancel a payment that has not been captured.
    pub async fn cancel(
        &self,
        payment_id: &PaymentId,
        request: PaymentCancelRequest,
    ) -> Result<Payment> {
        self.inner
            .post(&encode_path(&["payments", payment_id.as_str(), "cancel"])?, &request)
            .await
    }

    /// Raise the authorized amount of a payment awaiting capture.
    pub async fn incremental_authorization(
        &self,
        payment_id: &PaymentId,
        request: IncrementalAuthorizationRequest,
    ) -> Result<Payment> {
        self.inner
            .post(
                &encode_path(&["payments", payment_id.as_str(), "incremental_authorization"])?,
                &request,
            )
            .await
    }

    /// List payments, newest first.
    pub async fn list(&self, constraints: PaymentListConstraints) -> Result<PaymentListResponse> {
        self.inner
            .get_with_query("/payments/list", &constraints)
            .await
    }
}

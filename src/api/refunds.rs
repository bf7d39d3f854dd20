//! Refunds service.

use std::sync::Arc;

use crate::client::paginated::PaginatedStream;
use crate::client::{encode_path, ClientInner};
use crate::models::{
    Refund, RefundId, RefundListRequest, RefundListResponse, RefundRequest, RefundUpdateRequest,
};
use crate::Result;

/// Service for refund operations.
///
/// # Example
///
/// ```no_run
/// use hyperswitch_rs::MinorUnit;
/// use hyperswitch_rs::models::RefundRequest;
///
/// # async fn example(client: hyperswitch_rs::HyperswitchClient) -> hyperswitch_rs::Result<()> {
/// let refund = client
///     .refunds()
///     .create(RefundRequest::new("pay_123").amount(MinorUnit::new(600)))
///     .await?;
/// println!("{} is {:?}", refund.refund_id, refund.status);
/// # Ok(())
/// # }
/// ```
pub struct RefundsService {
    inner: Arc<ClientInner>,
}

impl RefundsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Refund a succeeded payment, fully or partially.
    pub async fn create(&self, request: RefundRequest) -> Result<Refund> {
        self.inner.post("/refunds", &request).await
    }

    /// Retrieve a refund.
    pub async fn retrieve(&self, refund_id: &RefundId) -> Result<Refund> {
        self.inner.get(&encode_path(&["refunds", refund_id.as_str()])?).await
    }

    /// Update the reason or metadata of a refund.
    pub async fn update(&self, refund_id: &RefundId, request: RefundUpdateRequest) -> Result<Refund> {
        self.inner
            .post(&encode_path(&["refunds", refund_id.as_str()])?, &request)
            .await
    }

    /// List one page of refunds.
    pub async fn list(&self, request: RefundListRequest) -> Result<RefundListResponse> {
        self.inner.post("/refunds/list", &request).await
    }

    /// Stream every refund matching the filters, page by page.
    ///
    /// `limit` sets the page size and `offset` the starting point.
    pub fn list_stream(&self, request: RefundListRequest) -> PaginatedStream<Refund> {
        PaginatedStream::post::<_, RefundListResponse>(self.inner.clone(), "/refunds/list", request)
    }
}

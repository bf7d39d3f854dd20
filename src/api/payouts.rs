//! Payouts service.

use std::sync::Arc;

use crate::client::paginated::PaginatedStream;
use crate::client::{encode_path, ClientInner};
use crate::models::{
    Payout, PayoutCreateRequest, PayoutId, PayoutListRequest, PayoutListResponse,
    PayoutUpdateRequest,
};
use crate::Result;

/// Service for payout operations.
///
/// A payout is created, confirmed and then fulfilled. With `confirm` and
/// `auto_fulfill` set on create, the server runs all three steps at once.
///
/// # Example
///
/// ```no_run
/// use hyperswitch_rs::MinorUnit;
/// use hyperswitch_rs::models::{Currency, PayoutCard, PayoutCreateRequest, PayoutMethodData};
///
/// # async fn example(client: hyperswitch_rs::HyperswitchClient) -> hyperswitch_rs::Result<()> {
/// let card = PayoutCard {
///     card_number: "4111111111111111".into(),
///     expiry_month: "3".into(),
///     expiry_year: "2030".into(),
///     card_holder_name: None,
/// };
/// let mut request =
///     PayoutCreateRequest::new(MinorUnit::new(1000), Currency::USD, PayoutMethodData::Card(card));
/// request.confirm = Some(true);
///
/// let payout = client.payouts().create(request).await?;
/// let payout = client.payouts().fulfill(&payout.payout_id).await?;
/// println!("{:?}", payout.status);
/// # Ok(())
/// # }
/// ```
pub struct PayoutsService {
    inner: Arc<ClientInner>,
}

impl PayoutsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a payout.
    pub async fn create(&self, request: PayoutCreateRequest) -> Result<Payout> {
        self.inner.post("/payouts/create", &request).await
    }

    /// Retrieve a payout.
    pub async fn retrieve(&self, payout_id: &PayoutId) -> Result<Payout> {
        self.inner.get(&encode_path(&["payouts", payout_id.as_str()])?).await
    }

    /// Update a payout that has not been confirmed.
    pub async fn update(&self, payout_id: &PayoutId, request: PayoutUpdateRequest) -> Result<Payout> {
        self.inner
            .put(&encode_path(&["payouts", payout_id.as_str()])?, &request)
            .await
    }

    /// Confirm a payout.
    pub async fn confirm(&self, payout_id: &PayoutId, request: PayoutUpdateRequest) -> Result<Payout> {
        self.inner
            .post(&encode_path(&["payouts", payout_id.as_str(), "confirm"])?, &request)
            .await
    }

    /// Cancel a payout that has not been fulfilled.
    pub async fn cancel(&self, payout_id: &PayoutId) -> Result<Payout> {
        self.inner
            .post(&encode_path(&["payouts", payout_id.as_str(), "cancel"])?, &PayoutAction::new(payout_id))
            .await
    }

    /// Send a confirmed payout to the connector.
    pub async fn fulfill(&self, payout_id: &PayoutId) -> Result<Payout> {
        self.inner
            .post(&encode_path(&["payouts", payout_id.as_str(), "fulfill"])?, &PayoutAction::new(payout_id))
            .await
    }

    /// List one page of payouts.
    pub async fn list(&self, request: PayoutListRequest) -> Result<PayoutListResponse> {
        self.inner.post("/payouts/list", &request).await
    }

    /// Stream every payout matching the filters.
    pub fn list_stream(&self, request: PayoutListRequest) -> PaginatedStream<Payout> {
        PaginatedStream::post::<_, PayoutListResponse>(self.inner.clone(), "/payouts/list", request)
    }
}

#[derive(serde::Serialize)]
struct PayoutAction<'a> {
    payout_id: &'a PayoutId,
}

impl<'a> PayoutAction<'a> {
    fn new(payout_id: &'a PayoutId) -> Self {
        Self { payout_id }
    }
}

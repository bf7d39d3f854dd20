//! Events service for outgoing webhook deliveries.

use std::sync::Arc;

use crate::client::paginated::PaginatedStream;
use crate::client::{encode_path, ClientInner};
use crate::models::{
    EventId, EventListConstraints, EventListItem, EventRetrieveResponse, MerchantId,
    TotalEventsResponse,
};
use crate::Result;

/// Service for outgoing webhook events.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use hyperswitch_rs::models::EventListConstraints;
///
/// # async fn example(client: hyperswitch_rs::HyperswitchClient) -> hyperswitch_rs::Result<()> {
/// let undelivered = EventListConstraints {
///     is_delivered: Some(false),
///     ..Default::default()
/// };
/// let mut events = client.events().list_stream(undelivered);
/// while let Some(event) = events.next().await {
///     let event = event?;
///     client.events().retry_delivery(&event.merchant_id, &event.event_id).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct EventsService {
    inner: Arc<ClientInner>,
}

impl EventsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List one page of events of the authenticated profile.
    pub async fn list_for_profile(&self, constraints: EventListConstraints) -> Result<TotalEventsResponse> {
        self.inner.post("/events/profile/list", &constraints).await
    }

    /// Stream every event matching the constraints.
    pub fn list_stream(&self, constraints: EventListConstraints) -> PaginatedStream<EventListItem> {
        PaginatedStream::post::<_, TotalEventsResponse>(
            self.inner.clone(),
            "/events/profile/list",
            constraints,
        )
    }

    /// All delivery attempts of an event.
    pub async fn delivery_attempts(
        &self,
        merchant_id: &MerchantId,
        event_id: &EventId,
    ) -> Result<Vec<EventRetrieveResponse>> {
        self.inner
            .get(&encode_path(&["events", merchant_id.as_str(), event_id.as_str(), "attempts"])?)
            .await
    }

    /// Deliver an event again.
    pub async fn retry_delivery(
        &self,
        merchant_id: &MerchantId,
        event_id: &EventId,
    ) -> Result<EventRetrieveResponse> {
        self.inner
            .post(
                &encode_path(&["events", merchant_id.as_str(), event_id.as_str(), "retry"])?,
                &serde_json::json!({}),
            )
            .await
    }
}

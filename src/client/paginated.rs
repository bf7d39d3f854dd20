//! Paginated stream for lazy iteration over offset/limit list endpoints.
//!
//! The refund, payout and event list endpoints take `limit` and `offset` in
//! their JSON body and report a `total_count`. [`PaginatedStream`] walks
//! those pages and yields individual items.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::{de::DeserializeOwned, Serialize};

use super::ClientInner;
use crate::models::{
    EventListConstraints, EventListItem, Payout, PayoutListRequest, PayoutListResponse, Refund,
    RefundListRequest, RefundListResponse, TotalEventsResponse,
};
use crate::Result;

/// Default number of items per page when the request sets no limit.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One page of a list endpoint.
#[derive(Debug)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total number of matching items, when the endpoint reports it.
    pub total_count: Option<i64>,
}

impl From<RefundListResponse> for Page<Refund> {
    fn from(response: RefundListResponse) -> Self {
        Page {
            items: response.data,
            total_count: Some(response.total_count),
        }
    }
}

impl From<PayoutListResponse> for Page<Payout> {
    fn from(response: PayoutListResponse) -> Self {
        Page {
            items: response.data,
            total_count: response.total_count,
        }
    }
}

impl From<TotalEventsResponse> for Page<EventListItem> {
    fn from(response: TotalEventsResponse) -> Self {
        Page {
            items: response.events,
            total_count: Some(response.total_count),
        }
    }
}

/// A list request body carrying `limit` and `offset`.
pub(crate) trait OffsetPaged: Serialize + Clone + Send + Sync + 'static {
    fn limit(&self) -> Option<u32>;
    fn offset(&self) -> Option<u32>;
    fn set_page(&mut self, limit: u32, offset: u32);
}

macro_rules! offset_paged {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OffsetPaged for $ty {
                fn limit(&self) -> Option<u32> {
                    self.limit
                }

                fn offset(&self) -> Option<u32> {
                    self.offset
                }

                fn set_page(&mut self, limit: u32, offset: u32) {
                    self.limit = Some(limit);
                    self.offset = Some(offset);
                }
            }
        )*
    };
}

offset_paged!(RefundListRequest, PayoutListRequest, EventListConstraints);

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

type FetchPage<T> = Box<dyn Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>;

/// A stream that lazily fetches pages from a paginated API endpoint.
///
/// The stream ends after a page shorter than the limit, once `total_count`
/// items have been seen, or right after yielding an error.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use hyperswitch_rs::models::RefundListRequest;
///
/// # async fn example(client: hyperswitch_rs::HyperswitchClient) -> hyperswitch_rs::Result<()> {
/// let request = RefundListRequest {
///     payment_id: Some("pay_123".into()),
///     ..Default::default()
/// };
/// let mut stream = client.refunds().list_stream(request);
///
/// while let Some(refund) = stream.next().await {
///     let refund = refund?;
///     println!("{} {:?}", refund.refund_id, refund.status);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by offset.
    fetch_page: FetchPage<T>,
    /// Items of the current page not yet yielded.
    current_items: VecDeque<T>,
    /// Offset of the next page, None if exhausted.
    next_offset: Option<u32>,
    /// Page size.
    limit: u32,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<Page<T>>>>,
}

impl<T: Send + 'static> PaginatedStream<T> {
    /// Create a stream starting at `offset` that requests `limit` items per page.
    pub fn new<F>(offset: u32, limit: u32, fetch_page: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            next_offset: Some(offset),
            limit: limit.max(1),
            pending_fetch: None,
        }
    }

    /// Stream a POST list endpoint whose body carries the page window.
    ///
    /// A missing or zero `limit` requests [`DEFAULT_PAGE_SIZE`] items per page.
    pub(crate) fn post<Q, R>(inner: Arc<ClientInner>, path: impl Into<String>, request: Q) -> Self
    where
        Q: OffsetPaged,
        R: DeserializeOwned + Into<Page<T>> + Send + 'static,
    {
        let path = path.into();
        let limit = request
            .limit()
            .filter(|&limit| limit > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let offset = request.offset().unwrap_or(0);

        Self::new(offset, limit, move |offset| {
            let inner = inner.clone();
            let path = path.clone();
            let mut request = request.clone();
            request.set_page(limit, offset);

            Box::pin(async move {
                let response: R = inner.post(&path, &request).await?;
                Ok(response.into())
            })
        })
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        let offset = this.next_offset.unwrap_or(0);
                        let received = page.items.len() as u32;
                        let next = offset + received;

                        let short_page = received < this.limit;
                        let reached_total =
                            page.total_count.is_some_and(|total| i64::from(next) >= total);
                        this.next_offset = if short_page || reached_total {
                            None
                        } else {
                            Some(next)
                        };

                        this.current_items = page.items.into();
                        if this.current_items.is_empty() {
                            return Poll::Ready(None);
                        }
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_offset = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(offset) = this.next_offset {
                this.pending_fetch = Some((this.fetch_page)(offset));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::sync::Mutex;

    fn numbers(total: u32, limit: u32, calls: Arc<Mutex<Vec<u32>>>) -> PaginatedStream<u32> {
        PaginatedStream::new(0, limit, move |offset| {
            calls.lock().unwrap().push(offset);
            Box::pin(async move {
                let end = (offset + limit).min(total);
                Ok(Page {
                    items: (offset..end).collect(),
                    total_count: Some(i64::from(total)),
                })
            })
        })
    }

    #[tokio::test]
    async fn test_walks_all_pages() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let items: Vec<u32> = numbers(7, 3, calls.clone())
            .map(|r| r.unwrap())
            .collect()
            .await;
        assert_eq!(items, (0..7).collect::<Vec<_>>());
        assert_eq!(*calls.lock().unwrap(), vec![0, 3, 6]);
    }

    #[tokio::test]
    async fn test_stops_at_total_without_extra_fetch() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let items: Vec<u32> = numbers(6, 3, calls.clone())
            .map(|r| r.unwrap())
            .collect()
            .await;
        assert_eq!(items.len(), 6);
        assert_eq!(*calls.lock().unwrap(), vec![0, 3]);
    }

    #[tokio::test]
    async fn test_stops_after_error() {
        let stream: PaginatedStream<u32> = PaginatedStream::new(0, 2, |offset| {
            Box::pin(async move {
                if offset == 0 {
                    Ok(Page {
                        items: vec![1, 2],
                        total_count: None,
                    })
                } else {
                    Err(crate::Error::InvalidInput("boom".into()))
                }
            })
        });
        let results: Vec<_> = stream.collect().await;
        assert_eq!(results.len(), 3);
        assert!(results[2].is_err());
    }
}

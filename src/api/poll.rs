//! Poll service.

use std::sync::Arc;

use crate::client::{encode_path, ClientInner};
use crate::models::{PollId, PollResponse};
use crate::Result;

/// Service for polling the status of asynchronous flows such as external
/// 3DS authentication.
pub struct PollService {
    inner: Arc<ClientInner>,
}

impl PollService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Current status of a poll.
    pub async fn status(&self, poll_id: &PollId) -> Result<PollResponse> {
        self.inner.get(&encode_path(&["poll", "status", poll_id.as_str()])?).await
    }
}

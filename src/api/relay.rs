//! Relay service.

use std::sync::Arc;

use crate::client::{encode_path, ClientInner};
use crate::models::{Relay, RelayId, RelayRequest};
use crate::{Error, Result};

/// Service for relaying operations on resources that exist only at the
/// connector.
///
/// Relay calls are scoped to a business profile, so the client must be
/// configured with [`ClientConfig::with_profile_id`](crate::ClientConfig::with_profile_id).
pub struct RelayService {
    inner: Arc<ClientInner>,
}

impl RelayService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Relay an operation to the connector.
    pub async fn create(&self, request: RelayRequest) -> Result<Relay> {
        if self.inner.config.profile_id.is_none() {
            return Err(Error::Config(
                "relay requests need a profile id; set ClientConfig::profile_id".to_string(),
            ));
        }
        self.inner.post("/relay", &request).await
    }

    /// Retrieve a relay.
    pub async fn retrieve(&self, relay_id: &RelayId) -> Result<Relay> {
        self.inner.get(&encode_path(&["relay", relay_id.as_str()])?).await
    }
}

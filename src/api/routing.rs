//! Routing service for profile default fallback connectors.

use std::sync::Arc;

use crate::client::{encode_path, ClientInner};
use crate::models::{ProfileDefaultRoutingConfig, ProfileId, RoutableConnectorChoice};
use crate::Result;

/// Service for default routing configuration.
///
/// These are dashboard endpoints and expect [`Credentials::Bearer`](crate::Credentials::Bearer).
pub struct RoutingService {
    inner: Arc<ClientInner>,
}

impl RoutingService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Default fallback connectors of one profile.
    pub async fn default_for_profile(&self, profile_id: &ProfileId) -> Result<ProfileDefaultRoutingConfig> {
        self.inner
            .get(&encode_path(&["routing", "default", "profile", profile_id.as_str()])?)
            .await
    }

    /// Replace the default fallback connectors of one profile.
    ///
    /// The server only accepts a reordering of the currently configured
    /// connectors.
    pub async fn update_default_for_profile(
        &self,
        profile_id: &ProfileId,
        connectors: Vec<RoutableConnectorChoice>,
    ) -> Result<ProfileDefaultRoutingConfig> {
        self.inner
            .post(&encode_path(&["routing", "default", "profile", profile_id.as_str()])?, &connectors)
            .await
    }

    /// Default fallback connectors of every profile.
    pub async fn list_default_profiles(&self) -> Result<Vec<ProfileDefaultRoutingConfig>> {
        self.inner.get("/routing/default/profile").await
    }
}

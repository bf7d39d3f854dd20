//! Mandates service.

use std::sync::Arc;

use crate::client::{encode_path, ClientInner};
use crate::models::{CustomerId, Mandate, MandateId, MandateListConstraints, MandateRevokedResponse};
use crate::Result;

/// Service for mandate operations.
///
/// Mandates are created as part of a payment (see
/// [`PaymentCreateRequestBuilder::mandate_data`](crate::models::PaymentCreateRequestBuilder::mandate_data));
/// this service reads and revokes them.
pub struct MandatesService {
    inner: Arc<ClientInner>,
}

impl MandatesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a mandate.
    pub async fn retrieve(&self, mandate_id: &MandateId) -> Result<Mandate> {
        self.inner.get(&encode_path(&["mandates", mandate_id.as_str()])?).await
    }

    /// Revoke a mandate so it can no longer be charged.
    pub async fn revoke(&self, mandate_id: &MandateId) -> Result<MandateRevokedResponse> {
        self.inner
            .post(&encode_path(&["mandates", "revoke", mandate_id.as_str()])?, &serde_json::json!({}))
            .await
    }

    /// List mandates of the merchant.
    pub async fn list(&self, constraints: MandateListConstraints) -> Result<Vec<Mandate>> {
        self.inner
            .get_with_query("/mandates/list", &constraints)
            .await
    }

    /// List mandates of one customer.
    pub async fn list_for_customer(&self, customer_id: &CustomerId) -> Result<Vec<Mandate>> {
        self.inner
            .get(&encode_path(&["customers", customer_id.as_str(), "mandates"])?)
            .await
    }
}

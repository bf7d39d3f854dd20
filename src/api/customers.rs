//! Customers service.

use std::sync::Arc;

use crate::client::{encode_path, ClientInner};
use crate::models::{Customer, CustomerDeleteResponse, CustomerId, CustomerListQuery, CustomerRequest};
use crate::Result;

/// Service for customer records.
///
/// # Example
///
/// ```no_run
/// use hyperswitch_rs::models::CustomerRequest;
///
/// # async fn example(client: hyperswitch_rs::HyperswitchClient) -> hyperswitch_rs::Result<()> {
/// let customer = client
///     .customers()
///     .create(CustomerRequest {
///         email: Some("guest@example.com".into()),
///         ..Default::default()
///     })
///     .await?;
/// println!("created {}", customer.customer_id);
/// # Ok(())
/// # }
/// ```
pub struct CustomersService {
    inner: Arc<ClientInner>,
}

impl CustomersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a customer.
    pub async fn create(&self, request: CustomerRequest) -> Result<Customer> {
        self.inner.post("/customers", &request).await
    }

    /// Retrieve a customer.
    pub async fn retrieve(&self, customer_id: &CustomerId) -> Result<Customer> {
        self.inner.get(&encode_path(&["customers", customer_id.as_str()])?).await
    }

    /// Update a customer.
    pub async fn update(&self, customer_id: &CustomerId, request: CustomerRequest) -> Result<Customer> {
        self.inner
            .post(&encode_path(&["customers", customer_id.as_str()])?, &request)
            .await
    }

    /// Delete a customer with its addresses and stored payment methods.
    pub async fn delete(&self, customer_id: &CustomerId) -> Result<CustomerDeleteResponse> {
        self.inner.delete(&encode_path(&["customers", customer_id.as_str()])?).await
    }

    /// List customers.
    pub async fn list(&self, query: CustomerListQuery) -> Result<Vec<Customer>> {
        self.inner.get_with_query("/customers/list", &query).await
    }
}

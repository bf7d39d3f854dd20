//! Customer and address models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::primitives::CustomerId;
use super::secret::Secret;

/// A billing or shipping address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneDetails>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Postal address fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct AddressDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<Secret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<Secret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line3: Option<Secret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<Secret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Secret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Secret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Secret>,
}

/// Phone number with country code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneDetails {
    /// Subscriber number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Secret>,
    /// e.g. "+1"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Body for creating or updating a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerRequest {
    /// Merchant-chosen id; generated when omitted on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Secret>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number without country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Secret>,
    /// e.g. "+65"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
    /// Arbitrary key/value metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// A customer as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier
    pub customer_id: CustomerId,
    /// Full name
    #[serde(default)]
    pub name: Option<Secret>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<Secret>,
    /// Phone country code
    #[serde(default)]
    pub phone_country_code: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Default address
    #[serde(default)]
    pub address: Option<AddressDetails>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Metadata
    #[serde(default)]
    pub metadata: Option<Value>,
    /// Default payment method id
    #[serde(default)]
    pub default_payment_method_id: Option<String>,
}

/// Result of deleting a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDeleteResponse {
    /// Customer identifier
    pub customer_id: CustomerId,
    /// Whether the customer record was deleted
    pub customer_deleted: bool,
    /// Whether the address was deleted
    pub address_deleted: bool,
    /// Whether stored payment methods were deleted
    pub payment_methods_deleted: bool,
}

/// Query parameters for listing customers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerListQuery {
    /// Maximum number of customers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
    /// Number of customers to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_skips_empty_fields() {
        let address = Address {
            address: Some(AddressDetails {
                city: Some("San Fransico".into()),
                country: Some("US".into()),
                line1: Some("1467".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(value["address"]["line1"], "1467");
        assert!(value.get("phone").is_none());
        assert!(value["address"].get("zip").is_none());
    }

    #[test]
    fn test_customer_decode() {
        let customer: Customer = serde_json::from_value(serde_json::json!({
            "customer_id": "cus_y3oqhf46pyzuxjbcn2giaqnb44",
            "name": "John Doe",
            "email": "guest@example.com",
            "created_at": "2024-02-10T10:11:12Z",
            "unknown_field": 1
        }))
        .unwrap();

        assert_eq!(customer.customer_id.as_str(), "cus_y3oqhf46pyzuxjbcn2giaqnb44");
        assert_eq!(customer.name.as_ref().map(Secret::expose), Some("John Doe"));
        assert!(customer.created_at.is_some());
    }
}

//! Routing configuration models.

use serde::{Deserialize, Serialize};

use super::primitives::{MerchantConnectorId, ProfileId};

/// A connector a payment may be routed to.
///
/// The server accepts either a bare connector name or an object that pins a
/// specific merchant connector account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoutableConnectorChoice {
    /// Connector with its merchant connector account
    Full {
        /// Connector name, e.g. `stripe`
        connector: String,
        /// Merchant connector account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        merchant_connector_id: Option<MerchantConnectorId>,
    },
    /// Connector name only
    Name(String),
}

impl RoutableConnectorChoice {
    /// Choice pinned to a merchant connector account.
    pub fn new(connector: impl Into<String>, merchant_connector_id: impl Into<MerchantConnectorId>) -> Self {
        RoutableConnectorChoice::Full {
            connector: connector.into(),
            merchant_connector_id: Some(merchant_connector_id.into()),
        }
    }

    /// Connector name.
    pub fn connector(&self) -> &str {
        match self {
            RoutableConnectorChoice::Full { connector, .. } => connector,
            RoutableConnectorChoice::Name(name) => name,
        }
    }

    /// Merchant connector account, if pinned.
    pub fn merchant_connector_id(&self) -> Option<&MerchantConnectorId> {
        match self {
            RoutableConnectorChoice::Full {
                merchant_connector_id,
                ..
            } => merchant_connector_id.as_ref(),
            RoutableConnectorChoice::Name(_) => None,
        }
    }
}

impl From<&str> for RoutableConnectorChoice {
    fn from(name: &str) -> Self {
        RoutableConnectorChoice::Name(name.to_string())
    }
}

/// Default fallback connectors of a business profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefaultRoutingConfig {
    /// Business profile
    pub profile_id: ProfileId,
    /// Connectors in priority order
    pub connectors: Vec<RoutableConnectorChoice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connector_choice_forms() {
        let choices: Vec<RoutableConnectorChoice> = serde_json::from_value(json!([
            {"connector": "stripe", "merchant_connector_id": "mca_1"},
            "adyen"
        ]))
        .unwrap();

        assert_eq!(choices[0].connector(), "stripe");
        assert_eq!(choices[0].merchant_connector_id().map(|id| id.as_str()), Some("mca_1"));
        assert_eq!(choices[1], RoutableConnectorChoice::from("adyen"));
        assert!(choices[1].merchant_connector_id().is_none());
    }

    #[test]
    fn test_profile_default_decode() {
        let config: ProfileDefaultRoutingConfig = serde_json::from_value(json!({
            "profile_id": "pro_1",
            "connectors": [{"connector": "checkout", "merchant_connector_id": "mca_2"}]
        }))
        .unwrap();
        assert_eq!(config.connectors.len(), 1);
    }
}

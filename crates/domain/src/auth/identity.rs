//! Authenticated account identity issued by the external provider.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated-user record issued by the identity provider.
///
/// Only `id` and `email` are interpreted by this core. Every other field
/// belongs to the provider and is carried through opaquely so callers can
/// render profile data without this crate taking a position on its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque provider-issued account identifier.
    pub id: String,

    /// Email address the account is registered under.
    pub email: String,

    /// When the provider created the account, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the provider confirmed the account's email, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,

    /// Provider-owned fields this core does not interpret.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Identity {
    /// Creates an identity with only the fields this core interprets.
    #[must_use]
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            created_at: None,
            confirmed_at: None,
            extra: BTreeMap::new(),
        }
    }

    /// Attaches a provider-owned field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_identity_has_no_provider_fields() {
        let identity = Identity::new("account-1", "a@x.com");
        assert_eq!(identity.id, "account-1");
        assert_eq!(identity.email, "a@x.com");
        assert!(identity.created_at.is_none());
        assert!(identity.extra.is_empty());
    }

    #[test]
    fn test_unknown_provider_fields_round_trip() {
        let raw = json!({
            "id": "account-1",
            "email": "a@x.com",
            "first_name": "Ada",
            "favorite_cuisines": ["thai", "oaxacan"]
        });

        let identity: Identity = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(identity.extra.get("first_name"), Some(&json!("Ada")));

        let back = serde_json::to_value(&identity).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_with_extra_builder() {
        let identity = Identity::new("account-1", "a@x.com").with_extra("last_name", json!("Lovelace"));
        assert_eq!(identity.extra.get("last_name"), Some(&json!("Lovelace")));
    }
}

//! Identity provider connection settings.
//!
//! Pure data; loading these from the environment lives in the
//! infrastructure crate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::PasswordPolicy;

/// Default identity service endpoint.
const DEFAULT_BASE_URL: &str = "https://auth.yumzoom.app";

/// Connection settings for the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Base URL of the identity service. Kept as a string here; the HTTP
    /// adapter parses and validates it.
    pub base_url: String,

    /// API key sent with every request, if the deployment requires one.
    pub api_key: Option<String>,

    /// Per-request timeout in seconds. Timeouts are owned by the adapter;
    /// the session store never times out on its own.
    pub timeout_secs: u64,

    /// Minimum password length checked before sign-up calls.
    pub min_password_length: usize,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
            min_password_length: PasswordPolicy::default().min_length,
        }
    }
}

impl ProviderSettings {
    /// The password policy these settings describe.
    #[must_use]
    pub const fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_password_length,
        }
    }

    /// The per-request timeout as a duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.base_url, "https://auth.yumzoom.app");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.password_policy().min_length, 8);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let settings: ProviderSettings =
            serde_json::from_str(r#"{"base_url": "https://auth.example.test"}"#).unwrap();
        assert_eq!(settings.base_url, "https://auth.example.test");
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_timeout_duration() {
        let settings = ProviderSettings {
            timeout_secs: 5,
            ..ProviderSettings::default()
        };
        assert_eq!(settings.timeout(), Duration::from_secs(5));
    }
}

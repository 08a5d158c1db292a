//! In-memory identity provider.
//!
//! Keeps registered accounts in a process-local table. Used by the
//! integration tests and by local development setups where no identity
//! service is reachable. Passwords are compared exactly; this is a test
//! double, not a credential store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tracing::debug;
use yumzoom_application::IdentityProvider;
use yumzoom_domain::{
    Identity, PasswordPolicy, ProviderError, SignInRequest, SignUpRequest, generate_account_id,
};

/// Registered account record.
#[derive(Debug, Clone)]
struct Account {
    identity: Identity,
    password: String,
}

/// Identity provider backed by an in-memory account table.
///
/// Clones share the same table, mirroring how every handle to a real
/// provider sees the same accounts.
#[derive(Clone, Default)]
pub struct MemoryIdentityProvider {
    /// Keyed by lowercased email.
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    policy: PasswordPolicy,
}

impl MemoryIdentityProvider {
    /// Creates an empty provider with the default password policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty provider with a custom password policy.
    #[must_use]
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            policy,
        }
    }

    /// Pre-registers an account, bypassing the password policy.
    pub fn seed_account(&self, email: &str, password: &str) -> Identity {
        let identity = Identity::new(generate_account_id(), email);
        self.accounts_mut().insert(
            email.to_lowercase(),
            Account {
                identity: identity.clone(),
                password: password.to_string(),
            },
        );
        identity
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts().len()
    }

    fn accounts(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Account>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn accounts_mut(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Account>> {
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn authenticate(&self, credentials: &SignInRequest) -> Result<Identity, ProviderError> {
        let accounts = self.accounts();
        // Unknown accounts and wrong passwords are indistinguishable to
        // the caller, like a real provider.
        accounts
            .get(&credentials.email.to_lowercase())
            .filter(|account| account.password == credentials.password)
            .map(|account| account.identity.clone())
            .ok_or(ProviderError::InvalidCredentials)
    }

    async fn register(&self, profile: &SignUpRequest) -> Result<Identity, ProviderError> {
        if profile.password.chars().count() < self.policy.min_length {
            return Err(ProviderError::Rejected {
                message: format!(
                    "password must be at least {} characters",
                    self.policy.min_length
                ),
            });
        }

        let key = profile.email.to_lowercase();
        let mut accounts = self.accounts_mut();
        if accounts.contains_key(&key) {
            return Err(ProviderError::AccountExists);
        }

        let mut identity = Identity::new(generate_account_id(), &profile.email)
            .with_extra("first_name", json!(profile.first_name))
            .with_extra("last_name", json!(profile.last_name));
        identity.created_at = Some(Utc::now());
        if let Some(phone) = &profile.phone_mobile {
            identity = identity.with_extra("phone_mobile", json!(phone));
        }
        if let Some(phone) = &profile.phone_home {
            identity = identity.with_extra("phone_home", json!(phone));
        }
        if let Some(phone) = &profile.phone_work {
            identity = identity.with_extra("phone_work", json!(phone));
        }

        debug!(account_id = %identity.id, "registered account");
        accounts.insert(
            key,
            Account {
                identity: identity.clone(),
                password: profile.password.clone(),
            },
        );
        Ok(identity)
    }

    async fn invalidate_session(&self) -> Result<(), ProviderError> {
        // Nothing server-side to tear down for the in-memory table.
        Ok(())
    }

    fn password_policy(&self) -> PasswordPolicy {
        self.policy
    }
}

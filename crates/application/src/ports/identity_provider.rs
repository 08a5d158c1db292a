//! Identity provider port
//!
//! Defines the interface to the external identity/authentication backend.

use async_trait::async_trait;
use yumzoom_domain::{Identity, PasswordPolicy, ProviderError, SignInRequest, SignUpRequest};

/// Port to the external identity provider.
///
/// Implementations own transport, timeouts and retries; the session store
/// only awaits the result and folds it into session state. Every method
/// must settle — a hung provider is the adapter's problem to bound.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticates an existing account.
    ///
    /// # Arguments
    /// * `credentials` - Email and password to verify.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] with a human-readable message when the
    /// provider rejects the credentials or cannot be reached.
    async fn authenticate(&self, credentials: &SignInRequest) -> Result<Identity, ProviderError>;

    /// Registers a new account and returns its identity.
    ///
    /// # Arguments
    /// * `profile` - Registration payload including credentials and
    ///   profile fields.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when the account cannot be created,
    /// including when the email is already registered.
    async fn register(&self, profile: &SignUpRequest) -> Result<Identity, ProviderError>;

    /// Invalidates the provider-side session for the current account.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when the provider cannot confirm the
    /// invalidation.
    async fn invalidate_session(&self) -> Result<(), ProviderError>;

    /// Password requirements checked before [`register`](Self::register)
    /// is called.
    fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy::default()
    }
}

//! Injectable session state container.
//!
//! Single source of truth for "who is signed in", whether a credential
//! operation is in flight, and the last failure. Callers receive a handle
//! by cloning the store; there is no ambient singleton. State lives behind
//! a lock that is never held across an await point.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};
use yumzoom_domain::{
    AuthOperation, Identity, ProviderError, SessionError, SessionPhase, SessionState,
    SignInRequest, SignUpRequest, ValidationError,
};

use crate::ports::IdentityProvider;

/// Result of a credential operation.
///
/// Operations never reject: failures are recorded in the session error
/// slot and mirrored here so callers can branch without re-reading state.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// The provider accepted the credentials and a session is established.
    SignedIn(Identity),
    /// The provider-side session was invalidated.
    SignedOut,
    /// The operation ran and failed; the message is in the error slot.
    Failed(SessionError),
    /// Another operation was in flight; nothing changed.
    Refused,
}

impl AuthOutcome {
    /// Returns true if the operation ran and succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::SignedIn(_) | Self::SignedOut)
    }

    /// Returns true if the operation was turned away because another one
    /// was already in flight.
    #[must_use]
    pub const fn is_refused(&self) -> bool {
        matches!(self, Self::Refused)
    }

    /// Returns the established identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Session state store.
///
/// At most one credential operation is in flight at a time: a second
/// invocation while the phase is pending is refused without touching
/// state, so the first operation's resolution is the only one reflected.
/// Cancellation is not supported; an in-flight operation always runs to
/// completion. Timeouts belong to the provider adapter.
#[derive(Clone)]
pub struct SessionStore {
    provider: Arc<dyn IdentityProvider>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    /// Creates a store with no session, idle phase and no error.
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Returns a copy of the current session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.read().clone()
    }

    /// Returns the signed-in identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.read().identity.clone()
    }

    /// Returns true if an identity is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// Returns true if a credential operation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().is_loading()
    }

    /// Returns the last recorded failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<SessionError> {
        self.read().error.clone()
    }

    /// Clears the error slot. Idempotent; no other side effects.
    pub fn clear_error(&self) {
        self.write().error = None;
    }

    /// Signs in with email and password.
    ///
    /// Always resolves: validation and provider failures are folded into
    /// the error slot, not propagated. Refused when another operation is
    /// in flight.
    pub async fn sign_in(&self, request: SignInRequest) -> AuthOutcome {
        if !self.begin(AuthOperation::SignIn) {
            return AuthOutcome::Refused;
        }
        if let Err(invalid) = request.validate() {
            return self.settle_invalid(AuthOperation::SignIn, invalid);
        }
        let result = self.provider.authenticate(&request).await;
        self.settle_credentials(AuthOperation::SignIn, result)
    }

    /// Registers a new account and establishes a session for it.
    ///
    /// The payload is checked against the provider's password policy
    /// before calling out; validation failures never reach the provider.
    pub async fn sign_up(&self, request: SignUpRequest) -> AuthOutcome {
        if !self.begin(AuthOperation::SignUp) {
            return AuthOutcome::Refused;
        }
        let policy = self.provider.password_policy();
        if let Err(invalid) = request.validate(&policy) {
            return self.settle_invalid(AuthOperation::SignUp, invalid);
        }
        let result = self.provider.register(&request).await;
        self.settle_credentials(AuthOperation::SignUp, result)
    }

    /// Signs out of the current session.
    ///
    /// The identity is discarded even when the provider call fails; the
    /// failure is still recorded in the error slot. A successful sign-out
    /// leaves any prior error untouched.
    pub async fn sign_out(&self) -> AuthOutcome {
        if !self.begin(AuthOperation::SignOut) {
            return AuthOutcome::Refused;
        }
        let result = self.provider.invalidate_session().await;
        let mut state = self.write();
        state.phase = SessionPhase::Idle;
        state.identity = None;
        match result {
            Ok(()) => {
                debug!(operation = AuthOperation::SignOut.as_str(), "session invalidated");
                AuthOutcome::SignedOut
            }
            Err(error) => {
                warn!(
                    operation = AuthOperation::SignOut.as_str(),
                    %error,
                    "provider call failed"
                );
                let error = SessionError::from(error);
                state.error = Some(error.clone());
                AuthOutcome::Failed(error)
            }
        }
    }

    /// Marks an operation as in flight. Returns false when another
    /// operation already holds the pending phase.
    fn begin(&self, operation: AuthOperation) -> bool {
        let mut state = self.write();
        if state.phase.is_pending() {
            debug!(
                operation = operation.as_str(),
                "refused: another operation is in flight"
            );
            return false;
        }
        state.phase = SessionPhase::pending(operation);
        // Sign-out reports its own failures but does not disturb an error
        // a caller may still be showing.
        if operation != AuthOperation::SignOut {
            state.error = None;
        }
        true
    }

    /// Settles an operation that failed validation before any provider
    /// call was made.
    fn settle_invalid(&self, operation: AuthOperation, invalid: ValidationError) -> AuthOutcome {
        debug!(
            operation = operation.as_str(),
            %invalid,
            "request rejected before provider call"
        );
        let error = SessionError::from(invalid);
        let mut state = self.write();
        state.phase = SessionPhase::Idle;
        state.identity = None;
        state.error = Some(error.clone());
        AuthOutcome::Failed(error)
    }

    /// Commits the result of an identity-producing provider call.
    fn settle_credentials(
        &self,
        operation: AuthOperation,
        result: Result<Identity, ProviderError>,
    ) -> AuthOutcome {
        let mut state = self.write();
        state.phase = SessionPhase::Idle;
        match result {
            Ok(identity) => {
                debug!(operation = operation.as_str(), "provider accepted credentials");
                state.identity = Some(identity.clone());
                state.error = None;
                AuthOutcome::SignedIn(identity)
            }
            Err(error) => {
                warn!(operation = operation.as_str(), %error, "provider call failed");
                let error = SessionError::from(error);
                state.identity = None;
                state.error = Some(error.clone());
                AuthOutcome::Failed(error)
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

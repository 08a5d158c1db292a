//! Session state machine for credential operations.
//!
//! This module defines the state the session store holds between and
//! during credential operations, enabling callers to display appropriate
//! feedback:
//! - `Idle`: no operation in flight, show forms as interactive
//! - `Pending`: an operation is in flight, show a spinner and disable forms
//!
//! The identity slot and the error slot are orthogonal to the phase: a
//! failed submission leaves the phase `Idle` with the failure recorded in
//! the error slot.

use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::auth::error::ProviderError;
use crate::error::ValidationError;

/// Credential operation that can hold the session in a pending phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthOperation {
    /// Authenticate an existing account.
    SignIn,
    /// Register a new account.
    SignUp,
    /// Invalidate the current session.
    SignOut,
}

impl AuthOperation {
    /// Operation name for logs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
            Self::SignOut => "sign_out",
        }
    }
}

/// Phase of the session with respect to an in-flight operation.
///
/// Pending is entered when an operation is dispatched to the provider and
/// left when the provider call settles, success or failure. Nothing else
/// moves the phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    /// No operation in flight.
    #[default]
    Idle,

    /// An operation has been dispatched and has not settled yet.
    Pending {
        /// Which operation is in flight.
        operation: AuthOperation,
        /// When the operation started (for elapsed-time display).
        /// Skipped in serialization as Instant is not serializable.
        #[serde(skip)]
        started_at: Option<std::time::Instant>,
    },
}

impl SessionPhase {
    /// Creates a Pending phase stamped with the current time.
    #[must_use]
    pub fn pending(operation: AuthOperation) -> Self {
        Self::Pending {
            operation,
            started_at: Some(std::time::Instant::now()),
        }
    }

    /// Returns true if no operation is in flight.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if an operation is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Returns the in-flight operation, if any.
    #[must_use]
    pub const fn operation(&self) -> Option<AuthOperation> {
        match self {
            Self::Pending { operation, .. } => Some(*operation),
            Self::Idle => None,
        }
    }

    /// Returns the elapsed time if an operation is in flight.
    #[must_use]
    pub fn elapsed(&self) -> Option<std::time::Duration> {
        match self {
            Self::Pending {
                started_at: Some(t),
                ..
            } => Some(t.elapsed()),
            _ => None,
        }
    }
}

/// Categories of session failures for user-friendly display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionErrorKind {
    /// The request was malformed and never reached the provider.
    Validation,
    /// The provider call ran and failed.
    Provider,
    /// Something this core does not understand went wrong.
    Unexpected,
}

/// Failure recorded in the session error slot.
///
/// The message is human-readable and safe to show to the user; internal
/// detail goes to the log, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionError {
    /// Failure category.
    pub kind: SessionErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl SessionError {
    /// Creates an error in the given category.
    #[must_use]
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ValidationError> for SessionError {
    fn from(error: ValidationError) -> Self {
        Self::new(SessionErrorKind::Validation, error.to_string())
    }
}

impl From<ProviderError> for SessionError {
    fn from(error: ProviderError) -> Self {
        let kind = match error {
            ProviderError::Unexpected { .. } => SessionErrorKind::Unexpected,
            _ => SessionErrorKind::Provider,
        };
        Self::new(kind, error.to_string())
    }
}

/// Snapshot of the session: who is signed in, whether an operation is in
/// flight, and the last failure.
///
/// Created once per store with all slots empty; mutated only by the four
/// session operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionState {
    /// The signed-in identity, or None when no session exists.
    pub identity: Option<Identity>,
    /// Whether an operation is in flight.
    pub phase: SessionPhase,
    /// The last failure, until cleared or superseded.
    pub error: Option<SessionError>,
}

impl SessionState {
    /// Returns true if an identity is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Returns true if an operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.phase.is_pending()
    }

    /// Returns the recorded failure message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

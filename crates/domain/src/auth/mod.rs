//! Account and session types for the authentication core.
//!
//! This module provides:
//! - The identity record issued by the external provider
//! - Credential payloads for sign-in and sign-up
//! - The session state machine and its error slot
//! - The provider failure taxonomy

mod credentials;
mod error;
mod identity;
mod session;

pub use credentials::{PasswordPolicy, SignInRequest, SignUpRequest};
pub use error::ProviderError;
pub use identity::Identity;
pub use session::{AuthOperation, SessionError, SessionErrorKind, SessionPhase, SessionState};

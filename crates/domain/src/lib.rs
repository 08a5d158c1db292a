//! YumZoom Domain - Core account session types
//!
//! This crate defines the domain model for the YumZoom account session
//! core. All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod id;
pub mod settings;

pub use auth::{
    AuthOperation, Identity, PasswordPolicy, ProviderError, SessionError, SessionErrorKind,
    SessionPhase, SessionState, SignInRequest, SignUpRequest,
};
pub use error::{ValidationError, ValidationResult};
pub use id::generate_account_id;
pub use settings::ProviderSettings;

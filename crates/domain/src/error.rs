//! Domain validation errors

use thiserror::Error;

/// Validation failures caught before any provider call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The email address is empty.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The email address does not look like an email address.
    #[error("email address '{0}' is not well-formed")]
    MalformedEmail(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The password is shorter than the provider's minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum length required by the provider's policy.
        min: usize,
    },

    /// A required name field is empty.
    #[error("{field} must not be empty")]
    EmptyName {
        /// Which field was empty.
        field: &'static str,
    },
}

/// Result type alias for validation checks.
pub type ValidationResult<T> = Result<T, ValidationError>;

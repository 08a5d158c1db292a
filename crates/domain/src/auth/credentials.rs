//! Credential payloads submitted to the identity provider.
//!
//! Both payloads are transient: constructed per call, serialized onto the
//! wire, never persisted. Passwords are redacted from `Debug` output so
//! request logging cannot leak them.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Shape check only; deliverability is the provider's concern.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Password requirements owned by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum password length in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Checks a password against this policy.
    ///
    /// # Errors
    /// Returns a validation error when the password is empty or shorter
    /// than the minimum.
    pub fn check(&self, password: &str) -> ValidationResult<()> {
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        if password.chars().count() < self.min_length {
            return Err(ValidationError::PasswordTooShort {
                min: self.min_length,
            });
        }
        Ok(())
    }
}

/// Sign-in payload: email and password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    /// Email address the account is registered under.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl SignInRequest {
    /// Creates a sign-in request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the precondition for submitting the request.
    ///
    /// Sign-in only requires both fields to be present; whether they match
    /// an account is the provider's call.
    ///
    /// # Errors
    /// Returns a validation error when either field is empty.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(())
    }
}

impl std::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up payload: credentials plus the profile fields YumZoom collects
/// at registration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    /// Email address to register.
    pub email: String,
    /// Password for the new account.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Mobile phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_mobile: Option<String>,
    /// Home phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_home: Option<String>,
    /// Work phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_work: Option<String>,
}

impl SignUpRequest {
    /// Creates a sign-up request with no phone numbers.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_mobile: None,
            phone_home: None,
            phone_work: None,
        }
    }

    /// Checks the payload before it is sent to the provider.
    ///
    /// The email must be well-formed and the password must meet the
    /// provider's policy; the provider enforces the same rules again on its
    /// side.
    ///
    /// # Errors
    /// Returns the first validation failure found.
    pub fn validate(&self, policy: &PasswordPolicy) -> ValidationResult<()> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if !EMAIL_REGEX.is_match(self.email.trim()) {
            return Err(ValidationError::MalformedEmail(self.email.clone()));
        }
        policy.check(&self.password)?;
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                field: "first name",
            });
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::EmptyName { field: "last name" });
        }
        Ok(())
    }
}

impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone_mobile", &self.phone_mobile)
            .field("phone_home", &self.phone_home)
            .field("phone_work", &self.phone_work)
            .finish()
    }
}

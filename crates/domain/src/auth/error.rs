//! Failure taxonomy for external identity-provider calls.

use thiserror::Error;

/// Errors surfaced by the external identity provider.
///
/// Every variant renders to a human-readable message; the session store
/// copies that message into the session error slot verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider rejected the credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account already exists for the submitted email.
    #[error("an account with this email already exists")]
    AccountExists,

    /// The provider rejected the request for a stated reason.
    #[error("{message}")]
    Rejected {
        /// Provider-supplied reason.
        message: String,
    },

    /// The provider could not be reached.
    #[error("identity service unreachable: {message}")]
    Network {
        /// Transport-level detail.
        message: String,
    },

    /// The provider answered with a server-side failure.
    #[error("identity service error ({status}): {message}")]
    Service {
        /// HTTP status code reported by the service.
        status: u16,
        /// Service-supplied detail.
        message: String,
    },

    /// The provider behaved in a way this core does not understand.
    #[error("unexpected identity provider failure: {message}")]
    Unexpected {
        /// Internal detail, also logged by the adapter.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_presentable() {
        assert_eq!(ProviderError::InvalidCredentials.to_string(), "invalid credentials");
        assert_eq!(
            ProviderError::AccountExists.to_string(),
            "an account with this email already exists"
        );
        assert_eq!(
            ProviderError::Rejected {
                message: "password found in breach corpus".to_string()
            }
            .to_string(),
            "password found in breach corpus"
        );
    }

    #[test]
    fn test_service_errors_carry_status() {
        let error = ProviderError::Service {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert!(error.to_string().contains("503"));
    }
}

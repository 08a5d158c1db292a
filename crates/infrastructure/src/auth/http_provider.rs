//! HTTP adapter for the remote identity service.
//!
//! Speaks the JSON auth endpoints and maps transport and service failures
//! into the provider error taxonomy. Request timeouts are owned here, at
//! the client level; the session store never times out on its own.
//! Credentials never appear in logs.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;
use yumzoom_application::IdentityProvider;
use yumzoom_domain::{
    Identity, PasswordPolicy, ProviderError, ProviderSettings, SignInRequest, SignUpRequest,
};

const SIGN_IN_PATH: &str = "v1/auth/sign-in";
const SIGN_UP_PATH: &str = "v1/auth/sign-up";
const SIGN_OUT_PATH: &str = "v1/auth/sign-out";

/// Header carrying the deployment's API key, when one is configured.
const API_KEY_HEADER: &str = "X-Api-Key";

/// Error payload returned by the identity service.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Successful authentication payload.
#[derive(Debug, Deserialize)]
struct SessionResponse {
    user: Identity,
}

/// Identity provider backed by a remote HTTP service.
pub struct HttpIdentityProvider {
    settings: ProviderSettings,
    base_url: Url,
    http_client: reqwest::Client,
}

impl HttpIdentityProvider {
    /// Creates a provider from connection settings.
    ///
    /// # Errors
    /// Returns an error when the base URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn from_settings(settings: ProviderSettings) -> Result<Self, ProviderError> {
        let mut base_url =
            Url::parse(&settings.base_url).map_err(|e| ProviderError::Unexpected {
                message: format!("invalid identity service URL: {e}"),
            })?;
        // Url::join drops the last path segment of a base without a
        // trailing slash, which would silently discard tenant prefixes.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ProviderError::Unexpected {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            settings,
            base_url,
            http_client,
        })
    }

    /// Resolves an endpoint path against the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ProviderError> {
        self.base_url
            .join(path)
            .map_err(|e| ProviderError::Unexpected {
                message: format!("invalid endpoint path '{path}': {e}"),
            })
    }

    async fn post_json<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ProviderError> {
        let url = self.endpoint(path)?;
        let mut request = self.http_client.post(url).json(body);
        if let Some(key) = &self.settings.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        request.send().await.map_err(map_transport_error)
    }

    /// Reads an identity out of a response, or maps the failure.
    async fn expect_session(response: reqwest::Response) -> Result<Identity, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, &body));
        }
        let session: SessionResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::Unexpected {
                    message: format!("malformed identity payload: {e}"),
                })?;
        Ok(session.user)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn authenticate(&self, credentials: &SignInRequest) -> Result<Identity, ProviderError> {
        debug!(path = SIGN_IN_PATH, "submitting credentials");
        let response = self.post_json(SIGN_IN_PATH, credentials).await?;
        let identity = Self::expect_session(response).await?;
        debug!(path = SIGN_IN_PATH, "credentials accepted");
        Ok(identity)
    }

    async fn register(&self, profile: &SignUpRequest) -> Result<Identity, ProviderError> {
        debug!(path = SIGN_UP_PATH, "submitting registration");
        let response = self.post_json(SIGN_UP_PATH, profile).await?;
        Self::expect_session(response).await
    }

    async fn invalidate_session(&self) -> Result<(), ProviderError> {
        let response = self
            .post_json(SIGN_OUT_PATH, &serde_json::json!({}))
            .await?;
        let status = response.status();
        if status.is_success() {
            debug!(path = SIGN_OUT_PATH, "session invalidated");
            Ok(())
        } else {
            warn!(path = SIGN_OUT_PATH, %status, "session invalidation failed");
            let body = response.text().await.unwrap_or_default();
            Err(error_from_status(status, &body))
        }
    }

    fn password_policy(&self) -> PasswordPolicy {
        self.settings.password_policy()
    }
}

/// Maps an HTTP failure status and body to a provider error.
///
/// The service's `error_description` wins over its `error` code when both
/// are present; unparseable bodies fall back to generic messages.
fn error_from_status(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error_description.unwrap_or(e.error))
        .ok();
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => ProviderError::InvalidCredentials,
        StatusCode::CONFLICT => ProviderError::AccountExists,
        StatusCode::UNPROCESSABLE_ENTITY => ProviderError::Rejected {
            message: message
                .unwrap_or_else(|| "request rejected by identity service".to_string()),
        },
        s if s.is_server_error() => ProviderError::Service {
            status: s.as_u16(),
            message: message.unwrap_or_else(|| "identity service failed".to_string()),
        },
        s => ProviderError::Unexpected {
            message: message.unwrap_or_else(|| format!("unexpected status {s}")),
        },
    }
}

/// Maps reqwest transport errors to the provider taxonomy.
fn map_transport_error(error: reqwest::Error) -> ProviderError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else {
        error.to_string()
    };
    ProviderError::Network { message }
}

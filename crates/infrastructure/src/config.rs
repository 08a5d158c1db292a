//! Environment-based configuration loading.
//!
//! Reads provider settings from `YUMZOOM_*` environment variables, honoring
//! a `.env` file in development. Unset variables fall back to the domain
//! defaults.

use std::env;

use thiserror::Error;
use yumzoom_domain::ProviderSettings;

const BASE_URL_VAR: &str = "YUMZOOM_AUTH_URL";
const API_KEY_VAR: &str = "YUMZOOM_AUTH_API_KEY";
const TIMEOUT_VAR: &str = "YUMZOOM_AUTH_TIMEOUT_SECS";
const MIN_PASSWORD_VAR: &str = "YUMZOOM_AUTH_MIN_PASSWORD_LENGTH";

/// Errors raised while reading settings from the environment.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A variable was present but did not parse.
    #[error("{name} is not valid: {message}")]
    Invalid {
        /// The offending variable.
        name: &'static str,
        /// Why it failed to parse.
        message: String,
    },
}

/// Loads provider settings from the environment.
///
/// # Errors
/// Returns an error when a variable is set but does not parse; unset
/// variables are not an error.
pub fn settings_from_env() -> Result<ProviderSettings, SettingsError> {
    // Load .env if present (development).
    let _ = dotenvy::dotenv();

    let defaults = ProviderSettings::default();
    Ok(ProviderSettings {
        base_url: env::var(BASE_URL_VAR).unwrap_or(defaults.base_url),
        api_key: env::var(API_KEY_VAR).ok(),
        timeout_secs: parse_var(TIMEOUT_VAR, defaults.timeout_secs)?,
        min_password_length: parse_var(MIN_PASSWORD_VAR, defaults.min_password_length)?,
    })
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, SettingsError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env::var(name).map_or(Ok(default), |raw| {
        raw.parse().map_err(|e: T::Err| SettingsError::Invalid {
            name,
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        temp_env::with_vars_unset(
            [BASE_URL_VAR, API_KEY_VAR, TIMEOUT_VAR, MIN_PASSWORD_VAR],
            || {
                let settings = settings_from_env().unwrap();
                assert_eq!(settings, ProviderSettings::default());
            },
        );
    }

    #[test]
    fn test_variables_override_defaults() {
        temp_env::with_vars(
            [
                (BASE_URL_VAR, Some("https://id.example.test/tenants/yz")),
                (API_KEY_VAR, Some("test-key")),
                (TIMEOUT_VAR, Some("5")),
                (MIN_PASSWORD_VAR, Some("12")),
            ],
            || {
                let settings = settings_from_env().unwrap();
                assert_eq!(settings.base_url, "https://id.example.test/tenants/yz");
                assert_eq!(settings.api_key.as_deref(), Some("test-key"));
                assert_eq!(settings.timeout_secs, 5);
                assert_eq!(settings.min_password_length, 12);
            },
        );
    }

    #[test]
    fn test_unparseable_timeout_is_an_error() {
        temp_env::with_var(TIMEOUT_VAR, Some("soon"), || {
            let result = settings_from_env();
            assert!(matches!(
                result,
                Err(SettingsError::Invalid {
                    name: TIMEOUT_VAR,
                    ..
                })
            ));
        });
    }
}

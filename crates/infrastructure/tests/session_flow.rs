//! Integration tests for the account session core.
//!
//! These tests verify the complete flow of signing up, signing in and
//! signing out through the session store, wired to the in-memory identity
//! provider.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use yumzoom_application::{AuthOutcome, SessionStore};
use yumzoom_domain::{PasswordPolicy, SessionErrorKind, SignInRequest, SignUpRequest};
use yumzoom_infrastructure::MemoryIdentityProvider;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn store_with_account(email: &str, password: &str) -> SessionStore {
    let provider = MemoryIdentityProvider::new();
    provider.seed_account(email, password);
    SessionStore::new(Arc::new(provider))
}

#[tokio::test]
async fn test_sign_in_with_known_account() {
    init_tracing();
    let store = store_with_account("a@x.com", "secret-enough");

    let outcome = store
        .sign_in(SignInRequest::new("a@x.com", "secret-enough"))
        .await;

    assert!(outcome.is_success());
    let state = store.snapshot();
    assert_eq!(
        state.identity.map(|i| i.email),
        Some("a@x.com".to_string())
    );
    assert!(state.phase.is_idle());
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_sign_in_with_wrong_password() {
    init_tracing();
    let store = store_with_account("a@x.com", "secret-enough");

    let outcome = store.sign_in(SignInRequest::new("a@x.com", "wrong")).await;

    assert!(!outcome.is_success());
    let state = store.snapshot();
    assert!(state.identity.is_none());
    assert!(state.phase.is_idle());
    assert_eq!(state.error_message(), Some("invalid credentials"));
}

#[tokio::test]
async fn test_sign_up_then_sign_out_round_trip() {
    init_tracing();
    let provider = MemoryIdentityProvider::new();
    let store = SessionStore::new(Arc::new(provider.clone()));

    let request = SignUpRequest::new("new@x.com", "secret-enough", "Ada", "Lovelace");
    let outcome = store.sign_up(request).await;

    assert!(outcome.is_success());
    assert!(store.is_authenticated());
    assert_eq!(provider.account_count(), 1);

    let outcome = store.sign_out().await;

    assert_eq!(outcome, AuthOutcome::SignedOut);
    assert!(!store.is_authenticated());
    assert!(store.error().is_none());

    // The account survives the session; signing back in works.
    let outcome = store
        .sign_in(SignInRequest::new("new@x.com", "secret-enough"))
        .await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_duplicate_sign_up_reports_existing_account() {
    init_tracing();
    let provider = MemoryIdentityProvider::new();
    let store = SessionStore::new(Arc::new(provider.clone()));

    let request = SignUpRequest::new("dup@x.com", "secret-enough", "Ada", "Lovelace");
    assert!(store.sign_up(request.clone()).await.is_success());
    store.sign_out().await;

    let outcome = store.sign_up(request).await;

    assert!(!outcome.is_success());
    assert!(store.identity().is_none());
    assert_eq!(
        store.snapshot().error_message(),
        Some("an account with this email already exists")
    );
    assert_eq!(provider.account_count(), 1);
}

#[tokio::test]
async fn test_sign_up_below_policy_never_registers() {
    init_tracing();
    let provider = MemoryIdentityProvider::with_policy(PasswordPolicy { min_length: 12 });
    let store = SessionStore::new(Arc::new(provider.clone()));

    let request = SignUpRequest::new("new@x.com", "too-short", "Ada", "Lovelace");
    let outcome = store.sign_up(request).await;

    let AuthOutcome::Failed(error) = outcome else {
        panic!("expected a validation failure");
    };
    assert_eq!(error.kind, SessionErrorKind::Validation);
    assert_eq!(provider.account_count(), 0);
}

#[tokio::test]
async fn test_clear_error_after_failed_sign_in() {
    init_tracing();
    let store = store_with_account("a@x.com", "secret-enough");

    store.sign_in(SignInRequest::new("a@x.com", "wrong")).await;
    assert!(store.error().is_some());

    store.clear_error();

    let state = store.snapshot();
    assert!(state.error.is_none());
    assert!(state.identity.is_none());
    assert!(state.phase.is_idle());
}

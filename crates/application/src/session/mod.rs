//! Session state store for the authentication core.
//!
//! This module provides:
//! - The injectable session state container
//! - Explicit operation outcomes for credential flows

mod store;

pub use store::{AuthOutcome, SessionStore};

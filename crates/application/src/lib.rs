//! YumZoom Application - Session orchestration
//!
//! This crate holds the session state store and the port through which it
//! reaches the external identity provider. Concrete adapters live in the
//! infrastructure crate.

pub mod ports;
pub mod session;

pub use ports::IdentityProvider;
pub use session::{AuthOutcome, SessionStore};

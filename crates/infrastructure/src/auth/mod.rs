//! Identity provider adapters.
//!
//! This module provides:
//! - An HTTP adapter speaking the identity service's JSON endpoints
//! - An in-memory provider for tests and local development

mod http_provider;
mod memory_provider;

pub use http_provider::HttpIdentityProvider;
pub use memory_provider::MemoryIdentityProvider;

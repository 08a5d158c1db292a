//! YumZoom Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod auth;
pub mod config;

pub use auth::{HttpIdentityProvider, MemoryIdentityProvider};
pub use config::{SettingsError, settings_from_env};

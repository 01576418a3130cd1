//! # storio-rs-core
//!
//! Core types, settings, and error types shared by the storio-rs crates.
//! This crate has no storage dependencies and provides the foundation for the others.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Library settings
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{StorioError, StorioResult};
pub use settings::Settings;

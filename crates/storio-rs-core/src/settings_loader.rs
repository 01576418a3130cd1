//! Settings loading from configuration files.
//!
//! [`Settings`] can be read from TOML or JSON. Keys missing from the document
//! keep their defaults, and environment variables override both:
//!
//! | Env Var | Setting |
//! |---|---|
//! | `STORIO_DEBUG` | `debug` |
//! | `STORIO_LOG_LEVEL` | `log_level` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use storio_rs_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/storio.toml").unwrap();
//! let settings = settings_loader::from_json_file_with_env("config/storio.json").unwrap();
//! ```

use std::path::Path;

use crate::error::{StorioError, StorioResult};
use crate::settings::Settings;

/// Environment variable overriding [`Settings::debug`].
pub const ENV_DEBUG: &str = "STORIO_DEBUG";

/// Environment variable overriding [`Settings::log_level`].
pub const ENV_LOG_LEVEL: &str = "STORIO_LOG_LEVEL";

/// Parses settings from a TOML document.
pub fn from_toml_str(toml_str: &str) -> StorioResult<Settings> {
    toml::from_str(toml_str)
        .map_err(|e| StorioError::ConfigurationError(format!("invalid TOML settings: {e}")))
}

/// Parses settings from a JSON document.
pub fn from_json_str(json_str: &str) -> StorioResult<Settings> {
    serde_json::from_str(json_str)
        .map_err(|e| StorioError::ConfigurationError(format!("invalid JSON settings: {e}")))
}

/// Reads settings from a TOML file. Read failures surface as [`StorioError::IoError`].
pub fn from_toml_file(path: impl AsRef<Path>) -> StorioResult<Settings> {
    from_toml_str(&std::fs::read_to_string(path)?)
}

/// Reads settings from a JSON file. Read failures surface as [`StorioError::IoError`].
pub fn from_json_file(path: impl AsRef<Path>) -> StorioResult<Settings> {
    from_json_str(&std::fs::read_to_string(path)?)
}

/// Reads a TOML file, then applies environment overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> StorioResult<Settings> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Reads a JSON file, then applies environment overrides.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> StorioResult<Settings> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Defaults with environment overrides applied.
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `STORIO_*` overrides in place.
///
/// `STORIO_DEBUG` is true for "true", "1" or "yes" (any case) and false otherwise.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var(ENV_DEBUG) {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var(ENV_LOG_LEVEL) {
        settings.log_level = val;
    }
}

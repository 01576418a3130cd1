//! Settings for storio-rs.
//!
//! [`Settings`] holds the library configuration. Load it with the helpers in
//! [`settings_loader`](crate::settings_loader) or build it directly.

use serde::{Deserialize, Serialize};

/// The complete set of library settings.
///
/// # Examples
///
/// ```
/// use storio_rs_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled. Selects pretty log output over JSON.
    pub debug: bool,
    /// The log level filter (e.g. "info", "debug", "storio_rs_sqlite=trace").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert!(s.debug);
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let s: Settings = serde_json::from_str(r#"{"log_level": "debug"}"#).unwrap();
        assert!(s.debug);
        assert_eq!(s.log_level, "debug");
    }

    #[test]
    fn test_settings_serde_roundtrip() {
        let s = Settings {
            debug: false,
            log_level: "warn".to_string(),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}

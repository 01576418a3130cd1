//! Logging integration for storio-rs.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-query spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info", "warn",
/// "error"). In debug mode a pretty, human-readable format is used; otherwise
/// a structured JSON format is used.
///
/// Calling this more than once is harmless: later calls leave the already
/// installed subscriber in place.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for the execution of a raw query.
///
/// Attach this span around query execution so that all log entries emitted
/// while the statement runs include its SQL text.
///
/// # Examples
///
/// ```
/// use storio_rs_core::logging::query_span;
///
/// let span = query_span("SELECT * FROM tweets");
/// let _guard = span.enter();
/// tracing::info!("executing");
/// ```
pub fn query_span(sql: &str) -> tracing::Span {
    tracing::info_span!("raw_query", sql = sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        let settings = Settings {
            debug: false,
            log_level: "not a valid filter [[".to_string(),
        };
        setup_logging(&settings);
        setup_logging(&Settings::default());
        tracing::info!("still logging");
    }

    #[test]
    fn test_query_span_enter() {
        let span = query_span("SELECT 1");
        let _guard = span.enter();
        tracing::debug!("inside span");
    }
}

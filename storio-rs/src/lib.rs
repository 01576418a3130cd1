//! # storio-rs
//!
//! Raw SQL queries that take part in table-based change notification.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient access.
//! You can depend on `storio-rs` to get everything, or depend on individual
//! crates for finer-grained control.
//!
//! ```
//! use storio_rs::prelude::*;
//!
//! let query = RawQuery::builder()
//!     .query("DELETE FROM tweets WHERE id = ?")?
//!     .args([42])
//!     .affects_tables(["tweets"])
//!     .build()?;
//! assert_eq!(query.changes(), Some(Changes::new(["tweets"])));
//! # Ok::<(), StorioError>(())
//! ```

/// Error types, settings, and logging setup.
pub use storio_rs_core as core;

/// Raw queries, bind values, and change notifications.
#[cfg(feature = "sqlite")]
pub use storio_rs_sqlite as sqlite;

// Third-party re-exports.
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

/// The most commonly used types, importable in one line.
pub mod prelude {
    pub use storio_rs_core::logging::setup_logging;
    pub use storio_rs_core::{Settings, StorioError, StorioResult};

    #[cfg(feature = "sqlite")]
    pub use storio_rs_sqlite::{Changes, RawQuery, Value};
}

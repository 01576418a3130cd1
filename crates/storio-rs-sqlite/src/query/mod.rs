//! Query objects.
//!
//! - [`raw`] - Raw SQL statements with bind arguments and notification tables

pub mod raw;

pub use raw::{CompleteRawQueryBuilder, IntoQueryText, RawQuery, RawQueryBuilder};

//! # storio-rs-sqlite
//!
//! Query objects for running SQL against SQLite while taking part in
//! table-based change notification. A [`RawQuery`](query::RawQuery) pairs a
//! caller-written statement with its bind [`Value`](value::Value)s and the
//! tables it observes and affects; executing layers turn the affected tables
//! into a [`Changes`](changes::Changes) notification.
//!
//! ## Module Overview
//!
//! - [`query`] - [`RawQuery`](query::RawQuery) and its builders
//! - [`value`] - The [`Value`](value::Value) bind argument enum
//! - [`changes`] - The [`Changes`](changes::Changes) notification payload

// - doc_markdown: backtick requirements for documentation items are too strict
// - return_self_not_must_use: builder pattern methods are self-documenting
// - use_self: explicit type names are clearer in some contexts
// - match_same_arms: per-variant equality arms read better unmerged
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::use_self)]
#![allow(clippy::match_same_arms)]

pub mod changes;
pub mod query;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use changes::Changes;
pub use query::{CompleteRawQueryBuilder, IntoQueryText, RawQuery, RawQueryBuilder};
pub use value::Value;

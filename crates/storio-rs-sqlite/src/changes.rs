//! Table change notifications.
//!
//! A [`Changes`] value names the tables touched by a statement. The surrounding
//! notification bus delivers it to subscribers of any query that observes one
//! of those tables.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The set of tables affected by a write.
///
/// # Examples
///
/// ```
/// use storio_rs_sqlite::Changes;
///
/// let changes = Changes::new(["tweets", "users"]);
/// assert!(changes.contains("tweets"));
/// assert!(!changes.contains("Tweets"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Changes {
    affected_tables: BTreeSet<String>,
}

impl Changes {
    /// Creates a notification for the given tables. Duplicates collapse.
    pub fn new<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            affected_tables: tables.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the affected table names.
    pub fn affected_tables(&self) -> &BTreeSet<String> {
        &self.affected_tables
    }

    /// Returns `true` if `table` is among the affected tables.
    ///
    /// Table names are compared case-sensitively.
    pub fn contains(&self, table: &str) -> bool {
        self.affected_tables.contains(table)
    }

    /// Returns `true` if no table is affected.
    pub fn is_empty(&self) -> bool {
        self.affected_tables.is_empty()
    }
}

impl fmt::Display for Changes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Changes{affected_tables=")?;
        crate::query::raw::write_list(f, &self.affected_tables)?;
        f.write_str("}")
    }
}

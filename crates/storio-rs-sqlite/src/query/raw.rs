//! Raw SQL query support.
//!
//! A [`RawQuery`] carries a SQL statement written by the caller, its bind
//! arguments, and the table names it takes part in for change notification:
//!
//! - `observes_tables`: changes to these tables re-deliver the query's results
//!   to its subscribers.
//! - `affects_tables`: after execution, subscribers of these tables are
//!   notified through a [`Changes`] value.
//!
//! Instances are immutable and only produced by the two-stage builder. The
//! first stage accepts nothing but the SQL text, so a builder that can `build`
//! always holds a query.
//!
//! # Examples
//!
//! ```
//! use storio_rs_sqlite::query::RawQuery;
//!
//! let query = RawQuery::builder()
//!     .query("UPDATE tweets SET read = 1 WHERE author = ?")?
//!     .args(["artem"])
//!     .affects_tables(["tweets"])
//!     .build()?;
//!
//! assert_eq!(query.args().len(), 1);
//! assert!(query.changes().unwrap().contains("tweets"));
//! # Ok::<(), storio_rs_core::StorioError>(())
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use storio_rs_core::{StorioError, StorioResult};

use crate::changes::Changes;
use crate::value::{write_quoted, Value};

/// A raw SQL statement with bind arguments and notification tables.
///
/// Two queries are equal when all four fields are equal. Table sets compare
/// without regard to insertion order; table names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQueryFields")]
pub struct RawQuery {
    query: String,
    args: Vec<Value>,
    observes_tables: BTreeSet<String>,
    affects_tables: BTreeSet<String>,
}

impl RawQuery {
    /// Starts building a raw query. The SQL text must be supplied first.
    pub const fn builder() -> RawQueryBuilder {
        RawQueryBuilder { _private: () }
    }

    /// Returns a builder pre-populated with this query's fields.
    pub fn to_builder(&self) -> CompleteRawQueryBuilder {
        CompleteRawQueryBuilder {
            query: self.query.clone(),
            args: self.args.clone(),
            observes_tables: self.observes_tables.clone(),
            affects_tables: self.affects_tables.clone(),
        }
    }

    /// Returns the SQL text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the bind arguments in order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Returns the tables whose changes re-deliver this query.
    pub fn observes_tables(&self) -> &BTreeSet<String> {
        &self.observes_tables
    }

    /// Returns the tables this statement is declared to modify.
    pub fn affects_tables(&self) -> &BTreeSet<String> {
        &self.affects_tables
    }

    /// Returns the notification to emit after executing this statement.
    ///
    /// `None` when the query declares no affected tables.
    pub fn changes(&self) -> Option<Changes> {
        if self.affects_tables.is_empty() {
            None
        } else {
            Some(Changes::new(self.affects_tables.iter().cloned()))
        }
    }
}

impl fmt::Display for RawQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawQuery{query=")?;
        write_quoted(f, &self.query)?;
        f.write_str(", args=")?;
        write_list(f, &self.args)?;
        f.write_str(", observes_tables=")?;
        write_list(f, &self.observes_tables)?;
        f.write_str(", affects_tables=")?;
        write_list(f, &self.affects_tables)?;
        f.write_str("}")
    }
}

pub(crate) fn write_list<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

/// SQL text accepted by [`RawQueryBuilder::query`].
///
/// `None` stands for an absent query and is rejected with
/// [`StorioError::NullQuery`].
pub trait IntoQueryText {
    /// Converts into the query text, or `None` when absent.
    fn into_query_text(self) -> Option<String>;
}

impl IntoQueryText for &str {
    fn into_query_text(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoQueryText for String {
    fn into_query_text(self) -> Option<String> {
        Some(self)
    }
}

impl IntoQueryText for &String {
    fn into_query_text(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: IntoQueryText> IntoQueryText for Option<T> {
    fn into_query_text(self) -> Option<String> {
        self.and_then(IntoQueryText::into_query_text)
    }
}

fn validate_query(query: Option<String>) -> StorioResult<String> {
    match query {
        None => {
            tracing::warn!("rejected raw query: text is absent");
            Err(StorioError::NullQuery)
        }
        Some(query) if query.is_empty() => {
            tracing::warn!("rejected raw query: text is empty");
            Err(StorioError::EmptyQuery)
        }
        Some(query) => Ok(query),
    }
}

/// First builder stage: only the SQL text can be set.
#[derive(Debug, Clone, Copy)]
pub struct RawQueryBuilder {
    _private: (),
}

impl RawQueryBuilder {
    /// Sets the SQL text.
    ///
    /// Fails with [`StorioError::NullQuery`] for `None` and
    /// [`StorioError::EmptyQuery`] for `""`.
    pub fn query(self, query: impl IntoQueryText) -> StorioResult<CompleteRawQueryBuilder> {
        let query = validate_query(query.into_query_text())?;
        Ok(CompleteRawQueryBuilder {
            query,
            args: Vec::new(),
            observes_tables: BTreeSet::new(),
            affects_tables: BTreeSet::new(),
        })
    }
}

/// Second builder stage: holds a query and accepts the optional fields.
///
/// Every setter replaces the previous value of its field.
#[derive(Debug, Clone)]
pub struct CompleteRawQueryBuilder {
    query: String,
    args: Vec<Value>,
    observes_tables: BTreeSet<String>,
    affects_tables: BTreeSet<String>,
}

impl CompleteRawQueryBuilder {
    /// Replaces the SQL text. Validated the same way as the first stage.
    pub fn query(mut self, query: impl IntoQueryText) -> StorioResult<Self> {
        self.query = validate_query(query.into_query_text())?;
        Ok(self)
    }

    /// Replaces the bind arguments.
    pub fn args<I, V>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the set of observed tables.
    pub fn observes_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.observes_tables = tables.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the set of affected tables.
    pub fn affects_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affects_tables = tables.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the query, checking the SQL text once more.
    pub fn build(self) -> StorioResult<RawQuery> {
        let query = validate_query(Some(self.query))?;
        tracing::debug!(
            sql = %query,
            args = self.args.len(),
            observes = self.observes_tables.len(),
            affects = self.affects_tables.len(),
            "built raw query"
        );
        Ok(RawQuery {
            query,
            args: self.args,
            observes_tables: self.observes_tables,
            affects_tables: self.affects_tables,
        })
    }
}

/// Serialized form of [`RawQuery`]; deserialization goes through the builder.
#[derive(Deserialize)]
struct RawQueryFields {
    query: Option<String>,
    #[serde(default)]
    args: Vec<Value>,
    #[serde(default)]
    observes_tables: BTreeSet<String>,
    #[serde(default)]
    affects_tables: BTreeSet<String>,
}

impl TryFrom<RawQueryFields> for RawQuery {
    type Error = StorioError;

    fn try_from(fields: RawQueryFields) -> StorioResult<Self> {
        RawQuery::builder()
            .query(fields.query)?
            .args(fields.args)
            .observes_tables(fields.observes_tables)
            .affects_tables(fields.affects_tables)
            .build()
    }
}

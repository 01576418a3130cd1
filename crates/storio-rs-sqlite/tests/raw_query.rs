//! Integration tests for the raw query builder.
//!
//! Tests cover: query text validation on first and later calls, defaults for
//! unset collections, last-call-wins table sets, copy through `to_builder`,
//! and building with every field set.

use std::collections::BTreeSet;
use std::error::Error as _;

use storio_rs_core::StorioError;
use storio_rs_sqlite::{RawQuery, Value};

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn assert_invalid_query(err: &StorioError) {
    assert_eq!(err.to_string(), "Query is null or empty");
    assert!(err.source().is_none());
}

// ═════════════════════════════════════════════════════════════════════
// 1. Query text validation
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_should_not_allow_null_query() {
    let err = RawQuery::builder().query(None::<&str>).unwrap_err();
    assert!(matches!(err, StorioError::NullQuery));
    assert_invalid_query(&err);
}

#[test]
fn test_should_not_allow_empty_query() {
    let err = RawQuery::builder().query("").unwrap_err();
    assert!(matches!(err, StorioError::EmptyQuery));
    assert_invalid_query(&err);
}

#[test]
fn test_complete_builder_should_not_allow_null_query() {
    let err = RawQuery::builder()
        .query("test_query")
        .unwrap()
        .query(None::<&str>)
        .unwrap_err();
    assert!(matches!(err, StorioError::NullQuery));
    assert_invalid_query(&err);
}

#[test]
fn test_complete_builder_should_not_allow_empty_query() {
    let err = RawQuery::builder()
        .query("test_query")
        .unwrap()
        .query(String::new())
        .unwrap_err();
    assert!(matches!(err, StorioError::EmptyQuery));
    assert_invalid_query(&err);
}

#[test]
fn test_complete_builder_should_update_query() {
    let raw_query = RawQuery::builder()
        .query("old_query")
        .unwrap()
        .query("new_query")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(raw_query.query(), "new_query");
}

#[test]
fn test_any_non_empty_query_is_kept_verbatim() {
    for sql in ["x", "lalala I know SQL", "SELECT * FROM t WHERE name = 'ü'", "\n"] {
        let raw_query = RawQuery::builder().query(sql).unwrap().build().unwrap();
        assert_eq!(raw_query.query(), sql);
    }
}

// ═════════════════════════════════════════════════════════════════════
// 2. Defaults for unset collections
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_unset_collections_are_empty() {
    let raw_query = RawQuery::builder()
        .query("lalala I know SQL")
        .unwrap()
        .build()
        .unwrap();

    assert!(raw_query.args().is_empty());
    assert!(raw_query.observes_tables().is_empty());
    assert!(raw_query.affects_tables().is_empty());
}

// ═════════════════════════════════════════════════════════════════════
// 3. Table sets are replaced, not merged
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_should_rewrite_affects_tables_on_second_call() {
    let raw_query = RawQuery::builder()
        .query("test_query")
        .unwrap()
        .affects_tables(["first_call"])
        .affects_tables(["second_call"])
        .build()
        .unwrap();

    assert_eq!(raw_query.affects_tables(), &set(&["second_call"]));
}

#[test]
fn test_should_rewrite_observes_tables_on_second_call() {
    let raw_query = RawQuery::builder()
        .query("test_query")
        .unwrap()
        .observes_tables(["first_call"])
        .observes_tables(["second_call"])
        .build()
        .unwrap();

    assert_eq!(raw_query.observes_tables(), &set(&["second_call"]));
}

// ═════════════════════════════════════════════════════════════════════
// 4. Building with every field, and copying through to_builder
// ═════════════════════════════════════════════════════════════════════

fn complete_query() -> RawQuery {
    RawQuery::builder()
        .query("test_query")
        .unwrap()
        .args(["arg1", "arg2", "arg3"])
        .observes_tables(["table_to_observe_1", "table_to_observe_2"])
        .affects_tables(["table_to_affect_1", "table_to_affect_2"])
        .build()
        .unwrap()
}

#[test]
fn test_created_through_to_builder_query_should_be_equal() {
    let first_query = complete_query();
    let second_query = first_query.to_builder().build().unwrap();

    assert_eq!(second_query, first_query);
}

#[test]
fn test_build_with_normal_values() {
    let raw_query = complete_query();

    assert_eq!(raw_query.query(), "test_query");
    assert_eq!(
        raw_query.args(),
        &[
            Value::from("arg1"),
            Value::from("arg2"),
            Value::from("arg3"),
        ]
    );
    assert_eq!(
        raw_query.observes_tables(),
        &set(&["table_to_observe_2", "table_to_observe_1"])
    );
    assert_eq!(
        raw_query.affects_tables(),
        &set(&["table_to_affect_1", "table_to_affect_2"])
    );
}

#[test]
fn test_display_mentions_every_field() {
    let text = complete_query().to_string();
    for part in [
        "test_query",
        "'arg1'",
        "'arg3'",
        "table_to_observe_1",
        "table_to_observe_2",
        "table_to_affect_1",
        "table_to_affect_2",
    ] {
        assert!(text.contains(part), "{text} should contain {part}");
    }
}

#[test]
fn test_changes_carry_affected_tables() {
    let changes = complete_query().changes().unwrap();
    assert_eq!(
        changes.affected_tables(),
        &set(&["table_to_affect_1", "table_to_affect_2"])
    );
    assert!(!changes.contains("table_to_observe_1"));
}

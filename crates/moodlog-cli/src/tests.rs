//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use chrono::Utc;
use moodlog_core::db::{Database, EntryWindow};

use crate::commands::{self, truncate};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

// ========== Log Command Tests ==========

#[test]
fn test_cmd_log_records_entry() {
    let db = setup_test_db();
    let result = commands::cmd_log(
        &db,
        "default",
        Some(7),
        Some("good"),
        Some("sunny"),
        &["Family".to_string()],
        Some("walked in the park".to_string()),
    );
    assert!(result.is_ok());

    let entries = db
        .fetch_entries("default", &EntryWindow::default(), Utc::now())
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood, Some(7));
    // interaction labels are normalized to lowercase at ingestion
    assert_eq!(entries[0].interaction_with, vec!["family"]);
}

#[test]
fn test_cmd_log_rejects_out_of_range_mood() {
    let db = setup_test_db();
    let result = commands::cmd_log(&db, "default", Some(11), None, None, &[], None);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("between"));
}

#[test]
fn test_cmd_log_rejects_unknown_labels() {
    let db = setup_test_db();
    let result = commands::cmd_log(&db, "default", Some(5), Some("dreadful"), None, &[], None);
    assert!(result.is_err());

    let result = commands::cmd_log(&db, "default", Some(5), None, Some("foggy"), &[], None);
    assert!(result.is_err());
}

#[test]
fn test_cmd_log_allows_mood_only() {
    let db = setup_test_db();
    let result = commands::cmd_log(&db, "default", Some(5), None, None, &[], None);
    assert!(result.is_ok());
}

// ========== History Command Tests ==========

#[test]
fn test_cmd_history_empty_db() {
    let db = setup_test_db();
    assert!(commands::cmd_history(&db, "default", None).is_ok());
}

#[test]
fn test_cmd_history_with_entries_and_window() {
    let db = setup_test_db();
    for mood in [4, 6, 8] {
        commands::cmd_log(&db, "default", Some(mood), Some("fair"), None, &[], None).unwrap();
    }
    assert!(commands::cmd_history(&db, "default", None).is_ok());
    assert!(commands::cmd_history(&db, "default", Some(7)).is_ok());
}

// ========== Insights Command Tests ==========

#[test]
fn test_cmd_insights_text_and_json() {
    let db = setup_test_db();
    for mood in [4, 6, 8, 5, 7] {
        commands::cmd_log(
            &db,
            "default",
            Some(mood),
            Some("good"),
            Some("sunny"),
            &[],
            None,
        )
        .unwrap();
    }
    assert!(commands::cmd_insights(&db, "default", false).is_ok());
    assert!(commands::cmd_insights(&db, "default", true).is_ok());
}

#[test]
fn test_cmd_insights_scoped_to_user() {
    let db = setup_test_db();
    commands::cmd_log(&db, "someone-else", Some(9), None, None, &[], None).unwrap();
    // "default" still has no entries; command should succeed with the
    // keep-logging fallback rather than leak the other user's data
    assert!(commands::cmd_insights(&db, "default", false).is_ok());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_report_empty_db() {
    let db = setup_test_db();
    assert!(commands::cmd_report(&db, "default").is_ok());
}

#[test]
fn test_cmd_report_with_entries() {
    let db = setup_test_db();
    for mood in [3, 5, 7, 6, 8, 7, 6] {
        commands::cmd_log(&db, "default", Some(mood), None, None, &[], None).unwrap();
    }
    assert!(commands::cmd_report(&db, "default").is_ok());
}

// ========== Core Command Tests ==========

#[test]
fn test_cmd_init_status_reset_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("moodlog.db");

    assert!(commands::cmd_init(&db_path, true).is_ok());
    assert!(db_path.exists());

    let db = commands::open_db(&db_path, true).unwrap();
    commands::cmd_log(&db, "default", Some(6), None, None, &[], None).unwrap();
    drop(db);

    assert!(commands::cmd_status(&db_path, "default", true).is_ok());

    assert!(commands::cmd_reset(&db_path, true, true).is_ok());
    let db = commands::open_db(&db_path, true).unwrap();
    assert_eq!(db.entry_count("default").unwrap(), 0);
}

#[test]
fn test_cmd_reset_missing_db_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("missing.db");
    assert!(commands::cmd_reset(&db_path, true, true).is_err());
}

#[test]
fn test_history_day_window_excludes_old_rows() {
    let db = setup_test_db();
    let conn = db.conn().unwrap();
    conn.execute(
        "INSERT INTO mood_entries (user_id, mood, created_at) VALUES (?, ?, ?)",
        rusqlite::params!["default", 8, "2020-01-01 09:00:00"],
    )
    .unwrap();
    drop(conn);
    commands::cmd_log(&db, "default", Some(5), None, None, &[], None).unwrap();

    let entries = db
        .fetch_entries("default", &EntryWindow::last_days(7), Utc::now())
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood, Some(5));
}

// ========== Shared Utilities ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a much longer string", 10), "a much ...");
}

#[test]
fn test_cli_arguments_are_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}

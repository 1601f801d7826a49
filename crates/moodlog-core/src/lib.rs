//! Moodlog Core Library
//!
//! Shared functionality for the moodlog mood tracker:
//! - Encrypted SQLite storage for mood entries
//! - Windowed entry loading
//! - Aggregation over mood, sleep, weather, and interaction dimensions
//! - Rule-based insight synthesis with randomized phrasing

pub mod db;
pub mod error;
pub mod insights;
pub mod models;

/// Test fixtures shared across the workspace
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use db::{Database, EntryWindow, MAX_ENTRY_WINDOW};
pub use error::{Error, Result};
pub use insights::{
    compute_aggregates, derive_insights, AggregateSnapshot, IndexPicker, Insight, InsightEngine,
    InsightRule, RandomPicker, RuleKind,
};
pub use models::{MoodEntry, NewMoodEntry, SleepQuality, Trend, Weather};

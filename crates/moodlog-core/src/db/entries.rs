//! Mood check-in storage and the windowed entry loader

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Row};
use tracing::warn;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{MoodEntry, NewMoodEntry, SleepQuality, Weather};

/// Upper bound on entries fetched per window, bounding aggregation cost
pub const MAX_ENTRY_WINDOW: usize = 100;

/// Lookback window for loading entries
///
/// `days` limits by calendar time; `max_entries` limits by count and is
/// clamped to [`MAX_ENTRY_WINDOW`].
#[derive(Debug, Clone, Copy)]
pub struct EntryWindow {
    /// Only entries within the last N days of `now`; None for all history
    pub days: Option<u32>,
    /// Most-recent-K cap
    pub max_entries: usize,
}

impl Default for EntryWindow {
    fn default() -> Self {
        Self {
            days: None,
            max_entries: MAX_ENTRY_WINDOW,
        }
    }
}

impl EntryWindow {
    pub fn last_days(days: u32) -> Self {
        Self {
            days: Some(days),
            max_entries: MAX_ENTRY_WINDOW,
        }
    }

    fn limit(&self) -> i64 {
        self.max_entries.min(MAX_ENTRY_WINDOW).max(1) as i64
    }
}

impl Database {
    /// Record a new check-in, returning its id
    pub fn insert_entry(&self, user_id: &str, entry: &NewMoodEntry) -> Result<i64> {
        let conn = self.conn()?;

        let interactions = serde_json::to_string(&entry.interaction_with)?;

        conn.execute(
            r#"
            INSERT INTO mood_entries (user_id, mood, sleep_quality, weather, interaction_with, note)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                user_id,
                entry.mood,
                entry.sleep_quality.map(|s| s.as_str()),
                entry.weather.map(|w| w.as_str()),
                interactions,
                entry.note,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Load a user's entries for a lookback window, most recent first
    ///
    /// Returns an empty vec (not an error) when the user has no entries.
    /// Unrecognized sleep/weather labels and malformed interaction JSON are
    /// normalized to None/empty so one bad row never fails the whole load.
    pub fn fetch_entries(
        &self,
        user_id: &str,
        window: &EntryWindow,
        now: DateTime<Utc>,
    ) -> Result<Vec<MoodEntry>> {
        let conn = self.conn()?;

        let cutoff = window
            .days
            .map(|d| now - Duration::days(d as i64))
            .map(|c| c.format("%Y-%m-%d %H:%M:%S").to_string());

        let mut entries = Vec::new();
        match cutoff {
            Some(cutoff) => {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT id, user_id, created_at, mood, sleep_quality, weather, interaction_with, note
                    FROM mood_entries
                    WHERE user_id = ? AND created_at >= ?
                    ORDER BY created_at DESC
                    LIMIT ?
                    "#,
                )?;
                let rows = stmt.query_map(params![user_id, cutoff, window.limit()], row_to_entry)?;
                for row in rows {
                    entries.push(row?);
                }
            }
            None => {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT id, user_id, created_at, mood, sleep_quality, weather, interaction_with, note
                    FROM mood_entries
                    WHERE user_id = ?
                    ORDER BY created_at DESC
                    LIMIT ?
                    "#,
                )?;
                let rows = stmt.query_map(params![user_id, window.limit()], row_to_entry)?;
                for row in rows {
                    entries.push(row?);
                }
            }
        }

        Ok(entries)
    }

    /// Timestamp of the user's most recent check-in, if any
    pub fn last_entry_at(&self, user_id: &str) -> Result<Option<DateTime<Utc>>> {
        let conn = self.conn()?;
        let ts: Option<String> = conn
            .query_row(
                "SELECT created_at FROM mood_entries WHERE user_id = ? ORDER BY created_at DESC LIMIT 1",
                params![user_id],
                |row| row.get(0),
            )
            .ok();
        Ok(ts.map(|s| parse_datetime(&s)))
    }

    /// Count of a user's check-ins
    pub fn entry_count(&self, user_id: &str) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM mood_entries WHERE user_id = ?",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<MoodEntry> {
    let id: i64 = row.get(0)?;
    let created_at: String = row.get(2)?;
    let sleep_quality: Option<String> = row.get(4)?;
    let weather: Option<String> = row.get(5)?;
    let interactions: Option<String> = row.get(6)?;

    // Degrade gracefully on labels the enums don't know - upstream
    // validation is not this layer's job
    let sleep_quality = sleep_quality.as_deref().and_then(|s| {
        SleepQuality::from_str(s)
            .map_err(|_| warn!(entry_id = id, label = s, "Ignoring unknown sleep quality label"))
            .ok()
    });
    let weather = weather.as_deref().and_then(|w| {
        Weather::from_str(w)
            .map_err(|_| warn!(entry_id = id, label = w, "Ignoring unknown weather label"))
            .ok()
    });

    let interaction_with: Vec<String> = interactions
        .as_deref()
        .and_then(|raw| {
            serde_json::from_str(raw)
                .map_err(|e| warn!(entry_id = id, error = %e, "Ignoring malformed interaction list"))
                .ok()
        })
        .unwrap_or_default();

    Ok(MoodEntry {
        id,
        user_id: row.get(1)?,
        created_at: parse_datetime(&created_at),
        mood: row.get(3)?,
        sleep_quality,
        weather,
        interaction_with,
        note: row.get(7)?,
    })
}

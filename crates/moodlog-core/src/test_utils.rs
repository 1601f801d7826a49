//! Shared fixtures for unit tests
//!
//! Also available to downstream crates behind the `test-utils` feature.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::insights::IndexPicker;
use crate::models::{MoodEntry, SleepQuality, Weather};

/// A fixed "now" so windowing math is reproducible
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// A bare entry with no mood score and no dimension labels
pub fn entry_days_ago(id: i64, days_ago: u32) -> MoodEntry {
    MoodEntry {
        id,
        user_id: "default".to_string(),
        created_at: fixed_now() - Duration::days(days_ago as i64),
        mood: None,
        sleep_quality: None,
        weather: None,
        interaction_with: vec![],
        note: None,
    }
}

/// A fully-labeled entry: the given mood plus sunny weather, good sleep,
/// and a family interaction
pub fn scored_entry(id: i64, days_ago: u32, mood: i64) -> MoodEntry {
    MoodEntry {
        mood: Some(mood),
        sleep_quality: Some(SleepQuality::Good),
        weather: Some(Weather::Sunny),
        interaction_with: vec!["family".to_string()],
        ..entry_days_ago(id, days_ago)
    }
}

/// A scored entry labeled only with interaction partners
pub fn partner_entry(id: i64, days_ago: u32, mood: i64, partners: &[&str]) -> MoodEntry {
    MoodEntry {
        mood: Some(mood),
        interaction_with: partners.iter().map(|p| p.to_string()).collect(),
        ..entry_days_ago(id, days_ago)
    }
}

/// A scored entry labeled only with sleep quality
pub fn sleep_entry(id: i64, days_ago: u32, mood: i64, sleep: SleepQuality) -> MoodEntry {
    MoodEntry {
        mood: Some(mood),
        sleep_quality: Some(sleep),
        ..entry_days_ago(id, days_ago)
    }
}

/// A scored entry labeled only with weather
pub fn weather_entry(id: i64, days_ago: u32, mood: i64, weather: Weather) -> MoodEntry {
    MoodEntry {
        mood: Some(mood),
        weather: Some(weather),
        ..entry_days_ago(id, days_ago)
    }
}

/// Deterministic picker that replays a scripted index sequence, then zeros
pub struct SeqPicker {
    indices: Vec<usize>,
    pos: usize,
}

impl SeqPicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, pos: 0 }
    }

    /// Picker that always selects the first phrase
    pub fn zeros() -> Self {
        Self::new(vec![])
    }
}

impl IndexPicker for SeqPicker {
    fn pick(&mut self, _n: usize) -> usize {
        let idx = self.indices.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        idx
    }
}

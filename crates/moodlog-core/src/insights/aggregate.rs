//! Aggregation pass over a window of mood entries
//!
//! Everything here is deterministic: fixed input and a fixed `now` always
//! produce the same snapshot. Buckets are `BTreeMap`s so iteration order
//! (and therefore tie-breaking) never depends on hash state.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::models::{MoodEntry, SleepQuality, Trend, Weather};

/// Entries within this many days of now are "recent" and preferred
/// for correlation analysis over full history
pub const RECENT_WINDOW_DAYS: i64 = 60;

/// Minimum contributing entries before a bucket's average may be quoted
pub const MIN_BUCKET_SAMPLES: usize = 2;

/// Number of most recent chart points examined for a low-mood streak
pub const STREAK_WINDOW: usize = 5;

/// Chart points per half when classifying the short-term trend
const TREND_HALF: usize = 7;

/// Count and running sum of mood scores for one dimension value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bucket {
    pub count: usize,
    pub sum: f64,
}

impl Bucket {
    fn add(&mut self, score: f64) {
        self.count += 1;
        self.sum += score;
    }

    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// A bucket ranked by its average, carrying its key
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBucket<K> {
    pub key: K,
    pub average: f64,
    pub count: usize,
}

/// Rank buckets by average descending, keeping only those with at least
/// `min_count` contributing entries. Ties resolve in key order (the sort
/// is stable over the map's ordered iteration).
pub fn rank_buckets<K: Clone + Ord>(
    buckets: &BTreeMap<K, Bucket>,
    min_count: usize,
) -> Vec<RankedBucket<K>> {
    let mut ranked: Vec<RankedBucket<K>> = buckets
        .iter()
        .filter(|(_, b)| b.count >= min_count)
        .map(|(k, b)| RankedBucket {
            key: k.clone(),
            average: b.average(),
            count: b.count,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Derived statistics for one window of entries
///
/// Recomputed fresh on every pass and never persisted. Also exposed to
/// callers (history stats, report rendering) so they can reuse the same
/// numbers without re-deriving them from insight text.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateSnapshot {
    /// Total entries supplied
    pub entry_count: usize,
    /// Entries within the last 60 days
    pub recent_count: usize,
    /// Entries carrying a valid 1-10 mood score (the chart points)
    pub scored_count: usize,
    /// Mean mood over the chart points (0.0 when none)
    pub mean: f64,
    /// Population standard deviation over the chart points
    pub std_dev: f64,
    /// 7-vs-7 comparison over the most recent 14 chart points
    pub trend: Trend,
    /// The last chart points, oldest first (at most [`STREAK_WINDOW`])
    pub last_five: Vec<f64>,
    /// Valid mood scores within the recent window, oldest first
    pub recent_moods: Vec<f64>,
    /// Mean of `recent_moods` (0.0 when empty)
    pub recent_mean: f64,
    /// At least half the day-over-day deltas in the recent window are negative
    pub mostly_declining: bool,
    /// Mood by interaction partner, recent window only
    pub interaction_recent: BTreeMap<String, Bucket>,
    /// Mood by sleep quality, full history
    pub sleep_all: BTreeMap<SleepQuality, Bucket>,
    /// How often each weather coincided with excellent sleep, full history
    pub excellent_sleep_weather: BTreeMap<Weather, usize>,
    /// Mood by weather, recent window only
    pub weather_recent: BTreeMap<Weather, Bucket>,
    /// Mood by weather, full history (fallback when recent data is thin)
    pub weather_all: BTreeMap<Weather, Bucket>,
}

impl AggregateSnapshot {
    /// Run the aggregation pass over one window of entries.
    ///
    /// Input order does not matter; entries are sorted by timestamp
    /// internally. Entries missing a dimension value are excluded from that
    /// dimension's buckets.
    pub fn compute(entries: &[MoodEntry], now: DateTime<Utc>) -> Self {
        let mut ordered: Vec<&MoodEntry> = entries.iter().collect();
        ordered.sort_by_key(|e| e.created_at);

        let recent_cutoff = now - Duration::days(RECENT_WINDOW_DAYS);

        let mut chart: Vec<f64> = Vec::new();
        let mut recent_moods: Vec<f64> = Vec::new();
        let mut recent_count = 0usize;

        let mut interaction_recent: BTreeMap<String, Bucket> = BTreeMap::new();
        let mut sleep_all: BTreeMap<SleepQuality, Bucket> = BTreeMap::new();
        let mut excellent_sleep_weather: BTreeMap<Weather, usize> = BTreeMap::new();
        let mut weather_recent: BTreeMap<Weather, Bucket> = BTreeMap::new();
        let mut weather_all: BTreeMap<Weather, Bucket> = BTreeMap::new();

        for entry in &ordered {
            let is_recent = entry.created_at >= recent_cutoff;
            if is_recent {
                recent_count += 1;
            }

            let score = entry.mood_score();
            if let Some(score) = score {
                chart.push(score);
                if is_recent {
                    recent_moods.push(score);
                }
            }

            if let (Some(sleep), Some(score)) = (entry.sleep_quality, score) {
                sleep_all.entry(sleep).or_default().add(score);
            }

            if entry.sleep_quality == Some(SleepQuality::Excellent) {
                if let Some(weather) = entry.weather {
                    *excellent_sleep_weather.entry(weather).or_default() += 1;
                }
            }

            if let (Some(weather), Some(score)) = (entry.weather, score) {
                weather_all.entry(weather).or_default().add(score);
                if is_recent {
                    weather_recent.entry(weather).or_default().add(score);
                }
            }

            if is_recent {
                if let Some(score) = score {
                    for partner in &entry.interaction_with {
                        interaction_recent
                            .entry(partner.clone())
                            .or_default()
                            .add(score);
                    }
                }
            }
        }

        let scored_count = chart.len();
        let mean = mean_of(&chart);
        let std_dev = population_std_dev(&chart, mean);
        let trend = classify_trend(&chart);
        let last_five = chart
            .iter()
            .rev()
            .take(STREAK_WINDOW)
            .rev()
            .copied()
            .collect();

        let recent_mean = mean_of(&recent_moods);
        let mostly_declining = is_mostly_declining(&recent_moods);

        Self {
            entry_count: entries.len(),
            recent_count,
            scored_count,
            mean,
            std_dev,
            trend,
            last_five,
            recent_moods,
            recent_mean,
            mostly_declining,
            interaction_recent,
            sleep_all,
            excellent_sleep_weather,
            weather_recent,
            weather_all,
        }
    }
}

fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population formula: mean squared deviation from the mean, square-rooted
fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Split the most recent 14 chart points into two halves of 7 and compare
/// their means. Fewer than 14 points cannot be classified.
fn classify_trend(chart: &[f64]) -> Trend {
    if chart.len() < TREND_HALF * 2 {
        return Trend::Indeterminate;
    }
    let newer = &chart[chart.len() - TREND_HALF..];
    let older = &chart[chart.len() - TREND_HALF * 2..chart.len() - TREND_HALF];
    let newer_avg = mean_of(newer);
    let older_avg = mean_of(older);
    if newer_avg > older_avg {
        Trend::Improving
    } else if newer_avg < older_avg {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// A window reads as declining when at least half its day-over-day deltas
/// are negative
fn is_mostly_declining(moods: &[f64]) -> bool {
    if moods.len() < 2 {
        return false;
    }
    let deltas = moods.len() - 1;
    let declines = moods.windows(2).filter(|w| w[1] < w[0]).count();
    declines >= deltas / 2
}

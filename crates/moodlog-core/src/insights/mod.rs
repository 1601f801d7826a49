//! Insight derivation pipeline
//!
//! Entries flow through two stages: an aggregation pass that reduces a
//! window of entries to an [`AggregateSnapshot`], and a synthesis pass in
//! which the [`InsightEngine`] runs every registered rule over the snapshot
//! and accumulates the sentences that fire. Randomized phrasing is isolated
//! behind [`IndexPicker`] so everything else stays deterministic.

pub mod aggregate;
pub mod engine;
pub mod interaction;
pub mod phrases;
pub mod sleep;
pub mod trend;
pub mod types;
pub mod volatility;
pub mod weather;

pub use aggregate::{
    rank_buckets, AggregateSnapshot, Bucket, RankedBucket, MIN_BUCKET_SAMPLES, RECENT_WINDOW_DAYS,
    STREAK_WINDOW,
};
pub use engine::{
    InsightEngine, InsightRule, KEEP_LOGGING, LOG_MORE_RECENT, MIN_RECENT_ENTRIES,
    MIN_TOTAL_ENTRIES,
};
pub use interaction::InteractionMoodRule;
pub use phrases::{IndexPicker, RandomPicker};
pub use sleep::{SleepFrequencyRule, SleepWeatherRule};
pub use trend::{LowMoodStreakRule, RecentTrendRule};
pub use types::{Insight, RuleKind};
pub use volatility::VolatilityRule;
pub use weather::WeatherMoodRule;

use chrono::{DateTime, Utc};

use crate::models::MoodEntry;

/// Run the aggregation pass over one window of entries
pub fn compute_aggregates(entries: &[MoodEntry], now: DateTime<Utc>) -> AggregateSnapshot {
    AggregateSnapshot::compute(entries, now)
}

/// Derive insights with the built-in rules and the default random picker
pub fn derive_insights(entries: &[MoodEntry], now: DateTime<Utc>) -> Vec<Insight> {
    InsightEngine::new().derive(entries, now, &mut RandomPicker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_now, scored_entry};

    #[test]
    fn test_derive_insights_end_to_end() {
        let entries: Vec<_> = (0..10).map(|i| scored_entry(i, 2 + i as u32, 7)).collect();
        let insights = derive_insights(&entries, fixed_now());
        assert!(!insights.is_empty());
        assert!(insights.iter().all(|i| !i.text.is_empty()));
    }
}

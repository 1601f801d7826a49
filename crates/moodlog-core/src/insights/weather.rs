//! Weather-mood correlation rule

use super::aggregate::{rank_buckets, AggregateSnapshot, MIN_BUCKET_SAMPLES};
use super::engine::InsightRule;
use super::phrases::{
    pick_one, weather_compliments, weather_moderate, weather_warnings, IndexPicker,
};
use super::types::{Insight, RuleKind};

/// Rule that correlates weather conditions with mood
///
/// Prefers the recent window; when no recent condition has enough samples it
/// falls back to full history and summarizes every qualifying condition, best
/// average first. Either way a condition needs at least two contributing
/// entries before its average is quoted.
pub struct WeatherMoodRule {
    /// Recent-window average at or above this earns a compliment
    high_avg: f64,
    /// Recent-window average at or above this (but under `high_avg`) reads
    /// as moderate; below it, a warning
    moderate_avg: f64,
    /// Full-history compliment threshold, held stricter than the recent one
    high_avg_all: f64,
    /// Full-history moderate threshold
    moderate_avg_all: f64,
}

impl WeatherMoodRule {
    pub fn new() -> Self {
        Self {
            high_avg: 5.5,
            moderate_avg: 3.5,
            high_avg_all: 6.5,
            moderate_avg_all: 4.5,
        }
    }
}

impl Default for WeatherMoodRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for WeatherMoodRule {
    fn kind(&self) -> RuleKind {
        RuleKind::WeatherCorrelation
    }

    fn name(&self) -> &'static str {
        "Weather-mood correlation"
    }

    fn evaluate(&self, snapshot: &AggregateSnapshot, picker: &mut dyn IndexPicker) -> Vec<Insight> {
        let recent = rank_buckets(&snapshot.weather_recent, MIN_BUCKET_SAMPLES);
        if let Some(best) = recent.first() {
            let insight = if best.average >= self.high_avg {
                Insight::new(*pick_one(picker, &weather_compliments(best.key)))
            } else if best.average >= self.moderate_avg {
                Insight::new(weather_moderate(best.key))
            } else {
                Insight::new(*pick_one(picker, &weather_warnings(best.key)))
            };
            return vec![insight];
        }

        rank_buckets(&snapshot.weather_all, MIN_BUCKET_SAMPLES)
            .into_iter()
            .map(|bucket| {
                if bucket.average >= self.high_avg_all {
                    Insight::new(*pick_one(picker, &weather_compliments(bucket.key)))
                } else if bucket.average >= self.moderate_avg_all {
                    Insight::new(weather_moderate(bucket.key))
                } else {
                    Insight::new(*pick_one(picker, &weather_warnings(bucket.key)))
                }
            })
            .collect()
    }
}

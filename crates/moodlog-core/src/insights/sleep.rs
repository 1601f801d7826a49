//! Sleep quality rules
//!
//! Two rules draw on the sleep dimension: an overall frequency check across
//! all scored history, and a cross-dimension tip pairing excellent sleep
//! with the weather it happened under.

use crate::models::SleepQuality;

use super::aggregate::{AggregateSnapshot, MIN_BUCKET_SAMPLES};
use super::engine::InsightRule;
use super::phrases::{
    sleep_weather_tip, IndexPicker, DECENT_SLEEP, POOR_SLEEP_ALARM, SLEEP_NEEDS_WORK,
};
use super::types::{Insight, RuleKind};

/// Rule that checks how often sleep has been poor across all history
pub struct SleepFrequencyRule {
    /// Share of poor nights above which the alarm message fires
    alarm_ratio: f64,
}

impl SleepFrequencyRule {
    pub fn new() -> Self {
        Self { alarm_ratio: 0.4 }
    }
}

impl Default for SleepFrequencyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for SleepFrequencyRule {
    fn kind(&self) -> RuleKind {
        RuleKind::SleepFrequency
    }

    fn name(&self) -> &'static str {
        "Poor sleep frequency"
    }

    fn evaluate(&self, snapshot: &AggregateSnapshot, _picker: &mut dyn IndexPicker) -> Vec<Insight> {
        let count_of = |q: SleepQuality| {
            snapshot
                .sleep_all
                .get(&q)
                .map(|b| b.count)
                .unwrap_or_default()
        };
        let total: usize = snapshot.sleep_all.values().map(|b| b.count).sum();
        if total == 0 {
            // No sleep-labeled entries at all: nothing to say
            return vec![];
        }

        let poor = count_of(SleepQuality::Poor);
        if poor as f64 / total as f64 > self.alarm_ratio {
            return vec![Insight::urgent(POOR_SLEEP_ALARM)];
        }

        let restful = count_of(SleepQuality::Good) + count_of(SleepQuality::Excellent);
        let restless = poor + count_of(SleepQuality::Fair);
        if restful > restless {
            vec![Insight::new(DECENT_SLEEP)]
        } else {
            vec![Insight::new(SLEEP_NEEDS_WORK)]
        }
    }
}

/// Rule that ties excellent sleep to the weather it most often occurred under
pub struct SleepWeatherRule {
    /// Minimum excellent-sleep nights under one condition before the tip fires
    min_count: usize,
}

impl SleepWeatherRule {
    pub fn new() -> Self {
        Self {
            min_count: MIN_BUCKET_SAMPLES,
        }
    }
}

impl Default for SleepWeatherRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for SleepWeatherRule {
    fn kind(&self) -> RuleKind {
        RuleKind::SleepWeather
    }

    fn name(&self) -> &'static str {
        "Excellent sleep by weather"
    }

    fn evaluate(&self, snapshot: &AggregateSnapshot, _picker: &mut dyn IndexPicker) -> Vec<Insight> {
        // Strictly-greater comparison keeps the first condition in key order
        // on ties, matching the bucket maps' deterministic iteration
        let mut best = None;
        for (&weather, &count) in &snapshot.excellent_sleep_weather {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((weather, count)),
            }
        }

        match best {
            Some((weather, count)) if count >= self.min_count => {
                vec![Insight::new(sleep_weather_tip(weather))]
            }
            _ => vec![],
        }
    }
}

//! Insight engine - orchestrates the aggregation and synthesis stages

use chrono::{DateTime, Utc};

use crate::models::MoodEntry;

use super::aggregate::AggregateSnapshot;
use super::phrases::IndexPicker;
use super::types::{Insight, RuleKind};
use super::{
    InteractionMoodRule, LowMoodStreakRule, RecentTrendRule, SleepFrequencyRule, SleepWeatherRule,
    VolatilityRule, WeatherMoodRule,
};

/// Below this many total entries, only the keep-logging message is emitted
pub const MIN_TOTAL_ENTRIES: usize = 6;

/// Below this many recent (60-day) entries, only the log-more-recent message
/// is emitted
pub const MIN_RECENT_ENTRIES: usize = 3;

/// Fallback when there is too little history to say anything specific
pub const KEEP_LOGGING: &str =
    "Keep logging your mood consistently to gain more personalized insights.";

/// Fallback when history exists but the recent window is too thin
pub const LOG_MORE_RECENT: &str =
    "Log more recent entries to get current insights about your mood patterns.";

/// One decision rule over the aggregate snapshot
///
/// Rules are pure given the snapshot and the injected picker; each appends
/// the insights it fires (usually zero or one, the interaction rule up to
/// three) and never stops the sequence.
pub trait InsightRule: Send + Sync {
    /// Which rule family this is
    fn kind(&self) -> RuleKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate against the snapshot and return any firing insights
    fn evaluate(&self, snapshot: &AggregateSnapshot, picker: &mut dyn IndexPicker) -> Vec<Insight>;
}

/// The main engine: fixed rule order, accumulate every firing rule
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules in their fixed order:
    /// interaction, sleep frequency, sleep-by-weather, low-mood streak,
    /// recent trend, weather correlation, volatility.
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(InteractionMoodRule::new()));
        engine.register(Box::new(SleepFrequencyRule::new()));
        engine.register(Box::new(SleepWeatherRule::new()));
        engine.register(Box::new(LowMoodStreakRule::new()));
        engine.register(Box::new(RecentTrendRule::new()));
        engine.register(Box::new(WeatherMoodRule::new()));
        engine.register(Box::new(VolatilityRule::new()));

        engine
    }

    /// Register a rule (appended after the built-ins)
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Get the list of registered rule kinds, in evaluation order
    pub fn rule_kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    /// Derive insights for one window of entries.
    ///
    /// Pure given `now` and `picker`. Low-data windows short-circuit to a
    /// single generic message rather than erroring, so the caller always
    /// gets a valid (if generic) result.
    pub fn derive(
        &self,
        entries: &[MoodEntry],
        now: DateTime<Utc>,
        picker: &mut dyn IndexPicker,
    ) -> Vec<Insight> {
        if entries.len() < MIN_TOTAL_ENTRIES {
            return vec![Insight::new(KEEP_LOGGING)];
        }

        let snapshot = AggregateSnapshot::compute(entries, now);
        self.derive_from_snapshot(&snapshot, picker)
    }

    /// Synthesis stage only, for callers that already hold a snapshot
    pub fn derive_from_snapshot(
        &self,
        snapshot: &AggregateSnapshot,
        picker: &mut dyn IndexPicker,
    ) -> Vec<Insight> {
        if snapshot.entry_count < MIN_TOTAL_ENTRIES {
            return vec![Insight::new(KEEP_LOGGING)];
        }
        if snapshot.recent_count < MIN_RECENT_ENTRIES {
            return vec![Insight::new(LOG_MORE_RECENT)];
        }

        let mut insights = vec![];
        for rule in &self.rules {
            let fired = rule.evaluate(snapshot, picker);
            tracing::debug!(
                rule = rule.kind().as_str(),
                count = fired.len(),
                "Rule evaluation complete"
            );
            insights.extend(fired);
        }
        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{entry_days_ago, fixed_now, partner_entry, scored_entry, SeqPicker};

    #[test]
    fn test_engine_registers_rules_in_order() {
        let engine = InsightEngine::new();
        assert_eq!(
            engine.rule_kinds(),
            vec![
                RuleKind::Interaction,
                RuleKind::SleepFrequency,
                RuleKind::SleepWeather,
                RuleKind::LowMoodStreak,
                RuleKind::RecentTrend,
                RuleKind::WeatherCorrelation,
                RuleKind::Volatility,
            ]
        );
    }

    #[test]
    fn test_empty_input_returns_single_keep_logging_message() {
        let engine = InsightEngine::new();
        let insights = engine.derive(&[], fixed_now(), &mut SeqPicker::zeros());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, KEEP_LOGGING);
        assert!(!insights[0].urgent);
    }

    #[test]
    fn test_three_low_entries_short_circuit() {
        // 3 recent entries, moods [2, 3, 2], nothing else: still under the
        // 6-entry floor, so only the keep-logging message appears
        let engine = InsightEngine::new();
        let entries: Vec<_> = [(1i64, 2i64), (2, 3), (3, 2)]
            .iter()
            .map(|&(id, mood)| {
                let mut e = entry_days_ago(id, 5 + id as u32);
                e.mood = Some(mood);
                e
            })
            .collect();

        let insights = engine.derive(&entries, fixed_now(), &mut SeqPicker::zeros());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, KEEP_LOGGING);
    }

    #[test]
    fn test_stale_history_asks_for_recent_entries() {
        // plenty of history, but everything is older than 60 days
        let engine = InsightEngine::new();
        let entries: Vec<_> = (0..8).map(|i| scored_entry(i, 70 + i as u32, 6)).collect();

        let insights = engine.derive(&entries, fixed_now(), &mut SeqPicker::zeros());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, LOG_MORE_RECENT);
    }

    #[test]
    fn test_booster_and_drainer_reported_end_to_end() {
        // mother avg 8.0 over 3 entries, coworker avg 2.5 over 2, aunt once
        // at 10: both regulars get named, the one-off never does
        let engine = InsightEngine::new();
        let entries = vec![
            partner_entry(1, 5, 8, &["mother"]),
            partner_entry(2, 10, 9, &["mother"]),
            partner_entry(3, 15, 7, &["mother"]),
            partner_entry(4, 20, 2, &["coworker"]),
            partner_entry(5, 25, 3, &["coworker"]),
            partner_entry(6, 30, 10, &["aunt"]),
            partner_entry(7, 35, 6, &[]),
            partner_entry(8, 40, 5, &[]),
        ];

        let insights = engine.derive(&entries, fixed_now(), &mut SeqPicker::zeros());
        assert!(insights.iter().any(|i| i.text.contains("mother")));
        assert!(insights.iter().any(|i| i.text.contains("coworker")));
        assert!(insights.iter().all(|i| !i.text.contains("aunt")));
    }

    #[test]
    fn test_sunny_pair_draws_from_compliment_bank() {
        use crate::insights::phrases::weather_compliments;
        use crate::models::Weather;
        use crate::test_utils::weather_entry;

        let engine = InsightEngine::new();
        let mut entries = vec![
            weather_entry(1, 5, 6, Weather::Sunny),
            weather_entry(2, 10, 7, Weather::Sunny),
        ];
        entries.extend((3..7).map(|i| partner_entry(i, 10 + i as u32, 6, &[])));

        let insights = engine.derive(&entries, fixed_now(), &mut SeqPicker::zeros());
        let bank = weather_compliments(Weather::Sunny);
        assert!(insights.iter().any(|i| bank.contains(&i.text.as_str())));
    }

    #[test]
    fn test_rules_accumulate_rather_than_stop_at_first_match() {
        // 8 recent scored entries with sleep and weather labels: the sleep
        // frequency rule, trend narrative, weather rule, and volatility rule
        // all have enough data to say something
        let engine = InsightEngine::new();
        let entries: Vec<_> = (0..8).map(|i| scored_entry(i, 2 + i as u32, 6)).collect();

        let insights = engine.derive(&entries, fixed_now(), &mut SeqPicker::zeros());
        assert!(insights.len() >= 3, "expected several rules to fire, got {:?}", insights);
    }
}

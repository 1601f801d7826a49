//! Streak and recent-trend rules

use super::aggregate::{AggregateSnapshot, STREAK_WINDOW};
use super::engine::InsightRule;
use super::phrases::{
    pick_one, IndexPicker, LOW_MOOD_STREAK, MIDDLE_OF_THE_ROAD, POSITIVE_TREND, TOUGH_PATCH,
    TRENDING_DOWN,
};
use super::types::{Insight, RuleKind};

/// Rule that notices several low-mood days among the latest entries
pub struct LowMoodStreakRule {
    /// A score at or below this counts as a low day
    low_score: f64,
    /// How many low days among the streak window trigger the nudge
    min_low_days: usize,
}

impl LowMoodStreakRule {
    pub fn new() -> Self {
        Self {
            low_score: 4.0,
            min_low_days: 3,
        }
    }
}

impl Default for LowMoodStreakRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for LowMoodStreakRule {
    fn kind(&self) -> RuleKind {
        RuleKind::LowMoodStreak
    }

    fn name(&self) -> &'static str {
        "Low-mood streak"
    }

    fn evaluate(&self, snapshot: &AggregateSnapshot, _picker: &mut dyn IndexPicker) -> Vec<Insight> {
        debug_assert!(snapshot.last_five.len() <= STREAK_WINDOW);
        let low_days = snapshot
            .last_five
            .iter()
            .filter(|&&score| score <= self.low_score)
            .count();
        if low_days >= self.min_low_days {
            vec![Insight::new(LOW_MOOD_STREAK)]
        } else {
            vec![]
        }
    }
}

/// Rule that narrates the overall feel of the recent window
///
/// Always fires one of four messages once the engine's recent-data floor is
/// met, so an insight run never comes back without at least a mood summary.
pub struct RecentTrendRule {
    /// Recent average at or above this reads as a strong stretch
    high_mean: f64,
    /// Recent average at or below this reads as a tough patch
    low_mean: f64,
}

impl RecentTrendRule {
    pub fn new() -> Self {
        Self {
            high_mean: 5.5,
            low_mean: 3.5,
        }
    }
}

impl Default for RecentTrendRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for RecentTrendRule {
    fn kind(&self) -> RuleKind {
        RuleKind::RecentTrend
    }

    fn name(&self) -> &'static str {
        "Recent trend narrative"
    }

    fn evaluate(&self, snapshot: &AggregateSnapshot, picker: &mut dyn IndexPicker) -> Vec<Insight> {
        if snapshot.recent_mean >= self.high_mean && !snapshot.mostly_declining {
            vec![Insight::new(*pick_one(picker, &POSITIVE_TREND))]
        } else if snapshot.recent_mean <= self.low_mean {
            vec![Insight::urgent(TOUGH_PATCH)]
        } else if snapshot.mostly_declining {
            vec![Insight::new(TRENDING_DOWN)]
        } else {
            vec![Insight::new(MIDDLE_OF_THE_ROAD)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodEntry;
    use crate::test_utils::{fixed_now, scored_entry, SeqPicker};

    fn snapshot_of(entries: &[MoodEntry]) -> AggregateSnapshot {
        AggregateSnapshot::compute(entries, fixed_now())
    }

    #[test]
    fn test_three_low_of_last_five_fires_streak() {
        let moods = [7, 8, 3, 4, 2, 4];
        let entries: Vec<_> = moods
            .iter()
            .enumerate()
            .map(|(i, &m)| scored_entry(i as i64, (moods.len() - i) as u32, m))
            .collect();

        let insights =
            LowMoodStreakRule::new().evaluate(&snapshot_of(&entries), &mut SeqPicker::zeros());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, LOW_MOOD_STREAK);
    }

    #[test]
    fn test_two_low_days_is_not_a_streak() {
        let moods = [7, 8, 3, 7, 2, 7];
        let entries: Vec<_> = moods
            .iter()
            .enumerate()
            .map(|(i, &m)| scored_entry(i as i64, (moods.len() - i) as u32, m))
            .collect();

        let insights =
            LowMoodStreakRule::new().evaluate(&snapshot_of(&entries), &mut SeqPicker::zeros());
        assert!(insights.is_empty());
    }

    #[test]
    fn test_streak_only_counts_latest_entries() {
        // Old low days followed by five fresh good ones
        let moods = [2, 2, 2, 8, 8, 8, 8, 8];
        let entries: Vec<_> = moods
            .iter()
            .enumerate()
            .map(|(i, &m)| scored_entry(i as i64, (moods.len() - i) as u32, m))
            .collect();

        let insights =
            LowMoodStreakRule::new().evaluate(&snapshot_of(&entries), &mut SeqPicker::zeros());
        assert!(insights.is_empty());
    }

    #[test]
    fn test_strong_recent_window_draws_from_positive_bank() {
        let entries: Vec<_> = (0..5).map(|i| scored_entry(i, 2 + i as u32, 8)).collect();

        let insights =
            RecentTrendRule::new().evaluate(&snapshot_of(&entries), &mut SeqPicker::new(vec![1]));
        assert_eq!(insights.len(), 1);
        assert!(POSITIVE_TREND.contains(&insights[0].text.as_str()));
        assert!(!insights[0].urgent);
    }

    #[test]
    fn test_low_recent_window_is_urgent() {
        let entries: Vec<_> = (0..5).map(|i| scored_entry(i, 2 + i as u32, 2)).collect();

        let insights =
            RecentTrendRule::new().evaluate(&snapshot_of(&entries), &mut SeqPicker::zeros());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, TOUGH_PATCH);
        assert!(insights[0].urgent);
    }

    #[test]
    fn test_middling_but_declining_window_trends_down() {
        // Chronological moods 7, 6, 5, 4: every delta negative, average 5.5
        // would read as strong were it not mostly declining
        let moods = [7, 6, 5, 4];
        let entries: Vec<_> = moods
            .iter()
            .enumerate()
            .map(|(i, &m)| scored_entry(i as i64, (moods.len() - i) as u32, m))
            .collect();

        let insights =
            RecentTrendRule::new().evaluate(&snapshot_of(&entries), &mut SeqPicker::zeros());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, TRENDING_DOWN);
    }

    #[test]
    fn test_average_window_is_middle_of_the_road() {
        let moods = [4, 5, 5, 4, 5];
        let entries: Vec<_> = moods
            .iter()
            .enumerate()
            .map(|(i, &m)| scored_entry(i as i64, (moods.len() - i) as u32, m))
            .collect();

        let insights =
            RecentTrendRule::new().evaluate(&snapshot_of(&entries), &mut SeqPicker::zeros());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, MIDDLE_OF_THE_ROAD);
    }
}

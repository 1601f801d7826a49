//! Mood volatility rule

use super::aggregate::AggregateSnapshot;
use super::engine::InsightRule;
use super::phrases::{IndexPicker, LOW_BUT_STABLE, ROLLERCOASTER, STEADY_BALANCE};
use super::types::{Insight, RuleKind};

/// Rule that characterizes mood stability over the charted window
pub struct VolatilityRule {
    /// Mean at or below this counts as a low baseline
    low_mean: f64,
    /// Standard deviation at or above this counts as volatile
    swing_threshold: f64,
}

impl VolatilityRule {
    pub fn new() -> Self {
        Self {
            low_mean: 4.0,
            swing_threshold: 1.5,
        }
    }
}

impl Default for VolatilityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for VolatilityRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Volatility
    }

    fn name(&self) -> &'static str {
        "Mood volatility"
    }

    fn evaluate(&self, snapshot: &AggregateSnapshot, _picker: &mut dyn IndexPicker) -> Vec<Insight> {
        // A spread needs at least two scores to mean anything
        if snapshot.scored_count < 2 {
            return vec![];
        }

        if snapshot.mean <= self.low_mean && snapshot.std_dev < self.swing_threshold {
            vec![Insight::new(LOW_BUT_STABLE)]
        } else if snapshot.std_dev >= self.swing_threshold {
            vec![Insight::new(ROLLERCOASTER)]
        } else {
            vec![Insight::new(STEADY_BALANCE)]
        }
    }
}

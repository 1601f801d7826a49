//! Interaction-mood correlation rule
//!
//! Looks at who the user spent recent days with and singles out the top
//! mood booster and the worst mood drainer. The "none" and "others" labels
//! get their own wording: solitude and unfamiliar company read differently
//! from a named person.

use crate::models::{PARTNER_NONE, PARTNER_OTHERS};

use super::aggregate::{rank_buckets, AggregateSnapshot, MIN_BUCKET_SAMPLES};
use super::engine::InsightRule;
use super::phrases::{
    booster_phrases, drainer_phrases, neutral_phrase, pick_one, IndexPicker, OTHERS_BOOSTER,
    OTHERS_DRAINER, SOLO_BOOSTER, SOLO_DRAINER,
};
use super::types::{Insight, RuleKind};

/// Rule that correlates interaction partners with mood
pub struct InteractionMoodRule {
    /// Average above which the top partner counts as a booster
    booster_threshold: f64,
    /// Average at or below which the bottom partner counts as a drainer
    drainer_threshold: f64,
    /// Minimum recent entries per partner before their average is quoted
    min_samples: usize,
}

impl InteractionMoodRule {
    pub fn new() -> Self {
        Self {
            booster_threshold: 5.5,
            drainer_threshold: 3.5,
            min_samples: MIN_BUCKET_SAMPLES,
        }
    }
}

impl Default for InteractionMoodRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for InteractionMoodRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Interaction
    }

    fn name(&self) -> &'static str {
        "Interaction-mood correlation"
    }

    fn evaluate(&self, snapshot: &AggregateSnapshot, picker: &mut dyn IndexPicker) -> Vec<Insight> {
        let ranked = rank_buckets(&snapshot.interaction_recent, self.min_samples);
        let Some(booster) = ranked.first() else {
            return vec![];
        };
        let drainer = ranked.last().unwrap_or(booster);

        let mut insights = vec![];

        if booster.average > self.booster_threshold {
            insights.push(match booster.key.as_str() {
                PARTNER_NONE => Insight::new(SOLO_BOOSTER),
                PARTNER_OTHERS => Insight::new(OTHERS_BOOSTER),
                partner => Insight::new(pick_one(picker, &booster_phrases(partner)).clone()),
            });
        } else if booster.average > self.drainer_threshold {
            // Best partner is merely steady company
            insights.push(Insight::new(neutral_phrase(&booster.key)));
        }

        if drainer.key != booster.key && drainer.average <= self.drainer_threshold {
            insights.push(match drainer.key.as_str() {
                PARTNER_NONE => Insight::new(SOLO_DRAINER),
                PARTNER_OTHERS => Insight::new(OTHERS_DRAINER),
                partner => Insight::new(pick_one(picker, &drainer_phrases(partner)).clone()),
            });
        }

        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::aggregate::AggregateSnapshot;
    use crate::test_utils::{fixed_now, partner_entry, SeqPicker};

    fn evaluate(entries: &[crate::models::MoodEntry]) -> Vec<Insight> {
        let snapshot = AggregateSnapshot::compute(entries, fixed_now());
        InteractionMoodRule::new().evaluate(&snapshot, &mut SeqPicker::zeros())
    }

    #[test]
    fn test_booster_and_drainer_both_reported() {
        // mother avg 8.0 over 3 entries, coworker avg 2.5 over 2 entries
        let entries = vec![
            partner_entry(1, 5, 8, &["mother"]),
            partner_entry(2, 10, 9, &["mother"]),
            partner_entry(3, 15, 7, &["mother"]),
            partner_entry(4, 20, 2, &["coworker"]),
            partner_entry(5, 25, 3, &["coworker"]),
        ];

        let insights = evaluate(&entries);
        assert_eq!(insights.len(), 2);
        assert!(insights[0].text.contains("mother"));
        assert!(booster_phrases("mother").contains(&insights[0].text));
        assert!(insights[1].text.contains("coworker"));
        assert!(drainer_phrases("coworker").contains(&insights[1].text));
    }

    #[test]
    fn test_single_entry_partner_never_quoted() {
        // "aunt" appears once at mood 10; the bucket is under the sample gate
        let entries = vec![
            partner_entry(1, 5, 6, &["mother"]),
            partner_entry(2, 10, 6, &["mother"]),
            partner_entry(3, 15, 10, &["aunt"]),
        ];

        let insights = evaluate(&entries);
        assert!(insights.iter().all(|i| !i.text.contains("aunt")));
    }

    #[test]
    fn test_solitude_booster_gets_special_wording() {
        let entries = vec![
            partner_entry(1, 5, 8, &["none"]),
            partner_entry(2, 10, 9, &["none"]),
        ];

        let insights = evaluate(&entries);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, SOLO_BOOSTER);
    }

    #[test]
    fn test_unfamiliar_company_drainer_gets_special_wording() {
        let entries = vec![
            partner_entry(1, 5, 8, &["partner"]),
            partner_entry(2, 10, 9, &["partner"]),
            partner_entry(3, 15, 2, &["others"]),
            partner_entry(4, 20, 3, &["others"]),
        ];

        let insights = evaluate(&entries);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[1].text, OTHERS_DRAINER);
    }

    #[test]
    fn test_neutral_band_reports_steady_company() {
        let entries = vec![
            partner_entry(1, 5, 5, &["friends"]),
            partner_entry(2, 10, 5, &["friends"]),
        ];

        let insights = evaluate(&entries);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, neutral_phrase("friends"));
    }

    #[test]
    fn test_lone_low_partner_is_not_its_own_drainer() {
        // With a single qualifying bucket, booster and drainer are the same
        // partner; the drainer branch must not double-report them
        let entries = vec![
            partner_entry(1, 5, 2, &["coworker"]),
            partner_entry(2, 10, 3, &["coworker"]),
        ];

        let insights = evaluate(&entries);
        assert!(insights.is_empty());
    }

    #[test]
    fn test_no_recent_interactions_no_insights() {
        let entries = vec![partner_entry(1, 5, 8, &[])];
        assert!(evaluate(&entries).is_empty());
    }
}

//! Domain models for moodlog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Valid mood score range (inclusive)
pub const MOOD_MIN: i64 = 1;
pub const MOOD_MAX: i64 = 10;

/// Interaction label meaning "spent the day alone"
pub const PARTNER_NONE: &str = "none";

/// Interaction label for people outside the usual circle
pub const PARTNER_OTHERS: &str = "others";

/// One mood check-in record
///
/// Entries are read-only once loaded: the analytics pipeline never mutates
/// or re-persists them. Upstream validation is external, so `mood` may hold
/// out-of-range values; consumers filter via [`MoodEntry::mood_score`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    /// Mood score, 1-10 when valid; None for incomplete check-ins
    pub mood: Option<i64>,
    pub sleep_quality: Option<SleepQuality>,
    pub weather: Option<Weather>,
    /// Who the user spent time with (lowercase labels, may be empty)
    pub interaction_with: Vec<String>,
    /// Free-text note, surfaced verbatim, never aggregated
    pub note: Option<String>,
}

impl MoodEntry {
    /// Mood score validated to the 1-10 domain, as f64 for aggregation.
    ///
    /// Out-of-range scores are treated as absent rather than rejected: one
    /// bad row must not fail a whole insight pass.
    pub fn mood_score(&self) -> Option<f64> {
        self.mood
            .filter(|m| (MOOD_MIN..=MOOD_MAX).contains(m))
            .map(|m| m as f64)
    }
}

/// Payload for recording a new check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMoodEntry {
    pub mood: Option<i64>,
    pub sleep_quality: Option<SleepQuality>,
    pub weather: Option<Weather>,
    pub interaction_with: Vec<String>,
    pub note: Option<String>,
}

impl NewMoodEntry {
    /// Normalize interaction labels to lowercase, dropping empty ones.
    pub fn normalized(mut self) -> Self {
        self.interaction_with = self
            .interaction_with
            .iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        self
    }
}

/// Sleep quality labels (closed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SleepQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl std::str::FromStr for SleepQuality {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "poor" => Ok(Self::Poor),
            "fair" => Ok(Self::Fair),
            "good" => Ok(Self::Good),
            "excellent" => Ok(Self::Excellent),
            _ => Err(format!("Unknown sleep quality: {}", s)),
        }
    }
}

impl std::fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weather conditions (closed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

impl Weather {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Stormy => "stormy",
        }
    }

    /// Capitalized form for prose ("Sunny days really light you up!")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
            Self::Stormy => "Stormy",
        }
    }
}

impl std::str::FromStr for Weather {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunny" => Ok(Self::Sunny),
            "cloudy" => Ok(Self::Cloudy),
            "rainy" => Ok(Self::Rainy),
            "snowy" => Ok(Self::Snowy),
            "stormy" => Ok(Self::Stormy),
            _ => Err(format!("Unknown weather: {}", s)),
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Short-term mood direction over the most recent two 7-entry halves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    /// Fewer than 14 scored entries available
    Indeterminate,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sleep_quality_parse_case_insensitive() {
        assert_eq!(SleepQuality::from_str("Poor").unwrap(), SleepQuality::Poor);
        assert_eq!(
            SleepQuality::from_str("EXCELLENT").unwrap(),
            SleepQuality::Excellent
        );
        assert!(SleepQuality::from_str("terrible").is_err());
    }

    #[test]
    fn test_weather_roundtrip() {
        for w in [
            Weather::Sunny,
            Weather::Cloudy,
            Weather::Rainy,
            Weather::Snowy,
            Weather::Stormy,
        ] {
            assert_eq!(Weather::from_str(w.as_str()).unwrap(), w);
        }
        assert_eq!(Weather::Rainy.label(), "Rainy");
    }

    #[test]
    fn test_mood_score_range_filtered() {
        let mut entry = MoodEntry {
            id: 1,
            user_id: "u".to_string(),
            created_at: chrono::Utc::now(),
            mood: Some(11),
            sleep_quality: None,
            weather: None,
            interaction_with: vec![],
            note: None,
        };
        assert_eq!(entry.mood_score(), None);
        entry.mood = Some(0);
        assert_eq!(entry.mood_score(), None);
        entry.mood = Some(7);
        assert_eq!(entry.mood_score(), Some(7.0));
        entry.mood = None;
        assert_eq!(entry.mood_score(), None);
    }

    #[test]
    fn test_new_entry_normalizes_partners() {
        let entry = NewMoodEntry {
            mood: Some(6),
            sleep_quality: None,
            weather: None,
            interaction_with: vec!["  Family ".to_string(), "FRIENDS".to_string(), "".to_string()],
            note: None,
        }
        .normalized();
        assert_eq!(entry.interaction_with, vec!["family", "friends"]);
    }
}

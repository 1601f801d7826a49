//! Core types for the insight synthesizer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The rule families that can contribute insights, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Who the user spends time with vs. how they feel
    Interaction,
    /// How often sleep is poor across all history
    SleepFrequency,
    /// Which weather coincides with excellent sleep
    SleepWeather,
    /// Several low-mood days in a row
    LowMoodStreak,
    /// Narrative for the recent 60-day window
    RecentTrend,
    /// Best-mood weather condition
    WeatherCorrelation,
    /// Mood stability over the charted window
    Volatility,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Interaction => "interaction",
            RuleKind::SleepFrequency => "sleep_frequency",
            RuleKind::SleepWeather => "sleep_weather",
            RuleKind::LowMoodStreak => "low_mood_streak",
            RuleKind::RecentTrend => "recent_trend",
            RuleKind::WeatherCorrelation => "weather_correlation",
            RuleKind::Volatility => "volatility",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interaction" => Ok(RuleKind::Interaction),
            "sleep_frequency" => Ok(RuleKind::SleepFrequency),
            "sleep_weather" => Ok(RuleKind::SleepWeather),
            "low_mood_streak" => Ok(RuleKind::LowMoodStreak),
            "recent_trend" => Ok(RuleKind::RecentTrend),
            "weather_correlation" => Ok(RuleKind::WeatherCorrelation),
            "volatility" => Ok(RuleKind::Volatility),
            _ => Err(format!("Unknown rule kind: {}", s)),
        }
    }
}

/// A single synthesized insight sentence
///
/// `urgent` marks sustained-low-mood and sleep-alarm messages so consumers
/// can highlight them without sniffing the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    pub urgent: bool,
}

impl Insight {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            urgent: false,
        }
    }

    pub fn urgent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            urgent: true,
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_serialization() {
        assert_eq!(RuleKind::SleepFrequency.as_str(), "sleep_frequency");
        assert_eq!(
            RuleKind::from_str("weather_correlation").unwrap(),
            RuleKind::WeatherCorrelation
        );
        assert!(RuleKind::from_str("astrology").is_err());
    }

    #[test]
    fn test_insight_constructors() {
        let plain = Insight::new("steady days");
        assert!(!plain.urgent);
        let alarm = Insight::urgent("rough patch");
        assert!(alarm.urgent);
        assert_eq!(alarm.to_string(), "rough patch");
    }
}

//! Check-in recording command

use std::str::FromStr;

use anyhow::{Context, Result};
use moodlog_core::db::Database;
use moodlog_core::models::{NewMoodEntry, SleepQuality, Weather, MOOD_MAX, MOOD_MIN};

#[allow(clippy::too_many_arguments)]
pub fn cmd_log(
    db: &Database,
    user: &str,
    mood: Option<i64>,
    sleep: Option<&str>,
    weather: Option<&str>,
    interactions: &[String],
    note: Option<String>,
) -> Result<()> {
    if let Some(m) = mood {
        if !(MOOD_MIN..=MOOD_MAX).contains(&m) {
            anyhow::bail!("Mood must be between {} and {}, got {}", MOOD_MIN, MOOD_MAX, m);
        }
    }

    let sleep_quality = sleep
        .map(SleepQuality::from_str)
        .transpose()
        .map_err(|e| anyhow::anyhow!("{} (use poor, fair, good, or excellent)", e))?;
    let weather = weather
        .map(Weather::from_str)
        .transpose()
        .map_err(|e| anyhow::anyhow!("{} (use sunny, cloudy, rainy, snowy, or stormy)", e))?;

    let entry = NewMoodEntry {
        mood,
        sleep_quality,
        weather,
        interaction_with: interactions.to_vec(),
        note,
    }
    .normalized();

    let id = db
        .insert_entry(user, &entry)
        .context("Failed to record check-in")?;

    println!("✅ Check-in #{} recorded for {}", id, user);
    if let Some(m) = entry.mood {
        println!("   Mood: {}/10", m);
    }
    if let Some(s) = entry.sleep_quality {
        println!("   Sleep: {}", s);
    }
    if let Some(w) = entry.weather {
        println!("   Weather: {}", w);
    }
    if !entry.interaction_with.is_empty() {
        println!("   With: {}", entry.interaction_with.join(", "));
    }

    Ok(())
}

//! Recent-entries view with summary stats

use anyhow::{Context, Result};
use chrono::Utc;
use moodlog_core::db::{Database, EntryWindow};
use moodlog_core::insights::compute_aggregates;
use moodlog_core::models::Trend;

use super::truncate;

pub fn cmd_history(db: &Database, user: &str, days: Option<u32>) -> Result<()> {
    let now = Utc::now();
    let window = match days {
        Some(d) => EntryWindow::last_days(d),
        None => EntryWindow::default(),
    };
    let entries = db
        .fetch_entries(user, &window, now)
        .context("Failed to load entries")?;

    if entries.is_empty() {
        println!("No entries yet. Record one with 'moodlog log --mood 7'.");
        return Ok(());
    }

    let snapshot = compute_aggregates(&entries, now);

    println!();
    match days {
        Some(d) => println!("📖 Mood History — last {} days ({} entries)", d, entries.len()),
        None => println!("📖 Mood History — {} entries", entries.len()),
    }
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:<12} {:>5}  {:<10} {:<8} {:<18} {}",
        "Date", "Mood", "Sleep", "Weather", "With", "Note"
    );

    for entry in &entries {
        let mood = entry
            .mood
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        let sleep = entry
            .sleep_quality
            .map(|s| s.as_str())
            .unwrap_or("-");
        let weather = entry.weather.map(|w| w.as_str()).unwrap_or("-");
        let with = if entry.interaction_with.is_empty() {
            "-".to_string()
        } else {
            truncate(&entry.interaction_with.join(","), 18)
        };
        let note = entry
            .note
            .as_deref()
            .map(|n| truncate(n, 30))
            .unwrap_or_default();

        println!(
            "   {:<12} {:>5}  {:<10} {:<8} {:<18} {}",
            entry.created_at.format("%Y-%m-%d"),
            mood,
            sleep,
            weather,
            with,
            note
        );
    }

    println!();
    println!("   Days tracked: {}", snapshot.entry_count);
    if snapshot.scored_count > 0 {
        println!("   Average mood: {:.1}/10", snapshot.mean);
    }
    if snapshot.trend != Trend::Indeterminate {
        println!("   Trend: {}", snapshot.trend);
    }
    println!();

    Ok(())
}

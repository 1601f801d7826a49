//! Plain-text mood report

use anyhow::{Context, Result};
use chrono::Utc;
use moodlog_core::db::{Database, EntryWindow};
use moodlog_core::insights::{compute_aggregates, InsightEngine, RandomPicker};
use moodlog_core::models::Trend;

fn trend_message(trend: Trend) -> &'static str {
    match trend {
        Trend::Improving => {
            "That's fantastic! Your mood is on the rise, keep riding that positive wave!"
        }
        Trend::Declining => {
            "It's okay to have ups and downs. Keep your chin up; brighter days are ahead!"
        }
        _ => "Steady and stable — sometimes that's exactly what we need. Keep going strong!",
    }
}

pub fn cmd_report(db: &Database, user: &str) -> Result<()> {
    let now = Utc::now();
    let entries = db
        .fetch_entries(user, &EntryWindow::default(), now)
        .context("Failed to load entries")?;

    println!();
    println!("🧾 Mood Report for {}", user);
    println!("   Generated {}", now.format("%Y-%m-%d"));
    println!("   ─────────────────────────────────────────────────────────────");

    if entries.is_empty() {
        println!("   No entries yet. Record one with 'moodlog log --mood 7'.");
        println!();
        return Ok(());
    }

    let snapshot = compute_aggregates(&entries, now);

    println!("   Days tracked: {}", snapshot.entry_count);
    if snapshot.scored_count > 0 {
        println!("   Average mood: {:.1}/10", snapshot.mean);
    }
    if snapshot.trend != Trend::Indeterminate {
        println!("   Trend: {}", snapshot.trend);
        println!("   {}", trend_message(snapshot.trend));
    }

    let engine = InsightEngine::new();
    let insights = engine.derive_from_snapshot(&snapshot, &mut RandomPicker);

    println!();
    println!("   Insights:");
    for insight in &insights {
        if insight.urgent {
            println!("   ❗ {}", insight.text);
        } else {
            println!("   • {}", insight.text);
        }
    }
    println!();

    Ok(())
}

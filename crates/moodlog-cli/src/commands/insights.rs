//! Insight derivation command

use anyhow::{Context, Result};
use chrono::Utc;
use moodlog_core::db::{Database, EntryWindow};
use moodlog_core::insights::derive_insights;

pub fn cmd_insights(db: &Database, user: &str, json: bool) -> Result<()> {
    let now = Utc::now();
    let entries = db
        .fetch_entries(user, &EntryWindow::default(), now)
        .context("Failed to load entries")?;

    let insights = derive_insights(&entries, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!();
    println!("💡 Mood Insights");
    println!("   ─────────────────────────────────────────────────────────────");
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

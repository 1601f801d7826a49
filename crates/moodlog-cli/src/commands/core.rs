//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Database status and check-in streak
//! - `cmd_reset` - Delete all check-in data

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use moodlog_core::db::Database;

/// Quiet days after which the status command nudges the user to check in
const NUDGE_AFTER_DAYS: i64 = 14;

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    tracing::debug!(path = path_str, no_encrypt, "Opening database");
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let _db = open_db(db_path, no_encrypt)?;

    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record a check-in: moodlog log --mood 7 --sleep good");
    println!("  2. Derive insights: moodlog insights");

    Ok(())
}

pub fn cmd_status(db_path: &Path, user: &str, no_encrypt: bool) -> Result<()> {
    use moodlog_core::db::DB_KEY_ENV;
    use std::fs;

    println!();
    println!("📊 Moodlog Status");
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    let has_key = std::env::var(DB_KEY_ENV).is_ok();
    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else if has_key {
        println!("   🔒 Encryption: ENABLED ({}=***)", DB_KEY_ENV);
    } else {
        println!("   ❌ Encryption: REQUIRED but {} not set", DB_KEY_ENV);
    }

    if db_path.exists() {
        match open_db(db_path, no_encrypt) {
            Ok(db) => {
                let count = db.entry_count(user)?;
                println!();
                println!("   User: {}", user);
                println!("   Check-ins: {}", count);

                match db.last_entry_at(user)? {
                    Some(last) => {
                        let quiet_days = (Utc::now() - last).num_days();
                        println!("   Last check-in: {} days ago", quiet_days);
                        if quiet_days >= NUDGE_AFTER_DAYS {
                            println!();
                            println!(
                                "   👋 It's been a while! Log how you're feeling with 'moodlog log'."
                            );
                        }
                    }
                    None => {
                        println!("   Last check-in: never");
                    }
                }
            }
            Err(e) => {
                println!();
                println!("   ❌ Error opening database: {}", e);
                if !no_encrypt && !has_key {
                    println!("      Set {} or use --no-encrypt", DB_KEY_ENV);
                } else if has_key {
                    println!("      (Check if {} is correct)", DB_KEY_ENV);
                }
            }
        }
    }

    println!();
    Ok(())
}

pub fn cmd_reset(db_path: &Path, yes: bool, no_encrypt: bool) -> Result<()> {
    use std::io::{self, Write};

    if !db_path.exists() {
        anyhow::bail!("Database not found: {}", db_path.display());
    }

    if !yes {
        print!("⚠️  This will delete all check-ins for every user.\n\n");
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let db = open_db(db_path, no_encrypt)?;
    db.reset()?;

    println!("✅ Database reset complete. All check-ins deleted.");

    Ok(())
}

//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Moodlog - Track your mood and learn what moves it
#[derive(Parser)]
#[command(name = "moodlog")]
#[command(about = "Self-hosted mood tracker with rule-based insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "moodlog.db", global = true)]
    pub db: PathBuf,

    /// User whose entries to read and write
    #[arg(short, long, default_value = "default", global = true)]
    pub user: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set MOODLOG_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record a mood check-in
    Log {
        /// Mood score from 1 (lowest) to 10 (highest)
        #[arg(short, long)]
        mood: Option<i64>,

        /// Sleep quality: poor, fair, good, excellent
        #[arg(short, long)]
        sleep: Option<String>,

        /// Weather: sunny, cloudy, rainy, snowy, stormy
        #[arg(short, long)]
        weather: Option<String>,

        /// Who you spent time with (repeatable; "none" for solo days)
        #[arg(long = "with")]
        interactions: Vec<String>,

        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show recent entries and summary stats
    History {
        /// Only entries from the last N days
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Derive insights from your entries
    Insights {
        /// Emit insights as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a plain-text mood report
    Report,

    /// Show database status and check-in streak
    Status,

    /// Delete all check-in data (keeps the schema)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

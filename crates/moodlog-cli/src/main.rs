//! Moodlog CLI - Mood tracker with rule-based insights
//!
//! Usage:
//!   moodlog init                          Initialize database
//!   moodlog log --mood 7 --sleep good     Record a check-in
//!   moodlog insights                      Derive insights from your entries
//!   moodlog report                        Print a plain-text mood report

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Log {
            mood,
            sleep,
            weather,
            interactions,
            note,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_log(
                &db,
                &cli.user,
                mood,
                sleep.as_deref(),
                weather.as_deref(),
                &interactions,
                note,
            )
        }
        Commands::History { days } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_history(&db, &cli.user, days)
        }
        Commands::Insights { json } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_insights(&db, &cli.user, json)
        }
        Commands::Report => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_report(&db, &cli.user)
        }
        Commands::Status => commands::cmd_status(&cli.db, &cli.user, cli.no_encrypt),
        Commands::Reset { yes } => commands::cmd_reset(&cli.db, yes, cli.no_encrypt),
    }
}

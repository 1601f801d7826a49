//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init, status, reset) and shared utilities (open_db)
//! - `history` - Recent-entries view with summary stats
//! - `insights` - Insight derivation command
//! - `log` - Check-in recording command
//! - `report` - Plain-text mood report

pub mod core;
pub mod history;
pub mod insights;
pub mod log;
pub mod report;

// Re-export command functions for main.rs
pub use core::*;
pub use history::*;
pub use insights::*;
pub use log::*;
pub use report::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}

//! Display utilities for the Pomodoro focus timer.
//!
//! This module renders read-only state snapshots:
//! - Formatted text output (time, mode label, run state, quote)
//! - JSON lines output for scripting
//! - Welcome banner and error messages

use crate::types::{DisplaySnapshot, TimerMode};

// ============================================================================
// Display
// ============================================================================

/// Renders state snapshots and messages to stdout/stderr.
pub struct Display {
    /// When true, snapshots are printed as JSON lines
    json: bool,
}

impl Display {
    /// Creates a display in text or JSON mode.
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Shows the welcome banner with the key map.
    pub fn show_welcome(&self) {
        if self.json {
            return;
        }
        println!("Pomodoro Focus");
        println!("──────────────");
        println!("Enter  start / pause");
        println!("r      reset");
        println!("q      quit");
        println!();
    }

    /// Shows the current state snapshot.
    pub fn show_snapshot(&self, snapshot: &DisplaySnapshot) {
        if self.json {
            // Serialization of a snapshot cannot fail; fall through silently
            if let Ok(line) = serde_json::to_string(snapshot) {
                println!("{}", line);
            }
            return;
        }

        let run_state = if snapshot.is_running {
            "running"
        } else {
            "paused"
        };
        let marker = match snapshot.mode {
            TimerMode::Work => "●",
            TimerMode::Break => "○",
        };

        println!(
            "{} {}  {}  [{}]",
            marker,
            snapshot.formatted_time,
            snapshot.mode.label(),
            run_state
        );

        if let Some(quote) = &snapshot.quote {
            println!("  * {}", quote);
        }
    }

    /// Shows a goodbye message when the user quits.
    pub fn show_quit(&self) {
        if !self.json {
            println!("Bye. Stay focused!");
        }
    }

    /// Shows a hint for unrecognized input.
    pub fn show_input_hint(&self) {
        if !self.json {
            println!("(Enter: start/pause, r: reset, q: quit)");
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Core data types for the Pomodoro focus timer.
//!
//! This module defines the data structures used for:
//! - Timer mode and duration configuration
//! - Session state (the single mutable entity of the application)
//! - Read-only display snapshots for the presentation layer

use serde::{Deserialize, Serialize};

// ============================================================================
// TimerMode
// ============================================================================

/// Represents the interval the timer is currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    /// Focus period (25 minutes by default)
    Work,
    /// Rest period (5 minutes by default)
    Break,
}

impl TimerMode {
    /// Returns the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Work => "work",
            TimerMode::Break => "break",
        }
    }

    /// Returns the uppercase label shown by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Work => "WORK",
            TimerMode::Break => "BREAK",
        }
    }

    /// Returns the opposite mode.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            TimerMode::Work => TimerMode::Break,
            TimerMode::Break => TimerMode::Work,
        }
    }
}

impl Default for TimerMode {
    fn default() -> Self {
        TimerMode::Work
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Interval durations injected into the controller at construction.
///
/// The application always uses the defaults (25/5 minutes); the struct
/// exists so the durations are owned values rather than ambient globals,
/// which keeps the controller testable with short intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Work interval duration in seconds
    pub work_seconds: u32,
    /// Break interval duration in seconds
    pub break_seconds: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_seconds: 25 * 60,
            break_seconds: 5 * 60,
        }
    }
}

impl TimerConfig {
    /// Creates a configuration with the specified work duration.
    pub fn with_work_seconds(mut self, seconds: u32) -> Self {
        self.work_seconds = seconds;
        self
    }

    /// Creates a configuration with the specified break duration.
    pub fn with_break_seconds(mut self, seconds: u32) -> Self {
        self.break_seconds = seconds;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.work_seconds == 0 {
            return Err("work duration must be at least 1 second".to_string());
        }
        if self.break_seconds == 0 {
            return Err("break duration must be at least 1 second".to_string());
        }
        Ok(())
    }

    /// Returns the full duration of the given mode in seconds.
    pub fn duration_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => self.work_seconds,
            TimerMode::Break => self.break_seconds,
        }
    }
}

// ============================================================================
// SessionState
// ============================================================================

/// The single mutable entity of the application.
///
/// Invariants:
/// - `seconds_remaining` never exceeds `config.duration_for(mode)`
/// - `current_quote` is `None` whenever `mode` is `Break`
/// - `current_quote` is `None` immediately after a reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Current interval mode
    pub mode: TimerMode,
    /// Remaining seconds in the current interval
    pub seconds_remaining: u32,
    /// Whether the countdown is active
    pub is_running: bool,
    /// Motivational quote shown during work intervals
    pub current_quote: Option<String>,
    /// Interval durations
    pub config: TimerConfig,
}

impl SessionState {
    /// Creates a fresh session: paused at the start of a work interval.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            mode: TimerMode::Work,
            seconds_remaining: config.work_seconds,
            is_running: false,
            current_quote: None,
            config,
        }
    }

    /// Toggles the run/pause state and returns the new value.
    pub fn toggle_running(&mut self) -> bool {
        self.is_running = !self.is_running;
        self.is_running
    }

    /// Resets to the initial state: paused work interval at full duration,
    /// no quote.
    pub fn reset(&mut self) {
        self.mode = TimerMode::Work;
        self.seconds_remaining = self.config.work_seconds;
        self.is_running = false;
        self.current_quote = None;
    }

    /// Advances the countdown by one second.
    ///
    /// Returns true if the interval has completed (the counter sits at 0
    /// after this call), meaning the caller must switch modes.
    pub fn tick(&mut self) -> bool {
        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
        }
        self.seconds_remaining == 0
    }

    /// Flips the mode and refills the counter from the new mode's duration.
    ///
    /// The flip and the refill happen together so no caller can observe a
    /// zero counter paired with the old mode.
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.seconds_remaining = self.config.duration_for(self.mode);
    }

    /// Sets the motivational quote. Only meaningful during work intervals.
    pub fn set_quote(&mut self, quote: impl Into<String>) {
        self.current_quote = Some(quote.into());
    }

    /// Clears the motivational quote.
    pub fn clear_quote(&mut self) {
        self.current_quote = None;
    }

    /// Produces a read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            formatted_time: format_display(self.seconds_remaining),
            mode: self.mode,
            is_running: self.is_running,
            quote: self.current_quote.clone(),
        }
    }
}

// ============================================================================
// DisplaySnapshot
// ============================================================================

/// Read-only view of the session state consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// Remaining time formatted as "MM:SS"
    #[serde(rename = "formattedTime")]
    pub formatted_time: String,
    /// Current interval mode
    pub mode: TimerMode,
    /// Whether the countdown is active
    #[serde(rename = "isRunning")]
    pub is_running: bool,
    /// Motivational quote, if a work interval is showing one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

/// Formats a second count as "MM:SS" with both fields zero-padded.
pub fn format_display(seconds_remaining: u32) -> String {
    let minutes = seconds_remaining / 60;
    let seconds = seconds_remaining % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

// ============================================================================
// Tests
// ============================================================================

//! Pomodoro Focus Timer Library
//!
//! This library provides the core functionality for the `pomofocus`
//! terminal timer. It includes:
//! - Timer controller with a cancellable 1-second ticker
//! - Session state types and display formatting
//! - Motivational quote catalog with injectable selection
//! - Audio cue playback (click on input, ding on interval end)
//! - CLI command parsing and display utilities
//! - The single-threaded interactive event loop

pub mod app;
pub mod cli;
pub mod sound;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{format_display, DisplaySnapshot, SessionState, TimerConfig, TimerMode};

// Re-export timer types
pub use timer::{
    FixedQuoteSelector, QuoteSelector, RandomQuoteSelector, TimerController, TimerEvent,
    QUOTE_CATALOG,
};

// Re-export sound types
pub use sound::{try_create_player, Cue, MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer};

// Re-export event loop helpers
pub use app::{cue_for_event, parse_intent, UserIntent};

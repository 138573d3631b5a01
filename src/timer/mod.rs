//! Timer module for the Pomodoro focus timer.
//!
//! This module contains the core timing functionality:
//! - `controller`: session state transitions and the cancellable ticker
//! - `quotes`: motivational quote catalog and selection strategies

pub mod controller;
pub mod quotes;

pub use controller::{TimerController, TimerEvent};
pub use quotes::{FixedQuoteSelector, QuoteSelector, RandomQuoteSelector, QUOTE_CATALOG};

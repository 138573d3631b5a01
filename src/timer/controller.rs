//! Timer controller for the Pomodoro focus timer.
//!
//! This module provides the core timing behavior:
//! - Start/pause toggling and reset
//! - Countdown driven by a cancellable 1-second ticker task
//! - Work/break mode switching when the countdown completes
//! - Quote selection whenever a work interval begins while running
//! - Event firing for audio cues and re-rendering

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use super::quotes::QuoteSelector;
use crate::types::{DisplaySnapshot, SessionState, TimerConfig, TimerMode};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events consumed by the presentation layer and the audio player.
///
/// `Started`, `Paused` and `Reset` correspond to user input and map to the
/// click cue; `IntervalEnded` maps to the end cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown started or resumed
    Started {
        /// Mode of the interval that is now counting down
        mode: TimerMode,
        /// Quote selected for this work interval (None for break)
        quote: Option<String>,
    },
    /// Countdown paused
    Paused,
    /// Session reset to a fresh paused work interval
    Reset,
    /// One second elapsed
    Tick {
        /// Remaining seconds
        seconds_remaining: u32,
    },
    /// Countdown reached zero and the mode flipped
    IntervalEnded {
        /// Mode of the interval that just began
        new_mode: TimerMode,
        /// Quote selected for the new interval (None for break)
        quote: Option<String>,
    },
}

// ============================================================================
// TimerController
// ============================================================================

/// Owns the session state and drives all timer behavior.
///
/// All mutation happens through `start_or_pause`, `reset` and `tick`, which
/// the application calls from a single event-loop task, so state changes
/// are serialized in dispatch order. The controller owns at most one live
/// ticker task; spawning a new one always aborts the previous handle first.
pub struct TimerController {
    /// Current session state
    state: SessionState,
    /// Quote selection strategy
    quotes: Box<dyn QuoteSelector + Send>,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    /// Tick sender cloned into the ticker task
    tick_tx: mpsc::UnboundedSender<()>,
    /// Handle of the active ticker task, if any
    ticker: Option<JoinHandle<()>>,
}

impl TimerController {
    /// Creates a new controller with the given configuration, quote
    /// selector and channels.
    pub fn new(
        config: TimerConfig,
        quotes: Box<dyn QuoteSelector + Send>,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
        tick_tx: mpsc::UnboundedSender<()>,
    ) -> Self {
        Self {
            state: SessionState::new(config),
            quotes,
            event_tx,
            tick_tx,
            ticker: None,
        }
    }

    /// Toggles between running and paused.
    ///
    /// Resuming a work interval selects a fresh quote every time, matching
    /// the re-roll-on-resume behavior of the original timer. Pausing stops
    /// the ticker task outright rather than leaving it running idle.
    pub fn start_or_pause(&mut self) -> Result<()> {
        if self.state.toggle_running() {
            if self.state.mode == TimerMode::Work {
                let quote = self.quotes.select();
                self.state.set_quote(quote);
            }
            self.spawn_ticker();

            self.event_tx
                .send(TimerEvent::Started {
                    mode: self.state.mode,
                    quote: self.state.current_quote.clone(),
                })
                .context("Failed to send started event")?;
        } else {
            self.stop_ticker();

            self.event_tx
                .send(TimerEvent::Paused)
                .context("Failed to send paused event")?;
        }

        Ok(())
    }

    /// Resets to a paused work interval at full duration with no quote.
    ///
    /// Always succeeds, regardless of the current state.
    pub fn reset(&mut self) -> Result<()> {
        self.stop_ticker();
        self.state.reset();

        self.event_tx
            .send(TimerEvent::Reset)
            .context("Failed to send reset event")?;

        Ok(())
    }

    /// Applies one second of elapsed time.
    ///
    /// Ignored while paused: a tick already queued when the ticker was
    /// cancelled must not decrement the counter. On completion the mode
    /// flip, duration refill and quote update all happen before the event
    /// is emitted, so no intermediate state is observable.
    pub fn tick(&mut self) -> Result<()> {
        if !self.state.is_running {
            debug!("Ignoring tick while paused");
            return Ok(());
        }

        if self.state.tick() {
            self.state.switch_mode();
            match self.state.mode {
                TimerMode::Work => {
                    let quote = self.quotes.select();
                    self.state.set_quote(quote);
                }
                TimerMode::Break => self.state.clear_quote(),
            }

            self.event_tx
                .send(TimerEvent::IntervalEnded {
                    new_mode: self.state.mode,
                    quote: self.state.current_quote.clone(),
                })
                .context("Failed to send interval ended event")?;
        } else {
            self.event_tx
                .send(TimerEvent::Tick {
                    seconds_remaining: self.state.seconds_remaining,
                })
                .context("Failed to send tick event")?;
        }

        Ok(())
    }

    /// Spawns the 1-second ticker task, cancelling any existing one first.
    fn spawn_ticker(&mut self) {
        self.stop_ticker();

        let tick_tx = self.tick_tx.clone();
        self.ticker = Some(tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; consume it so
            // the first decrement lands a full second after starting.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if tick_tx.send(()).is_err() {
                    break;
                }
            }
        }));

        debug!("Ticker task started");
    }

    /// Cancels the ticker task if one is active.
    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            debug!("Ticker task cancelled");
        }
    }

    /// Returns true if a ticker task is currently active.
    pub fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    /// Returns a reference to the current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns a read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.state.snapshot()
    }

    /// Returns a mutable reference to the session state (for testing).
    #[cfg(any(test, feature = "test-utils"))]
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

// ============================================================================
// Tests
// ============================================================================

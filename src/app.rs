//! Interactive event loop for the Pomodoro focus timer.
//!
//! A single task owns the controller and multiplexes three inputs with
//! `tokio::select!`: stdin lines (user intents), ticker ticks, and
//! controller events. All state mutation happens here, so user input and
//! ticks are serialized in dispatch order without any locking.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::{Cli, Display};
use crate::sound::{try_create_player, Cue, SoundPlayer};
use crate::timer::{RandomQuoteSelector, TimerController, TimerEvent};
use crate::types::TimerConfig;

// ============================================================================
// UserIntent
// ============================================================================

/// The user intents the presentation layer can emit.
///
/// `Quit` terminates the process; it is not a timer operation. The timer
/// core itself only ever sees start/pause and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIntent {
    /// Toggle between running and paused
    StartPause,
    /// Reset to a fresh paused work interval
    Reset,
    /// Exit the application
    Quit,
}

/// Parses a line of user input into an intent.
///
/// Returns None for unrecognized input.
pub fn parse_intent(line: &str) -> Option<UserIntent> {
    match line.trim().to_lowercase().as_str() {
        "" | "s" | "start" | "p" | "pause" => Some(UserIntent::StartPause),
        "r" | "reset" => Some(UserIntent::Reset),
        "q" | "quit" | "exit" => Some(UserIntent::Quit),
        _ => None,
    }
}

/// Maps a timer event to the audio cue it should trigger, if any.
pub fn cue_for_event(event: &TimerEvent) -> Option<Cue> {
    match event {
        TimerEvent::Started { .. } | TimerEvent::Paused | TimerEvent::Reset => Some(Cue::Click),
        TimerEvent::IntervalEnded { .. } => Some(Cue::End),
        TimerEvent::Tick { .. } => None,
    }
}

// ============================================================================
// Event Loop
// ============================================================================

/// Runs the interactive timer until the user quits or stdin closes.
pub async fn run(cli: &Cli) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();

    let config = TimerConfig::default();
    config.validate().map_err(anyhow::Error::msg)?;

    let mut controller = TimerController::new(
        config,
        Box::new(RandomQuoteSelector::new()),
        event_tx,
        tick_tx,
    );

    let player = try_create_player(cli.mute);
    let display = Display::new(cli.json);

    display.show_welcome();
    display.show_snapshot(&controller.snapshot());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    info!("Stdin closed, exiting");
                    break;
                };
                match parse_intent(&line) {
                    Some(UserIntent::StartPause) => controller.start_or_pause()?,
                    Some(UserIntent::Reset) => controller.reset()?,
                    Some(UserIntent::Quit) => break,
                    None => display.show_input_hint(),
                }
            }
            Some(()) = tick_rx.recv() => {
                controller.tick()?;
            }
            Some(event) = event_rx.recv() => {
                if let Some(cue) = cue_for_event(&event) {
                    if let Some(player) = player.as_deref() {
                        player.play_ignoring_errors(cue);
                    }
                }
                display.show_snapshot(&controller.snapshot());
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, exiting");
                break;
            }
        }
    }

    display.show_quit();
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

//! Integration tests for the timer controller.
//!
//! These tests drive the controller exclusively through its public
//! operations (start_or_pause, reset, tick) and observe behavior through
//! the event channel and state snapshots, the same way the application
//! event loop does.

use tokio::sync::mpsc;

use pomofocus::app::cue_for_event;
use pomofocus::sound::{Cue, MockSoundPlayer, SoundPlayer};
use pomofocus::timer::{FixedQuoteSelector, RandomQuoteSelector, TimerController, TimerEvent};
use pomofocus::types::{TimerConfig, TimerMode};
use pomofocus::QUOTE_CATALOG;

// ============================================================================
// Test Helpers
// ============================================================================

/// Creates a controller with deterministic quote selection.
fn create_controller(
    config: TimerConfig,
) -> (
    TimerController,
    mpsc::UnboundedReceiver<TimerEvent>,
    mpsc::UnboundedReceiver<()>,
) {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (tick_tx, tick_rx) = mpsc::unbounded_channel();
    let controller = TimerController::new(
        config,
        Box::new(FixedQuoteSelector::new(0)),
        event_tx,
        tick_tx,
    );
    (controller, event_rx, tick_rx)
}

/// Drains all pending events from the channel.
fn drain_events(rx: &mut mpsc::UnboundedReceiver<TimerEvent>) -> Vec<TimerEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

// ============================================================================
// End-to-End Scenarios
// ============================================================================

#[tokio::test]
async fn test_start_then_full_work_interval_lands_on_break() {
    let (mut controller, mut event_rx, _tick_rx) = create_controller(TimerConfig::default());

    // Fresh state: paused work interval at full duration, no quote
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.formatted_time, "25:00");
    assert_eq!(snapshot.mode, TimerMode::Work);
    assert!(!snapshot.is_running);
    assert!(snapshot.quote.is_none());

    controller.start_or_pause().unwrap();

    // Running with a catalog quote
    let snapshot = controller.snapshot();
    assert!(snapshot.is_running);
    let quote = snapshot.quote.expect("work interval must show a quote");
    assert!(QUOTE_CATALOG.contains(&quote.as_str()));

    // 1500 ticks exhaust the work interval and flip to break
    for _ in 0..1500 {
        controller.tick().unwrap();
    }

    let snapshot = controller.snapshot();
    assert!(snapshot.is_running);
    assert_eq!(snapshot.mode, TimerMode::Break);
    assert_eq!(snapshot.formatted_time, "05:00");
    assert!(snapshot.quote.is_none());

    // The last event must be the interval end
    let events = drain_events(&mut event_rx);
    assert!(matches!(
        events.last(),
        Some(TimerEvent::IntervalEnded {
            new_mode: TimerMode::Break,
            quote: None,
        })
    ));
}

#[tokio::test]
async fn test_full_break_interval_returns_to_work_with_quote() {
    let config = TimerConfig::default()
        .with_work_seconds(2)
        .with_break_seconds(3);
    let (mut controller, _event_rx, _tick_rx) = create_controller(config);

    controller.start_or_pause().unwrap();

    // Exhaust work, then break
    for _ in 0..2 {
        controller.tick().unwrap();
    }
    assert_eq!(controller.state().mode, TimerMode::Break);

    for _ in 0..3 {
        controller.tick().unwrap();
    }

    let snapshot = controller.snapshot();
    assert!(snapshot.is_running);
    assert_eq!(snapshot.mode, TimerMode::Work);
    assert_eq!(snapshot.formatted_time, "00:02");
    let quote = snapshot.quote.expect("new work interval must show a quote");
    assert!(QUOTE_CATALOG.contains(&quote.as_str()));
}

#[tokio::test]
async fn test_double_toggle_returns_to_paused_with_quote_retained() {
    let (mut controller, _event_rx, _tick_rx) = create_controller(TimerConfig::default());

    controller.start_or_pause().unwrap();
    let quote_while_running = controller.snapshot().quote;
    controller.start_or_pause().unwrap();

    let snapshot = controller.snapshot();
    assert!(!snapshot.is_running);
    assert_eq!(snapshot.mode, TimerMode::Work);
    assert_eq!(snapshot.formatted_time, "25:00");
    // Decided behavior: the quote stays visible while paused
    assert_eq!(snapshot.quote, quote_while_running);
}

#[tokio::test]
async fn test_pause_inhibits_ticking() {
    let (mut controller, mut event_rx, _tick_rx) = create_controller(TimerConfig::default());

    controller.start_or_pause().unwrap();
    for _ in 0..500 {
        controller.tick().unwrap();
    }
    controller.start_or_pause().unwrap();
    drain_events(&mut event_rx);

    let before = controller.snapshot().formatted_time;
    for _ in 0..100 {
        controller.tick().unwrap();
    }

    assert_eq!(controller.snapshot().formatted_time, before);
    // Ignored ticks emit no events either
    assert!(drain_events(&mut event_rx).is_empty());
}

#[tokio::test]
async fn test_reset_always_yields_initial_state() {
    let (mut controller, _event_rx, _tick_rx) = create_controller(TimerConfig::default());

    controller.start_or_pause().unwrap();
    for _ in 0..1502 {
        controller.tick().unwrap();
    }
    // Now mid-break
    assert_eq!(controller.state().mode, TimerMode::Break);

    controller.reset().unwrap();
    controller.reset().unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.mode, TimerMode::Work);
    assert_eq!(snapshot.formatted_time, "25:00");
    assert!(!snapshot.is_running);
    assert!(snapshot.quote.is_none());
}

#[tokio::test]
async fn test_quote_rerolls_on_every_resume() {
    let (mut controller, _event_rx, _tick_rx) = create_controller(TimerConfig::default());

    controller.start_or_pause().unwrap();
    let first = controller.snapshot().quote.unwrap();
    controller.start_or_pause().unwrap();
    controller.start_or_pause().unwrap();
    let second = controller.snapshot().quote.unwrap();

    // The fixed selector advances through the catalog, so a resume must
    // have triggered a fresh selection
    assert_eq!(first, QUOTE_CATALOG[0]);
    assert_eq!(second, QUOTE_CATALOG[1]);
}

#[tokio::test]
async fn test_remaining_time_bound_holds_across_a_long_run() {
    let config = TimerConfig::default()
        .with_work_seconds(7)
        .with_break_seconds(4);
    let (mut controller, _event_rx, _tick_rx) = create_controller(config.clone());

    controller.start_or_pause().unwrap();

    for _ in 0..200 {
        controller.tick().unwrap();
        let state = controller.state();
        assert!(state.seconds_remaining <= config.duration_for(state.mode));
        if state.mode == TimerMode::Break {
            assert!(state.current_quote.is_none());
        }
    }
}

#[tokio::test]
async fn test_random_selector_always_picks_from_catalog() {
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let (tick_tx, _tick_rx) = mpsc::unbounded_channel();
    let mut controller = TimerController::new(
        TimerConfig::default(),
        Box::new(RandomQuoteSelector::new()),
        event_tx,
        tick_tx,
    );

    for _ in 0..20 {
        controller.start_or_pause().unwrap();
        if controller.state().is_running {
            let quote = controller.state().current_quote.clone().unwrap();
            assert!(QUOTE_CATALOG.contains(&quote.as_str()));
        }
    }
}

// ============================================================================
// Cue Wiring
// ============================================================================

#[tokio::test]
async fn test_events_map_to_expected_cues() {
    let config = TimerConfig::default().with_work_seconds(1);
    let (mut controller, mut event_rx, _tick_rx) = create_controller(config);
    let player = MockSoundPlayer::new();

    controller.start_or_pause().unwrap(); // click
    controller.tick().unwrap(); // interval end
    controller.start_or_pause().unwrap(); // click (pause)
    controller.reset().unwrap(); // click

    for event in drain_events(&mut event_rx) {
        if let Some(cue) = cue_for_event(&event) {
            player.play_ignoring_errors(cue);
        }
    }

    assert_eq!(
        player.get_play_calls(),
        vec![Cue::Click, Cue::End, Cue::Click, Cue::Click]
    );
}

#[tokio::test]
async fn test_cue_failures_never_reach_the_controller() {
    let (mut controller, mut event_rx, _tick_rx) = create_controller(TimerConfig::default());
    let player = MockSoundPlayer::new();
    player.set_should_fail(true);

    controller.start_or_pause().unwrap();
    controller.tick().unwrap();

    // Playing every cue fails, but the timer state is unaffected
    for event in drain_events(&mut event_rx) {
        if let Some(cue) = cue_for_event(&event) {
            player.play_ignoring_errors(cue);
        }
    }

    assert!(controller.state().is_running);
    assert_eq!(controller.state().seconds_remaining, 1499);
}

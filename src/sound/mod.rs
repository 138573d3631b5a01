//! Audio cue playback for the Pomodoro focus timer.
//!
//! The timer emits two logical cues:
//!
//! - `click` on start/pause/reset
//! - `end` when an interval completes
//!
//! Cue requests are fire-and-forget: playback is non-blocking and any
//! failure is caught at this boundary and logged, never propagated into
//! the timer controller. The cue audio is embedded in the binary, so no
//! asset files are required at runtime.

mod embedded;
mod error;
mod player;

pub use embedded::{get_cue_sound, get_cue_sound_format, CLICK_SOUND_DATA, END_SOUND_DATA};
pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};

// ============================================================================
// Cue
// ============================================================================

/// A named audio-playback request with no return value or acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Played on start, pause and reset
    Click,
    /// Played when an interval completes
    End,
}

impl Cue {
    /// Returns the string representation of the cue.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Click => "click",
            Cue::End => "end",
        }
    }
}

// ============================================================================
// SoundPlayer
// ============================================================================

/// Trait for cue playback implementations.
///
/// This trait abstracts the playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
pub trait SoundPlayer {
    /// Plays the given cue.
    ///
    /// This method must be non-blocking; the cue plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, cue: Cue) -> Result<(), SoundError>;

    /// Returns true if cue playback is disabled.
    fn is_disabled(&self) -> bool;

    /// Enables cue playback.
    fn enable(&self);

    /// Disables cue playback.
    fn disable(&self);

    /// Plays the given cue, swallowing any playback failure.
    ///
    /// Timer correctness never depends on whether a cue actually plays;
    /// failures are logged at debug level and otherwise ignored.
    fn play_ignoring_errors(&self, cue: Cue) {
        if let Err(e) = self.play(cue) {
            tracing::debug!("Ignoring {} cue failure: {}", cue.as_str(), e);
        }
    }
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, cue: Cue) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, cue)
    }

    fn is_disabled(&self) -> bool {
        RodioSoundPlayer::is_disabled(self)
    }

    fn enable(&self) {
        RodioSoundPlayer::enable(self)
    }

    fn disable(&self) {
        RodioSoundPlayer::disable(self)
    }
}

// ============================================================================
// MockSoundPlayer
// ============================================================================

/// Mock cue player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: std::sync::Mutex<Vec<Cue>>,
    disabled: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<Cue> {
        self.play_calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.play_calls.lock().unwrap().clear();
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, cue: Cue) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        if self.disabled.load(std::sync::atomic::Ordering::SeqCst) {
            return Ok(());
        }
        self.play_calls.lock().unwrap().push(cue);
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn enable(&self) {
        self.disabled
            .store(false, std::sync::atomic::Ordering::SeqCst);
    }

    fn disable(&self) {
        self.disabled
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

//! Sound system error types.
//!
//! Playback failures are always tolerated by the caller; these errors
//! exist for logging and graceful degradation, never to halt the timer.

use thiserror::Error;

/// Errors that can occur in the sound playback system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., headless environment).
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to decode the cue audio data.
    #[error("failed to decode cue audio: {0}")]
    DecodeError(String),

    /// Failed to create the audio output stream.
    #[error("failed to create audio stream: {0}")]
    StreamError(String),

    /// Generic sound playback error.
    #[error("sound playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error is related to device availability.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_) | Self::StreamError(_))
    }
}

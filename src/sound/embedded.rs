//! Embedded cue audio data.
//!
//! Both cues are compiled into the binary so playback never depends on
//! asset files being present. The data is minimal 16-bit PCM WAV; release
//! builds would swap in properly produced recordings.

use super::Cue;

/// Click cue: a very short square blip (played on start/pause/reset).
///
/// WAV format structure:
/// - RIFF header (12 bytes)
/// - fmt chunk (24 bytes)
/// - data chunk header (8 bytes)
/// - audio data (8 samples, 16 bytes)
pub const CLICK_SOUND_DATA: &[u8] = &[
    // RIFF header
    0x52, 0x49, 0x46, 0x46, // "RIFF"
    0x34, 0x00, 0x00, 0x00, // File size - 8 (52 bytes)
    0x57, 0x41, 0x56, 0x45, // "WAVE"
    // fmt chunk
    0x66, 0x6D, 0x74, 0x20, // "fmt "
    0x10, 0x00, 0x00, 0x00, // Chunk size (16 bytes)
    0x01, 0x00, // Audio format (1 = PCM)
    0x01, 0x00, // Number of channels (1 = mono)
    0x44, 0xAC, 0x00, 0x00, // Sample rate (44100 Hz)
    0x88, 0x58, 0x01, 0x00, // Byte rate (44100 * 1 * 2 = 88200)
    0x02, 0x00, // Block align (1 * 2 = 2)
    0x10, 0x00, // Bits per sample (16)
    // data chunk
    0x64, 0x61, 0x74, 0x61, // "data"
    0x10, 0x00, 0x00, 0x00, // Data size (16 bytes)
    0x00, 0x40, 0x00, 0x40, 0x00, 0xC0, 0x00, 0xC0, // square blip
    0x00, 0x40, 0x00, 0x40, 0x00, 0xC0, 0x00, 0xC0,
];

/// End-of-interval cue: a slightly longer blip (played when the countdown
/// completes).
pub const END_SOUND_DATA: &[u8] = &[
    // RIFF header
    0x52, 0x49, 0x46, 0x46, // "RIFF"
    0x3C, 0x00, 0x00, 0x00, // File size - 8 (60 bytes)
    0x57, 0x41, 0x56, 0x45, // "WAVE"
    // fmt chunk
    0x66, 0x6D, 0x74, 0x20, // "fmt "
    0x10, 0x00, 0x00, 0x00, // Chunk size (16 bytes)
    0x01, 0x00, // Audio format (1 = PCM)
    0x01, 0x00, // Number of channels (1 = mono)
    0x44, 0xAC, 0x00, 0x00, // Sample rate (44100 Hz)
    0x88, 0x58, 0x01, 0x00, // Byte rate (44100 * 1 * 2 = 88200)
    0x02, 0x00, // Block align (1 * 2 = 2)
    0x10, 0x00, // Bits per sample (16)
    // data chunk
    0x64, 0x61, 0x74, 0x61, // "data"
    0x18, 0x00, 0x00, 0x00, // Data size (24 bytes)
    0x00, 0x20, 0x00, 0x60, 0x00, 0x20, 0x00, 0xE0, // rising blip
    0x00, 0xA0, 0x00, 0xE0, 0x00, 0x20, 0x00, 0x60,
    0x00, 0x20, 0x00, 0xE0, 0x00, 0xA0, 0x00, 0xE0,
];

/// Returns the embedded audio data for the given cue.
#[must_use]
pub const fn get_cue_sound(cue: Cue) -> &'static [u8] {
    match cue {
        Cue::Click => CLICK_SOUND_DATA,
        Cue::End => END_SOUND_DATA,
    }
}

/// Returns the format description of the embedded cue audio.
#[must_use]
pub const fn get_cue_sound_format() -> &'static str {
    "WAV (16-bit PCM, 44.1kHz, Mono)"
}

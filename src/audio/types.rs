//! Audio-related small types and handles.
//!
//! Commands sent to the audio thread, the playback info it publishes back and
//! the shared handle type.

use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Load and start the catalog track at the given index.
    Play(usize),
    /// Stop playback and unload the track.
    Stop,
    /// Toggle pause/resume.
    TogglePause,
    /// Seek by the specified number of seconds (positive or negative).
    SeekBy(i32),
    /// Set output volume on the 0..=100 scale.
    SetVolume(i32),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackInfo {
    /// Catalog index of the loaded track (if any).
    pub index: Option<usize>,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Decoder-reported length, once known.
    pub total: Option<Duration>,
    /// Whether audio is currently coming out.
    pub playing: bool,
    /// Set when the track played to its end. The reader clears it.
    pub ended: bool,
    /// Why the last load failed, if it did.
    pub error: Option<String>,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;

/// Map a 0..=100 volume onto a sink gain. Out-of-range values saturate.
pub fn volume_to_gain(volume: i32) -> f32 {
    volume.clamp(0, 100) as f32 / 100.0
}

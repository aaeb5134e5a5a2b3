use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::catalog::Track;

/// Volume a fresh store starts with.
pub const DEFAULT_VOLUME: i32 = 70;

/// Current transport status.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// Seconds elapsed in the current track.
    pub current_time: f64,
    /// Total seconds of the current track, `0.0` until the media layer knows.
    pub duration: f64,
    /// Output volume, nominally 0..=100. Stored as given.
    pub volume: i32,
    /// Position of the active track in the catalog. Not bounds checked.
    pub track_index: usize,
    pub current_track: Option<Track>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: DEFAULT_VOLUME,
            track_index: 0,
            current_track: None,
        }
    }
}

/// Shared handle to one `PlaybackState`.
///
/// Every clone points at the same record. Setters overwrite a single field and
/// never fail; there is no validation and no change notification, so readers
/// see a write the next time they look.
///
/// The store is single-threaded (`!Send`): it is owned by the UI event loop.
/// Holding a borrow of the record returned by [`MusicStore::state`] across a
/// setter call panics, like any other `RefCell` double borrow.
#[derive(Debug, Clone, Default)]
pub struct MusicStore {
    state: Rc<RefCell<PlaybackState>>,
}

impl MusicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_is_playing(&self, is_playing: bool) {
        self.state.borrow_mut().is_playing = is_playing;
    }

    pub fn set_current_time(&self, seconds: f64) {
        self.state.borrow_mut().current_time = seconds;
    }

    pub fn set_duration(&self, seconds: f64) {
        self.state.borrow_mut().duration = seconds;
    }

    /// Callers keep the value within 0..=100; nothing is clamped here.
    pub fn set_volume(&self, volume: i32) {
        self.state.borrow_mut().volume = volume;
    }

    pub fn set_track_index(&self, index: usize) {
        trace!(index, "store: track index");
        self.state.borrow_mut().track_index = index;
    }

    /// Replace the loaded track, or clear it with `None`.
    pub fn set_track(&self, track: Option<Track>) {
        trace!(title = track.as_ref().map(|t| t.title.as_str()), "store: track");
        self.state.borrow_mut().current_track = track;
    }

    /// The live record, not a copy.
    pub fn state(&self) -> Rc<RefCell<PlaybackState>> {
        Rc::clone(&self.state)
    }

    /// Run `f` against the live record without handing out the `Ref`.
    pub fn read<R>(&self, f: impl FnOnce(&PlaybackState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Point-in-time copy, handy for rendering without holding a borrow.
    pub fn snapshot(&self) -> PlaybackState {
        self.state.borrow().clone()
    }
}

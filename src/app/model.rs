//! Application model: catalog, playback store, router and selection cursor.
//!
//! Key handlers in the runtime call into `App`; widgets in `ui` read from it.
//! All playback status goes through the `MusicStore` so every widget sees the
//! same values.

use crate::audio::PlaybackInfo;
use crate::catalog::{Track, TrackCatalog};
use crate::error::Result;
use crate::router::{Page, Router};
use crate::store::MusicStore;

pub const MIN_VOLUME: i32 = 0;
pub const MAX_VOLUME: i32 = 100;

/// The main application model.
pub struct App {
    pub catalog: TrackCatalog,
    pub store: MusicStore,
    pub router: Router,
    /// Cursor position in the track list.
    pub selected: usize,
    /// Last failure reported by the media layer, shown in the status line.
    pub last_error: Option<String>,
}

impl App {
    pub fn new(catalog: TrackCatalog, store: MusicStore, start: Page) -> Self {
        Self {
            catalog,
            store,
            router: Router::new(start),
            selected: 0,
            last_error: None,
        }
    }

    pub fn has_tracks(&self) -> bool {
        !self.catalog.is_empty()
    }

    pub fn page(&self) -> Page {
        self.router.current()
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.catalog.get(self.selected)
    }

    /// Move selection down, wrapping to the top.
    pub fn next(&mut self) {
        if self.has_tracks() {
            self.selected = (self.selected + 1) % self.catalog.len();
        }
    }

    /// Move selection up, wrapping to the bottom.
    pub fn prev(&mut self) {
        if self.has_tracks() {
            self.selected = if self.selected == 0 {
                self.catalog.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.catalog.len() {
            self.selected = index;
        }
    }

    /// Make catalog track `index` the current one.
    ///
    /// Returns `None` without touching the store when `index` is out of range;
    /// the store itself would accept any index.
    pub fn load(&mut self, index: usize) -> Option<usize> {
        let track = self.catalog.get(index)?.clone();
        self.store.set_track_index(index);
        self.store.set_track(Some(track));
        self.store.set_current_time(0.0);
        self.store.set_duration(0.0);
        self.store.set_is_playing(true);
        self.last_error = None;
        Some(index)
    }

    /// Forget the current track.
    pub fn unload(&mut self) {
        self.store.set_is_playing(false);
        self.store.set_track(None);
        self.store.set_current_time(0.0);
        self.store.set_duration(0.0);
    }

    /// Whether a track is loaded in the store.
    pub fn has_loaded_track(&self) -> bool {
        self.store.read(|s| s.current_track.is_some())
    }

    /// Index after the store's current track, wrapping around.
    pub fn next_track_index(&self) -> Option<usize> {
        if !self.has_tracks() {
            return None;
        }
        let current = self.store.read(|s| s.track_index);
        Some((current.min(self.catalog.len() - 1) + 1) % self.catalog.len())
    }

    /// Index before the store's current track, wrapping around.
    pub fn prev_track_index(&self) -> Option<usize> {
        if !self.has_tracks() {
            return None;
        }
        let len = self.catalog.len();
        let current = self.store.read(|s| s.track_index).min(len - 1);
        Some(if current == 0 { len - 1 } else { current - 1 })
    }

    /// Change volume by `delta`, keeping it within 0..=100.
    ///
    /// The store stores whatever it is given, so the bounds live here.
    pub fn adjust_volume(&mut self, delta: i32) -> i32 {
        let current = self.store.read(|s| s.volume);
        let volume = current.saturating_add(delta).clamp(MIN_VOLUME, MAX_VOLUME);
        self.store.set_volume(volume);
        volume
    }

    /// Copy what the media layer reports into the store.
    ///
    /// While a track is loaded, reports about any other track (or the idle
    /// report the audio thread publishes before it picks up `Play`) are stale
    /// and ignored. Only a failure from an idle thread is kept.
    pub fn sync_playback(&mut self, info: &PlaybackInfo) {
        let (track_index, loaded) = self
            .store
            .read(|s| (s.track_index, s.current_track.is_some()));
        let current = info.index == Some(track_index);
        if !current && (loaded || info.index.is_some()) {
            if info.index.is_none() && info.error.is_some() {
                self.last_error = info.error.clone();
            }
            return;
        }

        self.store.set_current_time(info.elapsed.as_secs_f64());
        if let Some(total) = info.total {
            self.store.set_duration(total.as_secs_f64());
        }
        self.store.set_is_playing(info.playing);
        if info.error.is_some() {
            self.last_error = info.error.clone();
        }
    }

    pub fn navigate(&mut self, location: &str) -> Result<Page> {
        self.router.push(location)
    }

    /// Switch between Home and Game.
    pub fn toggle_page(&mut self) -> Page {
        let target = match self.page() {
            Page::Home => Page::Game,
            Page::Game => Page::Home,
        };
        // Both paths are in the route table.
        self.router.push(target.path()).unwrap_or(target)
    }

    pub fn back(&mut self) -> Option<Page> {
        self.router.back()
    }
}

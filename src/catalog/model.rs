use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use super::builtin::builtin_tracks;
use super::locator::TrackLocator;

/// One playable catalog entry.
///
/// `duration` is display text ("4:32"), not a measured length. The real
/// length is only known once the media layer has opened the source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub title: String,
    pub duration: String,
    pub url: String,
}

impl Track {
    pub fn new(title: impl Into<String>, duration: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: duration.into(),
            url: url.into(),
        }
    }

    /// Parse the display duration (`M:SS` or `H:MM:SS`).
    ///
    /// Returns `None` for anything that is not well formed; the catalog never
    /// rejects such entries, they just have no numeric length.
    pub fn display_duration(&self) -> Option<Duration> {
        let parts: Vec<&str> = self.duration.trim().split(':').collect();
        if parts.len() < 2 || parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
            return None;
        }

        let mut nums = Vec::with_capacity(parts.len());
        for p in &parts {
            nums.push(p.parse::<u64>().ok()?);
        }

        let secs = *nums.last()?;
        if secs >= 60 {
            return None;
        }
        let total = match nums.as_slice() {
            [m, s] => m.checked_mul(60)?.checked_add(*s)?,
            [h, m, s] if *m < 60 => h.checked_mul(3600)?.checked_add(m * 60 + s)?,
            _ => return None,
        };
        Some(Duration::from_secs(total))
    }

    pub fn locator(&self) -> TrackLocator<'_> {
        TrackLocator::classify(&self.url)
    }
}

/// Ordered, read-only sequence of tracks.
///
/// Cloning is cheap: all clones share the same backing slice, which lets the
/// audio thread hold the catalog alongside the UI.
#[derive(Debug, Clone)]
pub struct TrackCatalog {
    tracks: Arc<[Track]>,
}

impl TrackCatalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: tracks.into(),
        }
    }

    /// The catalog shipped with the player.
    pub fn builtin() -> Self {
        Self::new(builtin_tracks())
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a TrackCatalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

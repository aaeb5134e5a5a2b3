//! Classification and resolution of `Track::url` values.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// Where a track's audio lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackLocator<'a> {
    /// A path with no scheme, served from the media root.
    Local(&'a str),
    /// An `http://` or `https://` URL.
    Remote(&'a str),
    /// An inline `data:` URI.
    Data(&'a str),
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

impl<'a> TrackLocator<'a> {
    pub fn classify(url: &'a str) -> Self {
        let url = url.trim();
        if starts_with_ignore_case(url, "data:") {
            Self::Data(url)
        } else if starts_with_ignore_case(url, "http://") || starts_with_ignore_case(url, "https://")
        {
            Self::Remote(url)
        } else {
            Self::Local(url)
        }
    }

    /// Filesystem path for a local locator, `None` for the other kinds.
    pub fn local_path(&self, media_root: &Path) -> Option<PathBuf> {
        match self {
            Self::Local(url) => Some(resolve_local(media_root, url)),
            _ => None,
        }
    }
}

/// Map a site-relative locator (`/music/a.mp3`) onto `media_root`.
///
/// Query strings and fragments are dropped; they never name a file.
pub fn resolve_local(media_root: &Path, url: &str) -> PathBuf {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let relative = path.trim_start_matches('/');
    media_root.join(relative)
}

/// Decode the payload of a `data:` URI into raw bytes.
///
/// Supports both `;base64` payloads and percent-encoded ones.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let uri = uri.trim();
    if !starts_with_ignore_case(uri, "data:") {
        return Err(Error::InvalidDataUri("missing `data:` prefix".to_string()));
    }
    let rest = &uri["data:".len()..];
    let Some((header, payload)) = rest.split_once(',') else {
        return Err(Error::InvalidDataUri("missing `,` separator".to_string()));
    };

    let is_base64 = header
        .rsplit(';')
        .next()
        .map(|p| p.trim().eq_ignore_ascii_case("base64"))
        .unwrap_or(false);

    if is_base64 {
        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        Ok(STANDARD.decode(compact)?)
    } else {
        // Malformed `%` escapes pass through as-is.
        Ok(urlencoding::decode_binary(payload.as_bytes()).into_owned())
    }
}

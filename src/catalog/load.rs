use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

use super::model::{Track, TrackCatalog};

/// On-disk layout of a standalone catalog file:
///
/// ```toml
/// [[tracks]]
/// title = "Your Hand in Mine"
/// duration = "4:32"
/// url = "/music/your-hand-in-mine.mp3"
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

impl TrackCatalog {
    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        let file: CatalogFile = toml::from_str(text)?;
        Ok(Self::new(file.tracks))
    }

    /// Read and parse a standalone catalog file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&text).map_err(|source| Error::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), tracks = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Configuration errors
    #[error("Failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse catalog file {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Routing errors
    #[error("No route matches {0:?}")]
    UnknownRoute(String),

    // Media errors
    #[error("Track index {index} is out of range (catalog has {len} tracks)")]
    TrackOutOfRange { index: usize, len: usize },

    #[error("Unsupported track source: {0}")]
    UnsupportedSource(String),

    #[error("Malformed data URI: {0}")]
    InvalidDataUri(String),

    #[error("Failed to decode base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

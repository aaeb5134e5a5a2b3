use std::{env, path::PathBuf};

use tracing::info;

use crate::catalog::TrackCatalog;
use crate::error::{Error, Result};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `NOCTURNE__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("NOCTURNE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<()> {
        if self.controls.volume_step <= 0 {
            return Err(Error::InvalidConfig(
                "controls.volume_step must be >= 1".to_string(),
            ));
        }
        if self.controls.scrub_seconds == 0 {
            return Err(Error::InvalidConfig(
                "controls.scrub_seconds must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the track catalog: a catalog file if configured, else the inline list.
    pub fn catalog(&self) -> Result<TrackCatalog> {
        match &self.catalog.file {
            Some(path) => {
                info!(path = %path.display(), "reading catalog file");
                TrackCatalog::from_file(path)
            }
            None => Ok(TrackCatalog::new(self.catalog.tracks.clone())),
        }
    }
}

/// Resolve the config path from `NOCTURNE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("NOCTURNE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/nocturne/config.toml`
/// or `~/.config/nocturne/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("nocturne").join("config.toml"))
}

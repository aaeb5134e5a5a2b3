use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;

/// `$XDG_STATE_HOME/nocturne/nocturne.log`, or under `~/.local/state`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("nocturne").join("nocturne.log"))
}

/// Install a file-backed tracing subscriber.
///
/// The terminal belongs to the TUI, so there is no console layer. Returns the
/// log path when logging was set up.
pub fn init_tracing(settings: &LoggingSettings) -> Option<PathBuf> {
    if !settings.enabled {
        return None;
    }
    let log_path = settings.file.clone().or_else(default_log_path)?;

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("nocturne: failed to create log file at {}: {e}", log_path.display());
            return None;
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .is_ok();

    installed.then_some(log_path)
}

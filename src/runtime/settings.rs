use crate::config;

/// Load settings, falling back to defaults on any problem.
///
/// Config is optional; failures should not prevent the player from starting.
/// Logging is not up yet at this point, so the problem is handed back for the
/// caller to report once it is.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {e}")),
            ),
        },
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}

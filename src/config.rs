//! Settings for the player: catalog, media root, controls, UI and logging.
//!
//! Layered as defaults, then an optional TOML file, then `NOCTURNE__*`
//! environment variables.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

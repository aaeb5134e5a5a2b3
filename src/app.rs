//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the shared
//! playback store, the router and the selection cursor.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;

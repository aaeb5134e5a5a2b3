//! Track catalog: the ordered, read-only list of playable tracks.
//!
//! The catalog is built once at startup (from the built-in list, the
//! `[catalog]` config section, or a standalone catalog file) and never
//! changes afterwards.

mod builtin;
mod load;
mod locator;
mod model;

pub use builtin::builtin_tracks;
pub use locator::{TrackLocator, decode_data_uri, resolve_local};
pub use model::*;

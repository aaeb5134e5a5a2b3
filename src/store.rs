//! Playback state store.
//!
//! A single `PlaybackState` record shared by every widget that needs to know
//! what is playing. `MusicStore` is a cheap handle to that record: clone it
//! into each consumer instead of reaching for a global.

mod state;

pub use state::*;

#[cfg(test)]
mod tests;

//! Media layer: a background thread that plays catalog tracks with `rodio`.
//!
//! The UI never talks to `rodio` directly. It sends `AudioCmd`s through an
//! `AudioPlayer` and reads back a `PlaybackInfo` snapshot, which the event loop
//! copies into the playback store.

mod player;
mod source;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::*;

#[cfg(test)]
mod tests;

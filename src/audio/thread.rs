use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, info, warn};

use crate::catalog::TrackCatalog;
use crate::config::AudioSettings;
use crate::error::Error;
use crate::store::DEFAULT_VOLUME;

use super::source::create_sink_at;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo, volume_to_gain};

const TICK: Duration = Duration::from_millis(200);

pub(super) fn spawn_audio_thread(
    catalog: TrackCatalog,
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(e) => {
                error!("no audio output device: {e}");
                if let Ok(mut info) = playback_info.lock() {
                    info.error = Some(format!("no audio output device: {e}"));
                }
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);

        let mut deck = Deck::new(catalog, audio_settings.media_root, playback_info);

        loop {
            match rx.recv_timeout(TICK) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    deck.quit(fade_out_ms);
                    break;
                }
                Ok(cmd) => deck.handle(cmd, &stream),
                Err(RecvTimeoutError::Timeout) => deck.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        debug!("audio thread exiting");
    })
}

/// Everything the audio thread knows about the loaded track.
struct Deck {
    catalog: TrackCatalog,
    media_root: PathBuf,
    playback_info: PlaybackHandle,

    sink: Option<Sink>,
    index: Option<usize>,
    paused: bool,
    total: Option<Duration>,
    gain: f32,

    // Track start time and accumulated elapsed when paused.
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl Deck {
    fn new(catalog: TrackCatalog, media_root: PathBuf, playback_info: PlaybackHandle) -> Self {
        Self {
            catalog,
            media_root,
            playback_info,
            sink: None,
            index: None,
            paused: true,
            total: None,
            gain: volume_to_gain(DEFAULT_VOLUME),
            started_at: None,
            accumulated: Duration::ZERO,
        }
    }

    fn publish(&self, update: impl FnOnce(&mut PlaybackInfo)) {
        if let Ok(mut info) = self.playback_info.lock() {
            update(&mut info);
        }
    }

    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn handle(&mut self, cmd: AudioCmd, stream: &OutputStream) {
        match cmd {
            AudioCmd::Play(i) => self.play(i, stream),
            AudioCmd::Stop => self.stop(),
            AudioCmd::TogglePause => self.toggle_pause(),
            AudioCmd::SeekBy(secs) => self.seek_by(secs, stream),
            AudioCmd::SetVolume(volume) => {
                self.gain = volume_to_gain(volume);
                if let Some(s) = self.sink.as_ref() {
                    s.set_volume(self.gain);
                }
            }
            // Handled by the receive loop.
            AudioCmd::Quit { .. } => {}
        }
    }

    fn play(&mut self, i: usize, stream: &OutputStream) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.index = Some(i);
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        self.total = None;

        let opened = match self.catalog.get(i) {
            Some(track) => create_sink_at(stream, track, &self.media_root, Duration::ZERO),
            None => Err(Error::TrackOutOfRange {
                index: i,
                len: self.catalog.len(),
            }),
        };

        match opened {
            Ok((sink, total)) => {
                sink.set_volume(self.gain);
                sink.play();
                self.sink = Some(sink);
                self.paused = false;
                self.started_at = Some(Instant::now());
                self.total = total;
                info!(index = i, ?total, "playing");
                self.publish(|info| {
                    *info = PlaybackInfo {
                        index: Some(i),
                        total,
                        playing: true,
                        ..PlaybackInfo::default()
                    };
                });
            }
            Err(e) => {
                warn!(index = i, "failed to load track: {e}");
                let message = e.to_string();
                self.publish(|info| {
                    *info = PlaybackInfo {
                        index: Some(i),
                        error: Some(message),
                        ..PlaybackInfo::default()
                    };
                });
            }
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.index = None;
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        self.total = None;
        self.publish(|info| *info = PlaybackInfo::default());
    }

    fn toggle_pause(&mut self) {
        let Some(s) = self.sink.as_ref() else {
            return;
        };
        if self.paused {
            s.play();
            self.started_at = Some(Instant::now());
        } else {
            s.pause();
            if let Some(st) = self.started_at.take() {
                self.accumulated += st.elapsed();
            }
        }
        self.paused = !self.paused;
        let playing = !self.paused;
        let elapsed = self.elapsed();
        self.publish(|info| {
            info.playing = playing;
            info.elapsed = elapsed;
        });
    }

    /// Scrubbing: rebuild the current sink and skip into the source.
    fn seek_by(&mut self, secs: i32, stream: &OutputStream) {
        let (Some(i), Some(_)) = (self.index, self.sink.as_ref()) else {
            return;
        };
        let Some(track) = self.catalog.get(i) else {
            return;
        };

        let cur = self.elapsed().as_secs() as i64;
        let mut target = Duration::from_secs((cur + secs as i64).max(0) as u64);
        if let Some(total) = self.total {
            target = target.min(total);
        }

        let (new_sink, _) = match create_sink_at(stream, track, &self.media_root, target) {
            Ok(opened) => opened,
            Err(e) => {
                warn!(index = i, "seek failed: {e}");
                return;
            }
        };

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        new_sink.set_volume(self.gain);
        if self.paused {
            self.started_at = None;
        } else {
            new_sink.play();
            self.started_at = Some(Instant::now());
        }
        self.sink = Some(new_sink);
        self.accumulated = target;
        self.publish(|info| info.elapsed = target);
    }

    /// Periodic refresh of elapsed time plus end-of-track detection.
    fn tick(&mut self) {
        let Some(s) = self.sink.as_ref() else {
            return;
        };
        if self.paused {
            return;
        }

        if s.empty() {
            let elapsed = self.total.unwrap_or_else(|| self.elapsed());
            self.sink = None;
            self.paused = true;
            self.started_at = None;
            self.accumulated = elapsed;
            debug!(index = ?self.index, "track ended");
            self.publish(|info| {
                info.elapsed = elapsed;
                info.playing = false;
                info.ended = true;
            });
        } else {
            let elapsed = self.elapsed();
            self.publish(|info| info.elapsed = elapsed);
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(s) = self.sink.take() {
            // Fade out gently before stopping.
            if !self.paused {
                fade_out_sink(&s, self.gain, fade_out_ms);
            }
            s.stop();
        }
        // Update shared state so the UI doesn't keep showing Playing.
        self.publish(|info| info.playing = false);
    }
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

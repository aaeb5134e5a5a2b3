use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

use crate::app::App;
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config;
use crate::error::Result;
use crate::ui;

/// Main terminal event loop: handles input, UI drawing and sync with the audio
/// thread. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
) -> Result<()> {
    let playback = audio_player.playback_handle();

    loop {
        // Copy the audio thread's report into the store; `ended` is consumed here.
        let report = playback.lock().ok().map(|mut info| {
            let snapshot = info.clone();
            info.ended = false;
            snapshot
        });
        if let Some(info) = report {
            app.sync_playback(&info);

            let current = app.store.read(|s| s.track_index);
            if info.ended && info.index == Some(current) {
                if let Some(next) = app.next_track_index() {
                    debug!(from = current, to = next, "auto-advance");
                    play_index(app, audio_player, next);
                }
            }
        }

        terminal.draw(|f| ui::draw(f, app, settings))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, audio_player) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Load `index` into the store and tell the audio thread to play it.
fn play_index(app: &mut App, audio_player: &AudioPlayer, index: usize) {
    if app.load(index).is_some() {
        app.set_selected(index);
        let _ = audio_player.send(AudioCmd::Play(index));
    }
}

fn toggle_play_pause(app: &mut App, audio_player: &AudioPlayer) {
    if app.has_loaded_track() && app.last_error.is_none() {
        let playing = app.store.read(|s| s.is_playing);
        let _ = audio_player.send(AudioCmd::TogglePause);
        app.store.set_is_playing(!playing);
    } else if app.has_tracks() {
        let index = app.selected;
        play_index(app, audio_player, index);
    }
}

fn go_to(app: &mut App, location: &str) {
    if let Err(e) = app.navigate(location) {
        warn!("{e}");
    }
}

/// Returns `true` when the player should quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Enter => {
            if app.has_tracks() {
                let index = app.selected;
                play_index(app, audio_player, index);
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => toggle_play_pause(app, audio_player),
        KeyCode::Char('s') => {
            let _ = audio_player.send(AudioCmd::Stop);
            app.unload();
        }
        KeyCode::Char('l') => {
            if let Some(next) = app.next_track_index() {
                play_index(app, audio_player, next);
            }
        }
        KeyCode::Char('h') => {
            if let Some(prev) = app.prev_track_index() {
                play_index(app, audio_player, prev);
            }
        }
        KeyCode::Char('L') => {
            let secs = settings.controls.scrub_seconds.min(i32::MAX as u64) as i32;
            let _ = audio_player.send(AudioCmd::SeekBy(secs));
        }
        KeyCode::Char('H') => {
            let secs = settings.controls.scrub_seconds.min(i32::MAX as u64) as i32;
            let _ = audio_player.send(AudioCmd::SeekBy(-secs));
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let volume = app.adjust_volume(settings.controls.volume_step);
            let _ = audio_player.send(AudioCmd::SetVolume(volume));
        }
        KeyCode::Char('-') => {
            let volume = app.adjust_volume(-settings.controls.volume_step);
            let _ = audio_player.send(AudioCmd::SetVolume(volume));
        }
        KeyCode::Tab => {
            app.toggle_page();
        }
        KeyCode::Char('1') => go_to(app, "/"),
        KeyCode::Char('2') => go_to(app, "/game"),
        KeyCode::Char('b') | KeyCode::Backspace => {
            app.back();
        }
        _ => {}
    }

    false
}

//! UI rendering helpers for the terminal user interface.
//!
//! Each widget below reads the playback store on its own; none of them pass
//! state to each other. That keeps the track list, the game panel and the
//! player bar consistent without coupling them.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Tabs, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use crate::app::App;
use crate::config::{ControlsSettings, Settings, TimeField, UiSettings};
use crate::router::{Page, ROUTES};
use crate::store::{MusicStore, PlaybackState};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("enter", "play selected song");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    // H/L and +/- are filled dynamically from config.
    map.insert("tab", "switch page");
    map.insert("1/2", "home/game");
    map.insert("s", "stop");
    map.insert("b", "back");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating configured steps.
fn controls_text(controls: &ControlsSettings) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "j/k", "h/l", "H/L", "enter", "space/p", "s", "+/-", "tab", "1/2", "b", "q",
    ];
    order
        .iter()
        .filter_map(|k| match *k {
            "H/L" => Some(format!("[H/L] scrub -/+{}s", controls.scrub_seconds)),
            "+/-" => Some(format!("[+/-] volume ±{}", controls.volume_step)),
            _ => CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn secs(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds.max(0.0)).unwrap_or(Duration::ZERO)
}

/// Total length of the loaded track: the measured one once the media layer
/// reported it, else the catalog's display duration.
fn total_of(state: &PlaybackState) -> Option<Duration> {
    if state.duration > 0.0 {
        Some(secs(state.duration))
    } else {
        state
            .current_track
            .as_ref()
            .and_then(|t| t.display_duration())
    }
}

/// Build the time text (elapsed/total/remaining) per `UiSettings`.
fn time_text(elapsed: Duration, total: Option<Duration>, ui: &UiSettings) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    for f in &ui.time_fields {
        match f {
            TimeField::Elapsed => parts.push(format_mmss(elapsed)),
            TimeField::Total => {
                if let Some(t) = total {
                    parts.push(format_mmss(t));
                }
            }
            TimeField::Remaining => {
                if let Some(t) = total {
                    let rem = t.saturating_sub(elapsed);
                    parts.push(format!("-{}", format_mmss(rem)));
                }
            }
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(&ui.time_separator))
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, settings: &Settings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app.page(), &settings.ui);

    match app.page() {
        Page::Home => draw_home(frame, chunks[1], app),
        Page::Game => draw_game(frame, chunks[1], &app.store),
    }

    draw_player_bar(frame, chunks[2], app, &settings.ui);

    let footer = Paragraph::new(controls_text(&settings.controls))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect, page: Page, ui: &UiSettings) {
    let selected = ROUTES.iter().position(|r| r.page == page).unwrap_or(0);
    let tabs = Tabs::new(ROUTES.iter().map(|r| format!("{} {}", r.name, r.path)))
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(ui.header_text.as_str())
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(tabs, area);
}

/// Home page: the catalog as a list, with a marker on the loaded track.
fn draw_home(frame: &mut Frame, area: Rect, app: &App) {
    let (loaded, playing) = app.store.read(|s| {
        (
            s.current_track.as_ref().map(|_| s.track_index),
            s.is_playing,
        )
    });

    let items: Vec<ListItem> = app
        .catalog
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = match loaded {
                Some(idx) if idx == i && playing => "▶ ",
                Some(idx) if idx == i => "‖ ",
                _ => "  ",
            };
            ListItem::new(format!("{marker}{}  [{}]", track.title, track.duration))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if app.has_tracks() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Game page: a large now-playing panel so the music stays visible while
/// the page is in front.
fn draw_game(frame: &mut Frame, area: Rect, store: &MusicStore) {
    let state = store.snapshot();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let title = state
        .current_track
        .as_ref()
        .map(|t| t.title.as_str())
        .unwrap_or("Nothing loaded");
    let panel = Paragraph::new(title)
        .bold()
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" game "))
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, rows[0]);

    let elapsed = secs(state.current_time);
    let ratio = match total_of(&state) {
        Some(total) if !total.is_zero() => {
            (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
        }
        _ => 0.0,
    };
    let progress = Gauge::default()
        .block(Block::bordered().title(" progress "))
        .ratio(ratio)
        .label(format_mmss(elapsed));
    frame.render_widget(progress, rows[1]);

    // Volume may be outside 0..=100; draw it saturated but label it verbatim.
    let volume = Gauge::default()
        .block(Block::bordered().title(" volume "))
        .ratio((state.volume.clamp(0, 100) as f64) / 100.0)
        .label(format!("{}", state.volume));
    frame.render_widget(volume, rows[2]);
}

/// Player bar shown on every page.
fn draw_player_bar(frame: &mut Frame, area: Rect, app: &App, ui: &UiSettings) {
    let state = app.store.snapshot();

    let mut parts: Vec<String> = Vec::new();
    match &state.current_track {
        Some(track) => {
            let song = match time_text(secs(state.current_time), total_of(&state), ui) {
                Some(time) => format!("Song: {} [{}]", track.title, time),
                None => format!("Song: {}", track.title),
            };
            parts.push(song);
            parts.push(if state.is_playing { "Playing" } else { "Paused" }.to_string());
        }
        None => parts.push("Stopped".to_string()),
    }
    parts.push(format!("Volume: {}", state.volume));
    parts.push(format!("Page: {}", app.page().path()));
    if let Some(err) = &app.last_error {
        parts.push(format!("Error: {err}"));
    }

    let bar = Paragraph::new(parts.join(" • "))
        .block(Block::bordered().padding(Padding::left(1)).title(" player "))
        .wrap(Wrap { trim: true });
    frame.render_widget(bar, area);
}

use super::*;
use crate::audio::PlaybackInfo;
use crate::catalog::{Track, TrackCatalog};
use crate::router::Page;
use crate::store::MusicStore;
use std::time::Duration;

fn t(title: &str) -> Track {
    Track::new(title, "1:00", format!("/music/{title}.mp3"))
}

fn app_with(titles: &[&str]) -> App {
    let catalog = TrackCatalog::new(titles.iter().map(|s| t(s)).collect());
    App::new(catalog, MusicStore::new(), Page::Home)
}

#[test]
fn selection_wraps_both_ways() {
    let mut app = app_with(&["Alpha", "Beta", "Gamma"]);
    app.prev();
    assert_eq!(app.selected, 2);
    app.next();
    assert_eq!(app.selected, 0);
    app.next();
    assert_eq!(app.selected_track().unwrap().title, "Beta");
}

#[test]
fn selection_on_empty_catalog_is_a_no_op() {
    let mut app = app_with(&[]);
    app.next();
    app.prev();
    app.set_selected(3);
    assert_eq!(app.selected, 0);
    assert!(app.selected_track().is_none());
    assert_eq!(app.next_track_index(), None);
    assert_eq!(app.prev_track_index(), None);
}

#[test]
fn load_writes_track_into_the_store() {
    let mut app = app_with(&["Alpha", "Beta"]);
    app.store.set_current_time(30.0);
    app.store.set_duration(60.0);

    assert_eq!(app.load(1), Some(1));
    let s = app.store.snapshot();
    assert_eq!(s.track_index, 1);
    assert_eq!(s.current_track.unwrap().title, "Beta");
    assert_eq!(s.current_time, 0.0);
    assert_eq!(s.duration, 0.0);
    assert!(s.is_playing);
    assert!(app.has_loaded_track());
}

#[test]
fn load_out_of_range_leaves_store_untouched() {
    let mut app = app_with(&["Alpha"]);
    let before = app.store.snapshot();
    assert_eq!(app.load(4), None);
    assert_eq!(app.store.snapshot(), before);
}

#[test]
fn unload_clears_current_track() {
    let mut app = app_with(&["Alpha"]);
    app.load(0);
    app.unload();
    let s = app.store.snapshot();
    assert!(s.current_track.is_none());
    assert!(!s.is_playing);
}

#[test]
fn next_and_prev_track_follow_the_store() {
    let mut app = app_with(&["Alpha", "Beta", "Gamma"]);
    assert_eq!(app.next_track_index(), Some(1));
    assert_eq!(app.prev_track_index(), Some(2));

    app.load(2);
    assert_eq!(app.next_track_index(), Some(0));
    assert_eq!(app.prev_track_index(), Some(1));

    // Some other widget parked the index out of range.
    app.store.set_track_index(99);
    assert_eq!(app.next_track_index(), Some(0));
    assert_eq!(app.prev_track_index(), Some(1));
}

#[test]
fn adjust_volume_clamps_at_the_caller() {
    let mut app = app_with(&["Alpha"]);
    assert_eq!(app.adjust_volume(50), 100);
    assert_eq!(app.adjust_volume(-250), 0);

    // The store itself still takes anything.
    app.store.set_volume(150);
    assert_eq!(app.store.snapshot().volume, 150);
    assert_eq!(app.adjust_volume(-5), 95);
}

#[test]
fn sync_playback_copies_media_report_into_store() {
    let mut app = app_with(&["Alpha", "Beta"]);
    app.load(1);

    app.sync_playback(&PlaybackInfo {
        index: Some(1),
        elapsed: Duration::from_millis(12_500),
        total: Some(Duration::from_secs(272)),
        playing: true,
        ended: false,
        error: None,
    });

    let s = app.store.snapshot();
    assert_eq!(s.current_time, 12.5);
    assert_eq!(s.duration, 272.0);
    assert!(s.is_playing);
}

#[test]
fn sync_playback_ignores_reports_for_another_track() {
    let mut app = app_with(&["Alpha", "Beta"]);
    app.load(1);

    app.sync_playback(&PlaybackInfo {
        index: Some(0),
        elapsed: Duration::from_secs(40),
        playing: false,
        ..PlaybackInfo::default()
    });

    let s = app.store.snapshot();
    assert_eq!(s.current_time, 0.0);
    assert!(s.is_playing);
}

#[test]
fn sync_playback_ignores_idle_report_after_load() {
    let mut app = app_with(&["Alpha", "Beta"]);
    app.load(1);

    app.sync_playback(&PlaybackInfo::default());

    let s = app.store.snapshot();
    assert_eq!(s.track_index, 1);
    assert!(s.is_playing);
    assert_eq!(s.current_time, 0.0);
    assert!(app.last_error.is_none());
}

#[test]
fn sync_playback_applies_idle_report_when_nothing_is_loaded() {
    let mut app = app_with(&["Alpha"]);
    app.store.set_current_time(9.0);
    app.store.set_is_playing(true);

    app.sync_playback(&PlaybackInfo::default());

    let s = app.store.snapshot();
    assert_eq!(s.current_time, 0.0);
    assert!(!s.is_playing);
}

#[test]
fn sync_playback_keeps_idle_thread_failure_while_loaded() {
    let mut app = app_with(&["Alpha"]);
    app.load(0);
    app.sync_playback(&PlaybackInfo {
        error: Some("no audio output device".into()),
        ..PlaybackInfo::default()
    });
    assert!(app.store.snapshot().is_playing);
    assert_eq!(app.last_error.as_deref(), Some("no audio output device"));
}

#[test]
fn sync_playback_records_media_errors() {
    let mut app = app_with(&["Alpha"]);
    app.load(0);
    app.sync_playback(&PlaybackInfo {
        index: Some(0),
        error: Some("remote streams are not fetched".into()),
        ..PlaybackInfo::default()
    });
    assert!(!app.store.snapshot().is_playing);
    assert_eq!(
        app.last_error.as_deref(),
        Some("remote streams are not fetched")
    );

    app.load(0);
    assert!(app.last_error.is_none());
}

#[test]
fn navigation_switches_pages() {
    let mut app = app_with(&["Alpha"]);
    assert_eq!(app.page(), Page::Home);
    assert_eq!(app.toggle_page(), Page::Game);
    assert_eq!(app.toggle_page(), Page::Home);
    assert_eq!(app.back(), Some(Page::Game));

    assert!(app.navigate("/nowhere").is_err());
    assert_eq!(app.page(), Page::Game);
    assert_eq!(app.navigate("/").unwrap(), Page::Home);
}

#[test]
fn widgets_sharing_the_store_see_app_writes() {
    let store = MusicStore::new();
    let player_bar = store.clone();
    let mut app = App::new(TrackCatalog::builtin(), store, Page::Game);
    app.load(0);
    app.adjust_volume(-20);

    let s = player_bar.snapshot();
    assert_eq!(s.current_track.unwrap().title, "Your Hand in Mine");
    assert_eq!(s.volume, 50);
}

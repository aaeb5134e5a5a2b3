use super::*;
use crate::catalog::{Track, TrackCatalog};
use std::rc::Rc;

#[test]
fn fresh_store_has_documented_defaults() {
    let store = MusicStore::new();
    let s = store.snapshot();
    assert!(!s.is_playing);
    assert_eq!(s.current_time, 0.0);
    assert_eq!(s.duration, 0.0);
    assert_eq!(s.volume, 70);
    assert_eq!(s.track_index, 0);
    assert!(s.current_track.is_none());
}

#[test]
fn last_write_wins_per_field() {
    let store = MusicStore::new();
    store.set_volume(10);
    store.set_volume(40);
    store.set_current_time(1.5);
    store.set_current_time(92.25);
    store.set_is_playing(true);
    store.set_is_playing(false);
    store.set_is_playing(true);
    store.set_duration(272.0);

    let s = store.snapshot();
    assert_eq!(s.volume, 40);
    assert_eq!(s.current_time, 92.25);
    assert!(s.is_playing);
    assert_eq!(s.duration, 272.0);
}

#[test]
fn setters_do_not_touch_other_fields() {
    let store = MusicStore::new();
    store.set_track_index(3);
    store.set_volume(5);
    assert_eq!(store.snapshot().track_index, 3);

    store.set_track_index(1);
    assert_eq!(store.snapshot().volume, 5);

    let before = store.snapshot();
    store.set_duration(10.0);
    let after = store.snapshot();
    assert_eq!(
        PlaybackState {
            duration: before.duration,
            ..after.clone()
        },
        before
    );
    assert_eq!(after.duration, 10.0);
}

#[test]
fn state_returns_the_live_shared_record() {
    let store = MusicStore::new();
    let a = store.state();
    let b = store.state();
    assert!(Rc::ptr_eq(&a, &b));

    a.borrow_mut().volume = 33;
    assert_eq!(b.borrow().volume, 33);
    assert_eq!(store.snapshot().volume, 33);
}

#[test]
fn clones_observe_each_others_writes() {
    let player_bar = MusicStore::new();
    let track_list = player_bar.clone();
    assert!(Rc::ptr_eq(&player_bar.state(), &track_list.state()));

    track_list.set_track_index(2);
    player_bar.set_is_playing(true);

    assert_eq!(player_bar.snapshot().track_index, 2);
    assert!(track_list.snapshot().is_playing);
    assert!(!Rc::ptr_eq(&player_bar.state(), &MusicStore::new().state()));
}

#[test]
fn out_of_range_volume_is_stored_verbatim() {
    let store = MusicStore::new();
    store.set_volume(150);
    assert_eq!(store.snapshot().volume, 150);
    store.set_volume(-20);
    assert_eq!(store.snapshot().volume, -20);
}

#[test]
fn track_index_is_not_bounds_checked() {
    let store = MusicStore::new();
    let catalog = TrackCatalog::builtin();
    store.set_track_index(catalog.len() + 10);
    assert_eq!(store.snapshot().track_index, 15);
}

#[test]
fn set_track_replaces_and_clears() {
    let store = MusicStore::new();
    let track = Track::new("Your Hand in Mine", "4:32", "/music/your-hand-in-mine.mp3");
    store.set_track(Some(track.clone()));
    assert_eq!(store.snapshot().current_track, Some(track));

    store.set_track(None);
    assert!(store.snapshot().current_track.is_none());
}

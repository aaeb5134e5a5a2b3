use super::source::open_reader;
use super::*;
use crate::catalog::Track;
use crate::error::Error;
use std::io::Read;
use std::path::Path;

#[test]
fn volume_to_gain_scales_and_saturates() {
    assert_eq!(volume_to_gain(0), 0.0);
    assert_eq!(volume_to_gain(70), 0.7);
    assert_eq!(volume_to_gain(100), 1.0);
    assert_eq!(volume_to_gain(150), 1.0);
    assert_eq!(volume_to_gain(-5), 0.0);
}

#[test]
fn playback_info_starts_idle() {
    let info = PlaybackInfo::default();
    assert_eq!(info.index, None);
    assert!(!info.playing);
    assert!(!info.ended);
    assert!(info.error.is_none());
}

#[test]
fn local_track_opens_relative_to_media_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("music")).unwrap();
    std::fs::write(dir.path().join("music").join("a.mp3"), b"not really audio").unwrap();

    let track = Track::new("a", "0:01", "/music/a.mp3");
    let mut reader = open_reader(&track, dir.path()).unwrap();
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes, b"not really audio");
}

#[test]
fn missing_local_track_names_the_path() {
    let track = Track::new("gone", "0:01", "/music/gone.mp3");
    let err = match open_reader(&track, Path::new("/nonexistent-media-root")) {
        Ok(_) => panic!("expected an error"),
        Err(e) => e,
    };
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().contains("gone.mp3"));
}

#[test]
fn data_uri_track_reads_from_memory() {
    let track = Track::new("inline", "0:01", "data:audio/wav;base64,aGVsbG8=");
    let mut reader = open_reader(&track, Path::new("unused")).unwrap();
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes, b"hello");
}

#[test]
fn remote_track_is_reported_unsupported() {
    let track = Track::new("remote", "0:01", "https://example.com/a.mp3");
    assert!(matches!(
        open_reader(&track, Path::new("public")),
        Err(Error::UnsupportedSource(_))
    ));
}

use super::model::Track;

/// The default track list, in playback order.
pub fn builtin_tracks() -> Vec<Track> {
    vec![
        Track::new(
            "Your Hand in Mine",
            "4:32",
            "/music/your-hand-in-mine.mp3",
        ),
        Track::new(
            "How Strange, Innocence",
            "5:33",
            "/music/how-strange-innocence.mp3",
        ),
        Track::new(
            "Remember Me as a Time of Day",
            "3:45",
            "/music/remember-me-as-time-of-day.mp3",
        ),
        Track::new(
            "This Night Has Opened My Eyes",
            "2:58",
            "/music/this-night-opened-my-eyes.mp3",
        ),
        Track::new(
            "The Only Moment We Were Alone",
            "4:12",
            "/music/the-only-moment-we-were-alone.mp3",
        ),
    ]
}

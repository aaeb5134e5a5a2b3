//! Opening track sources and creating `rodio` sinks for them.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::catalog::{Track, TrackLocator, decode_data_uri};
use crate::error::{Error, Result};

/// Bytes backing a decoder: a file on disk or an inline payload.
pub(super) enum MediaReader {
    File(BufReader<File>),
    Memory(Cursor<Vec<u8>>),
}

impl Read for MediaReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(r) => r.read(buf),
            Self::Memory(r) => r.read(buf),
        }
    }
}

impl Seek for MediaReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            Self::File(r) => r.seek(pos),
            Self::Memory(r) => r.seek(pos),
        }
    }
}

/// Resolve `track.url` to something readable.
pub(super) fn open_reader(track: &Track, media_root: &Path) -> Result<MediaReader> {
    let locator = track.locator();
    if let Some(path) = locator.local_path(media_root) {
        let file = File::open(&path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
        Ok(MediaReader::File(BufReader::new(file)))
    } else if let TrackLocator::Data(uri) = locator {
        Ok(MediaReader::Memory(Cursor::new(decode_data_uri(uri)?)))
    } else {
        Err(Error::UnsupportedSource(format!(
            "remote streams are not fetched: {}",
            track.url.trim()
        )))
    }
}

/// Create a paused `Sink` for `track` that starts at `start_at`.
///
/// Also returns the decoder's total duration when the format reports one.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    track: &Track,
    media_root: &Path,
    start_at: Duration,
) -> Result<(Sink, Option<Duration>)> {
    let decoder = Decoder::new(open_reader(track, media_root)?)?;
    let total = decoder.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    sink.append(decoder.skip_duration(start_at));
    sink.pause();
    Ok((sink, total))
}

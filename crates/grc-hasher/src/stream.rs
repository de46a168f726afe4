use std::io::{self, Read, Seek, SeekFrom};

use grc_core::{Digest, HashError};

use crate::chunked::digest_chunks;
use crate::source::ReaderSource;

/// Compute the SHA-256 digest of a seekable stream's full content.
///
/// The digest always covers position 0 through end, wherever the stream
/// was positioned on entry. The entry position is restored before this
/// returns, on success and on failure. The stream is borrowed, not closed.
///
/// # Errors
///
/// Returns [`HashError::Io`] if querying the position, seeking, or reading
/// fails. A read error takes precedence over a failed restore.
pub fn hash_stream<S: Read + Seek>(stream: &mut S) -> Result<Digest, HashError> {
    let mut guard = RestorePosition::save(stream)?;
    tracing::debug!(position = guard.position, "hashing stream from start");

    let digest = rewind_and_digest(guard.stream());
    let restored = guard.restore();

    let digest = digest?;
    restored?;
    Ok(digest)
}

fn rewind_and_digest<S: Read + Seek>(stream: &mut S) -> io::Result<Digest> {
    stream.seek(SeekFrom::Start(0))?;
    digest_chunks(ReaderSource::new(stream))
}

/// Seeks the borrowed stream back to its saved position when released.
///
/// `restore` reports a failing seek; dropping without it (unwinding) still
/// seeks back but has nowhere to report failure.
struct RestorePosition<'a, S: Seek> {
    stream: &'a mut S,
    position: u64,
    armed: bool,
}

impl<'a, S: Seek> RestorePosition<'a, S> {
    fn save(stream: &'a mut S) -> io::Result<Self> {
        let position = stream.stream_position()?;
        Ok(Self {
            stream,
            position,
            armed: true,
        })
    }

    fn stream(&mut self) -> &mut S {
        &mut *self.stream
    }

    fn restore(mut self) -> io::Result<()> {
        self.armed = false;
        self.stream.seek(SeekFrom::Start(self.position))?;
        Ok(())
    }
}

impl<S: Seek> Drop for RestorePosition<'_, S> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.stream.seek(SeekFrom::Start(self.position));
        }
    }
}

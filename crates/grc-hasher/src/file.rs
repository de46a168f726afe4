use std::fs::File;
use std::io;
use std::path::Path;

use grc_core::{Digest, HashError};

use crate::chunked::digest_chunks;
use crate::source::ReaderSource;

/// Compute the SHA-256 digest of a file on disk.
///
/// The file handle lives only for the duration of the call and is closed on
/// every return path.
///
/// # Errors
///
/// Returns [`HashError::NotFound`] when `path` does not exist or is not a
/// regular file, and [`HashError::Io`] for any other open or read failure.
pub fn hash_file(path: impl AsRef<Path>) -> Result<Digest, HashError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| open_error(path, e))?;

    let metadata = file.metadata()?;
    if !metadata.is_file() {
        return Err(HashError::NotFound {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "not a regular file"),
        });
    }

    tracing::debug!(path = %path.display(), size = metadata.len(), "hashing file");
    Ok(digest_chunks(ReaderSource::new(file))?)
}

fn open_error(path: &Path, err: io::Error) -> HashError {
    if err.kind() == io::ErrorKind::NotFound {
        HashError::NotFound {
            path: path.to_path_buf(),
            source: err,
        }
    } else {
        HashError::Io(err)
    }
}

use std::io::{Read, Seek};
use std::path::Path;

use grc_core::{Digest, HashError};

/// Stateless SHA-256 hasher for files, byte buffers, and streams.
///
/// Holds no state, so one value can be copied freely or shared across
/// threads. Every method delegates to the free function of the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileHasher;

impl FileHasher {
    pub const fn new() -> Self {
        Self
    }

    /// See [`crate::hash_file`].
    pub fn hash_file(&self, path: impl AsRef<Path>) -> Result<Digest, HashError> {
        crate::file::hash_file(path)
    }

    /// See [`crate::hash_bytes`].
    pub fn hash_bytes(&self, data: &[u8]) -> Digest {
        crate::chunked::hash_bytes(data)
    }

    /// See [`crate::hash_stream`].
    pub fn hash_stream<S: Read + Seek>(&self, stream: &mut S) -> Result<Digest, HashError> {
        crate::stream::hash_stream(stream)
    }

    /// See [`crate::hash_reader`].
    pub fn hash_reader<R: Read>(&self, reader: R) -> Result<Digest, HashError> {
        crate::chunked::hash_reader(reader)
    }
}

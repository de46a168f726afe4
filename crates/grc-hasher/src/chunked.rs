use std::io::Read;

use grc_core::{Digest, HashError};
use sha2::{Digest as _, Sha256};

use crate::source::{ChunkSource, ReaderSource, SliceSource};

/// Bytes requested from a source per read.
pub(crate) const CHUNK_SIZE: usize = 4096;

/// Drain `source` chunk by chunk into a running SHA-256 state.
///
/// Stops at the first zero-length read. The digest depends only on the
/// concatenated bytes, never on where the source chose to split them.
pub fn digest_chunks<S: ChunkSource>(mut source: S) -> Result<Digest, S::Error> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = source.read_chunk(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
        total += n as u64;
    }

    tracing::trace!(bytes = total, "sha256 digest complete");
    Ok(Digest::from_bytes(hasher.finalize().into()))
}

/// Compute the SHA-256 digest of an in-memory buffer.
pub fn hash_bytes(data: &[u8]) -> Digest {
    match digest_chunks(SliceSource::new(data)) {
        Ok(digest) => digest,
        Err(never) => match never {},
    }
}

/// Compute the SHA-256 digest of everything `reader` yields from its
/// current position to the end. No seeking is performed.
pub fn hash_reader<R: Read>(reader: R) -> Result<Digest, HashError> {
    Ok(digest_chunks(ReaderSource::new(reader))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::io::{self, Cursor};

    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const HELLO_WORLD: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    /// Hands out the data in caller-chosen pieces and records every buffer size requested.
    struct SplitSource {
        pieces: Vec<Vec<u8>>,
        requested: Vec<usize>,
    }

    impl SplitSource {
        fn new(data: &[u8], cuts: &[usize]) -> Self {
            let mut pieces = Vec::new();
            let mut start = 0;
            for &cut in cuts {
                let cut = cut.clamp(start, data.len());
                pieces.push(data[start..cut].to_vec());
                start = cut;
            }
            pieces.push(data[start..].to_vec());
            pieces.retain(|p| !p.is_empty());
            pieces.reverse();
            Self {
                pieces,
                requested: Vec::new(),
            }
        }
    }

    impl ChunkSource for SplitSource {
        type Error = Infallible;

        fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
            self.requested.push(buf.len());
            let Some(mut piece) = self.pieces.pop() else {
                return Ok(0);
            };
            let n = piece.len().min(buf.len());
            buf[..n].copy_from_slice(&piece[..n]);
            if n < piece.len() {
                self.pieces.push(piece.split_off(n));
            }
            Ok(n)
        }
    }

    fn digest_split(data: &[u8], cuts: &[usize]) -> Digest {
        let mut source = SplitSource::new(data, cuts);
        match digest_chunks(&mut source) {
            Ok(d) => d,
            Err(never) => match never {},
        }
    }

    #[test]
    fn empty_input_digest() {
        let digest = hash_bytes(b"");
        assert_eq!(digest.to_hex(), EMPTY);
        assert_eq!(digest.to_hex().len(), 64);
    }

    #[test]
    fn known_vector_hello_world() {
        assert_eq!(hash_bytes(b"hello world").to_hex(), HELLO_WORLD);
    }

    #[test]
    fn single_byte_pieces_match_one_shot() {
        let data = b"hello world";
        let cuts: Vec<usize> = (1..data.len()).collect();
        assert_eq!(digest_split(data, &cuts).to_hex(), HELLO_WORLD);
    }

    #[test]
    fn boundaries_around_chunk_size() {
        let data: Vec<u8> = (0..3 * CHUNK_SIZE + 17).map(|i| (i % 251) as u8).collect();
        let expected = hash_bytes(&data);
        for cuts in [
            vec![CHUNK_SIZE - 1],
            vec![CHUNK_SIZE],
            vec![CHUNK_SIZE + 1],
            vec![1, CHUNK_SIZE * 2, CHUNK_SIZE * 2 + 1],
        ] {
            assert_eq!(digest_split(&data, &cuts), expected, "cuts {cuts:?}");
        }
    }

    #[test]
    fn every_request_is_chunk_sized() {
        let data = vec![b'x'; CHUNK_SIZE * 2 + 5];
        let mut source = SplitSource::new(&data, &[100, 5000]);
        let _ = digest_chunks(&mut source);
        assert!(!source.requested.is_empty());
        assert!(source.requested.iter().all(|&len| len == CHUNK_SIZE));
    }

    #[test]
    fn stops_at_first_zero_read() {
        let data = vec![1u8; 10];
        let mut source = SplitSource::new(&data, &[]);
        let _ = digest_chunks(&mut source);
        // one data read plus the terminating empty read
        assert_eq!(source.requested.len(), 2);
    }

    #[test]
    fn hash_reader_from_current_position() {
        let mut cursor = Cursor::new(b"xxhello world".to_vec());
        cursor.set_position(2);
        assert_eq!(hash_reader(&mut cursor).unwrap().to_hex(), HELLO_WORLD);
        assert_eq!(cursor.position(), 13);
    }

    #[test]
    fn hash_reader_exhausted_source_is_empty_digest() {
        let mut cursor = Cursor::new(b"abc".to_vec());
        cursor.set_position(3);
        assert_eq!(hash_reader(&mut cursor).unwrap().to_hex(), EMPTY);
    }

    struct FailAfter {
        good: usize,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.good == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            let n = self.good.min(buf.len());
            buf[..n].fill(0);
            self.good -= n;
            Ok(n)
        }
    }

    #[test]
    fn hash_reader_propagates_read_error() {
        let err = hash_reader(FailAfter { good: 9000 }).unwrap_err();
        assert!(!err.is_not_found());
        match err {
            HashError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;
        use sha2::Digest as _;

        proptest! {
            /// Any way of splitting the input yields the one-shot digest.
            #[test]
            fn chunk_boundaries_do_not_matter(
                data in proptest::collection::vec(any::<u8>(), 0..10_000),
                mut cuts in proptest::collection::vec(0usize..10_000, 0..16),
            ) {
                cuts.sort_unstable();
                let one_shot: [u8; 32] = Sha256::digest(&data).into();
                prop_assert_eq!(digest_split(&data, &cuts), Digest::from_bytes(one_shot));
                prop_assert_eq!(hash_bytes(&data), Digest::from_bytes(one_shot));
            }
        }
    }
}

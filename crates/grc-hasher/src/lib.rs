//! Chunked SHA-256 hashing of files, byte buffers, and seekable streams.
//!
//! All entry points share one chunked digest routine, so the same bytes
//! produce the same [`Digest`] whichever shape they arrive in:
//!
//! ```
//! use std::io::Cursor;
//!
//! let from_bytes = grc_hasher::hash_bytes(b"hello world");
//! let mut stream = Cursor::new(b"hello world".to_vec());
//! stream.set_position(5);
//!
//! let from_stream = grc_hasher::hash_stream(&mut stream).unwrap();
//! assert_eq!(from_bytes, from_stream);
//! assert_eq!(stream.position(), 5);
//! ```

mod chunked;
mod file;
mod hasher;
pub mod source;
mod stream;

pub use chunked::{digest_chunks, hash_bytes, hash_reader};
pub use file::hash_file;
pub use grc_core::{Digest, HashError};
pub use hasher::FileHasher;
pub use stream::hash_stream;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

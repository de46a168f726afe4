//! GRC core types: the SHA-256 `Digest` value and hashing errors.

mod digest;
mod error;

pub use digest::{DIGEST_LEN, Digest, HEX_LEN};
pub use error::{HashError, ParseDigestError};

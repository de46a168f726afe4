use std::io;
use std::path::PathBuf;

/// Errors that can occur while hashing a file or stream.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// The path does not exist or is not a regular file.
    #[error("file not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other read, seek, or open failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HashError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The path that failed to resolve, for `NotFound` errors.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound { path, .. } => Some(path),
            Self::Io(_) => None,
        }
    }
}

impl From<HashError> for io::Error {
    fn from(err: HashError) -> Self {
        match err {
            HashError::NotFound { .. } => io::Error::new(io::ErrorKind::NotFound, err),
            HashError::Io(inner) => inner,
        }
    }
}

/// Errors from parsing a hex digest string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDigestError {
    #[error("expected 64 hex characters, got {0}")]
    Length(usize),

    #[error("invalid hex character at offset {0}")]
    InvalidChar(usize),
}

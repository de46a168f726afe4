use std::convert::Infallible;
use std::io::{self, Read};

/// A sequential byte source that can be drained one chunk at a time.
///
/// `read_chunk` fills a prefix of `buf` and returns how many bytes it wrote.
/// Returning `Ok(0)` signals the source is exhausted.
pub trait ChunkSource {
    type Error;

    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<S: ChunkSource + ?Sized> ChunkSource for &mut S {
    type Error = S::Error;

    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read_chunk(buf)
    }
}

/// Adapts any [`Read`] (an open file, a caller-owned stream) into a chunk source.
///
/// Reads interrupted by a signal are retried; every other error is returned.
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> ChunkSource for ReaderSource<R> {
    type Error = io::Error;

    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.inner.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                result => return result,
            }
        }
    }
}

/// An in-memory buffer viewed as a chunk source. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a> {
    remaining: &'a [u8],
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { remaining: data }
    }
}

impl ChunkSource for SliceSource<'_> {
    type Error = Infallible;

    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let n = buf.len().min(self.remaining.len());
        let (head, tail) = self.remaining.split_at(n);
        buf[..n].copy_from_slice(head);
        self.remaining = tail;
        Ok(n)
    }
}

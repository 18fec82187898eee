//! Chunk-buffered streaming hasher
//!
//! Many hash functions consume their input in fixed size blocks. This module
//! provides the shared buffering layer: a [`StreamingHasher`] accepts writes
//! of any size, accumulates them in a little endian byte buffer, and hands
//! whole chunks to a [`ChunkProcessor`] supplied by the concrete algorithm.
//!
//! The buffer is sized `buffer_size + 7` bytes. Flushing happens whenever
//! fewer than 8 bytes of headroom remain, so any single primitive write
//! always fits without a bounds check on the fast path. Long byte slices skip
//! the buffer: the buffer is topped off and flushed, then whole chunks are
//! processed directly from the caller's slice, and only the remainder is
//! copied back in.
//!
//! At finalization any trailing partial chunk is zero-padded using 8-byte
//! words up to the chunk size and passed to
//! [`ChunkProcessor::process_remaining`] along with the count of real bytes.

use crate::err::Error;
use crate::sink::PrimitiveSink;
use crate::{HashCode, Hasher};

/// Headroom kept free in the buffer so that one more primitive always fits
const SLACK: usize = 7;

/// Validated chunk and buffer sizes for a [`StreamingHasher`]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ChunkLayout {
    /// Bytes consumed by each [`ChunkProcessor::process`] call
    chunk_size: usize,
    /// Bytes accumulated before a flush, always a multiple of `chunk_size`
    buffer_size: usize,
}

impl ChunkLayout {
    /// Layout with a buffer holding exactly one chunk.
    pub fn new(chunk_size: usize) -> Result<Self, Error> {
        Self::with_buffer(chunk_size, chunk_size)
    }

    /// Layout with a buffer holding one or more whole chunks.
    ///
    /// Fails with [`Error::ZeroChunkSize`] or [`Error::MisalignedBuffer`]
    /// rather than constructing a buffer that could never flush cleanly.
    pub fn with_buffer(chunk_size: usize, buffer_size: usize) -> Result<Self, Error> {
        if chunk_size == 0 {
            return Err(Error::ZeroChunkSize);
        }
        if buffer_size == 0 || buffer_size % chunk_size != 0 {
            tracing::debug!(chunk_size, buffer_size, "rejecting misaligned chunk layout");
            return Err(Error::MisalignedBuffer {
                chunk_size,
                buffer_size,
            });
        }
        Ok(Self {
            chunk_size,
            buffer_size,
        })
    }

    /// Single-chunk layout for built-in algorithms with a known nonzero
    /// chunk size.
    pub(crate) const fn fixed(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be nonzero");
        Self {
            chunk_size,
            buffer_size: chunk_size,
        }
    }

    /// Bytes consumed by each processing call.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Bytes accumulated before a flush.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

/// Block compression step of a streaming hash algorithm
///
/// Implementations only ever see whole chunks. The [`StreamingHasher`] owns
/// all buffering.
pub trait ChunkProcessor {
    /// Consume exactly one chunk of input.
    fn process(&mut self, chunk: &[u8]);

    /// Consume the final partial chunk.
    ///
    /// `padded` is one full chunk: the `len` real input bytes followed by
    /// zeroes. This is called at most once, only when `0 < len < chunk_size`.
    /// By default the padded chunk is treated like any other.
    fn process_remaining(&mut self, padded: &[u8], len: usize) {
        let _ = len;
        self.process(padded);
    }

    /// Produce the hash output after all input has been processed.
    fn finish(self) -> HashCode;
}

/// [`Hasher`] that buffers input and feeds fixed size chunks to a
/// [`ChunkProcessor`]
#[derive(Debug, Clone)]
pub struct StreamingHasher<P> {
    /// Algorithm state receiving whole chunks
    processor: P,
    /// Accumulation buffer, `buffer_size + SLACK` bytes long
    buffer: Box<[u8]>,
    /// Write cursor; bytes before it are pending input
    position: usize,
    /// Chunk and buffer sizes this hasher was built with
    layout: ChunkLayout,
}

impl<P: ChunkProcessor> StreamingHasher<P> {
    /// Wrap a [`ChunkProcessor`] with a fresh, empty buffer.
    pub fn new(processor: P, layout: ChunkLayout) -> Self {
        Self {
            processor,
            buffer: vec![0_u8; layout.buffer_size + SLACK].into_boxed_slice(),
            position: 0,
            layout,
        }
    }

    /// The layout this hasher was built with.
    pub fn layout(&self) -> ChunkLayout {
        self.layout
    }

    /// Number of input bytes currently held in the buffer.
    pub fn buffered(&self) -> usize {
        self.position
    }

    /// Free space left in the buffer, including the slack bytes.
    #[inline(always)]
    fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Flush if another primitive write might not fit.
    #[inline(always)]
    fn munch_if_full(&mut self) {
        if self.remaining() < 8 {
            self.munch();
        }
    }

    /// Process every whole chunk in the buffer and compact the leftovers to
    /// the front.
    fn munch(&mut self) {
        let chunk_size = self.layout.chunk_size;
        let mut start = 0;
        while self.position - start >= chunk_size {
            self.processor
                .process(&self.buffer[start..start + chunk_size]);
            start += chunk_size;
        }
        self.buffer.copy_within(start..self.position, 0);
        self.position -= start;
    }

    /// Append bytes that are known to fit in the remaining space.
    #[inline(always)]
    fn stash(&mut self, bytes: &[u8]) {
        let end = self.position + bytes.len();
        self.buffer[self.position..end].copy_from_slice(bytes);
        self.position = end;
    }
}

impl<P: ChunkProcessor> PrimitiveSink for StreamingHasher<P> {
    fn put_u8(&mut self, b: u8) {
        self.buffer[self.position] = b;
        self.position += 1;
        self.munch_if_full();
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        if bytes.len() <= self.remaining() {
            self.stash(bytes);
            self.munch_if_full();
            return;
        }

        // Top off the buffer and flush it. The cursor is always below
        // buffer_size between writes, so this copies at least one byte.
        let (head, rest) = bytes.split_at(self.layout.buffer_size - self.position);
        self.stash(head);
        self.munch();

        let mut chunks = rest.chunks_exact(self.layout.chunk_size);
        for chunk in &mut chunks {
            self.processor.process(chunk);
        }
        self.stash(chunks.remainder());
    }
}

impl<P: ChunkProcessor> Hasher for StreamingHasher<P> {
    fn hash(mut self) -> HashCode {
        self.munch();
        let len = self.position;
        if len > 0 {
            let chunk_size = self.layout.chunk_size;
            tracing::trace!(len, chunk_size, "padding final partial chunk");
            while self.position < chunk_size {
                self.buffer[self.position..self.position + 8].fill(0);
                self.position += 8;
            }
            self.processor
                .process_remaining(&self.buffer[..chunk_size], len);
        }
        self.processor.finish()
    }
}

#[cfg(test)]
mod test {
    use super::{ChunkLayout, ChunkProcessor, StreamingHasher};
    use crate::{Error, HashCode, Hasher, PrimitiveSink};

    /// Processor that records each chunk it receives
    #[derive(Default)]
    struct Log {
        /// Chunks passed to `process`
        chunks: Vec<Vec<u8>>,
        /// Padded tail and real length passed to `process_remaining`
        tail: Option<(Vec<u8>, usize)>,
    }

    impl ChunkProcessor for &mut Log {
        fn process(&mut self, chunk: &[u8]) {
            self.chunks.push(chunk.to_vec());
        }

        fn process_remaining(&mut self, padded: &[u8], len: usize) {
            self.tail = Some((padded.to_vec(), len));
        }

        fn finish(self) -> HashCode {
            HashCode::from_u64(self.chunks.len() as u64)
        }
    }

    #[test]
    fn layout_validation() {
        assert_eq!(ChunkLayout::new(0), Err(Error::ZeroChunkSize));
        assert_eq!(
            ChunkLayout::with_buffer(8, 12),
            Err(Error::MisalignedBuffer {
                chunk_size: 8,
                buffer_size: 12
            })
        );
        assert!(ChunkLayout::with_buffer(8, 0).is_err());
        let layout = ChunkLayout::with_buffer(4, 16).expect("aligned layout");
        assert_eq!(layout.chunk_size(), 4);
        assert_eq!(layout.buffer_size(), 16);
    }

    #[test]
    fn compacts_leftovers() {
        let mut log = Log::default();
        let layout = ChunkLayout::with_buffer(4, 8).expect("aligned layout");
        let mut hasher = StreamingHasher::new(&mut log, layout);
        hasher.put_bytes(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(hasher.buffered(), 7);
        hasher.put_u16(0x0908);
        // Nine bytes pending: two chunks flushed, one byte carried over
        assert_eq!(hasher.buffered(), 1);
        let _ = hasher.hash();
        assert_eq!(log.chunks, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
        assert_eq!(log.tail, Some((vec![9, 0, 0, 0], 1)));
    }

    #[test]
    fn long_writes_bypass_buffer() {
        let mut log = Log::default();
        let layout = ChunkLayout::with_buffer(4, 8).expect("aligned layout");
        let mut hasher = StreamingHasher::new(&mut log, layout);
        hasher.put_u8(0);
        let input: Vec<u8> = (1..=22).collect();
        hasher.put_bytes(&input);
        assert_eq!(hasher.buffered(), 3);
        let _ = hasher.hash();
        let flat: Vec<u8> = log.chunks.concat();
        assert_eq!(flat, (0..20).collect::<Vec<u8>>());
        assert_eq!(log.tail, Some((vec![20, 21, 22, 0], 3)));
    }

    #[test]
    fn padding_is_truncated_to_chunk() {
        let mut log = Log::default();
        let layout = ChunkLayout::new(12).expect("valid layout");
        let mut hasher = StreamingHasher::new(&mut log, layout);
        hasher.put_u8(0xaa);
        let _ = hasher.hash();
        let (padded, len) = log.tail.expect("tail processed");
        assert_eq!(len, 1);
        assert_eq!(padded.len(), 12);
        assert!(padded[1..].iter().all(|b| *b == 0));
    }
}

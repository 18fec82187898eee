//! SipHash-c-d with a 64-bit output
//!
//! SipHash processes its input as 8-byte little endian words. Each word is
//! xored into `v3`, run through `c` compression rounds, and xored into `v0`.
//! The final word holds the tail bytes with the total length (mod 256) in
//! its top byte, and `d` finalization rounds follow.
//!
//! SipHash is defined by Jean-Philippe Aumasson and Daniel J. Bernstein in
//! their paper "SipHash: a fast short-input PRF" (2012).

use crate::stream::{ChunkLayout, ChunkProcessor, StreamingHasher};
use crate::{HashCode, HashFunction};
use blake2::digest::consts::U16;
use blake2::digest::Digest;
use blake2::Blake2b;
use std::fmt::{self, Debug};

/// SipHash consumes one 64-bit word at a time
const CHUNK_SIZE: usize = 8;

/// Internal state of one SipHash instance
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct SipState {
    /// State variable V0 as defined in the SipHash paper
    pub(crate) v0: u64,
    /// State variable V1 as defined in the SipHash paper
    pub(crate) v1: u64,
    /// State variable V2 as defined in the SipHash paper
    pub(crate) v2: u64,
    /// State variable V3 as defined in the SipHash paper
    pub(crate) v3: u64,
}

impl Debug for SipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SipState[ {:#018x}, {:#018x}, {:#018x}, {:#018x} ]",
            self.v0, self.v1, self.v2, self.v3
        )
    }
}

impl From<SipState> for [u64; 4] {
    #[inline(always)]
    fn from(s: SipState) -> Self {
        [s.v0, s.v1, s.v2, s.v3]
    }
}

impl From<[u64; 4]> for SipState {
    #[inline(always)]
    fn from(a: [u64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl SipState {
    /// Construct a SipHash state from raw `v0..v3`.
    #[inline(always)]
    pub fn new(v0: u64, v1: u64, v2: u64, v3: u64) -> Self {
        Self { v0, v1, v2, v3 }
    }

    /// Initialize the state from a 128-bit key, using the constants from
    /// the SipHash paper.
    #[inline(always)]
    pub fn from_key(k0: u64, k1: u64) -> Self {
        Self::new(
            k0 ^ 0x736f_6d65_7073_6575,
            k1 ^ 0x646f_7261_6e64_6f6d,
            k0 ^ 0x6c79_6765_6e65_7261,
            k1 ^ 0x7465_6462_7974_6573,
        )
    }

    /// One `SipRound` as defined in the SipHash paper
    ///
    /// Modifies the `SipState` in-place.
    #[inline(always)]
    pub fn sip_round(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v2 = self.v2.wrapping_add(self.v3);
        self.v1 = self.v1.rotate_left(13);
        self.v3 = self.v3.rotate_left(16);
        self.v1 ^= self.v0;
        self.v3 ^= self.v2;
        self.v0 = self.v0.rotate_left(32);

        self.v2 = self.v2.wrapping_add(self.v1);
        self.v0 = self.v0.wrapping_add(self.v3);
        self.v1 = self.v1.rotate_left(17);
        self.v3 = self.v3.rotate_left(21);
        self.v1 ^= self.v2;
        self.v3 ^= self.v0;
        self.v2 = self.v2.rotate_left(32);
    }
}

/// Keyed SipHash function
///
/// Defaults to the standard SipHash-2-4 round counts.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct SipHashFunction {
    /// First key word
    k0: u64,
    /// Second key word
    k1: u64,
    /// Compression rounds per message word
    c: usize,
    /// Finalization rounds
    d: usize,
}

impl Debug for SipHashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Don't print key material
        write!(f, "SipHash{}{}", self.c, self.d)
    }
}

impl SipHashFunction {
    /// SipHash-2-4 with an explicit 128-bit key.
    pub fn new(k0: u64, k1: u64) -> Self {
        Self::with_rounds(2, 4, k0, k1)
    }

    /// SipHash-c-d with an explicit 128-bit key.
    pub fn with_rounds(c: usize, d: usize, k0: u64, k1: u64) -> Self {
        Self { k0, k1, c, d }
    }

    /// SipHash-2-4 keyed by the Blake2b-128 digest of an arbitrary seed.
    pub fn from_seed(seed: &[u8]) -> Self {
        let digest = Blake2b::<U16>::digest(seed);
        Self::new(
            u64::from_le_bytes(digest[0..8].try_into().expect("slice length matches")),
            u64::from_le_bytes(digest[8..16].try_into().expect("slice length matches")),
        )
    }
}

impl HashFunction for SipHashFunction {
    type Hasher = StreamingHasher<SipHasher>;

    fn bits(&self) -> usize {
        64
    }

    fn new_hasher(&self) -> Self::Hasher {
        StreamingHasher::new(
            SipHasher {
                state: SipState::from_key(self.k0, self.k1),
                c: self.c,
                d: self.d,
                length: 0,
                tail: 0,
            },
            ChunkLayout::fixed(CHUNK_SIZE),
        )
    }
}

/// Running state of one SipHash computation
#[derive(Debug, Clone)]
pub struct SipHasher {
    /// Keyed SipHash state
    state: SipState,
    /// Compression rounds per message word
    c: usize,
    /// Finalization rounds
    d: usize,
    /// Total input length in bytes; only the low byte reaches the output
    length: u64,
    /// Trailing partial word, zero until the tail is seen
    tail: u64,
}

impl SipHasher {
    /// Absorb one 64-bit message word.
    #[inline(always)]
    fn process_word(&mut self, m: u64) {
        self.state.v3 ^= m;
        for _ in 0..self.c {
            self.state.sip_round();
        }
        self.state.v0 ^= m;
    }
}

impl ChunkProcessor for SipHasher {
    fn process(&mut self, chunk: &[u8]) {
        self.length += CHUNK_SIZE as u64;
        self.process_word(u64::from_le_bytes(
            chunk.try_into().expect("chunk is one word"),
        ));
    }

    fn process_remaining(&mut self, padded: &[u8], len: usize) {
        // Held back so finish() can merge it with the length byte
        self.length += len as u64;
        self.tail = u64::from_le_bytes(padded.try_into().expect("chunk is one word"));
    }

    fn finish(mut self) -> HashCode {
        self.process_word(self.tail ^ (self.length << 56));

        self.state.v2 ^= 0xff;
        for _ in 0..self.d {
            self.state.sip_round();
        }
        let s = self.state;
        HashCode::from_u64(s.v0 ^ s.v1 ^ s.v2 ^ s.v3)
    }
}

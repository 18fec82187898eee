//! MurmurHash3, x64 128-bit variant
//!
//! Austin Appleby's MurmurHash3 processes 16-byte blocks as two 64-bit
//! little endian lanes. The output is the two final lanes, each in little
//! endian order, for 16 bytes total.

use crate::stream::{ChunkLayout, ChunkProcessor, StreamingHasher};
use crate::{HashCode, HashFunction};

/// Block size of the 128-bit variant
const CHUNK_SIZE: usize = 16;

/// First lane multiplier
const C1: u64 = 0x87c3_7b91_1142_53d5;

/// Second lane multiplier
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// Seeded MurmurHash3 x64 128-bit hash function
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Murmur3_128 {
    /// Initial value for both lanes
    seed: u32,
}

impl Murmur3_128 {
    /// A hash function with the given seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// The seed this function was built with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl HashFunction for Murmur3_128 {
    type Hasher = StreamingHasher<Murmur3State>;

    fn bits(&self) -> usize {
        CHUNK_SIZE * 8
    }

    fn new_hasher(&self) -> Self::Hasher {
        StreamingHasher::new(
            Murmur3State::new(self.seed),
            ChunkLayout::fixed(CHUNK_SIZE),
        )
    }
}

/// Running state of one MurmurHash3 x64 128-bit computation
#[derive(Debug, Clone)]
pub struct Murmur3State {
    /// First lane
    h1: u64,
    /// Second lane
    h2: u64,
    /// Total input length in bytes
    length: u64,
}

impl Murmur3State {
    /// Fresh state for the given seed.
    fn new(seed: u32) -> Self {
        Self {
            h1: u64::from(seed),
            h2: u64::from(seed),
            length: 0,
        }
    }

    /// Mix one full block into both lanes.
    #[inline(always)]
    fn bmix64(&mut self, k1: u64, k2: u64) {
        self.h1 ^= mix_k1(k1);
        self.h1 = self.h1.rotate_left(27);
        self.h1 = self.h1.wrapping_add(self.h2);
        self.h1 = self.h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        self.h2 ^= mix_k2(k2);
        self.h2 = self.h2.rotate_left(31);
        self.h2 = self.h2.wrapping_add(self.h1);
        self.h2 = self.h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }
}

/// Read the two little endian lanes of a 16-byte block.
#[inline(always)]
fn lanes(chunk: &[u8]) -> (u64, u64) {
    let k1 = u64::from_le_bytes(chunk[0..8].try_into().expect("slice length matches"));
    let k2 = u64::from_le_bytes(chunk[8..16].try_into().expect("slice length matches"));
    (k1, k2)
}

/// Premix for the first lane
#[inline(always)]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

/// Premix for the second lane
#[inline(always)]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Final avalanche
#[inline(always)]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

impl ChunkProcessor for Murmur3State {
    fn process(&mut self, chunk: &[u8]) {
        let (k1, k2) = lanes(chunk);
        self.bmix64(k1, k2);
        self.length += CHUNK_SIZE as u64;
    }

    fn process_remaining(&mut self, padded: &[u8], len: usize) {
        // The tail is mixed without the rotate/add steps of a full block.
        // Zero padding leaves unused lane bytes at zero, as required.
        let (k1, k2) = lanes(padded);
        self.h1 ^= mix_k1(k1);
        self.h2 ^= mix_k2(k2);
        self.length += len as u64;
    }

    fn finish(mut self) -> HashCode {
        self.h1 ^= self.length;
        self.h2 ^= self.length;

        self.h1 = self.h1.wrapping_add(self.h2);
        self.h2 = self.h2.wrapping_add(self.h1);

        self.h1 = fmix64(self.h1);
        self.h2 = fmix64(self.h2);

        self.h1 = self.h1.wrapping_add(self.h2);
        self.h2 = self.h2.wrapping_add(self.h1);

        let mut bytes = [0_u8; CHUNK_SIZE];
        bytes[0..8].copy_from_slice(&self.h1.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.h2.to_le_bytes());
        HashCode::from_array(bytes)
    }
}

#[cfg(test)]
mod test {
    use super::Murmur3_128;
    use crate::HashFunction;

    #[test]
    fn empty_input_unseeded() {
        let code = Murmur3_128::new(0).hash_bytes(b"");
        assert_eq!(code.as_bytes(), [0_u8; 16]);
    }

    #[test]
    fn reference_vectors() {
        let f = Murmur3_128::default();
        assert_eq!(
            f.hash_str("The quick brown fox jumps over the lazy dog")
                .to_string(),
            "6c1b07bc7bbc4be347939ac4a93c437a"
        );
        assert_eq!(
            f.hash_str("hello").to_string(),
            "029bbd41b3a7d8cb191dae486a901e5b"
        );
        assert_eq!(
            Murmur3_128::new(1).hash_str("hello").to_string(),
            "108daeadf5df8da735019020ef008912"
        );
    }
}

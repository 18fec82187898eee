//! Runtime selection of a hash algorithm
//!
//! [`HashingBuilder`] picks one of the built-in algorithms by [`Algorithm`]
//! and a seed, yielding an [`AnyHashFunction`] that dispatches statically to
//! the concrete hasher. [`HashingConfig`] is the serializable form of the
//! same settings.

use crate::digest::{DigestHashFunction, DigestHasher};
use crate::murmur3::{Murmur3State, Murmur3_128};
use crate::siphash::{SipHashFunction, SipHasher};
use crate::sink::PrimitiveSink;
use crate::stream::StreamingHasher;
use crate::{HashCode, HashFunction, Hasher};
use blake2::Blake2b512;
use serde::{Deserialize, Serialize};
use sha3::{Keccak256, Sha3_256, Sha3_512};

/// Built-in hash algorithms
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[non_exhaustive]
pub enum Algorithm {
    /// MurmurHash3 x64 128-bit, seeded by the low 32 bits of the seed
    /// (This is the default)
    #[default]
    #[strum(serialize = "murmur3-128")]
    #[serde(rename = "murmur3-128")]
    Murmur3_128,
    /// SipHash-2-4, keyed from the seed bytes
    #[strum(serialize = "sip-hash24")]
    #[serde(rename = "sip-hash24")]
    SipHash24,
    /// SHA3-256, unseeded
    #[strum(serialize = "sha3-256")]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// SHA3-512, unseeded
    #[strum(serialize = "sha3-512")]
    #[serde(rename = "sha3-512")]
    Sha3_512,
    /// Keccak-256, unseeded
    #[strum(serialize = "keccak256")]
    #[serde(rename = "keccak256")]
    Keccak256,
    /// Blake2b-512, unseeded
    #[strum(serialize = "blake2b512")]
    #[serde(rename = "blake2b512")]
    Blake2b512,
}

impl Algorithm {
    /// Whether the seed setting changes this algorithm's output.
    pub fn is_seeded(&self) -> bool {
        matches!(self, Algorithm::Murmur3_128 | Algorithm::SipHash24)
    }
}

/// Serializable hashing settings
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct HashingConfig {
    /// Which algorithm to build
    pub algorithm: Algorithm,
    /// Seed for seeded algorithms, ignored by the others
    pub seed: u64,
}

impl HashingConfig {
    /// Settings for an algorithm and seed.
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        Self { algorithm, seed }
    }

    /// Build the configured hash function.
    pub fn build(&self) -> AnyHashFunction {
        HashingBuilder::from(*self).build()
    }
}

/// Builder for creating [`AnyHashFunction`] instances with custom settings
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct HashingBuilder {
    /// Current algorithm() setting for this builder
    algorithm: Algorithm,
    /// Current seed() setting for this builder
    seed: u64,
}

impl HashingBuilder {
    /// Create a new [`HashingBuilder`] with default settings.
    ///
    /// Immediately calling [`Self::build()`] yields unseeded Murmur3 128.
    pub fn new() -> Self {
        Default::default()
    }

    /// Select a new [`Algorithm`].
    pub fn algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.algorithm = algorithm;
        self
    }

    /// Select a new seed.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Build an [`AnyHashFunction`] with the selected options.
    pub fn build(&self) -> AnyHashFunction {
        if self.seed != 0 && !self.algorithm.is_seeded() {
            tracing::debug!(algorithm = %self.algorithm, "seed ignored by unseeded algorithm");
        }
        match self.algorithm {
            Algorithm::Murmur3_128 => {
                // Only the low 32 bits seed Murmur3
                AnyHashFunction::Murmur3_128(Murmur3_128::new(self.seed as u32))
            }
            Algorithm::SipHash24 => {
                AnyHashFunction::SipHash24(SipHashFunction::from_seed(&self.seed.to_le_bytes()))
            }
            Algorithm::Sha3_256 => AnyHashFunction::Sha3_256(DigestHashFunction::sha3_256()),
            Algorithm::Sha3_512 => AnyHashFunction::Sha3_512(DigestHashFunction::sha3_512()),
            Algorithm::Keccak256 => AnyHashFunction::Keccak256(DigestHashFunction::keccak256()),
            Algorithm::Blake2b512 => {
                AnyHashFunction::Blake2b512(DigestHashFunction::blake2b512())
            }
        }
    }
}

impl From<HashingConfig> for HashingBuilder {
    fn from(config: HashingConfig) -> Self {
        Self {
            algorithm: config.algorithm,
            seed: config.seed,
        }
    }
}

/// One of the built-in hash functions, chosen at runtime
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum AnyHashFunction {
    /// See [`Algorithm::Murmur3_128`]
    Murmur3_128(Murmur3_128),
    /// See [`Algorithm::SipHash24`]
    SipHash24(SipHashFunction),
    /// See [`Algorithm::Sha3_256`]
    Sha3_256(DigestHashFunction<Sha3_256>),
    /// See [`Algorithm::Sha3_512`]
    Sha3_512(DigestHashFunction<Sha3_512>),
    /// See [`Algorithm::Keccak256`]
    Keccak256(DigestHashFunction<Keccak256>),
    /// See [`Algorithm::Blake2b512`]
    Blake2b512(DigestHashFunction<Blake2b512>),
}

impl AnyHashFunction {
    /// Which algorithm this function runs.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyHashFunction::Murmur3_128(_) => Algorithm::Murmur3_128,
            AnyHashFunction::SipHash24(_) => Algorithm::SipHash24,
            AnyHashFunction::Sha3_256(_) => Algorithm::Sha3_256,
            AnyHashFunction::Sha3_512(_) => Algorithm::Sha3_512,
            AnyHashFunction::Keccak256(_) => Algorithm::Keccak256,
            AnyHashFunction::Blake2b512(_) => Algorithm::Blake2b512,
        }
    }
}

impl HashFunction for AnyHashFunction {
    type Hasher = AnyHasher;

    fn bits(&self) -> usize {
        match self {
            AnyHashFunction::Murmur3_128(f) => f.bits(),
            AnyHashFunction::SipHash24(f) => f.bits(),
            AnyHashFunction::Sha3_256(f) => f.bits(),
            AnyHashFunction::Sha3_512(f) => f.bits(),
            AnyHashFunction::Keccak256(f) => f.bits(),
            AnyHashFunction::Blake2b512(f) => f.bits(),
        }
    }

    fn new_hasher(&self) -> AnyHasher {
        match self {
            AnyHashFunction::Murmur3_128(f) => AnyHasher::Murmur3_128(f.new_hasher()),
            AnyHashFunction::SipHash24(f) => AnyHasher::SipHash24(f.new_hasher()),
            AnyHashFunction::Sha3_256(f) => AnyHasher::Sha3_256(f.new_hasher()),
            AnyHashFunction::Sha3_512(f) => AnyHasher::Sha3_512(f.new_hasher()),
            AnyHashFunction::Keccak256(f) => AnyHasher::Keccak256(f.new_hasher()),
            AnyHashFunction::Blake2b512(f) => AnyHasher::Blake2b512(f.new_hasher()),
        }
    }
}

/// Hasher produced by an [`AnyHashFunction`]
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum AnyHasher {
    /// Murmur3 128 streaming state
    Murmur3_128(StreamingHasher<Murmur3State>),
    /// SipHash-2-4 streaming state
    SipHash24(StreamingHasher<SipHasher>),
    /// SHA3-256 digest state
    Sha3_256(DigestHasher<Sha3_256>),
    /// SHA3-512 digest state
    Sha3_512(DigestHasher<Sha3_512>),
    /// Keccak-256 digest state
    Keccak256(DigestHasher<Keccak256>),
    /// Blake2b-512 digest state
    Blake2b512(DigestHasher<Blake2b512>),
}

/// Apply the same expression to whichever hasher an [`AnyHasher`] holds.
macro_rules! dispatch {
    ($any:expr, $h:ident => $body:expr) => {
        match $any {
            AnyHasher::Murmur3_128($h) => $body,
            AnyHasher::SipHash24($h) => $body,
            AnyHasher::Sha3_256($h) => $body,
            AnyHasher::Sha3_512($h) => $body,
            AnyHasher::Keccak256($h) => $body,
            AnyHasher::Blake2b512($h) => $body,
        }
    };
}

impl PrimitiveSink for AnyHasher {
    fn put_u8(&mut self, b: u8) {
        dispatch!(self, h => h.put_u8(b));
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        dispatch!(self, h => h.put_bytes(bytes));
    }
}

impl Hasher for AnyHasher {
    fn hash(self) -> HashCode {
        dispatch!(self, h => h.hash())
    }
}

#[cfg(test)]
mod test {
    use super::{Algorithm, HashingBuilder, HashingConfig};
    use crate::{HashFunction, Murmur3_128};
    use strum::IntoEnumIterator;

    #[test]
    fn algorithm_names() {
        for algorithm in Algorithm::iter() {
            let name = algorithm.to_string();
            assert_eq!(name.parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("sip-hash24".parse::<Algorithm>(), Ok(Algorithm::SipHash24));
        assert!("md5".parse::<Algorithm>().is_err());
    }

    #[test]
    fn builder_matches_direct_construction() {
        let f = HashingBuilder::new()
            .algorithm(Algorithm::Murmur3_128)
            .seed(1)
            .build();
        assert_eq!(f.algorithm(), Algorithm::Murmur3_128);
        assert_eq!(f.bits(), 128);
        assert_eq!(f.hash_str("hello"), Murmur3_128::new(1).hash_str("hello"));
    }

    #[test]
    fn every_algorithm_builds() {
        for algorithm in Algorithm::iter() {
            let f = HashingConfig::new(algorithm, 7).build();
            assert_eq!(f.algorithm(), algorithm);
            assert_eq!(f.hash_bytes(b"abc").bits(), f.bits());
        }
    }

    #[test]
    fn config_serde() {
        let config = HashingConfig::new(Algorithm::Sha3_512, 0);
        let json = serde_json::to_string(&config).expect("serializes");
        assert_eq!(json, r#"{"algorithm":"sha3-512","seed":0}"#);
        let back: HashingConfig = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, config);

        let partial: HashingConfig =
            serde_json::from_str(r#"{"seed":9}"#).expect("defaults fill in");
        assert_eq!(partial.algorithm, Algorithm::Murmur3_128);
    }
}

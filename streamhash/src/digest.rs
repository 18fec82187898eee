//! Adapters from RustCrypto message digests
//!
//! Digests already do their own block buffering, so these hashers forward
//! every write straight into the digest state instead of going through a
//! [`crate::StreamingHasher`].

use crate::sink::PrimitiveSink;
use crate::{HashCode, HashFunction, Hasher};
use blake2::digest::Digest;
use blake2::Blake2b512;
use sha3::{Keccak256, Sha3_256, Sha3_512};
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// [`HashFunction`] backed by any fixed-output [`Digest`]
pub struct DigestHashFunction<D> {
    /// Name used by the `Debug` impl
    name: &'static str,
    /// Digest type, constructed fresh for every hasher
    digest: PhantomData<fn() -> D>,
}

impl DigestHashFunction<Sha3_256> {
    /// SHA3-256 (FIPS 202).
    pub fn sha3_256() -> Self {
        Self::named("SHA3-256")
    }
}

impl DigestHashFunction<Sha3_512> {
    /// SHA3-512 (FIPS 202).
    pub fn sha3_512() -> Self {
        Self::named("SHA3-512")
    }
}

impl DigestHashFunction<Keccak256> {
    /// Keccak-256 with the original pre-standard padding.
    pub fn keccak256() -> Self {
        Self::named("Keccak-256")
    }
}

impl DigestHashFunction<Blake2b512> {
    /// Blake2b with a 512-bit output.
    pub fn blake2b512() -> Self {
        Self::named("BLAKE2b-512")
    }
}

impl<D: Digest> DigestHashFunction<D> {
    /// Wrap an arbitrary digest type under a display name.
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            digest: PhantomData,
        }
    }
}

impl<D> Clone for DigestHashFunction<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            digest: PhantomData,
        }
    }
}

impl<D> Debug for DigestHashFunction<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestHashFunction({})", self.name)
    }
}

impl<D: Digest> HashFunction for DigestHashFunction<D> {
    type Hasher = DigestHasher<D>;

    fn bits(&self) -> usize {
        <D as Digest>::output_size() * 8
    }

    fn new_hasher(&self) -> Self::Hasher {
        DigestHasher(D::new())
    }
}

/// [`Hasher`] that feeds every write into a [`Digest`]
#[derive(Clone)]
pub struct DigestHasher<D>(
    /// Digest state
    D,
);

impl<D> Debug for DigestHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DigestHasher")
    }
}

impl<D: Digest> PrimitiveSink for DigestHasher<D> {
    fn put_u8(&mut self, b: u8) {
        Digest::update(&mut self.0, [b]);
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        Digest::update(&mut self.0, bytes);
    }
}

impl<D: Digest> Hasher for DigestHasher<D> {
    fn hash(self) -> HashCode {
        HashCode::from_bytes(&self.0.finalize())
            .expect("digest output size fits in a HashCode")
    }
}

#[cfg(test)]
mod test {
    use super::DigestHashFunction;
    use crate::{HashFunction, Hasher, PrimitiveSink};

    #[test]
    fn sha3_empty() {
        let f = DigestHashFunction::sha3_256();
        assert_eq!(f.bits(), 256);
        assert_eq!(
            f.hash_bytes(b"").to_string(),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn keccak_empty() {
        assert_eq!(
            DigestHashFunction::keccak256().hash_bytes(b"").to_string(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn incremental_writes() {
        let f = DigestHashFunction::blake2b512();
        let mut hasher = f.new_hasher();
        hasher.put_str("hello ");
        hasher.put_u8(b'w');
        hasher.put_bytes(b"orld");
        let code = hasher.hash();
        assert_eq!(code.bits(), 512);
        assert_eq!(code, f.hash_str("hello world"));
    }
}

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![doc = include_str!("../README.md")]
// @@ begin lint list maintained by maint/add_warning @@
#![allow(renamed_and_removed_lints)]
#![allow(unknown_lints)]
#![warn(missing_docs)]
#![warn(noop_method_call)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::checked_conversions)]
#![warn(clippy::cognitive_complexity)]
#![deny(clippy::debug_assert_with_mut_call)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::expl_impl_clone_on_copy)]
#![deny(clippy::fallible_impl_from)]
#![deny(clippy::implicit_clone)]
#![deny(clippy::large_stack_arrays)]
#![warn(clippy::manual_ok_or)]
#![deny(clippy::missing_docs_in_private_items)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::option_option)]
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![warn(clippy::rc_buffer)]
#![deny(clippy::ref_option_ref)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::trait_duplication_in_bounds)]
#![deny(clippy::unnecessary_wraps)]
#![warn(clippy::unseparated_literal_suffix)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::mod_module_files)]
#![allow(clippy::let_unit_value)] // This can reasonably be done for explicitness
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::result_large_err)]
#![allow(clippy::needless_raw_string_hashes)] // complained-about code is fine, often best
#![allow(clippy::needless_lifetimes)]
//! <!-- @@ end lint list maintained by maint/add_warning @@ -->

mod code;
mod config;
mod digest;
mod err;
mod murmur3;
mod siphash;
mod sink;
mod stream;

pub use crate::code::HashCode;
pub use crate::config::{Algorithm, AnyHashFunction, AnyHasher, HashingBuilder, HashingConfig};
pub use crate::digest::{DigestHashFunction, DigestHasher};
pub use crate::err::Error;
pub use crate::murmur3::{Murmur3State, Murmur3_128};
pub use crate::siphash::{SipHashFunction, SipHasher, SipState};
pub use crate::sink::{
    BytesFunnel, Funnel, I64Funnel, PrimitiveSink, SequentialFunnel, StrFunnel, U64Funnel,
    UnencodedCharsFunnel,
};
pub use crate::stream::{ChunkLayout, ChunkProcessor, StreamingHasher};

/// A [`PrimitiveSink`] that can be finalized into a [`HashCode`]
///
/// Finalizing consumes the hasher, so no further input can be written after
/// the hash has been produced.
pub trait Hasher: PrimitiveSink {
    /// Finish the computation and return the hash output.
    fn hash(self) -> HashCode;
}

/// A hash function that produces [`Hasher`] instances
///
/// Only [`Self::bits()`] and [`Self::new_hasher()`] are required. The
/// one-shot `hash_*` helpers create a hasher, write one value, and finalize.
pub trait HashFunction {
    /// Hasher type produced by this function
    type Hasher: Hasher;

    /// Number of bits in every [`HashCode`] produced by this function.
    fn bits(&self) -> usize;

    /// Begin a new hash computation.
    fn new_hasher(&self) -> Self::Hasher;

    /// Begin a new hash computation that expects roughly
    /// `expected_input_size` bytes.
    ///
    /// The hint never changes the output.
    fn new_hasher_with_capacity(&self, expected_input_size: usize) -> Self::Hasher {
        let _ = expected_input_size;
        self.new_hasher()
    }

    /// Hash a byte slice.
    fn hash_bytes(&self, bytes: &[u8]) -> HashCode {
        let mut hasher = self.new_hasher_with_capacity(bytes.len());
        hasher.put_bytes(bytes);
        hasher.hash()
    }

    /// Hash the UTF-8 encoding of a string.
    fn hash_str(&self, s: &str) -> HashCode {
        self.hash_bytes(s.as_bytes())
    }

    /// Hash the raw UTF-16 code units of a string.
    fn hash_unencoded_chars(&self, s: &str) -> HashCode {
        let mut hasher = self.new_hasher_with_capacity(s.len() * 2);
        hasher.put_unencoded_chars(s);
        hasher.hash()
    }

    /// Hash a `u32` as four little endian bytes.
    fn hash_u32(&self, value: u32) -> HashCode {
        self.hash_bytes(&value.to_le_bytes())
    }

    /// Hash a `u64` as eight little endian bytes.
    fn hash_u64(&self, value: u64) -> HashCode {
        self.hash_bytes(&value.to_le_bytes())
    }

    /// Hash an arbitrary value, decomposed by a [`Funnel`].
    fn hash_object<T, F>(&self, value: &T, funnel: &F) -> HashCode
    where
        T: ?Sized,
        F: Funnel<T> + ?Sized,
    {
        let mut hasher = self.new_hasher();
        hasher.put_object(value, funnel);
        hasher.hash()
    }
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    type Hasher = H::Hasher;

    fn bits(&self) -> usize {
        (**self).bits()
    }

    fn new_hasher(&self) -> Self::Hasher {
        (**self).new_hasher()
    }

    fn new_hasher_with_capacity(&self, expected_input_size: usize) -> Self::Hasher {
        (**self).new_hasher_with_capacity(expected_input_size)
    }
}

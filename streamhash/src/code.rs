//! Immutable hash function outputs

use crate::err::Error;
use arrayvec::ArrayVec;
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

/// Inline capacity of a [`HashCode`], large enough for a 512-bit digest
const MAX_BYTES: usize = 64;

/// Output of a [`crate::HashFunction`]
///
/// Stores between 1 and [`Self::MAX_SIZE`] bytes inline. Fixed-width views
/// such as [`Self::as_u64()`] read the leading bytes in little endian order,
/// which is also the order used by [`Self::from_u64()`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HashCode {
    /// Hash output bytes, never empty
    bytes: ArrayVec<u8, MAX_BYTES>,
}

impl HashCode {
    /// Largest supported hash output, in bytes
    pub const MAX_SIZE: usize = MAX_BYTES;

    /// Copy a hash code from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.is_empty() {
            return Err(Error::EmptyHashCode);
        }
        let mut code = ArrayVec::new();
        code.try_extend_from_slice(bytes)
            .map_err(|_| Error::HashCodeTooLong {
                len: bytes.len(),
                max: Self::MAX_SIZE,
            })?;
        Ok(Self { bytes: code })
    }

    /// Build a 32-bit hash code.
    pub fn from_u32(value: u32) -> Self {
        Self::from_array(value.to_le_bytes())
    }

    /// Build a 64-bit hash code.
    pub fn from_u64(value: u64) -> Self {
        Self::from_array(value.to_le_bytes())
    }

    /// Build a hash code from an array whose size is known to be in range.
    pub(crate) fn from_array<const N: usize>(array: [u8; N]) -> Self {
        let mut bytes = ArrayVec::new();
        bytes
            .try_extend_from_slice(&array)
            .expect("fixed size hash output fits in a HashCode");
        Self { bytes }
    }

    /// Number of bits in this hash code, always a multiple of 8.
    pub fn bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Borrow the hash code bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read the first four bytes as a little endian `u32`.
    pub fn as_u32(&self) -> Result<u32, Error> {
        Ok(u32::from_le_bytes(self.leading::<4>()?))
    }

    /// Read the first eight bytes as a little endian `u64`.
    pub fn as_u64(&self) -> Result<u64, Error> {
        Ok(u64::from_le_bytes(self.leading::<8>()?))
    }

    /// Like [`Self::as_u64()`], but zero-extends codes shorter than 64 bits.
    pub fn padded_to_u64(&self) -> u64 {
        let mut word = [0_u8; 8];
        let len = self.bytes.len().min(8);
        word[..len].copy_from_slice(&self.bytes[..len]);
        u64::from_le_bytes(word)
    }

    /// Copy out the first `N` bytes, or fail if the code is too short.
    fn leading<const N: usize>(&self) -> Result<[u8; N], Error> {
        self.bytes
            .get(..N)
            .and_then(|prefix| prefix.try_into().ok())
            .ok_or(Error::HashCodeTooShort {
                bits: self.bits(),
                wanted: N * 8,
            })
    }
}

impl Debug for HashCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashCode({})", self)
    }
}

impl Display for HashCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.bytes))
    }
}

impl FromStr for HashCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&hex::decode(s)?)
    }
}

impl AsRef<[u8]> for HashCode {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod test {
    use super::HashCode;
    use crate::Error;

    #[test]
    fn fixed_width_views() {
        let code = HashCode::from_u64(0x0123_4567_89ab_cdef);
        assert_eq!(code.bits(), 64);
        assert_eq!(code.to_string(), "efcdab8967452301");
        assert_eq!(code.as_u64(), Ok(0x0123_4567_89ab_cdef));
        assert_eq!(code.as_u32(), Ok(0x89ab_cdef));
    }

    #[test]
    fn short_codes() {
        let code = HashCode::from_u32(0xdead_beef);
        assert_eq!(
            code.as_u64(),
            Err(Error::HashCodeTooShort {
                bits: 32,
                wanted: 64
            })
        );
        assert_eq!(code.padded_to_u64(), 0xdead_beef);
    }

    #[test]
    fn byte_limits() {
        assert_eq!(HashCode::from_bytes(&[]), Err(Error::EmptyHashCode));
        assert!(matches!(
            HashCode::from_bytes(&[0; HashCode::MAX_SIZE + 1]),
            Err(Error::HashCodeTooLong { len: 65, max: 64 })
        ));
        assert!(HashCode::from_bytes(&[0; HashCode::MAX_SIZE]).is_ok());
    }

    #[test]
    fn hex_round_trip() {
        let code: HashCode = "6c1b07bc7bbc4be347939ac4a93c437a"
            .parse()
            .expect("valid hex");
        assert_eq!(code.bits(), 128);
        assert_eq!(code.to_string(), "6c1b07bc7bbc4be347939ac4a93c437a");
        assert!(matches!(
            "not hex".parse::<HashCode>(),
            Err(Error::InvalidHex(_))
        ));
    }
}

//! Primitive sinks and funnels
//!
//! A [`PrimitiveSink`] accepts bytes and fixed-width primitives in any order.
//! Every multi-byte primitive is written in little endian order, so the same
//! sequence of writes always produces the same byte stream regardless of the
//! host platform.
//!
//! A [`Funnel`] is the caller-supplied piece that knows how to decompose an
//! arbitrary value into primitive writes. Any closure with the signature
//! `Fn(&T, &mut dyn PrimitiveSink)` is already a funnel.

/// Destination for a stream of primitive values
///
/// Only [`Self::put_u8`] and [`Self::put_bytes`] are required. The remaining
/// methods have provided implementations that reduce each primitive to its
/// little endian byte representation.
pub trait PrimitiveSink {
    /// Write a single byte.
    fn put_u8(&mut self, b: u8);

    /// Write every byte of a slice, in order.
    fn put_bytes(&mut self, bytes: &[u8]);

    /// Write a signed byte.
    fn put_i8(&mut self, v: i8) {
        self.put_u8(v as u8);
    }

    /// Write a `u16` as two little endian bytes.
    fn put_u16(&mut self, v: u16) {
        self.put_bytes(&v.to_le_bytes());
    }

    /// Write an `i16` as two little endian bytes.
    fn put_i16(&mut self, v: i16) {
        self.put_bytes(&v.to_le_bytes());
    }

    /// Write a `u32` as four little endian bytes.
    fn put_u32(&mut self, v: u32) {
        self.put_bytes(&v.to_le_bytes());
    }

    /// Write an `i32` as four little endian bytes.
    fn put_i32(&mut self, v: i32) {
        self.put_bytes(&v.to_le_bytes());
    }

    /// Write a `u64` as eight little endian bytes.
    fn put_u64(&mut self, v: u64) {
        self.put_bytes(&v.to_le_bytes());
    }

    /// Write an `i64` as eight little endian bytes.
    fn put_i64(&mut self, v: i64) {
        self.put_bytes(&v.to_le_bytes());
    }

    /// Write the raw IEEE-754 bits of an `f32`.
    fn put_f32(&mut self, v: f32) {
        self.put_u32(v.to_bits());
    }

    /// Write the raw IEEE-754 bits of an `f64`.
    fn put_f64(&mut self, v: f64) {
        self.put_u64(v.to_bits());
    }

    /// Write a boolean as a single `1` or `0` byte.
    fn put_bool(&mut self, v: bool) {
        self.put_u8(u8::from(v));
    }

    /// Write a character as its UTF-16 code units, two bytes each.
    ///
    /// Characters outside the basic multilingual plane produce a surrogate
    /// pair, four bytes in total.
    fn put_char(&mut self, c: char) {
        let mut units = [0_u16; 2];
        for unit in c.encode_utf16(&mut units) {
            self.put_u16(*unit);
        }
    }

    /// Write every UTF-16 code unit of a string, two bytes each, with no
    /// length prefix and no character set encoding.
    fn put_unencoded_chars(&mut self, s: &str) {
        for unit in s.encode_utf16() {
            self.put_u16(unit);
        }
    }

    /// Write the UTF-8 encoding of a string, with no length prefix.
    fn put_str(&mut self, s: &str) {
        self.put_bytes(s.as_bytes());
    }

    /// Decompose an arbitrary value into this sink using a [`Funnel`].
    fn put_object<T, F>(&mut self, value: &T, funnel: &F)
    where
        Self: Sized,
        T: ?Sized,
        F: Funnel<T> + ?Sized,
    {
        funnel.funnel(value, self);
    }
}

impl<S: PrimitiveSink + ?Sized> PrimitiveSink for &mut S {
    fn put_u8(&mut self, b: u8) {
        (**self).put_u8(b);
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        (**self).put_bytes(bytes);
    }
}

/// Serializes the fields of a `T` into a [`PrimitiveSink`]
///
/// Two values that should hash equally must be funneled into identical
/// sequences of primitive writes.
pub trait Funnel<T: ?Sized> {
    /// Send the contents of `from` into the sink.
    fn funnel(&self, from: &T, into: &mut dyn PrimitiveSink);
}

impl<T: ?Sized, F> Funnel<T> for F
where
    F: Fn(&T, &mut dyn PrimitiveSink),
{
    fn funnel(&self, from: &T, into: &mut dyn PrimitiveSink) {
        self(from, into);
    }
}

/// Funnel for raw byte slices
#[derive(Debug, Default, Clone, Copy)]
pub struct BytesFunnel;

impl Funnel<[u8]> for BytesFunnel {
    fn funnel(&self, from: &[u8], into: &mut dyn PrimitiveSink) {
        into.put_bytes(from);
    }
}

/// Funnel for strings, using their UTF-8 encoding
#[derive(Debug, Default, Clone, Copy)]
pub struct StrFunnel;

impl Funnel<str> for StrFunnel {
    fn funnel(&self, from: &str, into: &mut dyn PrimitiveSink) {
        into.put_str(from);
    }
}

/// Funnel for strings, using their raw UTF-16 code units
#[derive(Debug, Default, Clone, Copy)]
pub struct UnencodedCharsFunnel;

impl Funnel<str> for UnencodedCharsFunnel {
    fn funnel(&self, from: &str, into: &mut dyn PrimitiveSink) {
        into.put_unencoded_chars(from);
    }
}

/// Funnel for `u64` values
#[derive(Debug, Default, Clone, Copy)]
pub struct U64Funnel;

impl Funnel<u64> for U64Funnel {
    fn funnel(&self, from: &u64, into: &mut dyn PrimitiveSink) {
        into.put_u64(*from);
    }
}

/// Funnel for `i64` values
#[derive(Debug, Default, Clone, Copy)]
pub struct I64Funnel;

impl Funnel<i64> for I64Funnel {
    fn funnel(&self, from: &i64, into: &mut dyn PrimitiveSink) {
        into.put_i64(*from);
    }
}

/// Funnel for slices, applying an element funnel to each item in order
///
/// No length or separator is written, so `[[1], [2]]` and `[[1, 2]]` funnel
/// identically when the element funnel is itself unframed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialFunnel<F>(
    /// Funnel applied to every element
    pub F,
);

impl<T, F: Funnel<T>> Funnel<[T]> for SequentialFunnel<F> {
    fn funnel(&self, from: &[T], into: &mut dyn PrimitiveSink) {
        for item in from {
            self.0.funnel(item, into);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Funnel, PrimitiveSink, SequentialFunnel, U64Funnel};

    /// Sink that records every byte it receives
    #[derive(Default)]
    struct Recorder(Vec<u8>);

    impl PrimitiveSink for Recorder {
        fn put_u8(&mut self, b: u8) {
            self.0.push(b);
        }

        fn put_bytes(&mut self, bytes: &[u8]) {
            self.0.extend_from_slice(bytes);
        }
    }

    #[test]
    fn primitives_are_little_endian() {
        let mut sink = Recorder::default();
        sink.put_u16(0x0102);
        sink.put_i32(-2);
        sink.put_bool(true);
        sink.put_bool(false);
        assert_eq!(sink.0, [0x02, 0x01, 0xfe, 0xff, 0xff, 0xff, 1, 0]);
    }

    #[test]
    fn floats_use_raw_bits() {
        let mut sink = Recorder::default();
        sink.put_f64(1.0);
        assert_eq!(sink.0, 1.0_f64.to_bits().to_le_bytes());
    }

    #[test]
    fn chars_are_utf16_units() {
        let mut sink = Recorder::default();
        sink.put_char('a');
        sink.put_char('\u{1f600}');
        assert_eq!(sink.0, [0x61, 0x00, 0x3d, 0xd8, 0x00, 0xde]);

        let mut other = Recorder::default();
        other.put_unencoded_chars("a\u{1f600}");
        assert_eq!(sink.0, other.0);
    }

    #[test]
    fn closure_funnel() {
        let funnel = |v: &(u8, u8), sink: &mut dyn PrimitiveSink| {
            sink.put_u8(v.0);
            sink.put_u8(v.1);
        };
        let mut sink = Recorder::default();
        sink.put_object(&(7_u8, 9_u8), &funnel);
        assert_eq!(sink.0, [7, 9]);
    }

    #[test]
    fn sequential_funnel() {
        let mut sink = Recorder::default();
        SequentialFunnel(U64Funnel).funnel(&[1_u64, 2][..], &mut sink);
        assert_eq!(sink.0.len(), 16);
        assert_eq!(sink.0[0], 1);
        assert_eq!(sink.0[8], 2);
    }
}

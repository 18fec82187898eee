//! Growable lists of a single primitive type
//!
//! [`PrimitiveList`] is a thin owner of a `Vec<T>` whose element type is one
//! of the [`Primitive`] scalars. Value-based operations compare elements by
//! [`Primitive::key()`], so floating point lists treat every NaN as equal to
//! every other NaN and keep `0.0` distinct from `-0.0`.

use crate::algebra;
use crate::err::Error;
use crate::multiset::Multiset;
use crate::seq::Seq;
use num_traits::{Num, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

/// A scalar that can be stored in a [`PrimitiveList`]
pub trait Primitive: Copy + PartialEq + Debug {
    /// Hashable identity of a value
    type Key: Copy + Hash + Eq + Debug;

    /// The identity used for equality, hashing and set algebra.
    fn key(self) -> Self::Key;

    /// Total order used by [`PrimitiveList::sort()`].
    fn cmp_total(&self, other: &Self) -> Ordering;
}

/// Primitives that already implement `Eq + Hash + Ord` are their own key.
macro_rules! exact_primitive {
    ($($t:ty),*) => {
        $(
            impl Primitive for $t {
                type Key = $t;

                #[inline]
                fn key(self) -> $t {
                    self
                }

                #[inline]
                fn cmp_total(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

exact_primitive!(bool, char, i8, i16, i32, i64, u8, u16, u32, u64);

/// Floats are keyed by their bit pattern, with every NaN folded into one.
macro_rules! float_primitive {
    ($($t:ident => $bits:ty),*) => {
        $(
            impl Primitive for $t {
                type Key = $bits;

                #[inline]
                fn key(self) -> $bits {
                    if self.is_nan() {
                        $t::NAN.to_bits()
                    } else {
                        self.to_bits()
                    }
                }

                #[inline]
                fn cmp_total(&self, other: &Self) -> Ordering {
                    let canonical = |v: $t| if v.is_nan() { $t::NAN } else { v };
                    canonical(*self).total_cmp(&canonical(*other))
                }
            }
        )*
    };
}

float_primitive!(f32 => u32, f64 => u64);

/// A [`Primitive`] with arithmetic aggregates
pub trait Numeric: Primitive + ToPrimitive {
    /// Accumulator for [`PrimitiveList::sum()`], wide enough that summing
    /// any list that fits in memory can't overflow
    type Sum: Num + Copy + Debug;

    /// Convert into the accumulator type.
    fn widen(self) -> Self::Sum;
}

/// Integers sum in 128 bits, floats in `f64`.
macro_rules! numeric {
    ($($t:ty => $sum:ty),*) => {
        $(
            impl Numeric for $t {
                type Sum = $sum;

                #[inline]
                fn widen(self) -> $sum {
                    <$sum>::from(self)
                }
            }
        )*
    };
}

numeric!(
    i8 => i128, i16 => i128, i32 => i128, i64 => i128,
    u8 => u128, u16 => u128, u32 => u128, u64 => u128,
    f32 => f64, f64 => f64
);

/// A growable array of one primitive type
#[derive(Clone, Default)]
pub struct PrimitiveList<T> {
    /// Elements in list order
    items: Vec<T>,
}

/// List of `bool`
pub type BooleanList = PrimitiveList<bool>;
/// List of `char`
pub type CharList = PrimitiveList<char>;
/// List of `i8`
pub type ByteList = PrimitiveList<i8>;
/// List of `i16`
pub type ShortList = PrimitiveList<i16>;
/// List of `i32`
pub type IntList = PrimitiveList<i32>;
/// List of `i64`
pub type LongList = PrimitiveList<i64>;
/// List of `f32`
pub type FloatList = PrimitiveList<f32>;
/// List of `f64`
pub type DoubleList = PrimitiveList<f64>;

impl<T: Primitive> PrimitiveList<T> {
    /// An empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// An empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over copies of the elements.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.items.iter().copied()
    }

    /// Read-only view of the elements.
    pub fn seq(&self) -> Seq<'_, T> {
        Seq::new(&self.items)
    }

    /// The element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).copied()
    }

    /// Replace the element at `index`, returning the old value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Append one element.
    pub fn add(&mut self, value: T) {
        self.items.push(value);
    }

    /// Insert before `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.items.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Append every element of `values`.
    pub fn add_all(&mut self, values: &[T]) {
        self.items.extend_from_slice(values);
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Remove the first element equal to `value`.
    ///
    /// Returns false if there was none.
    pub fn remove(&mut self, value: T) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every element equal to `value`, returning how many were removed.
    pub fn remove_all_occurrences(&mut self, value: T) -> usize {
        let key = value.key();
        let before = self.items.len();
        self.items.retain(|v| v.key() != key);
        before - self.items.len()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// True if some element equals `value`.
    pub fn contains(&self, value: T) -> bool {
        self.index_of(value).is_some()
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: T) -> Option<usize> {
        let key = value.key();
        self.items.iter().position(|v| v.key() == key)
    }

    /// Position of the last element equal to `value`.
    pub fn last_index_of(&self, value: T) -> Option<usize> {
        let key = value.key();
        self.items.iter().rposition(|v| v.key() == key)
    }

    /// Number of elements equal to `value`.
    pub fn occurrences_of(&self, value: T) -> usize {
        let key = value.key();
        self.items.iter().filter(|v| v.key() == key).count()
    }

    /// Copy the elements in `range` into a new list.
    pub fn copy_of_range(&self, range: Range<usize>) -> Result<Self, Error> {
        let len = self.items.len();
        let items = self.items.get(range.clone()).ok_or(Error::InvalidRange {
            from: range.start,
            to: range.end,
            len,
        })?;
        Ok(items.to_vec().into())
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Sort in ascending order; NaN sorts after every other float.
    pub fn sort(&mut self) {
        self.items.sort_by(T::cmp_total);
    }

    /// Elements with duplicates removed, keeping each first occurrence.
    pub fn distinct(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items
            .iter()
            .copied()
            .filter(|v| seen.insert(v.key()))
            .collect()
    }

    /// See [`algebra::intersection`].
    pub fn intersection(&self, other: &[T]) -> Self {
        algebra::intersection_by_key(&self.items, other, |v| v.key()).into()
    }

    /// See [`algebra::difference`].
    pub fn difference(&self, other: &[T]) -> Self {
        algebra::difference_by_key(&self.items, other, |v| v.key()).into()
    }

    /// See [`algebra::symmetric_difference`].
    pub fn symmetric_difference(&self, other: &[T]) -> Self {
        algebra::symmetric_difference_by_key(&self.items, other, |v| v.key()).into()
    }

    /// Count the occurrences of every distinct key.
    pub fn to_multiset(&self) -> Multiset<T::Key> {
        self.items.iter().map(|v| v.key()).collect()
    }
}

impl<T: Numeric> PrimitiveList<T> {
    /// Sum of all elements in the widened [`Numeric::Sum`] type; zero for an
    /// empty list.
    pub fn sum(&self) -> T::Sum {
        self.items
            .iter()
            .fold(T::Sum::zero(), |acc, &v| acc + v.widen())
    }

    /// Smallest element under [`Primitive::cmp_total()`].
    pub fn min(&self) -> Option<T> {
        self.items.iter().copied().min_by(T::cmp_total)
    }

    /// Largest element under [`Primitive::cmp_total()`].
    pub fn max(&self) -> Option<T> {
        self.items.iter().copied().max_by(T::cmp_total)
    }

    /// Arithmetic mean as `f64`, or `None` for an empty list.
    pub fn average(&self) -> Option<f64> {
        if self.items.is_empty() {
            return None;
        }
        let total: f64 = self.items.iter().filter_map(|v| v.to_f64()).sum();
        Some(total / self.items.len() as f64)
    }
}

impl<T: Primitive> PartialEq for PrimitiveList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| a.key() == b.key())
    }
}

impl<T: Primitive> Eq for PrimitiveList<T> {}

impl<T: Primitive> Hash for PrimitiveList<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.items.len().hash(state);
        for v in &self.items {
            v.key().hash(state);
        }
    }
}

impl<T: Debug> Debug for PrimitiveList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> From<Vec<T>> for PrimitiveList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<PrimitiveList<T>> for Vec<T> {
    fn from(list: PrimitiveList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for PrimitiveList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for PrimitiveList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for PrimitiveList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Copy> IntoIterator for &'a PrimitiveList<T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}

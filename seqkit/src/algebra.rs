//! Multiset-aware set algebra over slices
//!
//! Each operation builds a [`Multiset`] of the second input's occurrences,
//! then scans the first input once, consuming one occurrence per match. The
//! result keeps the scan order of its inputs and respects multiplicities:
//!
//! ```
//! use seqkit::{difference, intersection, symmetric_difference};
//!
//! let a = [1, 2, 2, 3];
//! let b = [2, 3, 3];
//! assert_eq!(intersection(&a, &b), [2, 3]);
//! assert_eq!(difference(&a, &b), [1, 2]);
//! assert_eq!(symmetric_difference(&a, &b), [1, 2, 3]);
//! ```
//!
//! The `_by_key` variants compare elements through a key projection, which
//! lets element types without `Hash + Eq` (such as floats) take part.

use crate::multiset::Multiset;
use std::hash::Hash;

/// Elements of `a` that also occur in `b`, in `a`'s order.
///
/// An element occurring `m` times in `a` and `n` times in `b` appears
/// `min(m, n)` times in the result.
pub fn intersection<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    intersection_by_key(a, b, |item| item)
}

/// Elements of `a` left over after removing one match from `b` per
/// occurrence, in `a`'s order.
pub fn difference<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    difference_by_key(a, b, |item| item)
}

/// `difference(a, b)` followed by `difference(b, a)`.
///
/// The second half keeps `b`'s order.
pub fn symmetric_difference<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    symmetric_difference_by_key(a, b, |item| item)
}

/// [`intersection`] comparing elements by `key`.
pub fn intersection_by_key<'a, T, K, F>(a: &'a [T], b: &'a [T], key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&'a T) -> K,
{
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut occurrences: Multiset<K> = b.iter().map(&key).collect();
    let mut result = Vec::with_capacity(a.len().min(b.len()));
    for item in a {
        if occurrences.get_and_remove(&key(item)) > 0 {
            result.push(item.clone());
        }
    }
    tracing::trace!(a = a.len(), b = b.len(), kept = result.len(), "intersection");
    result
}

/// [`difference`] comparing elements by `key`.
pub fn difference_by_key<'a, T, K, F>(a: &'a [T], b: &'a [T], key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&'a T) -> K,
{
    if a.is_empty() {
        return Vec::new();
    }
    if b.is_empty() {
        return a.to_vec();
    }

    let mut occurrences: Multiset<K> = b.iter().map(&key).collect();
    let mut result = Vec::with_capacity(a.len());
    for item in a {
        if occurrences.get_and_remove(&key(item)) == 0 {
            result.push(item.clone());
        }
    }
    tracing::trace!(a = a.len(), b = b.len(), kept = result.len(), "difference");
    result
}

/// [`symmetric_difference`] comparing elements by `key`.
pub fn symmetric_difference_by_key<'a, T, K, F>(a: &'a [T], b: &'a [T], key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&'a T) -> K,
{
    if b.is_empty() {
        return a.to_vec();
    }
    if a.is_empty() {
        return b.to_vec();
    }

    let mut occurrences: Multiset<K> = b.iter().map(&key).collect();
    let mut result = Vec::with_capacity(a.len() + b.len());
    for item in a {
        if occurrences.get_and_remove(&key(item)) == 0 {
            result.push(item.clone());
        }
    }

    // What remains in the multiset is exactly b's unmatched occurrences.
    // Walk b in order, emitting each one until nothing is left.
    for item in b {
        if occurrences.is_empty() {
            break;
        }
        if occurrences.get_and_remove(&key(item)) > 0 {
            result.push(item.clone());
        }
    }
    tracing::trace!(
        a = a.len(),
        b = b.len(),
        kept = result.len(),
        "symmetric difference"
    );
    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn worked_example() {
        let a = [1, 2, 2, 3];
        let b = [2, 3, 3];
        assert_eq!(intersection(&a, &b), vec![2, 3]);
        assert_eq!(intersection(&b, &a), vec![2, 3]);
        assert_eq!(difference(&a, &b), vec![1, 2]);
        assert_eq!(difference(&b, &a), vec![3]);
        assert_eq!(symmetric_difference(&a, &b), vec![1, 2, 3]);
    }

    #[test]
    fn empty_inputs() {
        let a = ["x", "y"];
        let none: [&str; 0] = [];
        assert!(intersection(&a, &none).is_empty());
        assert!(intersection(&none, &a).is_empty());
        assert_eq!(difference(&a, &none), a);
        assert!(difference(&none, &a).is_empty());
        assert_eq!(symmetric_difference(&a, &none), a);
        assert_eq!(symmetric_difference(&none, &a), a);
        assert!(symmetric_difference(&none, &none).is_empty());
    }

    #[test]
    fn second_pass_keeps_b_order() {
        let a = [5];
        let b = [9, 5, 8, 9];
        assert_eq!(symmetric_difference(&a, &b), vec![9, 8, 9]);
    }

    #[test]
    fn float_keys() {
        let a = [0.5_f64, 1.5, 1.5, f64::NAN];
        let b = [1.5_f64, f64::NAN];
        let by_bits = |v: &f64| v.to_bits();
        assert_eq!(intersection_by_key(&a, &b, by_bits).len(), 2);
        assert_eq!(difference_by_key(&a, &b, by_bits), vec![0.5, 1.5]);
    }
}

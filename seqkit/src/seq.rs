//! Read-only sequence façade
//!
//! [`Seq`] borrows a slice and offers query and set-algebra helpers without
//! ever mutating it. Every operation that produces a collection returns a
//! new `Vec`.

use crate::algebra;
use crate::multiset::Multiset;
use std::collections::HashSet;
use std::fmt::{Display, Write};
use std::hash::Hash;

/// Borrowed, read-only view of a sequence of elements
#[derive(Debug)]
pub struct Seq<'a, T> {
    /// Borrowed elements, never mutated
    items: &'a [T],
}

impl<'a, T> Clone for Seq<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Seq<'a, T> {}

impl<'a, T> Seq<'a, T> {
    /// View over a borrowed slice.
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&'a T> {
        self.items.first()
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&'a T> {
        self.items.last()
    }

    /// The element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// Render every element separated by `separator`.
    pub fn join(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            // Writing to a String can't fail
            let _ = write!(out, "{}", item);
        }
        out
    }
}

impl<'a, T: PartialEq> Seq<'a, T> {
    /// True if some element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    /// Position of the last element equal to `item`.
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().rposition(|x| x == item)
    }

    /// Number of elements equal to `item`.
    pub fn occurrences_of(&self, item: &T) -> usize {
        self.items.iter().filter(|x| *x == item).count()
    }
}

impl<'a, T: Hash + Eq> Seq<'a, T> {
    /// True if every element of `other` occurs somewhere in this sequence.
    ///
    /// Multiplicity is ignored; an empty `other` is always contained.
    pub fn contains_all(&self, other: &[T]) -> bool {
        if other.is_empty() {
            return true;
        }
        let present: HashSet<&T> = self.items.iter().collect();
        other.iter().all(|item| present.contains(item))
    }

    /// True if at least one element of `other` occurs in this sequence.
    pub fn contains_any(&self, other: &[T]) -> bool {
        !self.is_disjoint(other)
    }

    /// True if no element of `other` occurs in this sequence.
    pub fn is_disjoint(&self, other: &[T]) -> bool {
        if self.items.is_empty() || other.is_empty() {
            return true;
        }
        let (small, large) = if self.items.len() <= other.len() {
            (self.items, other)
        } else {
            (other, self.items)
        };
        let present: HashSet<&T> = small.iter().collect();
        !large.iter().any(|item| present.contains(item))
    }

    /// Count the occurrences of every element.
    pub fn to_multiset(&self) -> Multiset<&'a T> {
        self.items.iter().collect()
    }
}

impl<'a, T: Hash + Eq + Clone> Seq<'a, T> {
    /// See [`algebra::intersection`].
    pub fn intersection(&self, other: &[T]) -> Vec<T> {
        algebra::intersection(self.items, other)
    }

    /// See [`algebra::difference`].
    pub fn difference(&self, other: &[T]) -> Vec<T> {
        algebra::difference(self.items, other)
    }

    /// See [`algebra::symmetric_difference`].
    pub fn symmetric_difference(&self, other: &[T]) -> Vec<T> {
        algebra::symmetric_difference(self.items, other)
    }

    /// Elements with duplicates removed, keeping each first occurrence.
    pub fn distinct(&self) -> Vec<T> {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items
            .iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }
}

impl<'a, T> From<&'a [T]> for Seq<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Seq<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Seq<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for Seq<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

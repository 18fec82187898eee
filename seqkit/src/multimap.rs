//! Maps from a key to a collection of values
//!
//! The value collection is chosen by the [`Bucket`] type parameter: a `Vec`
//! keeps duplicates in insertion order, a `HashSet` collapses them, and a
//! `BTreeSet` collapses them and keeps each key's values sorted. A key is
//! present only while its bucket is non-empty.

use std::borrow::Borrow;
use std::collections::{hash_map, BTreeSet, HashMap, HashSet};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::marker::PhantomData;

/// A value collection that can back a [`Multimap`]
pub trait Bucket<V>: Default {
    /// Iterator over the values in a bucket
    type Iter<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    /// Add a value, returning false if the bucket rejected it as a duplicate.
    fn insert(&mut self, value: V) -> bool;

    /// Remove one occurrence of `value`, returning whether one was found.
    fn remove_one(&mut self, value: &V) -> bool;

    /// True if the bucket holds `value`.
    fn contains(&self, value: &V) -> bool;

    /// Number of values held.
    fn len(&self) -> usize;

    /// True if the bucket holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the values in bucket order.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<V: PartialEq> Bucket<V> for Vec<V> {
    type Iter<'a> = std::slice::Iter<'a, V> where V: 'a;

    fn insert(&mut self, value: V) -> bool {
        self.push(value);
        true
    }

    fn remove_one(&mut self, value: &V) -> bool {
        match self.iter().position(|v| v == value) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn contains(&self, value: &V) -> bool {
        self.as_slice().contains(value)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<V: Hash + Eq> Bucket<V> for HashSet<V> {
    type Iter<'a> = std::collections::hash_set::Iter<'a, V> where V: 'a;

    fn insert(&mut self, value: V) -> bool {
        HashSet::insert(self, value)
    }

    fn remove_one(&mut self, value: &V) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &V) -> bool {
        HashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}

impl<V: Ord> Bucket<V> for BTreeSet<V> {
    type Iter<'a> = std::collections::btree_set::Iter<'a, V> where V: 'a;

    fn insert(&mut self, value: V) -> bool {
        BTreeSet::insert(self, value)
    }

    fn remove_one(&mut self, value: &V) -> bool {
        BTreeSet::remove(self, value)
    }

    fn contains(&self, value: &V) -> bool {
        BTreeSet::contains(self, value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }
}

/// Map from each key to a non-empty [`Bucket`] of values
pub struct Multimap<K, V, C> {
    /// Values per key; never holds an empty bucket
    map: HashMap<K, C>,
    /// Total number of values across all buckets
    len: usize,
    /// Value type of the buckets
    values: PhantomData<V>,
}

/// Multimap that keeps duplicate values in insertion order
pub type ListMultimap<K, V> = Multimap<K, V, Vec<V>>;

/// Multimap that stores each distinct value once per key
pub type SetMultimap<K, V> = Multimap<K, V, HashSet<V>>;

/// Multimap that stores each distinct value once per key, in sorted order
pub type SortedSetMultimap<K, V> = Multimap<K, V, BTreeSet<V>>;

impl<K, V, C> Multimap<K, V, C>
where
    K: Hash + Eq,
    C: Bucket<V>,
{
    /// An empty multimap.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            len: 0,
            values: PhantomData,
        }
    }

    /// Store `value` under `key`.
    ///
    /// Returns false if the bucket already held it and collapses duplicates.
    pub fn put(&mut self, key: K, value: V) -> bool {
        let added = self.map.entry(key).or_default().insert(value);
        if added {
            self.len += 1;
        }
        added
    }

    /// Store every value under `key`, returning whether anything was added.
    pub fn put_all<I>(&mut self, key: K, values: I) -> bool
    where
        I: IntoIterator<Item = V>,
    {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            // Don't create an empty bucket
            return false;
        }
        let bucket = self.map.entry(key).or_default();
        let mut added = 0;
        for value in values {
            if bucket.insert(value) {
                added += 1;
            }
        }
        self.len += added;
        added > 0
    }

    /// The values stored under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&C>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// True if `key` has at least one value.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// True if `value` is stored under `key`.
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).is_some_and(|bucket| bucket.contains(value))
    }

    /// Remove one occurrence of `value` under `key`.
    ///
    /// The key itself goes away once its last value is removed.
    pub fn remove<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(bucket) = self.map.get_mut(key) else {
            return false;
        };
        if !bucket.remove_one(value) {
            return false;
        }
        self.len -= 1;
        if bucket.is_empty() {
            tracing::trace!("dropping empty bucket");
            self.map.remove(key);
        }
        true
    }

    /// Remove `key` and return everything stored under it.
    ///
    /// Returns an empty bucket if the key was absent.
    pub fn remove_all<Q>(&mut self, key: &Q) -> C
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = self.map.remove(key).unwrap_or_default();
        self.len -= bucket.len();
        bucket
    }

    /// Total number of values across all keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.map.len()
    }

    /// True if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every key and value.
    pub fn clear(&mut self) {
        self.map.clear();
        self.len = 0;
    }

    /// Every key with at least one value, in arbitrary order.
    pub fn keys(&self) -> hash_map::Keys<'_, K, C> {
        self.map.keys()
    }

    /// Every `(key, value)` pair. Keys come in arbitrary order; each key's
    /// values come in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.map
            .iter()
            .flat_map(|(key, bucket)| bucket.iter().map(move |value| (key, value)))
    }

    /// Every key with its bucket.
    pub fn buckets(&self) -> hash_map::Iter<'_, K, C> {
        self.map.iter()
    }
}

impl<K, V, C> Default for Multimap<K, V, C>
where
    K: Hash + Eq,
    C: Bucket<V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V, C: Clone> Clone for Multimap<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
            len: self.len,
            values: PhantomData,
        }
    }
}

impl<K, V, C> PartialEq for Multimap<K, V, C>
where
    K: Hash + Eq,
    C: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.map == other.map
    }
}

impl<K: Debug, V, C: Debug> Debug for Multimap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K, V, C> FromIterator<(K, V)> for Multimap<K, V, C>
where
    K: Hash + Eq,
    C: Bucket<V>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C> Extend<(K, V)> for Multimap<K, V, C>
where
    K: Hash + Eq,
    C: Bucket<V>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

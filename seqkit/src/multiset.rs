//! Occurrence multiset
//!
//! A [`Multiset`] maps each distinct element to the number of times it
//! occurs. Counts never sit at zero: an element whose last occurrence is
//! removed disappears from the map, so [`Multiset::is_empty`] and
//! [`Multiset::distinct_len`] stay exact while occurrences are consumed.

use std::borrow::Borrow;
use std::collections::hash_map::{self, Entry, HashMap};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Hash-based bag of elements with per-element counts
#[derive(Clone)]
pub struct Multiset<T> {
    /// Positive occurrence count for each distinct element
    counts: HashMap<T, usize>,
    /// Sum of all counts
    total: usize,
}

impl<T> Multiset<T> {
    /// Total number of occurrences, counting duplicates.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Number of distinct elements.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// True when no occurrences remain.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over distinct elements and their counts, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(item, count)| (item, *count))
    }

    /// Iterate over distinct elements, in arbitrary order.
    pub fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts.keys()
    }

    /// Remove every occurrence of every element.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }
}

impl<T: Hash + Eq> Multiset<T> {
    /// An empty multiset.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// An empty multiset with room for `capacity` distinct elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
            total: 0,
        }
    }

    /// Add one occurrence, returning the count before the add.
    pub fn add(&mut self, item: T) -> usize {
        self.add_n(item, 1)
    }

    /// Add `n` occurrences, returning the count before the add.
    ///
    /// Adding zero occurrences leaves the multiset unchanged.
    pub fn add_n(&mut self, item: T, n: usize) -> usize {
        if n == 0 {
            return self.count(&item);
        }
        self.total += n;
        let count = self.counts.entry(item).or_insert(0);
        let previous = *count;
        *count += n;
        previous
    }

    /// Number of occurrences of `item`, zero if absent.
    pub fn count<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// True if `item` occurs at least once.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(item)
    }

    /// Consume one occurrence of `item`, returning the count before removal.
    ///
    /// Returns zero, and changes nothing, when `item` is absent.
    pub fn get_and_remove<Q>(&mut self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_n(item, 1)
    }

    /// Consume up to `n` occurrences of `item`, returning the count before
    /// removal.
    pub fn remove_n<Q>(&mut self, item: &Q, n: usize) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(count) = self.counts.get_mut(item) else {
            return 0;
        };
        let previous = *count;
        if n >= previous {
            self.counts.remove(item);
            self.total -= previous;
        } else {
            *count -= n;
            self.total -= n;
        }
        previous
    }

    /// Remove every occurrence of `item`, returning how many there were.
    pub fn remove_all<Q>(&mut self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let previous = self.counts.remove(item).unwrap_or(0);
        self.total -= previous;
        previous
    }

    /// Set the count of `item` exactly, returning the previous count.
    ///
    /// A count of zero removes the element.
    pub fn set_count(&mut self, item: T, count: usize) -> usize {
        let previous = match self.counts.entry(item) {
            Entry::Occupied(entry) if count == 0 => entry.remove(),
            Entry::Occupied(mut entry) => entry.insert(count),
            Entry::Vacant(entry) => {
                if count > 0 {
                    entry.insert(count);
                }
                0
            }
        };
        self.total = self.total - previous + count;
        previous
    }
}

impl<T: Hash + Eq> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for Multiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.counts == other.counts
    }
}

impl<T: Hash + Eq> Eq for Multiset<T> {}

impl<T: Debug> Debug for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Multiset::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> IntoIterator for Multiset<T> {
    type Item = (T, usize);
    type IntoIter = hash_map::IntoIter<T, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::Multiset;

    #[test]
    fn counts_and_totals() {
        let mut set: Multiset<&str> = ["a", "b", "a", "c", "a"].into_iter().collect();
        assert_eq!(set.len(), 5);
        assert_eq!(set.distinct_len(), 3);
        assert_eq!(set.count("a"), 3);
        assert_eq!(set.count("z"), 0);

        assert_eq!(set.add_n("b", 2), 1);
        assert_eq!(set.count("b"), 3);
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn get_and_remove_drops_at_zero() {
        let mut set: Multiset<i32> = [7, 7].into_iter().collect();
        assert_eq!(set.get_and_remove(&7), 2);
        assert_eq!(set.get_and_remove(&7), 1);
        assert!(!set.contains(&7));
        assert_eq!(set.get_and_remove(&7), 0);
        assert!(set.is_empty());
        assert_eq!(set.distinct_len(), 0);
    }

    #[test]
    fn remove_n_saturates() {
        let mut set: Multiset<char> = "aaab".chars().collect();
        assert_eq!(set.remove_n(&'a', 2), 3);
        assert_eq!(set.count(&'a'), 1);
        assert_eq!(set.remove_n(&'a', 10), 1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.remove_all(&'b'), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn set_count() {
        let mut set = Multiset::new();
        assert_eq!(set.set_count("x", 4), 0);
        assert_eq!(set.set_count("x", 1), 4);
        assert_eq!(set.len(), 1);
        assert_eq!(set.set_count("x", 0), 1);
        assert!(set.is_empty());
        assert_eq!(set.set_count("y", 0), 0);
        assert_eq!(set.distinct_len(), 0);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: Multiset<u8> = [1, 2, 2].into_iter().collect();
        let b: Multiset<u8> = [2, 1, 2].into_iter().collect();
        assert_eq!(a, b);
        let c: Multiset<u8> = [1, 2].into_iter().collect();
        assert_ne!(a, c);
    }
}

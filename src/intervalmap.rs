use core::fmt::{self, Debug};
use core::iter::FromIterator;

use alloc::vec::Vec;

use crate::intervalmap_types::{IntoIter, Iter};
use crate::tree::{IntervalKey, IntervalTree, SgError};

/// Ordered map keyed by half-open `[lo, hi)` intervals, supporting overlap queries.
/// Equal-`lo` entries are kept together in a bucket, in insertion order.
/// A wrapper interface for [`IntervalTree`](crate::tree::IntervalTree).
pub struct SgIntervalMap<K: Ord + Clone, V> {
    pub(crate) tree: IntervalTree<K, V>,
}

impl<K: Ord + Clone, V> SgIntervalMap<K, V> {
    /// Makes a new, empty `SgIntervalMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgIntervalMap;
    ///
    /// let mut map: SgIntervalMap<i64, &str> = SgIntervalMap::new();
    /// ```
    pub fn new() -> Self {
        SgIntervalMap {
            tree: IntervalTree::new(),
        }
    }

    /// Number of times the tree has rebuilt itself to maintain its weight-balance invariant.
    /// Exposed for testing/benchmarking, not a stable API guarantee.
    pub fn rebal_cnt(&self) -> usize {
        self.tree.rebal_cnt()
    }

    /// Current tree height.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Inserts a `[lo, hi)` interval mapped to `val`. A `lo` already present does not replace
    /// its bucket: the new entry is appended instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgIntervalMap;
    ///
    /// let mut schedule = SgIntervalMap::new();
    /// schedule.insert((0, 10), "morning");
    /// schedule.insert((10, 20), "afternoon");
    /// assert!(schedule.any((5, 15)));
    /// ```
    pub fn insert(&mut self, interval: (K, K), val: V) {
        let (lo, hi) = interval;
        self.tree.insert(lo, hi, val);
    }

    /// Fallible counterpart to [`insert`](Self::insert): surfaces allocator exhaustion as
    /// [`SgError`] instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgIntervalMap;
    ///
    /// let mut schedule = SgIntervalMap::new();
    /// assert!(schedule.try_insert((0, 10), "morning").is_ok());
    /// ```
    pub fn try_insert(&mut self, interval: (K, K), val: V) -> Result<(), SgError> {
        let (lo, hi) = interval;
        self.tree.try_insert(lo, hi, val).map(|_| ())
    }

    /// Returns `true` if any stored interval overlaps the half-open query range
    /// `[qlo, qhi)`. A degenerate point query (`qlo == qhi`) also matches an interval
    /// abutting exactly at that point.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgIntervalMap;
    ///
    /// let mut schedule = SgIntervalMap::new();
    /// schedule.insert((0, 10), "morning");
    ///
    /// assert!(schedule.any((5, 15)));
    /// assert!(!schedule.any((20, 30)));
    /// ```
    pub fn any(&self, query: (K, K)) -> bool {
        let (qlo, qhi) = query;
        self.tree.any(&qlo, &qhi)
    }

    /// Invokes `f` on every entry overlapping the half-open query range `[qlo, qhi)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgIntervalMap;
    ///
    /// let mut schedule = SgIntervalMap::new();
    /// schedule.insert((0, 10), "morning");
    /// schedule.insert((10, 20), "afternoon");
    ///
    /// let mut hits = Vec::new();
    /// schedule.all((5, 15), |(_lo, _hi), v| hits.push(*v));
    /// hits.sort_unstable();
    /// assert_eq!(hits, vec!["afternoon", "morning"]);
    /// ```
    pub fn all<F>(&self, query: (K, K), mut f: F)
    where
        F: FnMut((&K, &K), &V),
    {
        let (qlo, qhi) = query;
        self.tree
            .all(&qlo, &qhi, &mut |(k, v)| f((&k.lo, &k.hi), v));
    }

    /// Bucket size for an exact `(lo, hi)` match (not merely sharing `lo`).
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgIntervalMap;
    ///
    /// let mut schedule = SgIntervalMap::new();
    /// schedule.insert((0, 10), "morning");
    /// assert_eq!(schedule.count((0, 10)), 1);
    /// assert_eq!(schedule.count((0, 99)), 0);
    /// ```
    pub fn count(&self, interval: (K, K)) -> usize {
        let (lo, hi) = interval;
        self.tree.count(&lo, &hi)
    }

    /// Returns `true` if any entry's `lo` matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgIntervalMap;
    ///
    /// let mut schedule = SgIntervalMap::new();
    /// schedule.insert((0, 10), "morning");
    /// assert!(schedule.contains_lo(&0));
    /// assert!(!schedule.contains_lo(&5));
    /// ```
    pub fn contains_lo(&self, lo: &K) -> bool {
        self.tree.contains_lo(lo)
    }

    /// Returns a reference to the bucket of `(IntervalKey, V)` entries sharing `lo`, in
    /// insertion order.
    pub fn get_bucket(&self, lo: &K) -> Option<&[(IntervalKey<K>, V)]> {
        self.tree.get_bucket(lo)
    }

    /// Removes every entry sharing `lo`, returning how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgIntervalMap;
    ///
    /// let mut schedule = SgIntervalMap::new();
    /// schedule.insert((0, 10), "morning");
    /// assert_eq!(schedule.remove_lo(&0), 1);
    /// assert_eq!(schedule.remove_lo(&0), 0);
    /// ```
    pub fn remove_lo(&mut self, lo: &K) -> usize {
        self.tree.remove_lo(lo)
    }

    /// Removes every entry sharing `lo`, returning the removed bucket.
    pub fn remove_lo_entries(&mut self, lo: &K) -> Vec<(IntervalKey<K>, V)> {
        self.tree.remove_lo_entries(lo)
    }

    /// Gets an iterator over the entries of the map, sorted by `lo` then bucket insertion
    /// order. Each item is `((&lo, &hi), &val)`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Clears the map, removing all entries.
    pub fn clear(&mut self) {
        self.tree.clear()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the total number of entries in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }
}

// Convenience Traits --------------------------------------------------------------------------------------------------

impl<K: Ord + Clone, V> Default for SgIntervalMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for SgIntervalMap<K, V> {
    fn clone(&self) -> Self {
        SgIntervalMap {
            tree: self.tree.clone(),
        }
    }
}

impl<K: Ord + Clone + Debug, V: Debug> Debug for SgIntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|((lo, hi), v)| ((lo, hi), v)))
            .finish()
    }
}

impl<K: Ord + Clone, V> FromIterator<((K, K), V)> for SgIntervalMap<K, V> {
    fn from_iter<I: IntoIterator<Item = ((K, K), V)>>(iter: I) -> Self {
        let mut sgm = SgIntervalMap::new();
        for (interval, v) in iter {
            sgm.insert(interval, v);
        }
        sgm
    }
}

impl<K: Ord + Clone, V> Extend<((K, K), V)> for SgIntervalMap<K, V> {
    fn extend<T: IntoIterator<Item = ((K, K), V)>>(&mut self, iter: T) {
        for (interval, v) in iter {
            self.insert(interval, v);
        }
    }
}

impl<K: Ord + Clone + PartialEq, V: PartialEq> PartialEq for SgIntervalMap<K, V> {
    fn eq(&self, other: &SgIntervalMap<K, V>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Ord + Clone + Eq, V: Eq> Eq for SgIntervalMap<K, V> {}

// Iterators -----------------------------------------------------------------------------------------------------------

impl<'a, K: Ord + Clone, V> IntoIterator for &'a SgIntervalMap<K, V> {
    type Item = ((&'a K, &'a K), &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord + Clone, V> IntoIterator for SgIntervalMap<K, V> {
    type Item = ((K, K), V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

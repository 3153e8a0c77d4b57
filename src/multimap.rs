use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::iter::FromIterator;

use alloc::vec::Vec;

use crate::multimap_types::{IntoIter, Iter};
use crate::tree::{MultiTree, SgError};

/// Ordered multi-key map: an [`SgMap`](crate::SgMap) that allows more than one value per key.
/// Equal-keyed entries are kept together in a bucket, in insertion order.
/// A wrapper interface for [`MultiTree`](crate::tree::MultiTree).
pub struct SgMultiMap<K: Ord + Clone, V> {
    pub(crate) tree: MultiTree<K, V>,
}

impl<K: Ord + Clone, V> SgMultiMap<K, V> {
    /// Makes a new, empty `SgMultiMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map: SgMultiMap<i32, &str> = SgMultiMap::new();
    /// ```
    pub fn new() -> Self {
        SgMultiMap {
            tree: MultiTree::new(),
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

    /// Inserts a key-value pair into the map. Unlike [`SgMap::insert`](crate::SgMap::insert),
    /// a key already present does not replace its bucket: the new value is appended instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert("/", 200);
    /// map.insert("/", 404);
    /// map.insert("/", 200);
    ///
    /// assert_eq!(map.count(&"/"), 3);
    /// assert_eq!(map.get(&"/"), [200, 404, 200]);
    /// ```
    pub fn insert(&mut self, key: K, val: V) {
        self.tree.insert(key, val);
    }

    /// Fallible counterpart to [`insert`](Self::insert): surfaces allocator exhaustion as
    /// [`SgError`] instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// assert!(map.try_insert("/", 200).is_ok());
    /// ```
    pub fn try_insert(&mut self, key: K, val: V) -> Result<(), SgError> {
        self.tree.try_insert(key, val).map(|_| ())
    }

    /// Returns the number of entries whose key matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.count(&1), 2);
    /// assert_eq!(map.count(&2), 0);
    /// ```
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.count(key)
    }

    /// Returns `true` if the map contains at least one value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.contains_key(&1), true);
    /// assert_eq!(map.contains_key(&2), false);
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains_key(key)
    }

    /// Returns the bucket of values for a key, cloned and in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.get(&1), vec!["a", "b"]);
    /// assert_eq!(map.get(&2), Vec::<&str>::new());
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Vec<V>
    where
        K: Borrow<Q>,
        V: Clone,
        Q: Ord + ?Sized,
    {
        match self.tree.get(key) {
            Some(bucket) => bucket.iter().map(|(_, v)| v.clone()).collect(),
            None => Vec::new(),
        }
    }

    /// Returns a reference to the bucket of key-value pairs for a key, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.get_bucket(&1), Some(&[(1, "a"), (1, "b")][..]));
    /// ```
    pub fn get_bucket<Q>(&self, key: &Q) -> Option<&[(K, V)]>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(key)
    }

    /// Removes every entry whose key matches, returning how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.remove(&1), 2);
    /// assert_eq!(map.remove(&1), 0);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove_all(key)
    }

    /// Removes every entry whose key matches, returning the removed bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.remove_entries(&1), vec![(1, "a"), (1, "b")]);
    /// ```
    pub fn remove_entries<Q>(&mut self, key: &Q) -> Vec<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove_all_entries(key)
    }

    /// Gets an iterator over the entries of the map, sorted by key then bucket insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Clears the map, removing all entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the total number of entries in the map (sum of all bucket lengths).
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns the bucket with the smallest key, if any.
    pub fn first_key_bucket(&self) -> Option<&[(K, V)]> {
        self.tree.first_bucket()
    }

    /// Returns the bucket with the largest key, if any.
    pub fn last_key_bucket(&self) -> Option<&[(K, V)]> {
        self.tree.last_bucket()
    }

    /// Removes and returns the whole bucket with the smallest key, if any.
    pub fn pop_first_bucket(&mut self) -> Option<(K, Vec<V>)> {
        self.tree.pop_first_bucket()
    }

    /// Removes and returns the whole bucket with the largest key, if any.
    pub fn pop_last_bucket(&mut self) -> Option<(K, Vec<V>)> {
        self.tree.pop_last_bucket()
    }

    /// Gets an iterator over every entry with key `>= key`, sorted by key then bucket insertion
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// map.insert(3, "b");
    /// map.insert(3, "c");
    /// assert!(map.lower_bound(&2).map(|(k, v)| (*k, *v)).eq([(3, "b"), (3, "c")]));
    /// ```
    pub fn lower_bound<Q>(&self, key: &Q) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let front = self.tree.lower_bound_cursor(key);
        let back = self.tree.last_cursor();
        Iter::bounded(self, front, back)
    }

    /// Gets an iterator over every entry with key `> key`, sorted by key then bucket insertion
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// map.insert(3, "b");
    /// assert!(map.upper_bound(&1).map(|(k, v)| (*k, *v)).eq([(3, "b")]));
    /// ```
    pub fn upper_bound<Q>(&self, key: &Q) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let front = self.tree.upper_bound_cursor(key);
        let back = self.tree.last_cursor();
        Iter::bounded(self, front, back)
    }

    /// Gets an iterator spanning the whole bucket matching `key`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiMap;
    ///
    /// let mut map = SgMultiMap::new();
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    /// assert!(map.equal_range(&1).map(|(k, v)| (*k, *v)).eq([(1, "a"), (1, "b")]));
    /// ```
    pub fn equal_range<Q>(&self, key: &Q) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (front, upper) = self.tree.equal_range_cursors(key);
        let back = crate::tree::walk::prev(self.tree.arena(), upper, self.tree.root_idx());
        Iter::bounded(self, front, back)
    }
}

// Convenience Traits --------------------------------------------------------------------------------------------------

impl<K: Ord + Clone, V> Default for SgMultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for SgMultiMap<K, V> {
    fn clone(&self) -> Self {
        SgMultiMap {
            tree: self.tree.clone(),
        }
    }
}

impl<K: Ord + Clone + Debug, V: Debug> Debug for SgMultiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord + Clone, V> FromIterator<(K, V)> for SgMultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut sgm = SgMultiMap::new();
        for (k, v) in iter {
            sgm.insert(k, v);
        }
        sgm
    }
}

impl<K: Ord + Clone, V> Extend<(K, V)> for SgMultiMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord + Clone + PartialEq, V: PartialEq> PartialEq for SgMultiMap<K, V> {
    fn eq(&self, other: &SgMultiMap<K, V>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Ord + Clone + Eq, V: Eq> Eq for SgMultiMap<K, V> {}

impl<K: Ord + Clone, V: PartialOrd> PartialOrd for SgMultiMap<K, V> {
    fn partial_cmp(&self, other: &SgMultiMap<K, V>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord + Clone, V: Ord> Ord for SgMultiMap<K, V> {
    fn cmp(&self, other: &SgMultiMap<K, V>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

// Iterators -----------------------------------------------------------------------------------------------------------

impl<'a, K: Ord + Clone, V> IntoIterator for &'a SgMultiMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord + Clone, V> IntoIterator for SgMultiMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

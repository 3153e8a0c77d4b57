use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::iter::FromIterator;

use crate::multimap::SgMultiMap;
use crate::multiset_types::{IntoIter, Iter};
use crate::tree::SgError;

/// Ordered multi-key set: an [`SgSet`](crate::SgSet) that allows more than one occurrence of a
/// value.
/// A wrapper interface for [`SgMultiMap`](crate::SgMultiMap)`<T, ()>`.
pub struct SgMultiSet<T: Ord + Clone> {
    pub(crate) multimap: SgMultiMap<T, ()>,
}

impl<T: Ord + Clone> SgMultiSet<T> {
    /// Makes a new, empty `SgMultiSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set: SgMultiSet<i32> = SgMultiSet::new();
    /// ```
    pub fn new() -> Self {
        SgMultiSet {
            multimap: SgMultiMap::new(),
        }
    }

    /// Number of times the tree has rebuilt itself to maintain its weight-balance invariant.
    /// Exposed for testing/benchmarking, not a stable API guarantee.
    pub fn rebal_cnt(&self) -> usize {
        self.multimap.rebal_cnt()
    }

    /// Current tree height.
    pub fn height(&self) -> usize {
        self.multimap.height()
    }

    /// Adds a value to the set. Unlike [`SgSet::insert`](crate::SgSet::insert), a value already
    /// present does not replace it: another occurrence is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set = SgMultiSet::new();
    /// set.insert(2);
    /// set.insert(2);
    /// assert_eq!(set.count(&2), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.multimap.insert(value, ());
    }

    /// Fallible counterpart to [`insert`](Self::insert): surfaces allocator exhaustion as
    /// [`SgError`] instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set = SgMultiSet::new();
    /// assert!(set.try_insert(2).is_ok());
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), SgError> {
        self.multimap.try_insert(value, ())
    }

    /// Returns the number of occurrences of a value in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set = SgMultiSet::new();
    /// set.insert(2);
    /// set.insert(2);
    /// assert_eq!(set.count(&2), 2);
    /// assert_eq!(set.count(&3), 0);
    /// ```
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.multimap.count(value)
    }

    /// Returns `true` if the set contains at least one occurrence of a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set = SgMultiSet::new();
    /// set.insert(1);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&2), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.multimap.contains_key(value)
    }

    /// Removes every occurrence of a value, returning how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set = SgMultiSet::new();
    /// set.insert(1);
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), 2);
    /// assert_eq!(set.remove(&1), 0);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.multimap.remove(value)
    }

    /// Gets an iterator that visits the elements in the set in ascending order, with repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set = SgMultiSet::new();
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(1);
    ///
    /// let collected: Vec<i32> = set.iter().copied().collect();
    /// assert_eq!(collected, vec![1, 1, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.multimap.clear()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.multimap.is_empty()
    }

    /// Returns the total number of elements in the set, counting repeats.
    pub fn len(&self) -> usize {
        self.multimap.len()
    }

    /// Gets an iterator over every occurrence `>= value`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set = SgMultiSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// set.insert(3);
    /// assert!(set.lower_bound(&2).copied().eq([3, 3]));
    /// ```
    pub fn lower_bound<Q>(&self, value: &Q) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Iter::from_multimap_iter(self.multimap.lower_bound(value))
    }

    /// Gets an iterator over every occurrence `> value`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set = SgMultiSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert!(set.upper_bound(&1).copied().eq([3]));
    /// ```
    pub fn upper_bound<Q>(&self, value: &Q) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Iter::from_multimap_iter(self.multimap.upper_bound(value))
    }

    /// Gets an iterator over every occurrence equal to `value`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgMultiSet;
    ///
    /// let mut set = SgMultiSet::new();
    /// set.insert(1);
    /// set.insert(1);
    /// assert!(set.equal_range(&1).copied().eq([1, 1]));
    /// ```
    pub fn equal_range<Q>(&self, value: &Q) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Iter::from_multimap_iter(self.multimap.equal_range(value))
    }
}

// Convenience Traits --------------------------------------------------------------------------------------------------

impl<T: Ord + Clone> Default for SgMultiSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for SgMultiSet<T> {
    fn clone(&self) -> Self {
        SgMultiSet {
            multimap: self.multimap.clone(),
        }
    }
}

impl<T: Ord + Clone + Debug> Debug for SgMultiSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord + Clone> FromIterator<T> for SgMultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sgs = SgMultiSet::new();
        for v in iter {
            sgs.insert(v);
        }
        sgs
    }
}

impl<T: Ord + Clone> Extend<T> for SgMultiSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T: Ord + Clone + PartialEq> PartialEq for SgMultiSet<T> {
    fn eq(&self, other: &SgMultiSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Ord + Clone + Eq> Eq for SgMultiSet<T> {}

impl<T: Ord + Clone> PartialOrd for SgMultiSet<T> {
    fn partial_cmp(&self, other: &SgMultiSet<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord + Clone> Ord for SgMultiSet<T> {
    fn cmp(&self, other: &SgMultiSet<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

// Iterators -----------------------------------------------------------------------------------------------------------

impl<'a, T: Ord + Clone> IntoIterator for &'a SgMultiSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + Clone> IntoIterator for SgMultiSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

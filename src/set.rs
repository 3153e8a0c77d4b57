use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::iter::FromIterator;
use core::ops::{BitAnd, BitOr, BitXor, Sub};

use alloc::vec::Vec;

use crate::map::SgMap;
use crate::set_types::{ElemRefIter, IntoIter, Iter};
use crate::tree::SgError;

/// Ordered set.
/// A wrapper interface for [`SgMap`](crate::SgMap)`<T, ()>`.
/// API examples and descriptions are all adapted or directly copied from the standard library's [`BTreeSet`](https://doc.rust-lang.org/std/collections/struct.BTreeSet.html).
pub struct SgSet<T: Ord> {
    pub(crate) map: SgMap<T, ()>,
}

impl<T: Ord> SgSet<T> {
    /// Makes a new, empty `SgSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set: SgSet<i32> = SgSet::new();
    /// ```
    pub fn new() -> Self {
        SgSet { map: SgMap::new() }
    }

    /// Number of times the tree has rebuilt itself to maintain its weight-balance invariant.
    /// Exposed for testing/benchmarking, not a stable API guarantee.
    pub fn rebal_cnt(&self) -> usize {
        self.map.rebal_cnt()
    }

    /// Current tree height.
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Adds a value to the set.
    /// Returns whether the value was newly inserted: `true` if the set did not previously
    /// contain this value, `false` if it did (and the old value is replaced).
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set = SgSet::new();
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// Fallible counterpart to [`insert`](Self::insert): surfaces allocator exhaustion as
    /// [`SgError`] instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set = SgSet::new();
    /// assert_eq!(set.try_insert(2), Ok(true));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<bool, SgError> {
        self.map.try_insert(value, ()).map(|old| old.is_none())
    }

    /// Moves all elements from `other` into `self`, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut a = SgSet::new();
    /// a.insert(1);
    /// a.insert(2);
    ///
    /// let mut b = SgSet::new();
    /// b.insert(2);
    /// b.insert(3);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(b.len(), 0);
    /// ```
    pub fn append(&mut self, other: &mut SgSet<T>) {
        self.map.append(&mut other.map);
    }

    /// Gets an iterator that visits the elements in the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let set = SgSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Removes a value from the set. Returns whether the value was present in the set.
    ///
    /// The value may be any borrowed form of the set's value type, but the ordering
    /// on the borrowed form *must* match the ordering on the value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set = SgSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.remove(value).is_some()
    }

    /// Removes and returns the value in the set, if any, that is equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set = SgSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.remove_entry(value).map(|(k, _)| k)
    }

    /// Splits the collection into two at the given value. Returns everything after the given
    /// value, including the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut a = SgSet::new();
    /// a.insert(1);
    /// a.insert(2);
    /// a.insert(3);
    /// a.insert(17);
    /// a.insert(41);
    ///
    /// let b = a.split_off(&3);
    ///
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(b.len(), 3);
    ///
    /// assert!(a.contains(&1));
    /// assert!(a.contains(&2));
    ///
    /// assert!(b.contains(&3));
    /// assert!(b.contains(&17));
    /// assert!(b.contains(&41));
    /// ```
    pub fn split_off<Q>(&mut self, value: &Q) -> SgSet<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        SgSet {
            map: self.map.split_off(value),
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` such that `f(&e)` returns `false`.
    /// The elements are visited in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set: SgSet<i32> = (0..8).collect();
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.into_iter().eq(vec![0, 2, 4, 6]));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.map.retain(|k, _| f(k));
    }

    /// Returns a reference to the value in the set, if any, that is equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let set = SgSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get_key_value(value).map(|(k, _)| k)
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut v = SgSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Returns `true` if the set contains a value.
    ///
    /// The value may be any borrowed form of the set's value type, but the ordering
    /// on the borrowed form *must* match the ordering on the value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let set = SgSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(value)
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut v = SgSet::new();
    /// assert!(v.is_empty());
    /// v.insert(1);
    /// assert!(!v.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a reference to the first/minimum value in the set, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set = SgSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> {
        self.map.first_key_value().map(|(k, _)| k)
    }

    /// Removes the first value from the set and returns it, if any.
    /// The first value is the minimum value that was in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set = SgSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// while let Some(val) = set.pop_first() {
    ///     assert!(set.iter().all(|k| *k > val));
    /// }
    /// assert!(set.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        self.map.pop_first().map(|(k, _)| k)
    }

    /// Returns a reference to the last/maximum value in the set, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set = SgSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.last(), Some(&2));
    /// ```
    pub fn last(&self) -> Option<&T> {
        self.map.last_key_value().map(|(k, _)| k)
    }

    /// Removes the last value from the set and returns it, if any.
    /// The last value is the maximum value that was in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut set = SgSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// while let Some(val) = set.pop_last() {
    ///     assert!(set.iter().all(|k| *k < val));
    /// }
    /// assert!(set.is_empty());
    /// ```
    pub fn pop_last(&mut self) -> Option<T> {
        self.map.pop_last().map(|(k, _)| k)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let mut v = SgSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Visits the values representing the difference, i.e. the values that are in `self` but
    /// not in `other`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let a = SgSet::from([1, 2, 3]);
    /// let b = SgSet::from([2, 3, 4]);
    ///
    /// let diff: Vec<_> = a.difference(&b).cloned().collect();
    /// assert_eq!(diff, [1]);
    /// ```
    pub fn difference<'a>(&'a self, other: &'a SgSet<T>) -> ElemRefIter<'a, T> {
        let items: Vec<&'a T> = self.iter().filter(|v| !other.contains(v)).collect();
        ElemRefIter::new(items)
    }

    /// Visits the values representing the symmetric difference, i.e. the values that are in
    /// `self` or in `other` but not in both, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let a = SgSet::from([1, 2, 3]);
    /// let b = SgSet::from([2, 3, 4]);
    ///
    /// let diff: Vec<_> = a.symmetric_difference(&b).cloned().collect();
    /// assert_eq!(diff, [1, 4]);
    /// ```
    pub fn symmetric_difference<'a>(&'a self, other: &'a SgSet<T>) -> ElemRefIter<'a, T> {
        let mut items: Vec<&'a T> = self.iter().filter(|v| !other.contains(v)).collect();
        items.extend(other.iter().filter(|v| !self.contains(v)));
        ElemRefIter::new(items)
    }

    /// Visits the values representing the intersection, i.e. the values that are both in
    /// `self` and `other`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let a = SgSet::from([1, 2, 3]);
    /// let b = SgSet::from([2, 3, 4]);
    ///
    /// let intersection: Vec<_> = a.intersection(&b).cloned().collect();
    /// assert_eq!(intersection, [2, 3]);
    /// ```
    pub fn intersection<'a>(&'a self, other: &'a SgSet<T>) -> ElemRefIter<'a, T> {
        let items: Vec<&'a T> = self.iter().filter(|v| other.contains(v)).collect();
        ElemRefIter::new(items)
    }

    /// Visits the values representing the union, i.e. all the values in `self` or `other`,
    /// without duplicates, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let a = SgSet::from([1, 2]);
    /// let b = SgSet::from([2, 3]);
    ///
    /// let union: Vec<_> = a.union(&b).cloned().collect();
    /// assert_eq!(union, [1, 2, 3]);
    /// ```
    pub fn union<'a>(&'a self, other: &'a SgSet<T>) -> ElemRefIter<'a, T> {
        let mut items: Vec<&'a T> = self.iter().collect();
        items.extend(other.iter().filter(|v| !self.contains(v)));
        ElemRefIter::new(items)
    }

    /// Returns `true` if `self` has no elements in common with `other`.
    /// This is equivalent to checking for an empty intersection.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let a = SgSet::from([1, 2, 3]);
    /// let b = SgSet::from([4, 5, 6]);
    /// assert!(a.is_disjoint(&b));
    /// ```
    pub fn is_disjoint(&self, other: &SgSet<T>) -> bool {
        self.iter().all(|v| !other.contains(v))
    }

    /// Returns `true` if the set is a subset of another, i.e. `other` contains at least all
    /// the values in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let sup = SgSet::from([1, 2, 3]);
    /// let mut set = SgSet::new();
    ///
    /// assert_eq!(set.is_subset(&sup), true);
    /// set.insert(2);
    /// assert_eq!(set.is_subset(&sup), true);
    /// set.insert(4);
    /// assert_eq!(set.is_subset(&sup), false);
    /// ```
    pub fn is_subset(&self, other: &SgSet<T>) -> bool {
        self.iter().all(|v| other.contains(v))
    }

    /// Returns `true` if the set is a superset of another, i.e. `self` contains at least all
    /// the values in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let sub = SgSet::from([1, 2]);
    /// let mut set = SgSet::new();
    ///
    /// assert_eq!(set.is_superset(&sub), false);
    /// set.insert(0);
    /// set.insert(1);
    /// assert_eq!(set.is_superset(&sub), false);
    /// set.insert(2);
    /// assert_eq!(set.is_superset(&sub), true);
    /// ```
    pub fn is_superset(&self, other: &SgSet<T>) -> bool {
        other.is_subset(self)
    }

    /// Gets an iterator over every value `>= value`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let set = SgSet::from([1, 3, 5]);
    /// assert!(set.lower_bound(&2).eq(&[3, 5]));
    /// ```
    pub fn lower_bound<Q>(&self, value: &Q) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Iter::from_map_iter(self.map.lower_bound(value))
    }

    /// Gets an iterator over every value `> value`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let set = SgSet::from([1, 3, 5]);
    /// assert!(set.upper_bound(&3).eq(&[5]));
    /// ```
    pub fn upper_bound<Q>(&self, value: &Q) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Iter::from_map_iter(self.map.upper_bound(value))
    }

    /// Gets an iterator over every value equal to `value` (0 or 1 of them, since the set holds
    /// unique values), in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let set = SgSet::from([1, 3, 5]);
    /// assert!(set.equal_range(&3).eq(&[3]));
    /// assert!(set.equal_range(&4).eq(&[]));
    /// ```
    pub fn equal_range<Q>(&self, value: &Q) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Iter::from_map_iter(self.map.equal_range(value))
    }
}

// Convenience Traits --------------------------------------------------------------------------------------------------

impl<T: Ord> Default for SgSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for SgSet<T> {
    fn clone(&self) -> Self {
        SgSet {
            map: self.map.clone(),
        }
    }
}

impl<T: Ord + Debug> Debug for SgSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SgSet<T> {
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let set1 = SgSet::from([1, 2, 3, 4]);
    /// let set2: SgSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T: Ord> FromIterator<T> for SgSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sgs = SgSet::new();
        for v in iter {
            sgs.insert(v);
        }
        sgs
    }
}

impl<T: Ord> Extend<T> for SgSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<'a, T: Ord + Copy> Extend<&'a T> for SgSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord + PartialEq> PartialEq for SgSet<T> {
    fn eq(&self, other: &SgSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Ord + Eq> Eq for SgSet<T> {}

impl<T: Ord> PartialOrd for SgSet<T> {
    fn partial_cmp(&self, other: &SgSet<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SgSet<T> {
    fn cmp(&self, other: &SgSet<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

// Operator Overloads ---------------------------------------------------------------------------------------------------

impl<T: Ord + Clone> Sub<&SgSet<T>> for &SgSet<T> {
    type Output = SgSet<T>;

    /// Returns the difference of `self` and `rhs` as a new `SgSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let a = SgSet::from([1, 2, 3]);
    /// let b = SgSet::from([3, 4, 5]);
    ///
    /// let result = &a - &b;
    /// assert_eq!(result, SgSet::from([1, 2]));
    /// ```
    fn sub(self, rhs: &SgSet<T>) -> SgSet<T> {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Ord + Clone> BitAnd<&SgSet<T>> for &SgSet<T> {
    type Output = SgSet<T>;

    /// Returns the intersection of `self` and `rhs` as a new `SgSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let a = SgSet::from([1, 2, 3]);
    /// let b = SgSet::from([2, 3, 4]);
    ///
    /// let result = &a & &b;
    /// assert_eq!(result, SgSet::from([2, 3]));
    /// ```
    fn bitand(self, rhs: &SgSet<T>) -> SgSet<T> {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Ord + Clone> BitOr<&SgSet<T>> for &SgSet<T> {
    type Output = SgSet<T>;

    /// Returns the union of `self` and `rhs` as a new `SgSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let a = SgSet::from([1, 2, 3]);
    /// let b = SgSet::from([3, 4, 5]);
    ///
    /// let result = &a | &b;
    /// assert_eq!(result, SgSet::from([1, 2, 3, 4, 5]));
    /// ```
    fn bitor(self, rhs: &SgSet<T>) -> SgSet<T> {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Ord + Clone> BitXor<&SgSet<T>> for &SgSet<T> {
    type Output = SgSet<T>;

    /// Returns the symmetric difference of `self` and `rhs` as a new `SgSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::SgSet;
    ///
    /// let a = SgSet::from([1, 2, 3]);
    /// let b = SgSet::from([3, 4, 5]);
    ///
    /// let result = &a ^ &b;
    /// assert_eq!(result, SgSet::from([1, 2, 4, 5]));
    /// ```
    fn bitxor(self, rhs: &SgSet<T>) -> SgSet<T> {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

// Iterators -----------------------------------------------------------------------------------------------------------

impl<'a, T: Ord> IntoIterator for &'a SgSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> IntoIterator for SgSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

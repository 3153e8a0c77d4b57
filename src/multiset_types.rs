//! Iterator return types for [`SgMultiSet`](crate::SgMultiSet).

use crate::multimap_types;
use crate::multiset::SgMultiSet;

/// Reference iterator, sorted. See [`SgMultiSet::iter`](crate::SgMultiSet::iter).
pub struct Iter<'a, T: Ord + Clone> {
    inner: multimap_types::Iter<'a, T, ()>,
}

impl<'a, T: Ord + Clone> Iter<'a, T> {
    pub(crate) fn new(set: &'a SgMultiSet<T>) -> Self {
        Iter {
            inner: set.multimap.iter(),
        }
    }

    /// See [`SgMultiSet::lower_bound`]/[`SgMultiSet::upper_bound`]/[`SgMultiSet::equal_range`].
    pub(crate) fn from_multimap_iter(inner: multimap_types::Iter<'a, T, ()>) -> Self {
        Iter { inner }
    }
}

impl<'a, T: Ord + Clone> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<'a, T: Ord + Clone> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

/// Consuming iterator, sorted. See [`IntoIterator`] for [`SgMultiSet`](crate::SgMultiSet).
pub struct IntoIter<T: Ord + Clone> {
    inner: multimap_types::IntoIter<T, ()>,
}

impl<T: Ord + Clone> IntoIter<T> {
    pub(crate) fn new(set: SgMultiSet<T>) -> Self {
        IntoIter {
            inner: multimap_types::IntoIter::new(set.multimap),
        }
    }
}

impl<T: Ord + Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

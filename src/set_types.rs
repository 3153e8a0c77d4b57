//! Iterator return types for [`SgSet`](crate::SgSet).

use alloc::vec::{IntoIter as VecIntoIter, Vec};

use crate::map_types;
use crate::set::SgSet;

/// Reference iterator, sorted. See [`SgSet::iter`](crate::SgSet::iter).
pub struct Iter<'a, T: Ord> {
    inner: map_types::Iter<'a, T, ()>,
}

impl<'a, T: Ord> Iter<'a, T> {
    pub(crate) fn new(set: &'a SgSet<T>) -> Self {
        Iter {
            inner: set.map.iter(),
        }
    }

    /// See [`SgSet::lower_bound`]/[`SgSet::upper_bound`]/[`SgSet::equal_range`].
    pub(crate) fn from_map_iter(inner: map_types::Iter<'a, T, ()>) -> Self {
        Iter { inner }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<'a, T: Ord> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

/// Consuming iterator, sorted. See [`IntoIterator`] for [`SgSet`](crate::SgSet).
pub struct IntoIter<T: Ord> {
    inner: map_types::IntoIter<T, ()>,
}

impl<T: Ord> IntoIter<T> {
    pub(crate) fn new(set: SgSet<T>) -> Self {
        IntoIter {
            inner: map_types::IntoIter::new(set.map),
        }
    }
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<T: Ord> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

/// Reference iterator over the elements produced by a set-algebra operation
/// (`difference`/`symmetric_difference`/`intersection`/`union`), computed eagerly into a sorted
/// `Vec` and yielded in order.
pub struct ElemRefIter<'a, T> {
    inner: VecIntoIter<&'a T>,
}

impl<'a, T> ElemRefIter<'a, T> {
    pub(crate) fn new(mut items: Vec<&'a T>) -> Self
    where
        T: Ord,
    {
        items.sort_unstable();
        ElemRefIter {
            inner: items.into_iter(),
        }
    }
}

impl<'a, T> Iterator for ElemRefIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T> DoubleEndedIterator for ElemRefIter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

//! Iterator return types for [`SgMultiMap`](crate::SgMultiMap).

use alloc::collections::VecDeque;

use crate::multimap::SgMultiMap;
use crate::tree::walk::Cursor;
use crate::tree::{BucketIter, MNode, MultiTree};

/// Reference iterator, sorted by key then bucket insertion order.
/// See [`SgMultiMap::iter`](crate::SgMultiMap::iter).
pub struct Iter<'a, K, V> {
    inner: BucketIter<'a, MNode<K, V>>,
}

impl<'a, K: Ord + Clone, V> Iter<'a, K, V> {
    pub(crate) fn new(map: &'a SgMultiMap<K, V>) -> Self {
        Iter {
            inner: BucketIter::new(map.tree.arena(), map.tree.root_idx()),
        }
    }

    /// See [`SgMultiMap::lower_bound`]/[`SgMultiMap::upper_bound`]/[`SgMultiMap::equal_range`].
    pub(crate) fn bounded(map: &'a SgMultiMap<K, V>, front: Cursor, back: Cursor) -> Self {
        Iter {
            inner: BucketIter::bounded(map.tree.arena(), map.tree.root_idx(), front, back),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

/// Consuming iterator, sorted by key then bucket insertion order.
///
/// Pops whole buckets off the front of the tree and drains them one entry at a time, since the
/// XOR-linked arena offers no owning per-entry walk.
pub struct IntoIter<K: Ord + Clone, V> {
    tree: MultiTree<K, V>,
    pending: VecDeque<(K, V)>,
}

impl<K: Ord + Clone, V> IntoIter<K, V> {
    pub(crate) fn new(map: SgMultiMap<K, V>) -> Self {
        IntoIter {
            tree: map.tree,
            pending: VecDeque::new(),
        }
    }
}

impl<K: Ord + Clone, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            let (key, vals) = self.tree.pop_first_bucket()?;
            self.pending.extend(vals.into_iter().map(|v| (key.clone(), v)));
        }
        self.pending.pop_front()
    }
}

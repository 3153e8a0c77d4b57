//! Iterator return types for [`SgIntervalMap`](crate::SgIntervalMap).

use alloc::collections::VecDeque;

use crate::intervalmap::SgIntervalMap;
use crate::tree::{BucketIter, INode, IntervalTree};

/// Reference iterator, sorted by `lo` then bucket insertion order.
/// See [`SgIntervalMap::iter`](crate::SgIntervalMap::iter).
pub struct Iter<'a, K, V> {
    inner: BucketIter<'a, INode<K, V>>,
}

impl<'a, K: Ord + Clone, V> Iter<'a, K, V> {
    pub(crate) fn new(map: &'a SgIntervalMap<K, V>) -> Self {
        Iter {
            inner: BucketIter::new(map.tree.arena(), map.tree.root_idx()),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = ((&'a K, &'a K), &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| ((&k.lo, &k.hi), v))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| ((&k.lo, &k.hi), v))
    }
}

/// Consuming iterator, sorted by `lo` then bucket insertion order.
///
/// Pops whole buckets off the front of the tree and drains them one entry at a time, since the
/// XOR-linked arena offers no owning per-entry walk.
pub struct IntoIter<K: Ord + Clone, V> {
    tree: IntervalTree<K, V>,
    pending: VecDeque<((K, K), V)>,
}

impl<K: Ord + Clone, V> IntoIter<K, V> {
    pub(crate) fn new(map: SgIntervalMap<K, V>) -> Self {
        IntoIter {
            tree: map.tree,
            pending: VecDeque::new(),
        }
    }
}

impl<K: Ord + Clone, V> Iterator for IntoIter<K, V> {
    type Item = ((K, K), V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            let (_, bucket) = self.tree.pop_first_bucket()?;
            self.pending
                .extend(bucket.into_iter().map(|(k, v)| ((k.lo, k.hi), v)));
        }
        self.pending.pop_front()
    }
}

//! Iterator return types for [`SgMap`](crate::SgMap).

use alloc::vec::{IntoIter as VecIntoIter, Vec};

use crate::map::SgMap;
use crate::tree::walk::Cursor;
use crate::tree::{NodeIter, UNode, UniqueTree};

/// Reference iterator, sorted by key. See [`SgMap::iter`](crate::SgMap::iter).
pub struct Iter<'a, K, V> {
    inner: NodeIter<'a, UNode<K, V>>,
}

impl<'a, K: Ord, V> Iter<'a, K, V> {
    pub(crate) fn new(map: &'a SgMap<K, V>) -> Self {
        Iter {
            inner: NodeIter::new(map.tree.arena(), map.tree.root_idx()),
        }
    }

    /// See [`SgMap::lower_bound`]/[`SgMap::upper_bound`]/[`SgMap::equal_range`].
    pub(crate) fn bounded(map: &'a SgMap<K, V>, front: Cursor, back: Cursor) -> Self {
        Iter {
            inner: NodeIter::bounded(map.tree.arena(), map.tree.root_idx(), front, back),
        }
    }
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|n| (&n.key, &n.val))
    }
}

impl<'a, K: Ord, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|n| (&n.key, &n.val))
    }
}

/// Mutable-value reference iterator, sorted by key. See
/// [`SgMap::iter_mut`](crate::SgMap::iter_mut).
///
/// Built eagerly from an arena-order pass re-sorted by key -- the arena's XOR-linked nodes
/// don't support a borrow-checker-provable bidirectional mutable walk without `unsafe`, so this
/// crate pays an `O(n log n)` sort once per `iter_mut()` call instead.
pub struct IterMut<'a, K, V> {
    inner: VecIntoIter<(&'a K, &'a mut V)>,
}

impl<'a, K: Ord, V> IterMut<'a, K, V> {
    pub(crate) fn new(map: &'a mut SgMap<K, V>) -> Self {
        let mut items: Vec<(&'a K, &'a mut V)> = map
            .tree
            .arena_mut()
            .iter_mut()
            .map(|n| (&n.key, &mut n.val))
            .collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        IterMut {
            inner: items.into_iter(),
        }
    }
}

impl<'a, K: Ord, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, K: Ord, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Consuming iterator, sorted by key. See [`IntoIterator`] for [`SgMap`](crate::SgMap).
pub struct IntoIter<K: Ord, V> {
    tree: UniqueTree<K, V>,
}

impl<K: Ord, V> IntoIter<K, V> {
    pub(crate) fn new(map: SgMap<K, V>) -> Self {
        IntoIter { tree: map.tree }
    }
}

impl<K: Ord, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<K: Ord, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop_last()
    }
}

impl<K: Ord, V> ExactSizeIterator for IntoIter<K, V> {}

/// A view into a single entry in a map, from [`SgMap::entry`](crate::SgMap::entry). Translated
/// from `BTreeMap`'s `Entry`, since `std::map::operator[]`'s insert-default-on-miss behavior
/// needs `&mut self` and so can't be expressed through Rust's `Index` alone. The teacher carries
/// a same-named but unimplemented `entry.rs` stub (unreachable from its own `lib.rs`); this is
/// built out from scratch in the same shape.
pub enum Entry<'a, K: Ord, V> {
    /// The key is present; see [`OccupiedEntry`].
    Occupied(OccupiedEntry<'a, K, V>),
    /// The key is absent; see [`VacantEntry`].
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K: Ord, V> Entry<'a, K, V> {
    /// A reference to this entry's key, present whether the entry is occupied or vacant.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(e) => e.key(),
            Entry::Vacant(e) => e.key(),
        }
    }

    /// Applies `f` to the value if occupied, leaving the entry otherwise untouched.
    pub fn and_modify<F: FnOnce(&mut V)>(self, f: F) -> Self {
        match self {
            Entry::Occupied(mut e) => {
                f(e.get_mut());
                Entry::Occupied(e)
            }
            Entry::Vacant(e) => Entry::Vacant(e),
        }
    }
}

impl<'a, K: Ord + Clone, V> Entry<'a, K, V> {
    /// Ensures a value is present, inserting `default` if the entry is vacant, then returns a
    /// mutable reference to the value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default),
        }
    }

    /// Like [`or_insert`](Self::or_insert), but the default is computed lazily (only on a miss).
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default()),
        }
    }

    /// Like [`or_insert_with`](Self::or_insert_with), but the closure also sees the key.
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let v = default(&e.key);
                e.insert(v)
            }
        }
    }
}

impl<'a, K: Ord + Clone, V: Default> Entry<'a, K, V> {
    /// Ensures a value is present, inserting `V::default()` if the entry is vacant.
    pub fn or_default(self) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(V::default()),
        }
    }
}

/// See [`Entry::Occupied`].
pub struct OccupiedEntry<'a, K: Ord, V> {
    pub(crate) map: &'a mut SgMap<K, V>,
    pub(crate) key: K,
}

impl<'a, K: Ord, V> OccupiedEntry<'a, K, V> {
    /// Reference to this entry's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Reference to this entry's value.
    pub fn get(&self) -> &V {
        self.map.get(&self.key).expect("occupied entry's key vanished")
    }

    /// Mutable reference to this entry's value, borrowed for the entry's own lifetime.
    pub fn get_mut(&mut self) -> &mut V {
        self.map.get_mut(&self.key).expect("occupied entry's key vanished")
    }

    /// Converts into a mutable reference tied to the map's own lifetime.
    pub fn into_mut(self) -> &'a mut V {
        self.map.get_mut(&self.key).expect("occupied entry's key vanished")
    }

    /// Replaces the value, returning the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry, returning its value.
    pub fn remove(self) -> V {
        self.map.remove(&self.key).expect("occupied entry's key vanished")
    }
}

/// See [`Entry::Vacant`].
pub struct VacantEntry<'a, K: Ord, V> {
    pub(crate) map: &'a mut SgMap<K, V>,
    pub(crate) key: K,
}

impl<'a, K: Ord, V> VacantEntry<'a, K, V> {
    /// Reference to this entry's (not-yet-inserted) key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Inserts a value, returning a mutable reference tied to the map's own lifetime.
    ///
    /// Requires `K: Clone`: the engine's insert doesn't hand back a cursor to the freshly
    /// inserted node, so the key is cloned to re-find it by a second (cheap, `O(log n)`)
    /// lookup rather than threading an index back out through `SgMap::insert`'s public signature.
    pub fn insert(self, value: V) -> &'a mut V
    where
        K: Clone,
    {
        let key_for_lookup = self.key.clone();
        self.map.insert(self.key, value);
        self.map
            .get_mut(&key_for_lookup)
            .expect("just-inserted key vanished")
    }
}

//! `UniqueTree`: the unique-key engine backing `SgMap`/`SgSet`.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem;
use smallvec::SmallVec;

use super::arena::Arena;
use super::build;
use super::erase::{self, Slot};
use super::error::SgError;
use super::link::{Idx, Link};
use super::node::{TreeNode, UNode};
use super::walk;

/// Ancestor path scratch buffer. Sized for a comfortably balanced tree of a few million
/// elements; deeper paths just spill to the heap, same tradeoff the teacher's `IdxVec` makes
/// with `smallvec`.
type Path = SmallVec<[Idx; 32]>;

pub struct UniqueTree<K, V> {
    arena: Arena<UNode<K, V>>,
    root: Option<Idx>,
    len: usize,
    rebal_cnt: usize,
}

impl<K: Ord, V> UniqueTree<K, V> {
    pub fn new() -> Self {
        UniqueTree {
            arena: Arena::new(),
            root: None,
            len: 0,
            rebal_cnt: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn rebal_cnt(&self) -> usize {
        self.rebal_cnt
    }

    pub fn height(&self) -> usize {
        walk::height(&self.arena, self.root, None)
    }

    fn find_cursor<Q>(&self, key: &Q) -> walk::Cursor
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root;
        let mut parent = None;
        while let Some(n) = node {
            match key.cmp(self.arena.hard_get(n).key.borrow()) {
                Ordering::Equal => return (Some(n), parent),
                Ordering::Less => {
                    let l = self.arena.hard_get(n).link_l().decode(parent);
                    parent = Some(n);
                    node = l;
                }
                Ordering::Greater => {
                    let r = self.arena.hard_get(n).link_r().decode(parent);
                    parent = Some(n);
                    node = r;
                }
            }
        }
        (None, parent)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (n, _) = self.find_cursor(key);
        n.map(|n| &self.arena.hard_get(n).val)
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (n, _) = self.find_cursor(key);
        n.map(|n| {
            let node = self.arena.hard_get(n);
            (&node.key, &node.val)
        })
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (n, _) = self.find_cursor(key);
        n.map(move |n| &mut self.arena.hard_get_mut(n).val)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_cursor(key).0.is_some()
    }

    /// Cursor to the first entry with key `>= key`.
    pub fn lower_bound_cursor<Q>(&self, key: &Q) -> walk::Cursor
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root;
        let mut parent = None;
        let mut candidate = walk::END;
        while let Some(n) = node {
            match key.cmp(self.arena.hard_get(n).key.borrow()) {
                Ordering::Equal => return (Some(n), parent),
                Ordering::Less => {
                    candidate = (Some(n), parent);
                    let l = self.arena.hard_get(n).link_l().decode(parent);
                    parent = Some(n);
                    node = l;
                }
                Ordering::Greater => {
                    let r = self.arena.hard_get(n).link_r().decode(parent);
                    parent = Some(n);
                    node = r;
                }
            }
        }
        candidate
    }

    /// Cursor to the first entry with key `> key`.
    pub fn upper_bound_cursor<Q>(&self, key: &Q) -> walk::Cursor
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root;
        let mut parent = None;
        let mut candidate = walk::END;
        while let Some(n) = node {
            match key.cmp(self.arena.hard_get(n).key.borrow()) {
                Ordering::Less => {
                    candidate = (Some(n), parent);
                    let l = self.arena.hard_get(n).link_l().decode(parent);
                    parent = Some(n);
                    node = l;
                }
                Ordering::Equal | Ordering::Greater => {
                    let r = self.arena.hard_get(n).link_r().decode(parent);
                    parent = Some(n);
                    node = r;
                }
            }
        }
        candidate
    }

    /// `(lower, upper)` cursor pair spanning every entry matching `key` (0 or 1 of them, since
    /// keys are unique): `lower` is the match itself (or the first entry past where it would
    /// go), `upper` is `lower`'s in-order successor.
    pub fn equal_range_cursors<Q>(&self, key: &Q) -> (walk::Cursor, walk::Cursor)
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let lower = self.find_cursor(key);
        if lower.0.is_none() {
            return (lower, lower);
        }
        let upper = walk::next(&self.arena, lower, self.root);
        (lower, upper)
    }

    pub fn last_cursor(&self) -> walk::Cursor {
        match self.root {
            Some(r) => walk::last(&self.arena, r, None),
            None => walk::END,
        }
    }

    /// Insert `key`/`val`. Returns the previous value if the key was already present (both the
    /// key and value are overwritten in that case, matching `BTreeMap::insert`).
    pub fn insert(&mut self, key: K, val: V) -> Option<V> {
        self.try_insert_inner(key, val)
            .expect("allocation failure in infallible insert; use try_insert to handle it")
    }

    /// Fallible counterpart of [`insert`](Self::insert): surfaces allocator exhaustion instead
    /// of aborting.
    pub fn try_insert(&mut self, key: K, val: V) -> Result<Option<V>, SgError> {
        self.try_insert_inner(key, val)
    }

    fn try_insert_inner(&mut self, key: K, val: V) -> Result<Option<V>, SgError> {
        let Some(root) = self.root else {
            let idx = self.arena.try_add(UNode::new(key, val))?;
            self.root = Some(idx);
            self.len = 1;
            return Ok(None);
        };

        let mut path: Path = Path::new();
        let mut node = root;
        let mut parent: Option<Idx> = None;

        loop {
            path.push(node);
            match key.cmp(&self.arena.hard_get(node).key) {
                Ordering::Equal => {
                    let n = self.arena.hard_get_mut(node);
                    n.key = key;
                    return Ok(Some(mem::replace(&mut n.val, val)));
                }
                Ordering::Less => {
                    match self.arena.hard_get(node).link_l().decode(parent) {
                        Some(l) => {
                            parent = Some(node);
                            node = l;
                        }
                        None => {
                            let new_idx = self.arena.try_add(UNode::new(key, val))?;
                            self.arena
                                .hard_get_mut(new_idx)
                                .set_link_l(Link::encode(None, Some(node)));
                            self.arena
                                .hard_get_mut(new_idx)
                                .set_link_r(Link::encode(None, Some(node)));
                            let mut l = self.arena.hard_get(node).link_l();
                            l.apply_delta(None, Some(new_idx));
                            self.arena.hard_get_mut(node).set_link_l(l);
                            path.push(new_idx);
                            break;
                        }
                    }
                }
                Ordering::Greater => {
                    match self.arena.hard_get(node).link_r().decode(parent) {
                        Some(r) => {
                            parent = Some(node);
                            node = r;
                        }
                        None => {
                            let new_idx = self.arena.try_add(UNode::new(key, val))?;
                            self.arena
                                .hard_get_mut(new_idx)
                                .set_link_l(Link::encode(None, Some(node)));
                            self.arena
                                .hard_get_mut(new_idx)
                                .set_link_r(Link::encode(None, Some(node)));
                            let mut r = self.arena.hard_get(node).link_r();
                            r.apply_delta(None, Some(new_idx));
                            self.arena.hard_get_mut(node).set_link_r(r);
                            path.push(new_idx);
                            break;
                        }
                    }
                }
            }
        }

        self.len += 1;
        if build::rebuild_if_needed(&mut self.arena, &mut self.root, &path, self.len) {
            self.rebal_cnt += 1;
        }
        Ok(None)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry_by(key).map(|(_, v)| v)
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry_by(key)
    }

    fn remove_entry_by<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (victim, parent) = self.find_cursor(key);
        let victim = victim?;
        Some(self.remove_at(victim, parent))
    }

    /// Splice out a node already located by a cursor, using the victim's own stored key
    /// (rather than any externally-borrowed form of it) to learn which side of `parent` it
    /// hangs from. This is what lets `pop_first`/`pop_last` share the exact same splice path
    /// as keyed removal without re-deriving a lookup key.
    fn remove_at(&mut self, victim: Idx, parent: Option<Idx>) -> (K, V) {
        let slot = match parent {
            None => Slot::Root,
            Some(p) => {
                if self.arena.hard_get(victim).key < self.arena.hard_get(p).key {
                    Slot::Left(p)
                } else {
                    Slot::Right(p)
                }
            }
        };
        erase::splice(&mut self.arena, &mut self.root, victim, parent, slot);
        let node = self.arena.hard_remove(victim);
        self.len -= 1;
        (node.key, node.val)
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let root = self.root?;
        let (n, _) = walk::first(&self.arena, root, None);
        n.map(|n| {
            let node = self.arena.hard_get(n);
            (&node.key, &node.val)
        })
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let root = self.root?;
        let (n, _) = walk::last(&self.arena, root, None);
        n.map(|n| {
            let node = self.arena.hard_get(n);
            (&node.key, &node.val)
        })
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        let (n, p) = walk::first(&self.arena, root, None);
        Some(self.remove_at(n?, p))
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        let (n, p) = walk::last(&self.arena, root, None);
        Some(self.remove_at(n?, p))
    }

    pub fn root_idx(&self) -> Option<Idx> {
        self.root
    }

    pub fn arena(&self) -> &Arena<UNode<K, V>> {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena<UNode<K, V>> {
        &mut self.arena
    }
}

impl<K: Ord, V> Default for UniqueTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for UniqueTree<K, V> {
    fn clone(&self) -> Self {
        let mut out = UniqueTree::new();
        let mut cursor = self.root.map(|r| walk::first(&self.arena, r, None)).unwrap_or(walk::END);
        while let Some(n) = cursor.0 {
            let node = self.arena.hard_get(n);
            out.insert(node.key.clone(), node.val.clone());
            cursor = walk::next(&self.arena, cursor, self.root);
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sorted_keys<K: Ord + Clone, V>(t: &UniqueTree<K, V>) -> Vec<K> {
        let mut out = Vec::new();
        let mut cursor = t.root.map(|r| walk::first(&t.arena, r, None)).unwrap_or(walk::END);
        while let Some(n) = cursor.0 {
            out.push(t.arena.hard_get(n).key.clone());
            cursor = walk::next(&t.arena, cursor, t.root);
        }
        out
    }

    #[test]
    fn insert_sequential_stays_balanced() {
        let mut t = UniqueTree::new();
        for i in 0..1023 {
            t.insert(i, i);
        }
        assert_eq!(t.len(), 1023);
        assert_eq!(sorted_keys(&t), (0..1023).collect::<Vec<_>>());
        // A perfectly balanced 1023-node tree has height 10; weight-balance keeps us close.
        assert!(t.height() <= 15, "height {} too large for 1023 elements", t.height());
    }

    #[test]
    fn insert_overwrites_value() {
        let mut t = UniqueTree::new();
        assert_eq!(t.insert(1, "a"), None);
        assert_eq!(t.insert(1, "b"), Some("a"));
        assert_eq!(t.get(&1), Some(&"b"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn remove_and_reinsert() {
        let mut t = UniqueTree::new();
        for i in 0..50 {
            t.insert(i, i * 2);
        }
        for i in (0..50).step_by(2) {
            assert_eq!(t.remove(&i), Some(i * 2));
        }
        assert_eq!(t.len(), 25);
        assert_eq!(sorted_keys(&t), (1..50).step_by(2).collect::<Vec<_>>());
    }

    #[test]
    fn erase_to_empty() {
        let mut t = UniqueTree::new();
        for i in 0..10 {
            t.insert(i, ());
        }
        for i in 0..10 {
            assert!(t.remove(&i).is_some());
        }
        assert!(t.is_empty());
        assert!(t.root.is_none());
    }

    #[test]
    fn adversarial_power_of_two_inserts() {
        let mut t = UniqueTree::new();
        let mut keys: Vec<i32> = Vec::new();
        let mut k = 1;
        for _ in 0..10 {
            t.insert(k, ());
            keys.push(k);
            k *= 2;
        }
        keys.sort_unstable();
        assert_eq!(sorted_keys(&t), keys);
        assert!(t.height() <= 10);
    }
}

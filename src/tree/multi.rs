//! `MultiTree`: the bucketed multi-key engine backing `SgMultiSet`/`SgMultiMap`.
//!
//! Structurally identical to `UniqueTree` -- same arena, same link codec, same
//! scapegoat/rebuild machinery -- except an equal-key hit appends to the hit node's bucket
//! instead of being rejected (Open Question 2: bucket order is insertion order).

use alloc::vec::Vec;
use core::cmp::Ordering;
use smallvec::SmallVec;

use super::arena::Arena;
use super::build;
use super::erase::{self, Slot};
use super::error::SgError;
use super::link::{Idx, Link};
use super::node::{MNode, TreeNode};
use super::walk;

type Path = SmallVec<[Idx; 32]>;

pub struct MultiTree<K, V> {
    arena: Arena<MNode<K, V>>,
    root: Option<Idx>,
    len: usize,
    rebal_cnt: usize,
}

impl<K: Ord + Clone, V> MultiTree<K, V> {
    pub fn new() -> Self {
        MultiTree {
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

    pub fn root_idx(&self) -> Option<Idx> {
        self.root
    }

    pub fn arena(&self) -> &Arena<MNode<K, V>> {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena<MNode<K, V>> {
        &mut self.arena
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

    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find_cursor(key).0 {
            Some(n) => self.arena.hard_get(n).bucket.len(),
            None => 0,
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_cursor(key).0.is_some()
    }

    /// Cursor to the node holding the first bucket with key `>= key`.
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

    /// Cursor to the node holding the first bucket with key `> key`.
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

    /// `(lower, upper)` cursor pair spanning the whole bucket matching `key`: `lower` is the
    /// bucket's own node, `upper` is that node's in-order successor.
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

    pub fn get<Q>(&self, key: &Q) -> Option<&[(K, V)]>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_cursor(key).0.map(|n| &self.arena.hard_get(n).bucket[..])
    }

    /// Insert a `key`/`val` pair. Always succeeds; always returns an index usable to recover
    /// an iterator to the freshly-appended entry.
    pub fn insert(&mut self, key: K, val: V) -> Idx {
        self.try_insert_inner(key, val)
            .expect("allocation failure in infallible insert; use try_insert to handle it")
    }

    pub fn try_insert(&mut self, key: K, val: V) -> Result<Idx, SgError> {
        self.try_insert_inner(key, val)
    }

    fn try_insert_inner(&mut self, key: K, val: V) -> Result<Idx, SgError> {
        let Some(root) = self.root else {
            let idx = self.arena.try_add(MNode::new(key, val))?;
            self.root = Some(idx);
            self.len = 1;
            return Ok(idx);
        };

        let mut path: Path = Path::new();
        let mut node = root;
        let mut parent: Option<Idx> = None;

        loop {
            path.push(node);
            match key.cmp(&self.arena.hard_get(node).key) {
                Ordering::Equal => {
                    self.arena.hard_get_mut(node).bucket.push((key, val));
                    self.len += 1;
                    // No structural change: no scapegoat check, per SPEC_FULL.md section 4.3.
                    return Ok(node);
                }
                Ordering::Less => match self.arena.hard_get(node).link_l().decode(parent) {
                    Some(l) => {
                        parent = Some(node);
                        node = l;
                    }
                    None => {
                        let new_idx = self.arena.try_add(MNode::new(key, val))?;
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
                        self.len += 1;
                        if build::rebuild_if_needed(&mut self.arena, &mut self.root, &path, self.len) {
                            self.rebal_cnt += 1;
                        }
                        return Ok(new_idx);
                    }
                },
                Ordering::Greater => match self.arena.hard_get(node).link_r().decode(parent) {
                    Some(r) => {
                        parent = Some(node);
                        node = r;
                    }
                    None => {
                        let new_idx = self.arena.try_add(MNode::new(key, val))?;
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
                        self.len += 1;
                        if build::rebuild_if_needed(&mut self.arena, &mut self.root, &path, self.len) {
                            self.rebal_cnt += 1;
                        }
                        return Ok(new_idx);
                    }
                },
            }
        }
    }

    /// Remove every entry whose key matches, returning how many were removed.
    pub fn remove_all<Q>(&mut self, key: &Q) -> usize
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (victim, parent) = self.find_cursor(key);
        let Some(victim) = victim else { return 0 };
        self.splice_out(victim, parent).bucket.len()
    }

    /// Remove every entry whose key matches, returning the removed bucket.
    pub fn remove_all_entries<Q>(&mut self, key: &Q) -> Vec<(K, V)>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (victim, parent) = self.find_cursor(key);
        match victim {
            Some(victim) => self.splice_out(victim, parent).bucket,
            None => Vec::new(),
        }
    }

    fn splice_out(&mut self, victim: Idx, parent: Option<Idx>) -> MNode<K, V> {
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
        self.len -= node.bucket.len();
        node
    }

    pub fn first_bucket(&self) -> Option<&[(K, V)]> {
        let root = self.root?;
        let (n, _) = walk::first(&self.arena, root, None);
        n.map(|n| &self.arena.hard_get(n).bucket[..])
    }

    pub fn last_bucket(&self) -> Option<&[(K, V)]> {
        let root = self.root?;
        let (n, _) = walk::last(&self.arena, root, None);
        n.map(|n| &self.arena.hard_get(n).bucket[..])
    }

    /// Remove and return the whole first bucket (lowest key).
    pub fn pop_first_bucket(&mut self) -> Option<(K, Vec<V>)> {
        let root = self.root?;
        let (n, p) = walk::first(&self.arena, root, None);
        let n = n?;
        let key = self.arena.hard_get(n).key.clone();
        let node = self.splice_out(n, p);
        Some((key, node.bucket.into_iter().map(|(_, v)| v).collect()))
    }

    /// Remove and return the whole last bucket (highest key).
    pub fn pop_last_bucket(&mut self) -> Option<(K, Vec<V>)> {
        let root = self.root?;
        let (n, p) = walk::last(&self.arena, root, None);
        let n = n?;
        let key = self.arena.hard_get(n).key.clone();
        let node = self.splice_out(n, p);
        Some((key, node.bucket.into_iter().map(|(_, v)| v).collect()))
    }
}

impl<K: Ord + Clone, V> Default for MultiTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for MultiTree<K, V> {
    fn clone(&self) -> Self {
        let mut out = MultiTree::new();
        let mut cursor = self.root.map(|r| walk::first(&self.arena, r, None)).unwrap_or(walk::END);
        while let Some(n) = cursor.0 {
            for (k, v) in &self.arena.hard_get(n).bucket {
                out.insert(k.clone(), v.clone());
            }
            cursor = walk::next(&self.arena, cursor, self.root);
        }
        out
    }
}

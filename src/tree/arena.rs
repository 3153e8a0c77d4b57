//! Generic arena allocator backing every tree engine in this crate.
//!
//! Unlike the teacher's `NodeArena`, which is a const-generic, stack-resident
//! `SmallVec<[OptNode<K, V>; MAX_ELEMS]>` with a hard capacity, this arena is a plain
//! `Vec`-backed allocator with no fixed capacity (see Open Question 3 in `DESIGN.md`): there
//! is no embedded/`no_std`-fixed-capacity target here, so there's nothing for a `max_size` to
//! usefully report beyond "bounded only by available memory". The swap-to-back-then-pop
//! removal strategy and the free-list reuse pattern are kept as-is, since both remain the
//! right way to keep other nodes' indices stable across a removal.

use alloc::vec::Vec;
use smallvec::SmallVec;

use super::link::Idx;

type FreeList = SmallVec<[Idx; 8]>;

/// A simple growable arena allocator, generic over the node payload type `N`.
pub struct Arena<N> {
    slots: Vec<Option<N>>,
    free_list: FreeList,
}

impl<N> Arena<N> {
    /// Constructor.
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_list: FreeList::new(),
        }
    }

    /// Add a node to the arena, reusing a freed slot if one exists, and return its index.
    pub fn add(&mut self, node: N) -> Idx {
        match self.free_list.pop() {
            Some(free_idx) => {
                debug_assert!(
                    self.slots[free_idx].is_none(),
                    "internal invariant failed: overwrite of allocated node"
                );
                self.slots[free_idx] = Some(node);
                free_idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Attempt to add a node, surfacing allocation failure instead of aborting.
    pub fn try_add(&mut self, node: N) -> Result<Idx, super::error::SgError> {
        if self.free_list.is_empty() {
            self.slots
                .try_reserve(1)
                .map_err(|_| super::error::SgError::AllocFailed)?;
        }
        Ok(self.add(node))
    }

    /// Remove the node at `idx`, returning it. Preserves every other index's validity.
    pub fn remove(&mut self, idx: Idx) -> Option<N> {
        debug_assert!(
            idx < self.slots.len(),
            "API misuse: requested removal past last index"
        );
        if idx >= self.slots.len() {
            return None;
        }

        // Move the target to the back (swap with a `None` placeholder), then pop it off, so
        // every other slot's index is unaffected.
        self.slots.push(None);
        let len = self.slots.len();
        self.slots.swap(idx, len - 1);
        self.free_list.push(idx);

        match self.slots.pop() {
            Some(Some(node)) => Some(node),
            Some(None) => {
                debug_assert!(false, "internal invariant failed: removal popped an empty node");
                None
            }
            None => None,
        }
    }

    /// Remove a node at a known-good index. Panics if the index is invalid.
    pub fn hard_remove(&mut self, idx: Idx) -> N {
        self.remove(idx)
            .unwrap_or_else(|| panic!("internal invariant failed: removal of invalid index {idx}"))
    }

    /// Get a reference to a node.
    pub fn get(&self, idx: Idx) -> Option<&N> {
        match self.slots.get(idx) {
            Some(Some(node)) => Some(node),
            _ => None,
        }
    }

    /// Get a mutable reference to a node.
    pub fn get_mut(&mut self, idx: Idx) -> Option<&mut N> {
        match self.slots.get_mut(idx) {
            Some(Some(node)) => Some(node),
            _ => None,
        }
    }

    /// Get a reference to a node at a known-good index. Panics if invalid.
    pub fn hard_get(&self, idx: Idx) -> &N {
        self.get(idx)
            .unwrap_or_else(|| panic!("internal invariant failed: retrieval of invalid index {idx}"))
    }

    /// Get a mutable reference to a node at a known-good index. Panics if invalid.
    pub fn hard_get_mut(&mut self, idx: Idx) -> &mut N {
        self.get_mut(idx)
            .unwrap_or_else(|| panic!("internal invariant failed: mutable retrieval of invalid index {idx}"))
    }

    /// Number of occupied slots (not counting freed-but-unreused slots).
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// True if the arena holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every node, clearing the arena for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }

    /// Mutable iterator over every live node, in arena storage order (not BST order).
    /// Used by `*_types::IterMut` family, which re-sorts by key since storage order doesn't
    /// reflect tree order -- this is the safe alternative to the unsafe pointer-indexing an
    /// XOR-linked mutable walk would otherwise need.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut N> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_and_remove() {
        let mut arena: Arena<i32> = Arena::new();
        let a = arena.add(1);
        let b = arena.add(2);
        let c = arena.add(3);
        assert_eq!((a, b, c), (0, 1, 2));

        let removed = arena.remove(b).unwrap();
        assert_eq!(removed, 2);
        assert!(arena.get(b).is_none());

        let d = arena.add(4);
        assert_eq!(d, 1, "freed slot should be reused");

        let e = arena.add(5);
        assert_eq!(e, 3);
    }

    #[test]
    fn get_mut() {
        let mut arena: Arena<&str> = Arena::new();
        let idx = arena.add("a");
        *arena.get_mut(idx).unwrap() = "b";
        assert_eq!(*arena.get(idx).unwrap(), "b");
    }

    #[test]
    #[should_panic]
    fn hard_get_panics_on_invalid() {
        let arena: Arena<i32> = Arena::new();
        arena.hard_get(0);
    }

    #[test]
    fn len_accounts_for_free_list() {
        let mut arena: Arena<i32> = Arena::new();
        let a = arena.add(1);
        arena.add(2);
        assert_eq!(arena.len(), 2);
        arena.remove(a);
        assert_eq!(arena.len(), 1);
    }
}

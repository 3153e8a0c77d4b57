//! Traversal primitives shared by every engine: `first`/`last`/`next`/`prev`, structural
//! `size`/`height`, and the `find`/`equal_range` descent. Generic over any `N: TreeNode` plus
//! its backing `Arena<N>`.
//!
//! All of these operate on *cursors* -- `(node, other)` pairs, where `other` is whichever
//! neighbour of `node` is already known (the parent, when descending; one of `node`'s own
//! children, when climbing back up after `next`/`prev`). See `tree::link` for why a single
//! neighbour is enough to recover the rest. Every primitive returns a full cursor rather than
//! a bare index, precisely so callers never need to separately re-derive a parent.

use alloc::vec::Vec;
use core::cmp::Ordering;

use super::arena::Arena;
use super::link::Idx;
use super::node::TreeNode;

/// A position in the tree: the node itself (`None` means past-the-end/before-the-start), and
/// the neighbour the cursor arrived from (the node's effective parent, from the traversal's
/// point of view).
pub type Cursor = (Option<Idx>, Option<Idx>);

/// The empty/past-the-end cursor.
pub const END: Cursor = (None, None);

#[inline]
fn left<N: TreeNode>(arena: &Arena<N>, node: Idx, other: Option<Idx>) -> Option<Idx> {
    arena.hard_get(node).link_l().decode(other)
}

#[inline]
fn right<N: TreeNode>(arena: &Arena<N>, node: Idx, other: Option<Idx>) -> Option<Idx> {
    arena.hard_get(node).link_r().decode(other)
}

/// Leftmost descendant of `node` (itself included if it has no left child), as a cursor.
pub fn first<N: TreeNode>(arena: &Arena<N>, node: Idx, parent: Option<Idx>) -> Cursor {
    let mut n = node;
    let mut p = parent;
    loop {
        match left(arena, n, p) {
            Some(l) => {
                p = Some(n);
                n = l;
            }
            None => return (Some(n), p),
        }
    }
}

/// Rightmost descendant of `node` (itself included if it has no right child), as a cursor.
pub fn last<N: TreeNode>(arena: &Arena<N>, node: Idx, parent: Option<Idx>) -> Cursor {
    let mut n = node;
    let mut p = parent;
    loop {
        match right(arena, n, p) {
            Some(r) => {
                p = Some(n);
                n = r;
            }
            None => return (Some(n), p),
        }
    }
}

/// In-order successor. `root` is needed to resolve `next` of the past-the-end cursor, which
/// wraps to the first node.
pub fn next<N: TreeNode>(arena: &Arena<N>, cursor: Cursor, root: Option<Idx>) -> Cursor {
    let (node, other) = cursor;
    let node = match node {
        Some(n) => n,
        None => {
            return match root {
                Some(r) => first(arena, r, None),
                None => END,
            };
        }
    };

    if let Some(r) = right(arena, node, other) {
        return first(arena, r, Some(node));
    }

    // Climb while we arrived from our ancestor's right side.
    let mut n = node;
    let mut p = other;
    while let Some(pp) = p {
        let grand = decode_parent(arena, pp, n);
        if right(arena, pp, grand) == Some(n) {
            n = pp;
            p = grand;
        } else {
            return (Some(pp), grand);
        }
    }
    END
}

/// In-order predecessor. Mirrors `next`; `prev` of the past-the-end cursor is the last node.
pub fn prev<N: TreeNode>(arena: &Arena<N>, cursor: Cursor, root: Option<Idx>) -> Cursor {
    let (node, other) = cursor;
    let node = match node {
        Some(n) => n,
        None => {
            return match root {
                Some(r) => last(arena, r, None),
                None => END,
            };
        }
    };

    if let Some(l) = left(arena, node, other) {
        return last(arena, l, Some(node));
    }

    let mut n = node;
    let mut p = other;
    while let Some(pp) = p {
        let grand = decode_parent(arena, pp, n);
        if left(arena, pp, grand) == Some(n) {
            n = pp;
            p = grand;
        } else {
            return (Some(pp), grand);
        }
    }
    END
}

/// Given that `child` is one of `node`'s two children, recover `node`'s own parent. Tries both
/// of `node`'s link words decoded against `child`; exactly one yields `child` back out when
/// used to decode the matching side, confirming which candidate is the real parent.
fn decode_parent<N: TreeNode>(arena: &Arena<N>, node: Idx, child: Idx) -> Option<Idx> {
    let n = arena.hard_get(node);
    let cand_l = n.link_l().decode(Some(child));
    if left(arena, node, cand_l) == Some(child) {
        return cand_l;
    }
    let cand_r = n.link_r().decode(Some(child));
    debug_assert_eq!(right(arena, node, cand_r), Some(child));
    cand_r
}

/// Structural subtree size (node count, not bucket-entry count), via an iterative worklist.
pub fn size<N: TreeNode>(arena: &Arena<N>, node: Option<Idx>, parent: Option<Idx>) -> usize {
    let mut count = 0usize;
    let mut work: Vec<(Idx, Option<Idx>)> = Vec::new();
    if let Some(n) = node {
        work.push((n, parent));
    }
    while let Some((n, p)) = work.pop() {
        count += 1;
        if let Some(l) = left(arena, n, p) {
            work.push((l, Some(n)));
        }
        if let Some(r) = right(arena, n, p) {
            work.push((r, Some(n)));
        }
    }
    count
}

/// Structural subtree height (1 for a single node, 0 for an empty tree).
pub fn height<N: TreeNode>(arena: &Arena<N>, node: Option<Idx>, parent: Option<Idx>) -> usize {
    let mut max_height = 0usize;
    let mut work: Vec<(Idx, Option<Idx>, usize)> = Vec::new();
    if let Some(n) = node {
        work.push((n, parent, 1));
    }
    while let Some((n, p, depth)) = work.pop() {
        max_height = max_height.max(depth);
        if let Some(l) = left(arena, n, p) {
            work.push((l, Some(n), depth + 1));
        }
        if let Some(r) = right(arena, n, p) {
            work.push((r, Some(n), depth + 1));
        }
    }
    max_height
}

/// Descend by key order, returning a cursor to the matching node (or `END` on a miss, with the
/// second field still carrying the node whose empty child slot would receive the key).
pub fn find<N: TreeNode>(arena: &Arena<N>, root: Option<Idx>, key: &N::Key) -> Cursor {
    let mut node = root;
    let mut parent = None;
    while let Some(n) = node {
        match key.cmp(arena.hard_get(n).key()) {
            Ordering::Equal => return (Some(n), parent),
            Ordering::Less => {
                let l = left(arena, n, parent);
                parent = Some(n);
                node = l;
            }
            Ordering::Greater => {
                let r = right(arena, n, parent);
                parent = Some(n);
                node = r;
            }
        }
    }
    (None, parent)
}

/// Cursor to the first node whose key is `>= key` (or `END` if every key is smaller).
pub fn lower_bound<N: TreeNode>(arena: &Arena<N>, root: Option<Idx>, key: &N::Key) -> Cursor {
    let mut node = root;
    let mut parent = None;
    let mut candidate = END;
    while let Some(n) = node {
        match key.cmp(arena.hard_get(n).key()) {
            Ordering::Equal => return (Some(n), parent),
            Ordering::Less => {
                candidate = (Some(n), parent);
                let l = left(arena, n, parent);
                parent = Some(n);
                node = l;
            }
            Ordering::Greater => {
                let r = right(arena, n, parent);
                parent = Some(n);
                node = r;
            }
        }
    }
    candidate
}

/// Cursor to the first node whose key is `> key` (or `END` if no key is larger).
pub fn upper_bound<N: TreeNode>(arena: &Arena<N>, root: Option<Idx>, key: &N::Key) -> Cursor {
    let mut node = root;
    let mut parent = None;
    let mut candidate = END;
    while let Some(n) = node {
        match key.cmp(arena.hard_get(n).key()) {
            Ordering::Less => {
                candidate = (Some(n), parent);
                let l = left(arena, n, parent);
                parent = Some(n);
                node = l;
            }
            Ordering::Equal | Ordering::Greater => {
                let r = right(arena, n, parent);
                parent = Some(n);
                node = r;
            }
        }
    }
    candidate
}

/// Lower/upper bound cursors for `key`. Since duplicate keys collapse into a single node's
/// bucket in every engine here, `[lower, upper)` spans at most one node; `upper` is that
/// node's in-order successor.
pub fn equal_range<N: TreeNode>(arena: &Arena<N>, root: Option<Idx>, key: &N::Key) -> (Cursor, Cursor) {
    let mut node = root;
    let mut parent = None;
    let mut last_left: Cursor = END;

    while let Some(n) = node {
        match key.cmp(arena.hard_get(n).key()) {
            Ordering::Equal => {
                let lower = (Some(n), parent);
                let upper = match right(arena, n, parent) {
                    Some(r) => first(arena, r, Some(n)),
                    None => last_left,
                };
                return (lower, upper);
            }
            Ordering::Less => {
                last_left = (Some(n), parent);
                let l = left(arena, n, parent);
                parent = Some(n);
                node = l;
            }
            Ordering::Greater => {
                let r = right(arena, n, parent);
                parent = Some(n);
                node = r;
            }
        }
    }
    (END, END)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tree::arena::Arena;
    use crate::tree::link::Link;
    use crate::tree::node::{TreeNode, UNode};

    /// Build a tiny fixed tree by hand to exercise traversal without depending on insert:
    ///
    /// ```text
    ///        2
    ///       / \
    ///      1   4
    ///         / \
    ///        3   5
    /// ```
    fn fixture() -> (Arena<UNode<i32, ()>>, Idx) {
        let mut arena = Arena::new();
        let n2 = arena.add(UNode::new(2, ()));
        let n1 = arena.add(UNode::new(1, ()));
        let n4 = arena.add(UNode::new(4, ()));
        let n3 = arena.add(UNode::new(3, ()));
        let n5 = arena.add(UNode::new(5, ()));

        arena.get_mut(n2).unwrap().set_link_l(Link::encode(Some(n1), None));
        arena.get_mut(n2).unwrap().set_link_r(Link::encode(Some(n4), None));
        arena.get_mut(n1).unwrap().set_link_l(Link::encode(None, Some(n2)));
        arena.get_mut(n1).unwrap().set_link_r(Link::encode(None, Some(n2)));
        arena.get_mut(n4).unwrap().set_link_l(Link::encode(Some(n3), Some(n2)));
        arena.get_mut(n4).unwrap().set_link_r(Link::encode(Some(n5), Some(n2)));
        arena.get_mut(n3).unwrap().set_link_l(Link::encode(None, Some(n4)));
        arena.get_mut(n3).unwrap().set_link_r(Link::encode(None, Some(n4)));
        arena.get_mut(n5).unwrap().set_link_l(Link::encode(None, Some(n4)));
        arena.get_mut(n5).unwrap().set_link_r(Link::encode(None, Some(n4)));

        (arena, n2)
    }

    #[test]
    fn first_last() {
        let (arena, root) = fixture();
        let (n, _) = first(&arena, root, None);
        assert_eq!(*arena.hard_get(n.unwrap()).key(), 1);
        let (n, _) = last(&arena, root, None);
        assert_eq!(*arena.hard_get(n.unwrap()).key(), 5);
    }

    #[test]
    fn full_in_order_walk() {
        let (arena, root) = fixture();
        let mut cursor = first(&arena, root, None);
        let mut seen = Vec::new();
        loop {
            match cursor.0 {
                Some(n) => {
                    seen.push(*arena.hard_get(n).key());
                    cursor = next(&arena, cursor, Some(root));
                }
                None => break,
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn full_reverse_walk() {
        let (arena, root) = fixture();
        let mut cursor = last(&arena, root, None);
        let mut seen = Vec::new();
        loop {
            match cursor.0 {
                Some(n) => {
                    seen.push(*arena.hard_get(n).key());
                    cursor = prev(&arena, cursor, Some(root));
                }
                None => break,
            }
        }
        assert_eq!(seen, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn find_hit_and_miss() {
        let (arena, root) = fixture();
        let (hit, _) = find(&arena, Some(root), &3);
        assert_eq!(*arena.hard_get(hit.unwrap()).key(), 3);
        let (miss, _) = find(&arena, Some(root), &10);
        assert!(miss.is_none());
    }

    #[test]
    fn size_and_height() {
        let (arena, root) = fixture();
        assert_eq!(size(&arena, Some(root), None), 5);
        assert_eq!(height(&arena, Some(root), None), 3);
    }
}

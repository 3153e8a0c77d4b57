//! Shared deletion splice, translated from the `erase(r0, n, p, pp, q)` routine common to
//! every container in the original implementation (`original_source/utils.hpp`). The three
//! cases -- no children, one child, two children -- all come down to rewriting a handful of
//! XOR link words; which words, and by full re-encode vs. delta-XOR, depends on whether a
//! node's *parent* changed (delta against both of its own link words) or one of its specific
//! *children* changed (delta against just the one link word on that side, or a full re-encode
//! if both terms of that word changed at once).

use super::arena::Arena;
use super::link::{Idx, Link};
use super::node::TreeNode;
use super::walk;

/// Where the pointer to a spliced-out (or spliced-in) node lives.
#[derive(Clone, Copy)]
pub enum Slot {
    Root,
    Left(Idx),
    Right(Idx),
}

impl Slot {
    /// Rewrite this slot to point at `new`, given it previously pointed at `old`.
    fn apply<N: TreeNode>(self, arena: &mut Arena<N>, root: &mut Option<Idx>, old: Option<Idx>, new: Option<Idx>) {
        match self {
            Slot::Root => *root = new,
            Slot::Left(p) => {
                let mut link = arena.hard_get(p).link_l();
                link.apply_delta(old, new);
                arena.hard_get_mut(p).set_link_l(link);
            }
            Slot::Right(p) => {
                let mut link = arena.hard_get(p).link_r();
                link.apply_delta(old, new);
                arena.hard_get_mut(p).set_link_r(link);
            }
        }
    }
}

/// Reparent `node` from `old_parent` to `new_parent`, its children unaffected. Both of
/// `node`'s link words share the parent term, so both are updated.
fn reparent<N: TreeNode>(arena: &mut Arena<N>, node: Idx, old_parent: Option<Idx>, new_parent: Option<Idx>) {
    let mut l = arena.hard_get(node).link_l();
    let mut r = arena.hard_get(node).link_r();
    l.apply_delta(old_parent, new_parent);
    r.apply_delta(old_parent, new_parent);
    let n = arena.hard_get_mut(node);
    n.set_link_l(l);
    n.set_link_r(r);
}

/// Splice `victim` (found at `slot`, with known parent `parent`) out of the tree rooted at
/// `root`, returning its two former children so callers can free the node. Does not itself
/// remove `victim` from the arena -- callers do that once they've pulled the node's payload
/// out (the unique/multi/interval engines each need to do something slightly different with
/// the payload on the way out).
pub fn splice<N: TreeNode>(arena: &mut Arena<N>, root: &mut Option<Idx>, victim: Idx, parent: Option<Idx>, slot: Slot) {
    let l = arena.hard_get(victim).link_l().decode(parent);
    let r = arena.hard_get(victim).link_r().decode(parent);

    match (l, r) {
        (None, None) => {
            slot.apply(arena, root, Some(victim), None);
        }
        (Some(c), None) | (None, Some(c)) => {
            reparent(arena, c, Some(victim), parent);
            slot.apply(arena, root, Some(victim), Some(c));
        }
        (Some(l), Some(r)) => {
            let l_size = walk::size(arena, Some(l), Some(victim));
            let r_size = walk::size(arena, Some(r), Some(victim));

            let donor = if l_size < r_size {
                splice_two_children_right(arena, victim, parent, l, r)
            } else {
                splice_two_children_left(arena, victim, parent, l, r)
            };
            slot.apply(arena, root, Some(victim), Some(donor));
        }
    }
}

/// Two-children case, donor taken from the right subtree (its in-order successor): mirrors
/// `detail::erase`'s `sl < sr` branch.
fn splice_two_children_right<N: TreeNode>(
    arena: &mut Arena<N>,
    victim: Idx,
    new_parent: Option<Idx>,
    l: Idx,
    r: Idx,
) -> Idx {
    let (donor, dp) = walk::first(arena, r, Some(victim));
    let donor = donor.expect("right subtree is non-empty");
    let dp = dp.expect("first() of a subtree always has some parent cursor within it, at minimum `victim`");

    if dp == victim {
        // Donor is `r` itself: it had no left child.
        let dc = arena.hard_get(donor).link_r().decode(Some(victim));
        arena
            .hard_get_mut(donor)
            .set_link_l(Link::encode(Some(l), new_parent));
        {
            let mut r_link = arena.hard_get(donor).link_r();
            r_link.apply_delta(Some(victim), new_parent);
            arena.hard_get_mut(donor).set_link_r(r_link);
        }
        let _ = dc; // unchanged: still donor's right child, donor's own address didn't change.
        reparent(arena, l, Some(victim), Some(donor));
    } else {
        // Donor is strictly inside r's subtree; detach it from its own parent `dp` first.
        let dc = arena.hard_get(donor).link_r().decode(Some(dp));
        {
            let mut dp_link = arena.hard_get(dp).link_l();
            dp_link.apply_delta(Some(donor), dc);
            arena.hard_get_mut(dp).set_link_l(dp_link);
        }
        if let Some(dc) = dc {
            reparent(arena, dc, Some(donor), Some(dp));
        }

        arena
            .hard_get_mut(donor)
            .set_link_l(Link::encode(Some(l), new_parent));
        arena
            .hard_get_mut(donor)
            .set_link_r(Link::encode(Some(r), new_parent));
        reparent(arena, l, Some(victim), Some(donor));
        reparent(arena, r, Some(victim), Some(donor));
    }

    donor
}

/// Two-children case, donor taken from the left subtree (its in-order predecessor): mirror of
/// [`splice_two_children_right`].
fn splice_two_children_left<N: TreeNode>(
    arena: &mut Arena<N>,
    victim: Idx,
    new_parent: Option<Idx>,
    l: Idx,
    r: Idx,
) -> Idx {
    let (donor, dp) = walk::last(arena, l, Some(victim));
    let donor = donor.expect("left subtree is non-empty");
    let dp = dp.expect("last() of a subtree always has some parent cursor within it, at minimum `victim`");

    if dp == victim {
        let dc = arena.hard_get(donor).link_l().decode(Some(victim));
        arena
            .hard_get_mut(donor)
            .set_link_r(Link::encode(Some(r), new_parent));
        {
            let mut l_link = arena.hard_get(donor).link_l();
            l_link.apply_delta(Some(victim), new_parent);
            arena.hard_get_mut(donor).set_link_l(l_link);
        }
        let _ = dc;
        reparent(arena, r, Some(victim), Some(donor));
    } else {
        let dc = arena.hard_get(donor).link_l().decode(Some(dp));
        {
            let mut dp_link = arena.hard_get(dp).link_r();
            dp_link.apply_delta(Some(donor), dc);
            arena.hard_get_mut(dp).set_link_r(dp_link);
        }
        if let Some(dc) = dc {
            reparent(arena, dc, Some(donor), Some(dp));
        }

        arena
            .hard_get_mut(donor)
            .set_link_r(Link::encode(Some(r), new_parent));
        arena
            .hard_get_mut(donor)
            .set_link_l(Link::encode(Some(l), new_parent));
        reparent(arena, l, Some(victim), Some(donor));
        reparent(arena, r, Some(victim), Some(donor));
    }

    donor
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tree::node::UNode;

    fn sorted_keys<N: TreeNode<Key = i32>>(arena: &Arena<N>, root: Option<Idx>) -> Vec<i32> {
        let mut out = Vec::new();
        let Some(r) = root else { return out };
        let mut cursor = walk::first(arena, r, None);
        while let Some(n) = cursor.0 {
            out.push(*arena.hard_get(n).key());
            cursor = walk::next(arena, cursor, root);
        }
        out
    }

    fn build_balanced(keys: &[i32]) -> (Arena<UNode<i32, ()>>, Option<Idx>) {
        let mut arena = Arena::new();
        let idxs: Vec<Idx> = keys.iter().map(|&k| arena.add(UNode::new(k, ()))).collect();
        let root = super::super::build::rebuild_balanced(&mut arena, &idxs, None);
        (arena, Some(root))
    }

    fn erase_key(arena: &mut Arena<UNode<i32, ()>>, root: &mut Option<Idx>, key: i32) {
        let (found, parent) = walk::find(arena, *root, &key);
        let victim = found.expect("key present");
        let slot = match parent {
            None => Slot::Root,
            Some(p) => {
                if key < *arena.hard_get(p).key() {
                    Slot::Left(p)
                } else {
                    Slot::Right(p)
                }
            }
        };
        splice(arena, root, victim, parent, slot);
        arena.remove(victim);
    }

    #[test]
    fn erase_leaf() {
        let (mut arena, mut root) = build_balanced(&[1, 2, 3, 4, 5, 6, 7]);
        erase_key(&mut arena, &mut root, 1);
        assert_eq!(sorted_keys(&arena, root), vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn erase_one_child() {
        let (mut arena, mut root) = build_balanced(&[1, 2, 3, 4, 5, 6, 7]);
        // Remove a leaf first to leave a single-child node, then remove that node.
        erase_key(&mut arena, &mut root, 1);
        erase_key(&mut arena, &mut root, 2);
        assert_eq!(sorted_keys(&arena, root), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn erase_two_children_root() {
        let (mut arena, mut root) = build_balanced(&[1, 2, 3, 4, 5, 6, 7]);
        erase_key(&mut arena, &mut root, 4); // root has two children
        assert_eq!(sorted_keys(&arena, root), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn erase_all_leaves_sequentially() {
        let (mut arena, mut root) = build_balanced(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        let mut remaining: Vec<i32> = (1..=15).collect();
        for k in [8, 1, 15, 4, 12, 2, 14] {
            erase_key(&mut arena, &mut root, k);
            remaining.retain(|&x| x != k);
            assert_eq!(sorted_keys(&arena, root), remaining);
        }
    }

    #[test]
    fn erase_down_to_empty() {
        let (mut arena, mut root) = build_balanced(&[1, 2, 3]);
        erase_key(&mut arena, &mut root, 2);
        erase_key(&mut arena, &mut root, 1);
        erase_key(&mut arena, &mut root, 3);
        assert!(root.is_none());
    }
}

//! Scapegoat detection and subtree flatten/rebuild -- the machinery that keeps the tree
//! weight-balanced (alpha = 2/3) after an insertion grows a path too deep.

use alloc::vec::Vec;
use micromath::F32Ext;

use super::arena::Arena;
use super::link::{Idx, Link};
use super::node::{RebuildRange, TreeNode};
use super::walk;

/// `alpha = 2/3` expressed as the integer threshold used throughout: a side is too heavy if
/// `3 * size(side) > 2 * size(total)`. Kept as a pair of small constants rather than a float so
/// the actual balance decision (unlike the depth early-exit below) never loses precision.
const ALPHA_NUM: u32 = 2;
const ALPHA_DENOM: u32 = 3;

/// How deep an insertion path can grow before it's *possible* that some ancestor has become
/// unbalanced, given `size` total nodes. This is a performance shortcut only (skips the
/// backward scan entirely when the path can't possibly contain a violator yet) -- using an
/// approximate `log` here is safe because a wrong (too small) answer only costs one wasted
/// deeper scan, never an incorrect balance verdict, since `find_scapegoat` itself always uses
/// exact integer arithmetic.
pub fn alpha_balance_depth(size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    // log_{denom/num}(size) = ln(size) / ln(denom/num)
    let base = ALPHA_DENOM as f32 / ALPHA_NUM as f32;
    let depth = (size as f32).ln() / base.ln();
    depth.floor() as usize
}

/// Exact integer balance check: is `side` too heavy relative to `total`?
fn too_heavy(side: usize, total: usize) -> bool {
    3 * side > 2 * total
}

/// Walk `path` (root-to-new-leaf ancestor chain, as built during insertion descent) from the
/// leaf end upward, returning the index *into `path`* of the first (deepest) ancestor whose
/// subtree violates weight balance, or `None` if the whole path is balanced.
pub fn find_scapegoat<N: TreeNode>(arena: &Arena<N>, path: &[Idx]) -> Option<usize> {
    // path[i]'s parent is path[i-1] (or None for path[0]).
    for i in (0..path.len()).rev() {
        let node = path[i];
        let parent = if i == 0 { None } else { Some(path[i - 1]) };
        let total = walk::size(arena, Some(node), parent);

        let n = arena.hard_get(node);
        let l = n.link_l().decode(parent);
        let r = n.link_r().decode(parent);
        let l_size = walk::size(arena, l, Some(node));
        let r_size = walk::size(arena, r, Some(node));

        if too_heavy(l_size, total) || too_heavy(r_size, total) {
            return Some(i);
        }
    }
    None
}

/// Full insert-path epilogue: check whether `path` (root-to-new-leaf) warrants a scapegoat
/// search, and if a violator is found, flatten and rebuild its subtree, re-linking it into its
/// parent (or the tree root). Returns whether a rebuild happened.
pub fn rebuild_if_needed<N: TreeNode>(
    arena: &mut Arena<N>,
    root: &mut Option<Idx>,
    path: &[Idx],
    size_hint: usize,
) -> bool {
    if path.len() <= alpha_balance_depth(size_hint) {
        return false;
    }
    let Some(si) = find_scapegoat(arena, path) else {
        return false;
    };

    let scapegoat = path[si];
    let parent = if si == 0 { None } else { Some(path[si - 1]) };
    let sorted = flatten_sorted(arena, scapegoat, parent);
    let new_root = rebuild_balanced(arena, &sorted, parent);

    match parent {
        None => *root = Some(new_root),
        Some(p) => {
            let goes_left = arena.hard_get(scapegoat).key() < arena.hard_get(p).key();
            if goes_left {
                let mut link = arena.hard_get(p).link_l();
                link.apply_delta(Some(scapegoat), Some(new_root));
                arena.hard_get_mut(p).set_link_l(link);
            } else {
                let mut link = arena.hard_get(p).link_r();
                link.apply_delta(Some(scapegoat), Some(new_root));
                arena.hard_get_mut(p).set_link_r(link);
            }
        }
    }
    true
}

/// Flatten a subtree into a sorted (in-order) list of its node indices.
pub fn flatten_sorted<N: TreeNode>(arena: &Arena<N>, root: Idx, parent: Option<Idx>) -> Vec<Idx> {
    let count = walk::size(arena, Some(root), parent);
    let mut out = Vec::with_capacity(count);
    let mut cursor = walk::first(arena, root, parent);
    while let Some(n) = cursor.0 {
        out.push(n);
        if out.len() == count {
            break;
        }
        cursor = walk::next(arena, cursor, Some(root));
    }
    out
}

/// Rebuild a perfectly balanced subtree from a sorted index buffer, writing fresh link words
/// for every touched node. `new_parent` is the (possibly absent) parent the rebuilt subtree's
/// root should encode. Returns the new subtree root.
///
/// Iterative midpoint recursion via an explicit worklist, mirroring the teacher's
/// `rebalance_subtree_from_sorted_idxs`, adapted to write XOR link words instead of direct
/// `left_idx`/`right_idx` fields.
pub fn rebuild_balanced<N: TreeNode>(
    arena: &mut Arena<N>,
    sorted: &[Idx],
    new_parent: Option<Idx>,
) -> Idx {
    debug_assert!(!sorted.is_empty());

    let root_range = RebuildRange::new(0, sorted.len() - 1);
    let root_idx = sorted[root_range.mid];

    // (range, parent_idx) worklist; parent_idx is this range's *result* node's parent.
    let mut work: Vec<(RebuildRange, Option<Idx>)> = Vec::new();
    work.push((root_range, new_parent));

    while let Some((range, parent)) = work.pop() {
        let mid_idx = sorted[range.mid];

        let left_child = if range.mid > range.low {
            let child_range = RebuildRange::new(range.low, range.mid - 1);
            let child_idx = sorted[child_range.mid];
            work.push((child_range, Some(mid_idx)));
            Some(child_idx)
        } else {
            None
        };

        let right_child = if range.mid < range.high {
            let child_range = RebuildRange::new(range.mid + 1, range.high);
            let child_idx = sorted[child_range.mid];
            work.push((child_range, Some(mid_idx)));
            Some(child_idx)
        } else {
            None
        };

        let node = arena.hard_get_mut(mid_idx);
        node.set_link_l(Link::encode(left_child, parent));
        node.set_link_r(Link::encode(right_child, parent));
    }

    root_idx
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tree::node::UNode;

    #[test]
    fn balance_depth_grows_logarithmically() {
        assert_eq!(alpha_balance_depth(0), 0);
        assert!(alpha_balance_depth(1000) < alpha_balance_depth(1_000_000));
    }

    #[test]
    fn rebuild_then_flatten_round_trips() {
        let mut arena: Arena<UNode<i32, ()>> = Arena::new();
        let idxs: Vec<Idx> = (0..7).map(|k| arena.add(UNode::new(k, ()))).collect();
        // idxs are already in sorted key order (0..7), as flatten/rebuild requires.
        let root = rebuild_balanced(&mut arena, &idxs, None);
        let flattened = flatten_sorted(&arena, root, None);
        let keys: Vec<i32> = flattened.iter().map(|&i| *arena.hard_get(i).key()).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(walk::height(&arena, Some(root), None), 3);
    }

    #[test]
    fn find_scapegoat_flags_skewed_path() {
        let mut arena: Arena<UNode<i32, ()>> = Arena::new();
        // Build a maximally skewed chain 0 -> 1 -> 2 -> 3 -> 4 (right spine) by hand.
        let idxs: Vec<Idx> = (0..5).map(|k| arena.add(UNode::new(k, ()))).collect();
        for w in 0..idxs.len() {
            let parent = if w == 0 { None } else { Some(idxs[w - 1]) };
            let child = idxs.get(w + 1).copied();
            let node = arena.hard_get_mut(idxs[w]);
            node.set_link_l(Link::encode(None, parent));
            node.set_link_r(Link::encode(child, parent));
        }
        let path = idxs.clone();
        let sg = find_scapegoat(&arena, &path);
        assert!(sg.is_some());
    }
}

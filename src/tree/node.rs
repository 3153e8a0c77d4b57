//! Node shapes for the three concrete engines, and the `TreeNode` trait that lets
//! `tree::walk`/`tree::build`/`tree::erase` stay generic over all three.

use alloc::vec::Vec;
use core::cmp::Ordering;

use super::link::Link;

/// Common surface every node shape exposes to the shared traversal/rebuild/erase machinery.
/// Nothing here depends on what a node's payload looks like -- only on its link words and its
/// position in the total order.
pub trait TreeNode {
    /// The type compared to find this node's place in the tree.
    type Key: Ord;

    fn key(&self) -> &Self::Key;
    fn link_l(&self) -> Link;
    fn link_r(&self) -> Link;
    fn set_link_l(&mut self, link: Link);
    fn set_link_r(&mut self, link: Link);

    /// Number of logical entries this node holds (1 for unique-key nodes, bucket length
    /// otherwise). Used only for `len()`-style accounting, never for balance.
    fn entry_count(&self) -> usize {
        1
    }
}

/// A node augmented with a running subtree maximum, used by the interval engine.
pub trait AugmentedNode: TreeNode {
    type Bound: Ord + Clone;

    fn sub_max(&self) -> &Self::Bound;
    fn set_sub_max(&mut self, bound: Self::Bound);
    /// Maximum bound contributed by this node's own bucket (not its subtree).
    fn own_max(&self) -> Self::Bound;
}

/// A node whose payload is an insertion-ordered bucket of entries sharing one BST key
/// (`MNode`, `INode`). Lets `tree::iter`'s bucket-flattening iterator stay generic over both.
pub trait BucketNode: TreeNode {
    type Entry;

    fn bucket(&self) -> &[Self::Entry];
    fn bucket_vec_mut(&mut self) -> &mut Vec<Self::Entry>;
}

/// Unique-key node: backs `UniqueTree` (`SgSet`/`SgMap`).
pub struct UNode<K, V> {
    pub key: K,
    pub val: V,
    link_l: Link,
    link_r: Link,
}

impl<K, V> UNode<K, V> {
    pub fn new(key: K, val: V) -> Self {
        UNode {
            key,
            val,
            link_l: Link::NULL_NULL,
            link_r: Link::NULL_NULL,
        }
    }
}

impl<K: Ord, V> TreeNode for UNode<K, V> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }
    fn link_l(&self) -> Link {
        self.link_l
    }
    fn link_r(&self) -> Link {
        self.link_r
    }
    fn set_link_l(&mut self, link: Link) {
        self.link_l = link;
    }
    fn set_link_r(&mut self, link: Link) {
        self.link_r = link;
    }
}

/// Multi-key node: backs `MultiTree` (`SgMultiSet`/`SgMultiMap`). All entries sharing `key`
/// collapse into one node's `bucket`, preserved in insertion order (Open Question 2).
pub struct MNode<K, V> {
    pub key: K,
    pub bucket: Vec<(K, V)>,
    link_l: Link,
    link_r: Link,
}

impl<K: Clone, V> MNode<K, V> {
    pub fn new(key: K, val: V) -> Self {
        MNode {
            key: key.clone(),
            bucket: {
                let mut b = Vec::with_capacity(1);
                b.push((key, val));
                b
            },
            link_l: Link::NULL_NULL,
            link_r: Link::NULL_NULL,
        }
    }
}

impl<K: Ord, V> TreeNode for MNode<K, V> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }
    fn link_l(&self) -> Link {
        self.link_l
    }
    fn link_r(&self) -> Link {
        self.link_r
    }
    fn set_link_l(&mut self, link: Link) {
        self.link_l = link;
    }
    fn set_link_r(&mut self, link: Link) {
        self.link_r = link;
    }
    fn entry_count(&self) -> usize {
        self.bucket.len()
    }
}

impl<K, V> BucketNode for MNode<K, V> {
    type Entry = (K, V);

    fn bucket(&self) -> &[(K, V)] {
        &self.bucket
    }
    fn bucket_vec_mut(&mut self) -> &mut Vec<(K, V)> {
        &mut self.bucket
    }
}

/// An interval key: ordered by its lower bound only, so that two intervals sharing a lower
/// bound but differing upper bounds collide into the same node's bucket, per `SPEC_FULL.md`
/// section 3.
#[derive(Clone)]
pub struct IntervalKey<K> {
    pub lo: K,
    pub hi: K,
}

impl<K: PartialEq> PartialEq for IntervalKey<K> {
    fn eq(&self, other: &Self) -> bool {
        self.lo == other.lo
    }
}
impl<K: Eq> Eq for IntervalKey<K> {}

impl<K: PartialOrd> PartialOrd for IntervalKey<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.lo.partial_cmp(&other.lo)
    }
}
impl<K: Ord> Ord for IntervalKey<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lo.cmp(&other.lo)
    }
}

/// Interval-tree node: backs `IntervalTree` (`SgIntervalMap`). Bucket entries share `key.lo`;
/// `sub_max` is the running maximum `hi` over this node's bucket and its subtree.
pub struct INode<K, V> {
    pub key: IntervalKey<K>,
    pub bucket: Vec<(IntervalKey<K>, V)>,
    sub_max: K,
    link_l: Link,
    link_r: Link,
}

impl<K: Clone + Ord, V> INode<K, V> {
    pub fn new(key: IntervalKey<K>, val: V) -> Self {
        let hi = key.hi.clone();
        INode {
            key: key.clone(),
            bucket: {
                let mut b = Vec::with_capacity(1);
                b.push((key, val));
                b
            },
            sub_max: hi,
            link_l: Link::NULL_NULL,
            link_r: Link::NULL_NULL,
        }
    }
}

impl<K: Ord, V> TreeNode for INode<K, V> {
    type Key = IntervalKey<K>;

    fn key(&self) -> &IntervalKey<K> {
        &self.key
    }
    fn link_l(&self) -> Link {
        self.link_l
    }
    fn link_r(&self) -> Link {
        self.link_r
    }
    fn set_link_l(&mut self, link: Link) {
        self.link_l = link;
    }
    fn set_link_r(&mut self, link: Link) {
        self.link_r = link;
    }
    fn entry_count(&self) -> usize {
        self.bucket.len()
    }
}

impl<K: Ord + Clone, V> AugmentedNode for INode<K, V> {
    type Bound = K;

    fn sub_max(&self) -> &K {
        &self.sub_max
    }
    fn set_sub_max(&mut self, bound: K) {
        self.sub_max = bound;
    }
    fn own_max(&self) -> K {
        self.bucket
            .iter()
            .map(|(k, _)| k.hi.clone())
            .max()
            .unwrap_or_else(|| self.key.hi.clone())
    }
}

impl<K, V> BucketNode for INode<K, V> {
    type Entry = (IntervalKey<K>, V);

    fn bucket(&self) -> &[(IntervalKey<K>, V)] {
        &self.bucket
    }
    fn bucket_vec_mut(&mut self) -> &mut Vec<(IntervalKey<K>, V)> {
        &mut self.bucket
    }
}

/// Helper for the iterative rebuild: the inclusive `[low, high]` range of a sorted index
/// buffer being turned into a perfectly balanced subtree, and its midpoint. Mirrors the
/// teacher's `NodeRebuildHelper`.
#[derive(Clone, Copy)]
pub struct RebuildRange {
    pub low: usize,
    pub high: usize,
    pub mid: usize,
}

impl RebuildRange {
    pub fn new(low: usize, high: usize) -> Self {
        debug_assert!(high >= low, "rebuild range low/high reversed");
        RebuildRange {
            low,
            high,
            mid: low + (high - low) / 2,
        }
    }
}

//! XOR-based link codec: the address arithmetic that lets a node store a single link word
//! per side instead of separate child/parent pointers.
//!
//! Each node keeps `link_l = encode(left_child, parent)` and `link_r = encode(right_child,
//! parent)`. Decoding a link word against either of the two addresses that went into it
//! yields the other one back out -- that's the whole trick, and it's what lets a traversal
//! carry a single "other neighbour" cursor instead of a dedicated parent pointer per node.

use core::fmt;

/// Arena slot index. `usize::MAX` is reserved to mean "no node" (see [`NULL`]).
pub type Idx = usize;

/// The reserved index standing in for a null address. An arena can never actually grow to
/// `usize::MAX` entries, so this can't collide with a real slot.
pub const NULL: Idx = usize::MAX;

/// Collapse an optional arena index into its raw address form.
#[inline]
pub fn addr(a: Option<Idx>) -> Idx {
    match a {
        Some(i) => {
            debug_assert_ne!(i, NULL, "arena index collided with the null sentinel");
            i
        }
        None => NULL,
    }
}

/// Inverse of [`addr`].
#[inline]
pub fn from_addr(a: Idx) -> Option<Idx> {
    if a == NULL {
        None
    } else {
        Some(a)
    }
}

/// One XOR-encoded link word: the address of a child XORed with the address of the parent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link(Idx);

impl Link {
    /// The link word for a node with neither neighbour present (a lone root).
    pub const NULL_NULL: Link = Link(0);

    /// Encode a link word from the two addresses it joins.
    #[inline]
    pub fn encode(a: Option<Idx>, b: Option<Idx>) -> Link {
        Link(addr(a) ^ addr(b))
    }

    /// Recover the neighbour on the other side of this link, given one side.
    #[inline]
    pub fn decode(self, known: Option<Idx>) -> Option<Idx> {
        from_addr(self.0 ^ addr(known))
    }

    /// XOR this link in place against a delta, e.g. to re-parent a node without knowing its
    /// own children (`link ^= encode(old_neighbour, new_neighbour)`).
    #[inline]
    pub fn apply_delta(&mut self, old: Option<Idx>, new: Option<Idx>) {
        self.0 ^= addr(old) ^ addr(new);
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link({:#x})", self.0)
    }
}

impl Default for Link {
    fn default() -> Self {
        Link::NULL_NULL
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let parent = Some(3);
        let child = Some(7);
        let link = Link::encode(child, parent);
        assert_eq!(link.decode(parent), child);
        assert_eq!(link.decode(child), parent);
    }

    #[test]
    fn round_trip_with_null() {
        let link = Link::encode(None, Some(1));
        assert_eq!(link.decode(Some(1)), None);
        assert_eq!(link.decode(None), Some(1));
    }

    #[test]
    fn delta_reparent() {
        // c's link word encodes (n, some_child_of_c). Re-parenting c from n to p:
        let child_of_c = Some(9);
        let mut link = Link::encode(child_of_c, Some(2) /* n */);
        link.apply_delta(Some(2), Some(5) /* p */);
        assert_eq!(link.decode(Some(5)), child_of_c);
        assert_eq!(link.decode(child_of_c), Some(5));
    }
}

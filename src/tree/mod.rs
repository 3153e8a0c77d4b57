//! The shared tree engine: link codec, arena, traversal, scapegoat rebuild, deletion, and
//! iteration, generic over the three concrete node shapes (`UNode`/`MNode`/`INode`). See
//! `DESIGN.md` for how each submodule is grounded in the teacher and `original_source/`.

mod link;
pub use link::{Idx, Link};

mod arena;
pub use arena::Arena;

mod node;
pub use node::{AugmentedNode, BucketNode, IntervalKey, TreeNode, INode, MNode, UNode};

pub(crate) mod walk;

mod build;

mod erase;

mod error;
pub use error::SgError;

mod iter;
pub use iter::{BucketIter, NodeIter};

mod unique;
pub use unique::UniqueTree;

mod multi;
pub use multi::MultiTree;

mod interval;
pub use interval::IntervalTree;

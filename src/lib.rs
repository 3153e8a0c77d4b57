/*!
Ordered set, map, multi-key, and interval data structures via an arena-based [scapegoat tree](https://people.csail.mit.edu/rivest/pubs/GR93.pdf) (memory-efficient, self-balancing binary search tree).

* `!#[no_std]` by default (needs `alloc`).
* Safe: `#![forbid(unsafe_code)]`, including all dependencies.

### About

Five APIs, all weight-balanced via the same scapegoat rebuild machinery:

* Ordered Set API ([`SgSet`](crate::SgSet)) - subset of [`BTreeSet`](https://doc.rust-lang.org/std/collections/struct.BTreeSet.html).
* Ordered Map API ([`SgMap`](crate::SgMap)) - subset of [`BTreeMap`](https://doc.rust-lang.org/std/collections/struct.BTreeMap.html).
* Multi-key Set API ([`SgMultiSet`](crate::SgMultiSet)) - like `SgSet`, but a key may be present more than once.
* Multi-key Map API ([`SgMultiMap`](crate::SgMultiMap)) - like `SgMap`, but a key may map to more than one value.
* Interval Map API ([`SgIntervalMap`](crate::SgIntervalMap)) - keyed by `(lo, hi)` ranges, supports overlap queries.

Strives for:

* **Maximal safety:** strong [memory safety](https://tiemoko.com/blog/blue-team-rust/) guarantees, hence `#![forbid(unsafe_code)]`.
    * **Compile-time safety:** no `unsafe` (no raw pointer dereference, etc.).
    * **Debug-time safety:** `debug_assert!` for logical invariants exercised in testing.
    * **Runtime safety:** no interior mutability (e.g. no need for `Rc<RefCell<T>>`'s runtime check).

* **Memory-efficient:** nodes carry only XOR-linked child metadata (one `Link` word per side,
  see [`tree::link`]) instead of separate parent/left/right pointers, and node storage is
  reused via a free-listed arena instead of being individually heap-allocated.

* **Recursion-free:** traversal, rebuild, and deletion are all iterative, so stack use is fixed
  and runtime doesn't depend on recursion depth.

* **Fallibility**: a `try_*` variant of each fallible API (`insert`, `extend`, etc.) is available.
    * **Out-Of-Memory (OOM)** `panic!` becomes avoidable: `try_*` variants return [`Result<_, SgError>`](crate::SgError).

### Usage

`SgMap` non-exhaustive API example (works almost identically to `std::collections::BTreeMap`):

```rust
use scapegoat::SgMap;

let mut example = SgMap::new(); // BTreeMap::new()

// Insert
example.insert(3, "the");
example.insert(2, "don't blame");
example.insert(1, "Please");

// Fallible insert variant
assert!(example.try_insert(4, "borrow checker").is_ok());

// Ordered reference iterator
assert!(example
    .iter()
    .map(|(_, v)| *v)
    .eq(["Please", "don't blame", "the", "borrow checker"].iter().copied()));

// Container indexing
assert_eq!(example[&3], "the");

// Head removal
let please_tuple = example.pop_first().unwrap();
assert_eq!(please_tuple, (1, "Please"));

// By-predicate removal
example.retain(|_, v| !v.contains('a'));
```

`SgMultiMap`, for keys that legitimately repeat:

```rust
use scapegoat::SgMultiMap;

let mut hits: SgMultiMap<&str, u32> = SgMultiMap::new();
hits.insert("/", 200);
hits.insert("/", 404);
hits.insert("/", 200);

assert_eq!(hits.count(&"/"), 3);
assert_eq!(hits.get(&"/"), [200, 404, 200]);
```

`SgIntervalMap`, for overlap queries over `(lo, hi)` ranges:

```rust
use scapegoat::SgIntervalMap;

let mut schedule: SgIntervalMap<i64, &str> = SgIntervalMap::new();
schedule.insert((0, 10), "morning");
schedule.insert((10, 20), "afternoon");

assert!(schedule.any((5, 15)));
assert!(!schedule.any((20, 30)));
```

### Trusted Dependencies

* [`smallvec`](https://crates.io/crates/smallvec) - `!#[no_std]`, `#![forbid(unsafe_code)]` inline-capacity vector, used for ancestor-path scratch buffers during insert/rebuild.
* [`micromath`](https://crates.io/crates/micromath) - `!#[no_std]`, `#![forbid(unsafe_code)]` floating point approximations, used for a cheap rebalance-threshold early-exit.

Because this library and its dependencies are `#![forbid(unsafe_code)]`, no 3rd-party `unsafe` code is introduced into your project.

### Additional Considerations

**Algorithmic Complexity**

Space complexity is always `O(n)`. Time complexity:

| Operation | Average Case | Worst Case |
| --- | --- | --- |
| `get` | `O(log n)` | `O(log n)` |
| `insert` | `O(log n)` | Amortized `O(log n)` |
| `remove` | `O(log n)` | Amortized `O(log n)` |
| `first` | `O(1)` | `O(1)` |
| `last` | `O(1)` | `O(1)` |

### License and Contributing

Licensed under the MIT license.
Contributions are welcome!
*/

// Production
#![forbid(unsafe_code)]
#![cfg_attr(not(any(test, fuzzing)), no_std)]
#![cfg_attr(not(any(test, fuzzing)), deny(missing_docs))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/tnballo/scapegoat/master/img/scapegoat.svg"
)]

extern crate alloc;

// Only expose arena/node internals for fuzzing harnesses
#[cfg(fuzzing)]
pub use crate::tree::{Arena, Idx, Link};

mod tree;
pub use crate::tree::SgError;

mod map;
pub use crate::map::SgMap;

/// [`SgMap`][crate::map::SgMap]'s iterator return types.
pub mod map_types;

mod set;
pub use crate::set::SgSet;

/// [`SgSet`][crate::set::SgSet]'s iterator return types.
pub mod set_types;

mod multimap;
pub use crate::multimap::SgMultiMap;

/// [`SgMultiMap`][crate::multimap::SgMultiMap]'s iterator return types.
pub mod multimap_types;

mod multiset;
pub use crate::multiset::SgMultiSet;

/// [`SgMultiSet`][crate::multiset::SgMultiSet]'s iterator return types.
pub mod multiset_types;

mod intervalmap;
pub use crate::intervalmap::SgIntervalMap;

/// [`SgIntervalMap`][crate::intervalmap::SgIntervalMap]'s iterator return types.
pub mod intervalmap_types;

#[macro_use]
mod macros;

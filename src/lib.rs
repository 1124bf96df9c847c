//! # Hyperion -- a red-black ordered set
//!
//! This crate exports a single collection type -- [`RbTree`] -- an ordered set of keys balanced
//! with red-black coloring. Callers insert keys, query membership, and walk the keys in sorted
//! order. That's it: there's no removal, and no key/value mapping.
//!
//! ### Notable features
//!
//! * `O(log n)` insertion and lookup, with the height bounded by `2 * log2(n + 1)` regardless of
//!     insertion order
//! * Nodes carry no parent pointers. All rebalancing happens while the recursive insertion
//!     unwinds, with each ancestor repairing the subtree it owns before handing it back to its
//!     caller
//! * No `unsafe` -- child links are plain `Option<Box<_>>`, and rotations move ownership around
//!     instead of aliasing
//!
//! ### Feature flags
//!
//! * `serde` -- implements `Serialize` and `Deserialize` for [`RbTree`], as a sequence of keys
//! * `fuzz` -- exposes the [`mock`] module and `RbTree::validate`, and implements `Arbitrary`
//!     for [`RbTree`] and [`Color`]. This exists for the crate's own fuzzing and isn't intended for
//!     general use.
//!
//! ### Naming
//!
//! This library is named after [Hyperion], a coast redwood in Redwood National Park that's the
//! current tallest known tree on Earth. Which is a little ironic, given how much effort goes into
//! keeping this one short.
//!
//! [Hyperion]: https://en.wikipedia.org/wiki/Hyperion_(tree)

#![deny(unsafe_code)]

#[macro_use]
mod macros;

#[cfg(any(test, feature = "fuzz"))]
pub mod mock;
#[cfg(feature = "serde")]
mod serde;
mod tree;

pub use tree::{Color, Iter, RbTree};

//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! binary trees and their traversals.
//!
//! All traversals borrow the tree for the duration of the call and return the visited values
//! in order. An empty tree always yields an empty result. The only traversal that mutates the
//! tree is [Morris traversal](morris), which restores it before returning.

pub mod arena_tree;
pub mod boundary;
pub mod breadth;
pub mod depth;
pub mod iterables;
pub mod morris;

pub use arena_tree::{ArenaIndex, BinaryArenaNode, BinaryArenaTree};
pub use breadth::BreadthFirstIterator;
pub use depth::DepthFirstIterator;
pub use iterables::{BaseDirectionIterable, DirectionIterable, Nodelike};

//! ## About
//!
//! This crate contains traversal and search primitives for two linked structures: binary trees
//! and graphs given as adjacency lists. Every traversal returns the visited values (or vertex ids)
//! as an ordered sequence, and derived analyses return a count, a flag or a path.
//!
//! * [tree]: pre-, in- and post-order (recursive and iterative), level order (flat, grouped and
//!   zigzag), boundary and vertical order, and an in-order traversal with O(1) auxiliary space
//!   ([Morris traversal](tree::morris)) on an arena allocated [BinaryArenaTree].
//! * [graph]: depth- and breadth-first search, cycle detection, topological sorting, connected
//!   components, and shortest paths (plain and bidirectional BFS) on any [Navigable] graph.
//!
//! Traversals are single-threaded and hold no state between calls. Recursive variants recurse as
//! deep as the input, prefer the iterative variants for inputs of unbounded depth.
//!
//! ## Logging
//!
//! Entry points are instrumented with [tracing](https://docs.rs/tracing) spans and emit
//! `debug`/`trace` events. Install a subscriber to see them.
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod errors;
pub mod graph;
pub mod tree;

pub use errors::{Side, SylvaError, SylvaResult};
pub use graph::{AdjacencyList, Direction, Navigable, Searchable};
pub use tree::{
    ArenaIndex, BaseDirectionIterable, BinaryArenaNode, BinaryArenaTree, DirectionIterable, Nodelike,
};

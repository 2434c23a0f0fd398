//! Search algorithms over graphs given as ordered adjacency lists.
//!
//! The algorithms are free functions generic over [Navigable]. The [Searchable] trait exposes
//! them as methods on every navigable graph. All per-search state (visited marks, frontiers,
//! predecessors) is created per call, so searches never influence each other.
//!
//! Searches from a start vertex return an empty result for an empty graph and fail with
//! [crate::SylvaError::VertexOutOfBound] if the start (or end) vertex is not in a non-empty
//! graph. Neighbor entries are not checked during a search: use [AdjacencyList] to validate
//! them once on construction.

pub mod adjacency;
pub mod breadth;
pub mod components;
pub mod cycle;
pub mod depth;

pub use adjacency::{AdjacencyList, Direction, Navigable};
pub use breadth::{bfs, bidirectional_search, bidirectional_search_with, shortest_path, BfsIterator};
pub use components::{connected_components, count_connected_components};
pub use cycle::{has_cycle, topological_sort};
pub use depth::{dfs_iterative, dfs_recursive, DfsIterator};

use crate::SylvaResult;

/// Graph searches as methods, available for every [Navigable] graph
pub trait Searchable: Navigable {
    fn dfs_recursive(&self, start: usize) -> SylvaResult<Vec<usize>> {
        dfs_recursive(self, start)
    }

    fn dfs_iterative(&self, start: usize) -> SylvaResult<Vec<usize>> {
        dfs_iterative(self, start)
    }

    fn iter_depth(&self, start: usize) -> SylvaResult<DfsIterator<'_, Self>> {
        DfsIterator::new(self, start)
    }

    fn bfs(&self, start: usize) -> SylvaResult<Vec<usize>> {
        bfs(self, start)
    }

    fn iter_breadth(&self, start: usize) -> SylvaResult<BfsIterator<'_, Self>> {
        BfsIterator::new(self, start)
    }

    fn shortest_path(&self, start: usize, end: usize) -> SylvaResult<Vec<usize>> {
        shortest_path(self, start, end)
    }

    fn bidirectional_search(&self, start: usize, end: usize) -> SylvaResult<Vec<usize>> {
        bidirectional_search(self, start, end)
    }

    fn has_cycle(&self) -> bool {
        has_cycle(self)
    }

    fn topological_sort(&self) -> SylvaResult<Vec<usize>> {
        topological_sort(self)
    }

    fn connected_components(&self) -> Vec<usize> {
        connected_components(self)
    }

    fn count_connected_components(&self) -> usize {
        count_connected_components(self)
    }
}

impl<G> Searchable for G where G: Navigable + ?Sized {}

//! Breadth-first search and the unweighted shortest-path searches built on it.
//!
//! Vertices are marked when they are enqueued, so each vertex enters a frontier at most once
//! even with repeated edges. A search that finds no path returns an empty path, which is a
//! valid outcome rather than an error.

use super::adjacency::{check_start, check_vertex, Navigable};
use crate::{SylvaError, SylvaResult};
use std::collections::VecDeque;
use tracing_attributes::instrument;

/// Iterator for a lazy breadth-first search from a start vertex
pub struct BfsIterator<'a, G>
where
    G: Navigable + ?Sized,
{
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a, G> BfsIterator<'a, G>
where
    G: Navigable + ?Sized,
{
    /// Fails if `start` is out of bound of a non-empty graph. Yields nothing for an empty graph.
    pub fn new(graph: &'a G, start: usize) -> SylvaResult<Self> {
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::new();
        if check_start(graph, start)? {
            visited[start] = true;
            queue.push_back(start);
        }
        Ok(BfsIterator { graph, visited, queue })
    }
}

impl<'a, G> Iterator for BfsIterator<'a, G>
where
    G: Navigable + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        for &neighbor in self.graph.neighbors(vertex) {
            if !self.visited[neighbor] {
                self.visited[neighbor] = true;
                self.queue.push_back(neighbor);
            }
        }
        Some(vertex)
    }
}

/// Vertices reachable from `start` in breadth-first order
#[instrument(level = "debug", skip(graph))]
pub fn bfs<G>(graph: &G, start: usize) -> SylvaResult<Vec<usize>>
where
    G: Navigable + ?Sized,
{
    Ok(BfsIterator::new(graph, start)?.collect())
}

/// Walks the predecessor links from `vertex` back to the search root. The root comes last.
fn trace_back(predecessors: &[Option<usize>], vertex: usize) -> Vec<usize> {
    let mut path = vec![vertex];
    let mut current = vertex;
    while let Some(predecessor) = predecessors[current] {
        path.push(predecessor);
        current = predecessor;
    }
    path
}

/// Shortest path (fewest edges) from `start` to `end`, both included.
///
/// Returns `[start]` if `start == end` and an empty path if `end` is unreachable. The search
/// stops as soon as `end` is discovered.
#[instrument(level = "debug", skip(graph))]
pub fn shortest_path<G>(graph: &G, start: usize, end: usize) -> SylvaResult<Vec<usize>>
where
    G: Navigable + ?Sized,
{
    if !check_start(graph, start)? {
        return Ok(vec![]);
    }
    check_vertex(graph, end)?;
    if start == end {
        return Ok(vec![start]);
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut predecessors = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(vertex) = queue.pop_front() {
        for &neighbor in graph.neighbors(vertex) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            predecessors[neighbor] = Some(vertex);
            if neighbor == end {
                let mut path = trace_back(&predecessors, end);
                path.reverse();
                tracing::debug!(length = path.len(), "Found shortest path");
                return Ok(path);
            }
            queue.push_back(neighbor);
        }
    }
    tracing::debug!("No path found");
    Ok(vec![])
}

/// One direction of a bidirectional search
struct HalfSearch<'a, G>
where
    G: Navigable + ?Sized,
{
    graph: &'a G,
    visited: Vec<bool>,
    predecessors: Vec<Option<usize>>,
    frontier: VecDeque<usize>,
}

impl<'a, G> HalfSearch<'a, G>
where
    G: Navigable + ?Sized,
{
    fn new(graph: &'a G, vertex_count: usize, root: usize) -> Self {
        let mut visited = vec![false; vertex_count];
        visited[root] = true;
        HalfSearch {
            graph,
            visited,
            predecessors: vec![None; vertex_count],
            frontier: VecDeque::from([root]),
        }
    }

    /// Expands the whole current frontier by one level. Returns the first newly discovered
    /// vertex that the other direction has already visited.
    fn expand_level(&mut self, other_visited: &[bool]) -> Option<usize> {
        for _ in 0..self.frontier.len() {
            let vertex = self.frontier.pop_front()?;
            for &neighbor in self.graph.neighbors(vertex) {
                if self.visited[neighbor] {
                    continue;
                }
                self.visited[neighbor] = true;
                self.predecessors[neighbor] = Some(vertex);
                if other_visited[neighbor] {
                    return Some(neighbor);
                }
                self.frontier.push_back(neighbor);
            }
        }
        None
    }
}

/// Shortest path from `start` to `end` found by searching from both ends.
///
/// The backward search follows the neighbor lists of `graph` as well, so `graph` must be
/// undirected (or symmetric). Use [bidirectional_search_with] and a transposed graph for
/// directed graphs. The result has the same length as the one of [shortest_path].
#[instrument(level = "debug", skip(graph))]
pub fn bidirectional_search<G>(graph: &G, start: usize, end: usize) -> SylvaResult<Vec<usize>>
where
    G: Navigable + ?Sized,
{
    bidirectional_search_with(graph, graph, start, end)
}

/// Bidirectional search on a directed graph. `backward` must contain the reversed arcs of
/// `forward` (see [crate::AdjacencyList::transposed]).
///
/// Both directions alternate, each expanding one complete BFS level before checking for an
/// intersection. Stops without a path as soon as either frontier runs empty. Fails if the two
/// graphs differ in their number of vertices.
#[instrument(level = "debug", skip(forward, backward))]
pub fn bidirectional_search_with<G, R>(forward: &G, backward: &R, start: usize, end: usize) -> SylvaResult<Vec<usize>>
where
    G: Navigable + ?Sized,
    R: Navigable + ?Sized,
{
    if forward.vertex_count() != backward.vertex_count() {
        return Err(SylvaError::GraphSizeMismatch {
            forward: forward.vertex_count(),
            backward: backward.vertex_count(),
        });
    }
    if !check_start(forward, start)? {
        return Ok(vec![]);
    }
    check_vertex(forward, end)?;
    if start == end {
        return Ok(vec![start]);
    }

    let vertex_count = forward.vertex_count();
    let mut from_start = HalfSearch::new(forward, vertex_count, start);
    let mut from_end = HalfSearch::new(backward, vertex_count, end);

    let intersection = loop {
        if from_start.frontier.is_empty() || from_end.frontier.is_empty() {
            tracing::debug!("A frontier ran empty, no path found");
            return Ok(vec![]);
        }
        if let Some(vertex) = from_start.expand_level(&from_end.visited) {
            break vertex;
        }
        if from_start.frontier.is_empty() {
            continue;
        }
        if let Some(vertex) = from_end.expand_level(&from_start.visited) {
            break vertex;
        }
    };
    tracing::debug!(intersection, "Frontiers met");

    // start -> intersection, then intersection (excluded) -> end
    let mut path = trace_back(&from_start.predecessors, intersection);
    path.reverse();
    path.extend(trace_back(&from_end.predecessors, intersection).into_iter().skip(1));
    Ok(path)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{AdjacencyList, Direction};
    use itertools::Itertools;
    use test_log;

    fn sample() -> AdjacencyList {
        AdjacencyList::from_edges(6, [(0, 1), (0, 3), (1, 2), (1, 4), (4, 3), (4, 5)], Direction::Directed).unwrap()
    }

    //  0 - 1 - 2 - 3
    //  |           |
    //  4 - 5 - 6 - 7 - 8
    fn ring() -> AdjacencyList {
        AdjacencyList::from_edges(
            9,
            [(0, 1), (1, 2), (2, 3), (0, 4), (4, 5), (5, 6), (6, 7), (3, 7), (7, 8)],
            Direction::Undirected,
        )
        .unwrap()
    }

    fn is_path(graph: &AdjacencyList, path: &[usize]) -> bool {
        path.iter().tuple_windows().all(|(a, b)| graph.neighbors(*a).contains(b))
    }

    #[test_log::test]
    fn test_bfs() {
        let graph = sample();
        assert_eq!(bfs(&graph, 0).unwrap(), &[0, 1, 3, 2, 4, 5]);
        assert_eq!(bfs(&graph, 1).unwrap(), &[1, 2, 4, 3, 5]);
        assert_eq!(bfs(&ring(), 0).unwrap(), &[0, 1, 4, 2, 5, 3, 6, 7, 8]);
    }

    #[test_log::test]
    fn test_bfs_repeated_edges() {
        let graph: Vec<Vec<usize>> = vec![vec![1, 1, 0, 2], vec![2, 0, 1], vec![]];
        assert_eq!(bfs(&graph, 0).unwrap(), &[0, 1, 2]);
    }

    #[test_log::test]
    fn test_shortest_path() {
        let graph = sample();
        assert_eq!(shortest_path(&graph, 0, 5).unwrap(), &[0, 1, 4, 5]);
        assert_eq!(shortest_path(&graph, 0, 3).unwrap(), &[0, 3]);
        assert_eq!(shortest_path(&graph, 2, 2).unwrap(), &[2]);
        // directed: no way back
        assert!(shortest_path(&graph, 5, 0).unwrap().is_empty());

        assert_eq!(shortest_path(&ring(), 0, 8).unwrap(), &[0, 1, 2, 3, 7, 8]);
    }

    #[test_log::test]
    fn test_bidirectional_search() {
        let graph = ring();
        for (start, end) in [(0, 8), (8, 0), (1, 6), (2, 5), (4, 3), (0, 1), (5, 5)] {
            let path = bidirectional_search(&graph, start, end).unwrap();
            let reference = shortest_path(&graph, start, end).unwrap();
            assert_eq!(path.len(), reference.len(), "{start} -> {end}: {path:?}");
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert!(is_path(&graph, &path));
        }
    }

    #[test_log::test]
    fn test_bidirectional_search_directed() {
        let graph = sample();
        let transposed = graph.transposed();
        let path = bidirectional_search_with(&graph, &transposed, 0, 5).unwrap();
        assert_eq!(path, &[0, 1, 4, 5]);
        assert!(is_path(&graph, &path));
        assert!(bidirectional_search_with(&graph, &transposed, 5, 0).unwrap().is_empty());
    }

    #[test_log::test]
    fn test_bidirectional_search_mismatched_graphs() {
        let graph = sample();
        let smaller = AdjacencyList::from_edges(4, [(1, 0), (3, 1)], Direction::Directed).unwrap();
        let mismatch = Err(SylvaError::GraphSizeMismatch {
            forward: 6,
            backward: 4,
        });
        assert_eq!(bidirectional_search_with(&graph, &smaller, 0, 5), mismatch);
        assert_eq!(bidirectional_search_with(&graph, &smaller, 0, 1), mismatch);

        let empty: Vec<Vec<usize>> = vec![];
        assert!(bidirectional_search_with(&empty, &smaller, 0, 1).is_err());
        assert!(bidirectional_search_with(&empty, &empty, 0, 1).unwrap().is_empty());
    }

    #[test_log::test]
    fn test_no_path() {
        let graph = AdjacencyList::from_edges(5, [(0, 1), (1, 2), (3, 4)], Direction::Undirected).unwrap();
        assert!(shortest_path(&graph, 0, 4).unwrap().is_empty());
        assert!(bidirectional_search(&graph, 0, 4).unwrap().is_empty());
        assert!(bidirectional_search(&graph, 4, 0).unwrap().is_empty());
    }

    #[test_log::test]
    fn test_bounds() {
        let empty: Vec<Vec<usize>> = vec![];
        assert!(bfs(&empty, 0).unwrap().is_empty());
        assert!(shortest_path(&empty, 0, 1).unwrap().is_empty());
        assert!(bidirectional_search(&empty, 0, 1).unwrap().is_empty());

        let graph = sample();
        assert_eq!(
            shortest_path(&graph, 0, 6),
            Err(SylvaError::VertexOutOfBound {
                vertex: 6,
                vertex_count: 6
            })
        );
        assert!(bidirectional_search(&graph, 7, 0).is_err());
        assert!(bfs(&graph, 10).is_err());
    }
}

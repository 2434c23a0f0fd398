//! Cycle detection and topological sorting of directed graphs.
//!
//! Both run one depth-first search from every unvisited vertex (in vertex order), marking the
//! vertices on the current search path. An edge to a vertex on the path closes a cycle, an edge
//! to a finished vertex is a cross or forward edge.

use super::adjacency::Navigable;
use crate::{SylvaError, SylvaResult};
use tracing_attributes::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Finished,
}

/// Explores the whole graph depth-first and calls `on_finish` for every vertex once all its
/// neighbors are done (post-order).
///
/// Returns the first back edge `(from, to)`, in which case the search stops early.
fn explore<G, F>(graph: &G, mut on_finish: F) -> Option<(usize, usize)>
where
    G: Navigable + ?Sized,
    F: FnMut(usize),
{
    let mut marks = vec![Mark::Unvisited; graph.vertex_count()];
    let mut stack = Vec::new();

    for root in 0..graph.vertex_count() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::OnPath;
        stack.push((root, graph.neighbors(root).iter()));

        while let Some((vertex, neighbors)) = stack.last_mut() {
            let vertex = *vertex;
            match neighbors.next().copied() {
                Some(neighbor) => match marks[neighbor] {
                    Mark::Unvisited => {
                        marks[neighbor] = Mark::OnPath;
                        stack.push((neighbor, graph.neighbors(neighbor).iter()));
                    }
                    Mark::OnPath => return Some((vertex, neighbor)),
                    Mark::Finished => {}
                },
                None => {
                    marks[vertex] = Mark::Finished;
                    on_finish(vertex);
                    stack.pop();
                }
            }
        }
    }
    None
}

/// Whether the directed graph contains a cycle (self-loops included). `false` for an empty graph.
#[instrument(level = "debug", skip(graph))]
pub fn has_cycle<G>(graph: &G) -> bool
where
    G: Navigable + ?Sized,
{
    match explore(graph, |_| {}) {
        Some((from, to)) => {
            tracing::debug!(from, to, "Back edge closes a cycle");
            true
        }
        None => false,
    }
}

/// Orders all vertices such that every arc points forward.
///
/// Fails with [SylvaError::CycleDetected] if the graph has a cycle; no partial order is
/// returned. An empty graph has the empty order.
#[instrument(level = "debug", skip(graph))]
pub fn topological_sort<G>(graph: &G) -> SylvaResult<Vec<usize>>
where
    G: Navigable + ?Sized,
{
    let mut order = Vec::with_capacity(graph.vertex_count());
    if let Some((from, to)) = explore(graph, |vertex| order.push(vertex)) {
        tracing::debug!(from, to, "Back edge prevents a topological order");
        return Err(SylvaError::CycleDetected);
    }
    // Prepending each finished vertex equals reversing the post-order
    order.reverse();
    Ok(order)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{AdjacencyList, Direction};
    use test_log;

    fn sample() -> AdjacencyList {
        AdjacencyList::from_edges(6, [(0, 1), (0, 3), (1, 2), (1, 4), (4, 3), (4, 5)], Direction::Directed).unwrap()
    }

    #[test_log::test]
    fn test_has_cycle() {
        let mut graph = sample();
        assert!(!has_cycle(&graph));
        graph.add_edge(5, 1).unwrap();
        assert!(has_cycle(&graph));

        let looped: Vec<Vec<usize>> = vec![vec![1], vec![1]];
        assert!(has_cycle(&looped));
    }

    #[test_log::test]
    fn test_cross_edges_are_no_cycles() {
        // diamond: 3 is reached twice but never while on the path
        let graph: Vec<Vec<usize>> = vec![vec![1, 2], vec![3], vec![3], vec![]];
        assert!(!has_cycle(&graph));
        // edge from a later root into an earlier, finished tree
        let graph: Vec<Vec<usize>> = vec![vec![1], vec![], vec![1, 0]];
        assert!(!has_cycle(&graph));
    }

    #[test_log::test]
    fn test_cycle_in_later_component() {
        let graph: Vec<Vec<usize>> = vec![vec![1], vec![], vec![3], vec![4], vec![2]];
        assert!(has_cycle(&graph));
        assert_eq!(topological_sort(&graph), Err(SylvaError::CycleDetected));
    }

    #[test_log::test]
    fn test_topological_sort() {
        let graph = sample();
        assert_eq!(topological_sort(&graph).unwrap(), &[0, 1, 4, 5, 3, 2]);

        let mut graph = graph;
        graph.add_edge(3, 0).unwrap();
        assert_eq!(topological_sort(&graph), Err(SylvaError::CycleDetected));
    }

    #[test_log::test]
    fn test_empty() {
        let empty: Vec<Vec<usize>> = vec![];
        assert!(!has_cycle(&empty));
        assert_eq!(topological_sort(&empty), Ok(vec![]));

        let isolated = AdjacencyList::new(3);
        assert_eq!(topological_sort(&isolated), Ok(vec![2, 1, 0]));
    }
}

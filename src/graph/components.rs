//! Connected components of undirected graphs.
//!
//! The graph is expected to store every edge in both directions. For a directed graph, the
//! result describes which vertices are reached from the roots picked in vertex order, not its
//! weakly connected components.

use super::adjacency::Navigable;
use std::collections::VecDeque;
use tracing_attributes::instrument;

/// Component label of every vertex. Components are numbered in the order their lowest vertex
/// appears, starting with 0.
#[instrument(level = "debug", skip(graph))]
pub fn connected_components<G>(graph: &G) -> Vec<usize>
where
    G: Navigable + ?Sized,
{
    let mut labels: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut count = 0;

    for root in 0..graph.vertex_count() {
        if labels[root].is_some() {
            continue;
        }
        labels[root] = Some(count);
        queue.push_back(root);
        while let Some(vertex) = queue.pop_front() {
            for &neighbor in graph.neighbors(vertex) {
                if labels[neighbor].is_none() {
                    labels[neighbor] = Some(count);
                    queue.push_back(neighbor);
                }
            }
        }
        count += 1;
    }
    tracing::debug!(count, "Labeled connected components");
    labels.into_iter().flatten().collect()
}

/// Number of connected components, 0 for an empty graph
pub fn count_connected_components<G>(graph: &G) -> usize
where
    G: Navigable + ?Sized,
{
    connected_components(graph).into_iter().max().map_or(0, |label| label + 1)
}

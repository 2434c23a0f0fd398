//! Depth-first search in recursive and iterative form.
//!
//! Both forms visit neighbors in adjacency-list order and return vertices in discovery
//! (pre-)order. The iterative form keeps one neighbor cursor per stack entry and always
//! advances the top entry to its first unvisited neighbor, which reproduces the recursive order
//! exactly.

use super::adjacency::{check_start, Navigable};
use crate::SylvaResult;
use tracing_attributes::instrument;

/// Iterator for a lazy depth-first search from a start vertex
pub struct DfsIterator<'a, G>
where
    G: Navigable + ?Sized,
{
    graph: &'a G,
    visited: Vec<bool>,
    stack: Vec<std::slice::Iter<'a, usize>>,
    root: Option<usize>,
}

impl<'a, G> DfsIterator<'a, G>
where
    G: Navigable + ?Sized,
{
    /// Fails if `start` is out of bound of a non-empty graph. Yields nothing for an empty graph.
    pub fn new(graph: &'a G, start: usize) -> SylvaResult<Self> {
        let root = check_start(graph, start)?.then_some(start);
        Ok(DfsIterator {
            graph,
            visited: vec![false; graph.vertex_count()],
            stack: Vec::new(),
            root,
        })
    }
}

impl<'a, G> Iterator for DfsIterator<'a, G>
where
    G: Navigable + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.visited[root] = true;
            self.stack.push(self.graph.neighbors(root).iter());
            return Some(root);
        }
        while let Some(last) = self.stack.last_mut() {
            match last.find(|&&neighbor| !self.visited[neighbor]).copied() {
                Some(vertex) => {
                    self.visited[vertex] = true;
                    self.stack.push(self.graph.neighbors(vertex).iter());
                    return Some(vertex);
                }
                // backtrack
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Vertices reachable from `start` in depth-first order, recursive.
///
/// The recursion depth equals the longest discovery path, prefer [dfs_iterative] for deep
/// graphs.
#[instrument(level = "debug", skip(graph))]
pub fn dfs_recursive<G>(graph: &G, start: usize) -> SylvaResult<Vec<usize>>
where
    G: Navigable + ?Sized,
{
    if !check_start(graph, start)? {
        return Ok(vec![]);
    }
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    Ok(order)
}

fn visit<G>(graph: &G, vertex: usize, visited: &mut [bool], order: &mut Vec<usize>)
where
    G: Navigable + ?Sized,
{
    visited[vertex] = true;
    order.push(vertex);
    for &neighbor in graph.neighbors(vertex) {
        if !visited[neighbor] {
            visit(graph, neighbor, visited, order);
        }
    }
}

/// Vertices reachable from `start` in depth-first order, with an explicit stack
#[instrument(level = "debug", skip(graph))]
pub fn dfs_iterative<G>(graph: &G, start: usize) -> SylvaResult<Vec<usize>>
where
    G: Navigable + ?Sized,
{
    Ok(DfsIterator::new(graph, start)?.collect())
}

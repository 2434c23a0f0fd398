//! Adjacency-list view of a graph and the [Navigable] interface the search algorithms use.
//!
//! Vertices are identified by `0..vertex_count`. Neighbor lists are ordered, and may contain
//! self-loops and repeated entries. The search algorithms never mutate a graph.

use crate::{SylvaError, SylvaResult};

/// Read access to the ordered neighbor lists of a graph
pub trait Navigable {
    fn vertex_count(&self) -> usize;

    /// Neighbors of `vertex` in list order. `vertex` must be below [Navigable::vertex_count]
    fn neighbors(&self, vertex: usize) -> &[usize];

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    fn contains(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

impl Navigable for [Vec<usize>] {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        &self[vertex]
    }
}

impl Navigable for Vec<Vec<usize>> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        &self[vertex]
    }
}

/// Fails with [SylvaError::VertexOutOfBound] if `vertex` is not part of `graph`
pub(crate) fn check_vertex<G>(graph: &G, vertex: usize) -> SylvaResult<()>
where
    G: Navigable + ?Sized,
{
    if graph.contains(vertex) {
        Ok(())
    } else {
        Err(SylvaError::VertexOutOfBound {
            vertex,
            vertex_count: graph.vertex_count(),
        })
    }
}

/// Entry check for searches starting at `vertex`.
///
/// Returns `Ok(false)` for an empty graph (the search yields an empty result), `Ok(true)` if
/// the search can start, and an error if `vertex` is out of bound of a non-empty graph.
pub(crate) fn check_start<G>(graph: &G, vertex: usize) -> SylvaResult<bool>
where
    G: Navigable + ?Sized,
{
    if graph.is_empty() {
        return Ok(false);
    }
    check_vertex(graph, vertex)?;
    Ok(true)
}

/// Whether an edge list describes arcs or symmetric edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Directed,
    /// Every edge is stored in both neighbor lists
    Undirected,
}

/// Graph stored as one ordered neighbor list per vertex.
///
/// Unlike a raw `Vec<Vec<usize>>`, an adjacency list is validated on construction: every
/// neighbor refers to an existing vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Constructor. Creates `vertex_count` vertices without edges.
    pub fn new(vertex_count: usize) -> Self {
        AdjacencyList {
            adjacency: vec![vec![]; vertex_count],
        }
    }

    /// Constructor. Creates an empty graph with memory reserved for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        AdjacencyList {
            adjacency: Vec::with_capacity(capacity),
        }
    }

    /// Builds a graph from an edge list. Undirected edges are inserted in both directions.
    pub fn from_edges<I>(vertex_count: usize, edges: I, direction: Direction) -> SylvaResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
            if direction == Direction::Undirected && from != to {
                graph.add_edge(to, from)?;
            }
        }
        Ok(graph)
    }

    /// Appends a vertex without edges and returns its id
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(vec![]);
        self.adjacency.len() - 1
    }

    /// Appends `to` to the neighbor list of `from`
    pub fn add_edge(&mut self, from: usize, to: usize) -> SylvaResult<()> {
        check_vertex(&*self, from)?;
        if !self.contains(to) {
            return Err(SylvaError::DanglingNeighbor {
                vertex: from,
                neighbor: to,
            });
        }
        self.adjacency[from].push(to);
        Ok(())
    }

    /// Number of stored arcs (an undirected edge counts twice, a self-loop once)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Graph with every arc reversed. Neighbor lists are ordered by source vertex.
    pub fn transposed(&self) -> Self {
        let mut transposed = Self::new(self.adjacency.len());
        for (from, neighbors) in self.adjacency.iter().enumerate() {
            for &to in neighbors {
                transposed.adjacency[to].push(from);
            }
        }
        transposed
    }
}

impl Navigable for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }
}

impl TryFrom<Vec<Vec<usize>>> for AdjacencyList {
    type Error = SylvaError;

    /// Validates raw neighbor lists, failing on the first neighbor outside the graph
    fn try_from(adjacency: Vec<Vec<usize>>) -> SylvaResult<Self> {
        let vertex_count = adjacency.len();
        for (vertex, neighbors) in adjacency.iter().enumerate() {
            if let Some(&neighbor) = neighbors.iter().find(|&&neighbor| neighbor >= vertex_count) {
                return Err(SylvaError::DanglingNeighbor { vertex, neighbor });
            }
        }
        Ok(AdjacencyList { adjacency })
    }
}

impl From<AdjacencyList> for Vec<Vec<usize>> {
    fn from(value: AdjacencyList) -> Self {
        value.adjacency
    }
}

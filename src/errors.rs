//! Provides the error type used throughout this crate.
//!
//! Absent roots, empty graphs and unreachable targets are *not* errors. They produce empty
//! results. Errors are reserved for precondition violations and for results that cannot exist.

use thiserror::Error;

/// Side of a binary node a child is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The error type used throughout this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SylvaError {
    // Tree errors
    #[error("Node reference {0} is not part of the tree")]
    UnknownNode(usize),
    #[error("No root node set")]
    RootNotSet,
    #[error("The {side} child of node {parent} is already set")]
    SlotOccupied { parent: usize, side: Side },
    // Graph errors
    #[error("Vertex {vertex} is out of bound (graph has {vertex_count} vertices)")]
    VertexOutOfBound { vertex: usize, vertex_count: usize },
    #[error("Vertex {vertex} lists neighbor {neighbor} which is not in the graph")]
    DanglingNeighbor { vertex: usize, neighbor: usize },
    #[error("Forward graph has {forward} vertices but backward graph has {backward}")]
    GraphSizeMismatch { forward: usize, backward: usize },
    #[error("Graph contains a cycle, no topological order exists")]
    CycleDetected,
}

/// Shortcut for results carrying a [SylvaError]
pub type SylvaResult<T> = Result<T, SylvaError>;

//! Definition of the interfaces for binary tree iteration

use super::ArenaIndex;

/// Container that holds data in a binary tree
pub trait Nodelike<Load> {
    fn is_leaf(&self) -> bool;
    fn get(&self) -> &Load;

    /// Position of the node in its tree
    fn index(&self) -> ArenaIndex;
    fn left(&self) -> Option<ArenaIndex>;
    fn right(&self) -> Option<ArenaIndex>;

    /// Get the node's distance to the root node (the root has depth 0).
    fn depth(&self) -> usize;
}

/// Read access to the nodes of a binary tree.
pub trait BaseDirectionIterable<Load> {
    /// Nodes cannot hold references so that iterators can borrow them from the tree
    type Node: Nodelike<Load> + 'static;

    /// The root, `None` for an empty tree
    fn root(&self) -> Option<&Self::Node>;
    fn node(&self, index: ArenaIndex) -> Option<&Self::Node>;
    fn nodes(&self) -> &[Self::Node];
}

/// Lazy traversal of a binary tree in both directions.
///
/// The iterators only borrow the tree and visit each node exactly once. They yield nodes in the
/// same order as the eager [pre-order](crate::BinaryArenaTree::pre_order_iterative) and
/// [level-order](crate::BinaryArenaTree::level_order) traversals.
pub trait DirectionIterable<Load>: BaseDirectionIterable<Load> {
    /// Depth-first (pre-order) iteration over the whole tree
    fn iter_depth(&self) -> impl Iterator<Item = &Self::Node>;
    /// Depth-first (pre-order) iteration over the subtree below `root` (inclusive)
    fn iter_depth_sub(&self, root: &Self::Node) -> impl Iterator<Item = &Self::Node>;

    /// Breadth-first (level-order) iteration over the whole tree
    fn iter_breadth(&self) -> impl Iterator<Item = &Self::Node>;
    fn iter_breadth_sub(&self, root: &Self::Node) -> impl Iterator<Item = &Self::Node>;
}

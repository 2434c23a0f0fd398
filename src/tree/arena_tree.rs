//! Implementation of a binary tree with
//! [arena allocation](https://en.wikipedia.org/wiki/Region-based_memory_management).
//!
//! Nodes own their children through indices into the arena. Every node is attached to at most
//! one parent slot, so the structure stays a tree. The traversal algorithms live in the sibling
//! modules ([super::depth], [super::breadth], [super::boundary], [super::morris]).

use super::iterables::{BaseDirectionIterable, DirectionIterable, Nodelike};
use super::{BreadthFirstIterator, DepthFirstIterator};
use crate::{Side, SylvaError, SylvaResult};
use std::collections::VecDeque;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct ArenaIndex(pub usize);

/// A node structure to be used in an arena allocated binary tree
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryArenaNode<Load> {
    /// The user-defined load that the node owns
    pub(super) load: Load,
    /// Index in the arena allocation
    pub(super) index: ArenaIndex,
    pub(super) left: Option<ArenaIndex>,
    /// Also holds the temporary thread during a Morris traversal
    pub(super) right: Option<ArenaIndex>,
    /// Depth in the tree
    depth: usize,
    parent_ref: Option<ArenaIndex>,
}

impl<Load> BinaryArenaNode<Load> {
    fn new(load: Load, index: ArenaIndex, depth: usize, parent_ref: Option<ArenaIndex>) -> Self {
        BinaryArenaNode {
            load,
            index,
            left: None,
            right: None,
            depth,
            parent_ref,
        }
    }

    /// The parent node's index, `None` for the root
    pub fn parent(&self) -> Option<ArenaIndex> {
        self.parent_ref
    }
}

impl<Load> Nodelike<Load> for BinaryArenaNode<Load> {
    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn get(&self) -> &Load {
        &self.load
    }

    fn index(&self) -> ArenaIndex {
        self.index
    }

    fn left(&self) -> Option<ArenaIndex> {
        self.left
    }

    fn right(&self) -> Option<ArenaIndex> {
        self.right
    }

    fn depth(&self) -> usize {
        self.depth
    }
}

/// Binary tree that uses arena allocation.
///
/// The root (if any) is always stored at index 0. Trees can be compared structurally with `==`,
/// which compares loads and child links of every node.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryArenaTree<Load> {
    /// Memory allocated area for nodes
    pub(super) nodes: Vec<BinaryArenaNode<Load>>,

    /// Depth of the deepest node. Used for sizing traversal stacks
    pub(super) max_depth: usize,
}

impl<Load> BinaryArenaTree<Load> {
    /// Constructor. Creates an empty tree.
    pub fn new() -> Self {
        BinaryArenaTree {
            nodes: vec![],
            max_depth: 0,
        }
    }

    /// Constructor. Reserves memory for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryArenaTree {
            nodes: Vec::with_capacity(capacity),
            max_depth: 0,
        }
    }

    /// Builds a tree from a level-order sequence with `None` marking absent children.
    ///
    /// Children are only assigned to present nodes, i.e., an absent node does not reserve slots for
    /// its children in the sequence. An empty sequence or an absent first entry yields an empty
    /// tree. Trailing entries that have no parent left are ignored.
    pub fn from_level_order<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<Load>>,
    {
        let mut values = values.into_iter();
        let mut tree = Self::new();
        let Some(Some(root_load)) = values.next() else {
            return tree;
        };
        let root = tree.set_root(root_load);

        let mut parents = VecDeque::from([root]);
        while let Some(parent) = parents.pop_front() {
            for side in [Side::Left, Side::Right] {
                match values.next() {
                    Some(Some(load)) => parents.push_back(tree.attach(parent, load, side)),
                    Some(None) => {}
                    None => return tree,
                }
            }
        }
        tree
    }

    /// Deletes all nodes and sets a new root
    pub fn set_root(&mut self, root_load: Load) -> ArenaIndex {
        self.nodes.clear();
        self.max_depth = 0;
        self.nodes.push(BinaryArenaNode::new(root_load, ArenaIndex(0), 0, None));
        ArenaIndex(0)
    }

    /// Adds a new node as the left child of `parent`
    pub fn add_left(&mut self, load: Load, parent: ArenaIndex) -> SylvaResult<ArenaIndex> {
        self.add(load, parent, Side::Left)
    }

    /// Adds a new node as the right child of `parent`
    pub fn add_right(&mut self, load: Load, parent: ArenaIndex) -> SylvaResult<ArenaIndex> {
        self.add(load, parent, Side::Right)
    }

    /// Add a new node to the tree. The slot must be empty so that each node has a single owner.
    pub fn add(&mut self, load: Load, parent: ArenaIndex, side: Side) -> SylvaResult<ArenaIndex> {
        if self.nodes.is_empty() {
            return Err(SylvaError::RootNotSet);
        }
        let parent_node = self.nodes.get(parent.0).ok_or(SylvaError::UnknownNode(parent.0))?;
        let occupied = match side {
            Side::Left => parent_node.left.is_some(),
            Side::Right => parent_node.right.is_some(),
        };
        if occupied {
            return Err(SylvaError::SlotOccupied { parent: parent.0, side });
        }
        Ok(self.attach(parent, load, side))
    }

    /// Pushes a node into the arena and links it. The slot must be known to be free.
    fn attach(&mut self, parent: ArenaIndex, load: Load, side: Side) -> ArenaIndex {
        let index = ArenaIndex(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        match side {
            Side::Left => self.nodes[parent.0].left = Some(index),
            Side::Right => self.nodes[parent.0].right = Some(index),
        }
        self.max_depth = self.max_depth.max(depth);
        self.nodes.push(BinaryArenaNode::new(load, index, depth, Some(parent)));
        index
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest node (0 for a single node or an empty tree)
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        if self.nodes.is_empty() {
            0
        } else {
            self.max_depth + 1
        }
    }

    pub(super) fn root_index(&self) -> Option<ArenaIndex> {
        self.nodes.first().map(|node| node.index)
    }

    /// Internal lookup. Indices stored in the tree are always valid.
    pub(super) fn at(&self, index: ArenaIndex) -> &BinaryArenaNode<Load> {
        &self.nodes[index.0]
    }
}

impl<Load> Default for BinaryArenaTree<Load> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Load: 'static> BaseDirectionIterable<Load> for BinaryArenaTree<Load> {
    type Node = BinaryArenaNode<Load>;

    fn root(&self) -> Option<&Self::Node> {
        self.nodes.first()
    }

    fn node(&self, index: ArenaIndex) -> Option<&Self::Node> {
        self.nodes.get(index.0)
    }

    fn nodes(&self) -> &[Self::Node] {
        &self.nodes
    }
}

impl<Load: 'static> DirectionIterable<Load> for BinaryArenaTree<Load> {
    fn iter_depth(&self) -> impl Iterator<Item = &Self::Node> {
        DepthFirstIterator::new(self, self.root_index())
    }

    fn iter_depth_sub(&self, root: &Self::Node) -> impl Iterator<Item = &Self::Node> {
        DepthFirstIterator::new(self, Some(root.index))
    }

    fn iter_breadth(&self) -> impl Iterator<Item = &Self::Node> {
        BreadthFirstIterator::new(self, self.root_index())
    }

    fn iter_breadth_sub(&self, root: &Self::Node) -> impl Iterator<Item = &Self::Node> {
        BreadthFirstIterator::new(self, Some(root.index))
    }
}

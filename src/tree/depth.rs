//! Depth-first traversals of a binary tree: pre-, in- and post-order.
//!
//! Each order comes in a recursive form and an iterative form with an explicit stack. Both forms
//! produce identical sequences. The recursion depth of the recursive form equals the tree's
//! height, so prefer the iterative form for trees of unbounded depth.

use super::{ArenaIndex, BinaryArenaNode, BinaryArenaTree};
use tracing_attributes::instrument;

/// Iterator for a lazy, depth-first (pre-order) traversal
pub struct DepthFirstIterator<'a, Load> {
    tree: &'a BinaryArenaTree<Load>,
    stack: Vec<ArenaIndex>,
}

impl<'a, Load> DepthFirstIterator<'a, Load> {
    pub fn new(tree: &'a BinaryArenaTree<Load>, root: Option<ArenaIndex>) -> Self {
        let mut stack = Vec::with_capacity(tree.max_depth + 1);
        stack.extend(root);
        DepthFirstIterator { tree, stack }
    }
}

impl<'a, Load> Iterator for DepthFirstIterator<'a, Load> {
    type Item = &'a BinaryArenaNode<Load>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.at(self.stack.pop()?);
        // right first so that left is processed first
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(node)
    }
}

impl<Load> BinaryArenaTree<Load>
where
    Load: Clone,
{
    /// Root-left-right order, recursive
    #[instrument(level = "trace", skip(self))]
    pub fn pre_order_recursive(&self) -> Vec<Load> {
        let mut result = Vec::with_capacity(self.len());
        self.pre_order_into(self.root_index(), &mut result);
        result
    }

    fn pre_order_into(&self, index: Option<ArenaIndex>, result: &mut Vec<Load>) {
        if let Some(index) = index {
            let node = self.at(index);
            result.push(node.load.clone());
            self.pre_order_into(node.left, result);
            self.pre_order_into(node.right, result);
        }
    }

    /// Left-root-right order, recursive
    #[instrument(level = "trace", skip(self))]
    pub fn in_order_recursive(&self) -> Vec<Load> {
        let mut result = Vec::with_capacity(self.len());
        self.in_order_into(self.root_index(), &mut result);
        result
    }

    fn in_order_into(&self, index: Option<ArenaIndex>, result: &mut Vec<Load>) {
        if let Some(index) = index {
            let node = self.at(index);
            self.in_order_into(node.left, result);
            result.push(node.load.clone());
            self.in_order_into(node.right, result);
        }
    }

    /// Left-right-root order, recursive
    #[instrument(level = "trace", skip(self))]
    pub fn post_order_recursive(&self) -> Vec<Load> {
        let mut result = Vec::with_capacity(self.len());
        self.post_order_into(self.root_index(), &mut result);
        result
    }

    fn post_order_into(&self, index: Option<ArenaIndex>, result: &mut Vec<Load>) {
        if let Some(index) = index {
            let node = self.at(index);
            self.post_order_into(node.left, result);
            self.post_order_into(node.right, result);
            result.push(node.load.clone());
        }
    }

    /// Root-left-right order with an explicit stack
    #[instrument(level = "trace", skip(self))]
    pub fn pre_order_iterative(&self) -> Vec<Load> {
        DepthFirstIterator::new(self, self.root_index())
            .map(|node| node.load.clone())
            .collect()
    }

    /// Left-root-right order with an explicit stack
    #[instrument(level = "trace", skip(self))]
    pub fn in_order_iterative(&self) -> Vec<Load> {
        let mut result = Vec::with_capacity(self.len());
        let mut stack = Vec::with_capacity(self.max_depth + 1);
        let mut current = self.root_index();

        loop {
            while let Some(index) = current {
                stack.push(index);
                current = self.at(index).left;
            }
            let Some(index) = stack.pop() else {
                break;
            };
            let node = self.at(index);
            result.push(node.load.clone());
            current = node.right;
        }
        result
    }

    /// Left-right-root order with an explicit stack.
    ///
    /// Collects root-right-left (pushing left before right) and reverses the result at the end,
    /// which is equivalent to prepending each popped value.
    #[instrument(level = "trace", skip(self))]
    pub fn post_order_iterative(&self) -> Vec<Load> {
        let mut result = Vec::with_capacity(self.len());
        let mut stack = Vec::with_capacity(self.max_depth + 1);
        stack.extend(self.root_index());

        while let Some(index) = stack.pop() {
            let node = self.at(index);
            result.push(node.load.clone());
            stack.extend(node.left);
            stack.extend(node.right);
        }
        result.reverse();
        result
    }
}

#[cfg(test)]
mod tests {

    use crate::*;
    use itertools::Itertools;
    use test_log;

    //       1
    //      / \
    //     2   3
    //    / \   \
    //   4   5   6
    //      /
    //     7
    fn sample() -> BinaryArenaTree<i32> {
        BinaryArenaTree::from_level_order([
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            None,
            Some(6),
            None,
            None,
            Some(7),
        ])
    }

    #[test_log::test]
    fn test_orders() {
        let tree = sample();
        assert_eq!(tree.pre_order_recursive(), &[1, 2, 4, 5, 7, 3, 6]);
        assert_eq!(tree.in_order_recursive(), &[4, 2, 7, 5, 1, 3, 6]);
        assert_eq!(tree.post_order_recursive(), &[4, 7, 5, 2, 6, 3, 1]);
    }

    #[test_log::test]
    fn test_iterative_matches_recursive() {
        let tree = sample();
        assert_eq!(tree.pre_order_iterative(), tree.pre_order_recursive());
        assert_eq!(tree.in_order_iterative(), tree.in_order_recursive());
        assert_eq!(tree.post_order_iterative(), tree.post_order_recursive());
    }

    #[test_log::test]
    fn test_empty_and_single() {
        let tree = BinaryArenaTree::<i32>::new();
        assert!(tree.pre_order_recursive().is_empty());
        assert!(tree.in_order_iterative().is_empty());
        assert!(tree.post_order_iterative().is_empty());
        assert_eq!(tree.iter_depth().count(), 0);

        let tree = BinaryArenaTree::from_level_order([Some(42)]);
        assert_eq!(tree.post_order_iterative(), &[42]);
        assert_eq!(tree.in_order_recursive(), &[42]);
    }

    #[test_log::test]
    fn test_linear_tree() {
        // degenerated to a left-leaning list
        let mut tree = BinaryArenaTree::new();
        let mut parent = tree.set_root(0);
        for i in 1..100 {
            parent = tree.add_left(i, parent).unwrap();
        }
        assert_eq!(tree.pre_order_iterative(), (0..100).collect_vec());
        assert_eq!(tree.in_order_iterative(), (0..100).rev().collect_vec());
        assert_eq!(tree.post_order_iterative(), tree.in_order_iterative());
    }

    #[test_log::test]
    fn test_lazy_iteration() {
        let tree = sample();
        let result = tree.iter_depth().map(|n| *n.get()).collect_vec();
        assert_eq!(result, tree.pre_order_recursive());

        // subtree below node 2
        let second = tree.node(tree.root().unwrap().left().unwrap()).unwrap();
        let result = tree.iter_depth_sub(second).map(|n| *n.get()).collect_vec();
        assert_eq!(result, &[2, 4, 5, 7]);

        // early termination leaves nothing behind
        assert_eq!(tree.iter_depth().map(|n| *n.get()).take(2).collect_vec(), &[1, 2]);
    }
}

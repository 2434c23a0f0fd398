//! Boundary traversal: the outline of a binary tree read counter-clockwise from the root.

use super::{ArenaIndex, BinaryArenaNode, BinaryArenaTree, Nodelike};
use tracing_attributes::instrument;

impl<Load> BinaryArenaTree<Load>
where
    Load: Clone,
{
    /// Root, then the left boundary top-down, then all leaves from left to right, then the right
    /// boundary bottom-up.
    ///
    /// The left boundary follows left children (right children where no left child exists) from
    /// the root's left child, the right boundary mirrors it. Leaves are never part of a boundary,
    /// so each node is emitted at most once. A root without children is emitted once.
    #[instrument(level = "trace", skip(self))]
    pub fn boundary_order(&self) -> Vec<Load> {
        let Some(root) = self.root_index() else {
            return vec![];
        };
        let root_node = self.at(root);
        let mut result = vec![root_node.load.clone()];
        if root_node.is_leaf() {
            return result;
        }

        let left_boundary = self.boundary_path(root_node.left, |node| node.left.or(node.right));
        result.extend(left_boundary.into_iter().map(|index| self.at(index).load.clone()));

        for subtree in [root_node.left, root_node.right] {
            self.leaves_into(subtree, &mut result);
        }

        let right_boundary = self.boundary_path(root_node.right, |node| node.right.or(node.left));
        result.extend(right_boundary.into_iter().rev().map(|index| self.at(index).load.clone()));
        result
    }

    /// Follows `next` from `start` and collects the non-leaf nodes on the way
    fn boundary_path<F>(&self, start: Option<ArenaIndex>, next: F) -> Vec<ArenaIndex>
    where
        F: Fn(&BinaryArenaNode<Load>) -> Option<ArenaIndex>,
    {
        let mut path = Vec::with_capacity(self.max_depth);
        let mut current = start;
        while let Some(index) = current {
            let node = self.at(index);
            if node.is_leaf() {
                break;
            }
            path.push(index);
            current = next(node);
        }
        path
    }

    /// Appends the leaves below `start` (inclusive) from left to right
    fn leaves_into(&self, start: Option<ArenaIndex>, result: &mut Vec<Load>) {
        let mut stack = Vec::with_capacity(self.max_depth + 1);
        stack.extend(start);
        while let Some(index) = stack.pop() {
            let node = self.at(index);
            if node.is_leaf() {
                result.push(node.load.clone());
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }
}

#[cfg(test)]
mod tests {

    use crate::*;
    use test_log;

    #[test_log::test]
    fn test_boundary() {
        //          20
        //        /    \
        //       8      22
        //      / \       \
        //     4   12      25
        //        /  \
        //       10   14
        let tree = BinaryArenaTree::from_level_order([
            Some(20),
            Some(8),
            Some(22),
            Some(4),
            Some(12),
            None,
            Some(25),
            None,
            None,
            Some(10),
            Some(14),
        ]);
        assert_eq!(tree.boundary_order(), &[20, 8, 4, 10, 14, 25, 22]);
    }

    #[test_log::test]
    fn test_boundary_without_left_subtree() {
        //   1
        //    \
        //     2
        //    / \
        //   3   4
        let tree = BinaryArenaTree::from_level_order([Some(1), None, Some(2), Some(3), Some(4)]);
        assert_eq!(tree.boundary_order(), &[1, 3, 4, 2]);
    }

    #[test_log::test]
    fn test_boundary_zigzag_left_path() {
        //       1
        //      /
        //     2
        //      \
        //       3
        //      /
        //     4
        let mut tree = BinaryArenaTree::new();
        let root = tree.set_root(1);
        let second = tree.add_left(2, root).unwrap();
        let third = tree.add_right(3, second).unwrap();
        tree.add_left(4, third).unwrap();
        assert_eq!(tree.boundary_order(), &[1, 2, 3, 4]);
    }

    #[test_log::test]
    fn test_boundary_trivial() {
        assert!(BinaryArenaTree::<i32>::new().boundary_order().is_empty());
        assert_eq!(BinaryArenaTree::from_level_order([Some(7)]).boundary_order(), &[7]);
        let tree = BinaryArenaTree::from_level_order([Some(1), Some(2), Some(3)]);
        assert_eq!(tree.boundary_order(), &[1, 2, 3]);
    }
}

//! In-order traversal with O(1) auxiliary space
//! ([Morris traversal](https://en.wikipedia.org/wiki/Tree_traversal#Morris_in-order_traversal_using_threading)).
//!
//! Instead of a stack, the traversal temporarily stores a *thread* in the empty right slot of a
//! node's in-order predecessor, pointing back to the node. Threads are removed when they are
//! followed. The traversal takes the tree by `&mut`, so no other traversal can observe a
//! threaded tree, and all threads are removed before the call returns, including on early exit
//! and when the visitor panics.

use super::{ArenaIndex, BinaryArenaNode, BinaryArenaTree};
use std::ops::ControlFlow;
use tracing_attributes::instrument;

/// Walk state of a Morris traversal.
///
/// Dropping the walk before it is exhausted completes it without emitting values, which removes
/// all remaining threads.
struct ThreadedWalk<'a, Load> {
    nodes: &'a mut [BinaryArenaNode<Load>],
    current: Option<ArenaIndex>,
}

impl<'a, Load> ThreadedWalk<'a, Load> {
    fn new(nodes: &'a mut [BinaryArenaNode<Load>], root: Option<ArenaIndex>) -> Self {
        ThreadedWalk { nodes, current: root }
    }

    /// Advances to the next node in in-order and returns it
    fn step(&mut self) -> Option<ArenaIndex> {
        while let Some(current) = self.current {
            let Some(left) = self.nodes[current.0].left else {
                self.current = self.nodes[current.0].right;
                return Some(current);
            };

            let predecessor = self.predecessor(left, current);
            if self.nodes[predecessor.0].right == Some(current) {
                // Second visit: the left subtree is done
                self.nodes[predecessor.0].right = None;
                self.current = self.nodes[current.0].right;
                return Some(current);
            }
            self.nodes[predecessor.0].right = Some(current);
            self.current = Some(left);
        }
        None
    }

    /// Rightmost node in the left subtree of `current`, stopping at a thread back to `current`
    fn predecessor(&self, left: ArenaIndex, current: ArenaIndex) -> ArenaIndex {
        let mut predecessor = left;
        while let Some(right) = self.nodes[predecessor.0].right {
            if right == current {
                break;
            }
            predecessor = right;
        }
        predecessor
    }

    fn load(&self, index: ArenaIndex) -> &Load {
        &self.nodes[index.0].load
    }
}

impl<Load> Drop for ThreadedWalk<'_, Load> {
    fn drop(&mut self) {
        if self.current.is_some() {
            tracing::debug!("Morris traversal left early, removing remaining threads");
            while self.step().is_some() {}
        }
    }
}

impl<Load> BinaryArenaTree<Load> {
    /// Visits the values in in-order without a stack.
    ///
    /// `visit` can stop the traversal by returning [ControlFlow::Break], whose value is returned.
    /// Returns `None` if all nodes have been visited. The tree is identical to its state before
    /// the call once this method returns or unwinds.
    #[instrument(level = "trace", skip(self, visit))]
    pub fn morris_visit<B, F>(&mut self, mut visit: F) -> Option<B>
    where
        F: FnMut(&Load) -> ControlFlow<B>,
    {
        let root = self.root_index();
        let mut walk = ThreadedWalk::new(&mut self.nodes, root);
        while let Some(index) = walk.step() {
            if let ControlFlow::Break(value) = visit(walk.load(index)) {
                return Some(value);
            }
        }
        None
    }

    /// Left-root-right order with O(1) auxiliary space. Equal to
    /// [in_order_recursive](BinaryArenaTree::in_order_recursive).
    pub fn morris_in_order(&mut self) -> Vec<Load>
    where
        Load: Clone,
    {
        let mut result = Vec::with_capacity(self.len());
        self.morris_visit(|load| {
            result.push(load.clone());
            ControlFlow::<()>::Continue(())
        });
        result
    }
}

#[cfg(test)]
mod tests {

    use crate::*;
    use std::ops::ControlFlow;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use test_log;

    //         4
    //       /   \
    //      2     6
    //     / \   / \
    //    1   3 5   7
    //               \
    //                8
    fn sample() -> BinaryArenaTree<i32> {
        BinaryArenaTree::from_level_order([
            Some(4),
            Some(2),
            Some(6),
            Some(1),
            Some(3),
            Some(5),
            Some(7),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            Some(8),
        ])
    }

    #[test_log::test]
    fn test_morris_in_order() {
        let mut tree = sample();
        let before = tree.clone();
        assert_eq!(tree.morris_in_order(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(tree.morris_in_order(), tree.in_order_recursive());
        assert_eq!(tree, before);
    }

    #[test_log::test]
    fn test_morris_early_exit_restores() {
        let mut tree = sample();
        let before = tree.clone();

        // stop in the middle of the left subtree, while threads are installed
        let found = tree.morris_visit(|value| match value {
            2 => ControlFlow::Break(*value),
            _ => ControlFlow::Continue(()),
        });
        assert_eq!(found, Some(2));
        assert_eq!(tree, before);

        let mut seen = vec![];
        let found = tree.morris_visit(|value| {
            seen.push(*value);
            if *value == 5 {
                ControlFlow::Break("five")
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(found, Some("five"));
        assert_eq!(seen, &[1, 2, 3, 4, 5]);
        assert_eq!(tree, before);
    }

    #[test_log::test]
    fn test_morris_panic_restores() {
        let mut tree = sample();
        let before = tree.clone();

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            tree.morris_visit(|value| {
                if *value == 1 {
                    panic!("visitor failed");
                }
                ControlFlow::<()>::Continue(())
            })
        }));
        assert!(outcome.is_err());
        assert_eq!(tree, before);
    }

    #[test_log::test]
    fn test_morris_degenerated() {
        assert!(BinaryArenaTree::<i32>::new().morris_in_order().is_empty());

        let mut tree = BinaryArenaTree::new();
        let mut parent = tree.set_root(10);
        for value in (0..10).rev() {
            parent = tree.add_left(value, parent).unwrap();
        }
        let before = tree.clone();
        assert_eq!(tree.morris_in_order(), (0..=10).collect::<Vec<_>>());
        assert_eq!(tree, before);
    }
}

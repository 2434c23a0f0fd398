//! Breadth-first traversals of a binary tree: level order (flat and grouped), zigzag level
//! order, and vertical order.

use super::{ArenaIndex, BinaryArenaNode, BinaryArenaTree};
use std::collections::{BTreeMap, VecDeque};
use tracing_attributes::instrument;

/// Iterator for a lazy, breadth-first (level-order) traversal
pub struct BreadthFirstIterator<'a, Load> {
    tree: &'a BinaryArenaTree<Load>,
    queue: VecDeque<ArenaIndex>,
}

impl<'a, Load> BreadthFirstIterator<'a, Load> {
    pub fn new(tree: &'a BinaryArenaTree<Load>, root: Option<ArenaIndex>) -> Self {
        BreadthFirstIterator {
            tree,
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, Load> Iterator for BreadthFirstIterator<'a, Load> {
    type Item = &'a BinaryArenaNode<Load>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.at(self.queue.pop_front()?);
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(node)
    }
}

impl<Load> BinaryArenaTree<Load>
where
    Load: Clone,
{
    /// All values, level by level from left to right
    #[instrument(level = "trace", skip(self))]
    pub fn level_order(&self) -> Vec<Load> {
        BreadthFirstIterator::new(self, self.root_index())
            .map(|node| node.load.clone())
            .collect()
    }

    /// Values grouped by level, the root's level first
    #[instrument(level = "trace", skip(self))]
    pub fn level_order_by_level(&self) -> Vec<Vec<Load>> {
        let mut levels = Vec::with_capacity(self.height());
        let mut queue: VecDeque<ArenaIndex> = self.root_index().into_iter().collect();

        while !queue.is_empty() {
            // The queue holds exactly one level at this point
            let width = queue.len();
            let mut level = Vec::with_capacity(width);
            for _ in 0..width {
                let Some(index) = queue.pop_front() else {
                    break;
                };
                let node = self.at(index);
                level.push(node.load.clone());
                queue.extend(node.left);
                queue.extend(node.right);
            }
            levels.push(level);
        }
        levels
    }

    /// Level order where every other level is reversed, starting left-to-right at the root
    #[instrument(level = "trace", skip(self))]
    pub fn zigzag_level_order(&self) -> Vec<Vec<Load>> {
        let mut left_to_right = true;
        let mut levels = self.level_order_by_level();
        for level in levels.iter_mut() {
            if !left_to_right {
                level.reverse();
            }
            left_to_right = !left_to_right;
        }
        levels
    }

    /// Values grouped by horizontal column, ordered from the leftmost column to the rightmost.
    ///
    /// The root is in column 0, a left child one column left of its parent, a right child one
    /// column right. Within a column, values appear in level order.
    #[instrument(level = "trace", skip(self))]
    pub fn vertical_order(&self) -> Vec<Vec<Load>> {
        let mut columns: BTreeMap<isize, Vec<Load>> = BTreeMap::new();
        let mut queue: VecDeque<(ArenaIndex, isize)> = self.root_index().map(|root| (root, 0)).into_iter().collect();

        while let Some((index, column)) = queue.pop_front() {
            let node = self.at(index);
            columns.entry(column).or_default().push(node.load.clone());
            queue.extend(node.left.map(|left| (left, column - 1)));
            queue.extend(node.right.map(|right| (right, column + 1)));
        }
        tracing::trace!(columns = columns.len(), "Grouped nodes by column");
        columns.into_values().collect()
    }
}

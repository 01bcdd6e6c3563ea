//! Insertion and insertion fixup.

use tracing::trace;

use super::node::Node;
use super::{Color, NodeId, RedBlackTree, Side};
use crate::error::TreeError;

impl<K: Ord + Copy> RedBlackTree<K> {
    /// Inserts a key into the tree.
    ///
    /// A key equal to an existing one is stored as an additional node to the
    /// right of it, so both remain findable and erasable.
    ///
    /// Returns the handle of the root after rebalancing.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::AllocationFailure`] if no storage could be
    /// reserved for the new node. The tree is not modified in that case.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// let root = tree.insert(3).unwrap();
    ///
    /// // The ascending run has been rotated so that 2 sits on top.
    /// assert_eq!(tree.key(root).unwrap(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<NodeId, TreeError> {
        self.reserve_node()?;

        let mut parent = None;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            parent = Some(current);
            cursor = self.child_of(current, Self::descent_side(&key, &self.node(current).key));
        }

        let inserted = self.allocate(Node::new_red(key, parent));
        match parent {
            None => self.root = Some(inserted),
            Some(parent) => {
                let side = Self::descent_side(&key, &self.node(parent).key);
                self.node_mut(parent).set_child(side, Some(inserted));
            }
        }
        self.length += 1;
        trace!(index = inserted, len = self.length, "inserted node");

        self.insert_fixup(inserted);

        let Some(root) = self.root() else {
            unreachable!("tree is empty right after an insertion")
        };
        Ok(root)
    }

    /// Inserts every key yielded by `keys`, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::AllocationFailure`] if a node could not be
    /// allocated. Keys inserted before the failure stay in the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.try_extend([3, 1, 2]).unwrap();
    /// assert_eq!(tree.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn try_extend<I>(&mut self, keys: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.insert(key)?;
        }
        Ok(())
    }

    /// Strictly smaller keys go left; equal and greater keys go right.
    #[inline]
    fn descent_side(key: &K, node_key: &K) -> Side {
        if key < node_key {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Restores the red-black invariants after `node` was attached as a red
    /// leaf.
    fn insert_fixup(&mut self, mut node: usize) {
        while let Some(parent) = self.parent_of(node)
            && self.node(parent).color == Color::Red
        {
            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.parent_of(parent) else {
                break;
            };
            let side = self.side_of(grandparent, Some(parent));
            let uncle = self.child_of(grandparent, side.opposite());

            if let Some(uncle) = uncle
                && self.node(uncle).color == Color::Red
            {
                trace!(node, "insert fixup: red uncle, recolor and ascend");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.child_of(parent, side.opposite()) == Some(node) {
                trace!(node, "insert fixup: triangle, rotate at parent");
                self.rotate(parent, side);
                (node, parent) = (parent, node);
            }

            trace!(node, "insert fixup: line, rotate at grandparent");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_insert_into_empty_makes_black_root() {
        let mut tree = RedBlackTree::new();
        let root = tree.insert(10).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.key(root).unwrap(), 10);
        assert_eq!(tree.color(root).unwrap(), Color::Black);
        assert_eq!(tree.parent(root).unwrap(), None);
    }

    #[rstest]
    fn test_insert_returns_current_root() {
        let mut tree = RedBlackTree::new();
        tree.insert(10).unwrap();
        tree.insert(20).unwrap();
        let root = tree.insert(30).unwrap();

        assert_eq!(Some(root), tree.root());
        assert_eq!(tree.key(root).unwrap(), 20);
    }

    #[rstest]
    #[case::left_line(vec![30, 20, 10], 20)]
    #[case::right_line(vec![10, 20, 30], 20)]
    #[case::left_triangle(vec![30, 10, 20], 20)]
    #[case::right_triangle(vec![10, 30, 20], 20)]
    fn test_rotation_cases_settle_middle_key_on_top(
        #[case] keys: Vec<i32>,
        #[case] expected_root: i32,
    ) {
        let mut tree = RedBlackTree::new();
        tree.try_extend(keys).unwrap();
        let root = tree.root().unwrap();

        assert_eq!(tree.key(root).unwrap(), expected_root);
        assert_eq!(tree.color(root).unwrap(), Color::Black);
        for side in [Side::Left, Side::Right] {
            let child = tree.child(root, side).unwrap().unwrap();
            assert_eq!(tree.color(child).unwrap(), Color::Red);
        }
        assert_eq!(tree.validate(), Ok(1));
    }

    #[rstest]
    fn test_red_uncle_recolors_without_rotation() {
        let mut tree = RedBlackTree::new();
        tree.try_extend([20, 10, 30]).unwrap();
        let root_before = tree.root();

        tree.insert(5).unwrap();

        assert_eq!(tree.root(), root_before);
        let root = tree.root().unwrap();
        for side in [Side::Left, Side::Right] {
            let child = tree.child(root, side).unwrap().unwrap();
            assert_eq!(tree.color(child).unwrap(), Color::Black);
        }
        let five = tree.find(&5).unwrap();
        assert_eq!(tree.color(five).unwrap(), Color::Red);
        assert_eq!(tree.validate(), Ok(2));
    }

    #[rstest]
    fn test_equal_key_goes_right() {
        let mut tree = RedBlackTree::new();
        let first = tree.insert(7).unwrap();
        tree.insert(7).unwrap();

        let right = tree.child(first, Side::Right).unwrap().unwrap();
        assert_eq!(tree.key(right).unwrap(), 7);
        assert_eq!(tree.child(first, Side::Left).unwrap(), None);
        assert_eq!(tree.len(), 2);
    }

    #[rstest]
    fn test_ascending_inserts_stay_balanced() {
        let mut tree = RedBlackTree::new();
        tree.try_extend(0..1024).unwrap();

        assert!(tree.validate().is_ok());
        assert!(tree.height() <= 2 * 11);
    }

    #[rstest]
    fn test_insert_reuses_erased_slot() {
        let mut tree = RedBlackTree::new();
        tree.try_extend([1, 2, 3]).unwrap();
        let slot_count = tree.slots.len();

        let two = tree.find(&2).unwrap();
        tree.erase(two).unwrap();
        tree.insert(4).unwrap();

        assert_eq!(tree.slots.len(), slot_count);
        assert!(tree.key(two).is_err());
        assert_eq!(tree.to_vec(), vec![1, 3, 4]);
    }
}

//! Lookup: find, min and max.

use std::cmp::Ordering;

use super::{NodeId, RedBlackTree, Side};
use crate::error::TreeError;

impl<K: Copy> RedBlackTree<K> {
    /// Returns the key stored in a node.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StaleHandle`] if the node has been erased.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// let root = tree.insert(5).unwrap();
    /// assert_eq!(tree.key(root).unwrap(), 5);
    /// ```
    pub fn key(&self, id: NodeId) -> Result<K, TreeError> {
        self.resolve(id).map(|index| self.node(index).key)
    }

    /// Returns the node with the smallest key, or `None` if the tree is empty.
    ///
    /// Among equal smallest keys, the one inserted first is returned.
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
    /// tree.try_extend([3, 1, 2]).unwrap();
    ///
    /// let min = tree.min().unwrap();
    /// assert_eq!(tree.key(min).unwrap(), 1);
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<NodeId> {
        self.root
            .map(|root| self.handle(self.subtree_extreme(root, Side::Left)))
    }

    /// Returns the node with the largest key, or `None` if the tree is empty.
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
    /// tree.try_extend([3, 1, 2]).unwrap();
    ///
    /// let max = tree.max().unwrap();
    /// assert_eq!(tree.key(max).unwrap(), 3);
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<NodeId> {
        self.root
            .map(|root| self.handle(self.subtree_extreme(root, Side::Right)))
    }

    /// Walks from `subtree_root` along `side` links until there are none left.
    pub(super) fn subtree_extreme(&self, subtree_root: usize, side: Side) -> usize {
        let mut cursor = subtree_root;
        while let Some(next) = self.child_of(cursor, side) {
            cursor = next;
        }
        cursor
    }
}

impl<K: Ord + Copy> RedBlackTree<K> {
    /// Returns a node holding `key`, or `None` if there is none.
    ///
    /// When several nodes hold `key`, the first one met on the way down from
    /// the root is returned.
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
    /// tree.try_extend([10, 5, 8]).unwrap();
    ///
    /// let node = tree.find(&8).unwrap();
    /// assert_eq!(tree.key(node).unwrap(), 8);
    /// assert_eq!(tree.find(&9), None);
    /// ```
    #[must_use]
    pub fn find(&self, key: &K) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(current) = cursor {
            cursor = match key.cmp(&self.node(current).key) {
                Ordering::Equal => return Some(self.handle(current)),
                Ordering::Less => self.child_of(current, Side::Left),
                Ordering::Greater => self.child_of(current, Side::Right),
            };
        }
        None
    }

    /// Returns `true` if some node holds `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }
}

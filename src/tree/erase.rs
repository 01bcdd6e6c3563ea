//! Transplant, erase and erase fixup.

use tracing::trace;

use super::{Color, NodeId, RedBlackTree, Side};
use crate::error::TreeError;

impl<K: Copy> RedBlackTree<K> {
    /// Removes a node from the tree and returns its key.
    ///
    /// The handle, and only that handle, becomes stale. Handles to every other
    /// node stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StaleHandle`] if the node has already been erased.
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
    /// tree.try_extend([2, 1, 3]).unwrap();
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(tree.erase(root).unwrap(), 2);
    /// assert_eq!(tree.to_vec(), vec![1, 3]);
    /// assert!(tree.erase(root).is_err());
    /// ```
    pub fn erase(&mut self, id: NodeId) -> Result<K, TreeError> {
        let target = self.resolve(id)?;
        let target_left = self.child_of(target, Side::Left);
        let target_right = self.child_of(target, Side::Right);

        // `hole` takes the structural position that lost a node; it may be
        // absent, so its parent is tracked alongside it.
        let (hole, hole_parent, removed_color) = match (target_left, target_right) {
            (None, _) => {
                let parent = self.parent_of(target);
                self.transplant(target, target_right);
                (target_right, parent, self.node(target).color)
            }
            (Some(_), None) => {
                let parent = self.parent_of(target);
                self.transplant(target, target_left);
                (target_left, parent, self.node(target).color)
            }
            (Some(left), Some(right)) => {
                let successor = self.subtree_extreme(right, Side::Left);
                let removed_color = self.node(successor).color;
                let hole = self.child_of(successor, Side::Right);

                let hole_parent = if self.parent_of(successor) == Some(target) {
                    successor
                } else {
                    let Some(successor_parent) = self.parent_of(successor) else {
                        unreachable!("successor below a two-child node has a parent")
                    };
                    self.transplant(successor, hole);
                    self.node_mut(successor).set_child(Side::Right, Some(right));
                    self.node_mut(right).parent = Some(successor);
                    successor_parent
                };

                self.transplant(target, Some(successor));
                self.node_mut(successor).set_child(Side::Left, Some(left));
                self.node_mut(left).parent = Some(successor);
                let target_color = self.node(target).color;
                self.set_color(successor, target_color);

                (hole, Some(hole_parent), removed_color)
            }
        };

        if removed_color == Color::Black {
            self.erase_fixup(hole, hole_parent);
        }

        let removed = self.release(target);
        self.length -= 1;
        trace!(index = target, len = self.length, "erased node");
        Ok(removed.key)
    }

    /// Puts the subtree rooted at `replacement` where `target` hangs, and
    /// gives it `target`'s parent. `target`'s own links are left untouched.
    fn transplant(&mut self, target: usize, replacement: Option<usize>) {
        let parent = self.parent_of(target);
        self.replace_child(parent, target, replacement);
        self.set_parent(replacement, parent);
    }

    /// Restores the black-height invariant after a black node was removed
    /// from above `hole`. `parent` is `hole`'s parent, passed explicitly
    /// because `hole` may be absent.
    fn erase_fixup(&mut self, mut hole: Option<usize>, mut parent: Option<usize>) {
        while let Some(above) = parent
            && self.color_of(hole) == Color::Black
        {
            let side = self.side_of(above, hole);
            let far = side.opposite();

            // The hole's side is one black short, so the other side holds at
            // least one black node.
            let Some(mut sibling) = self.child_of(above, far) else {
                break;
            };

            if self.node(sibling).color == Color::Red {
                trace!(above, "erase fixup: red sibling, rotate at parent");
                self.set_color(sibling, Color::Black);
                self.set_color(above, Color::Red);
                self.rotate(above, side);
                let Some(next) = self.child_of(above, far) else {
                    unreachable!("red sibling had black children")
                };
                sibling = next;
            }

            let near_nephew = self.child_of(sibling, side);
            let far_nephew = self.child_of(sibling, far);
            if self.color_of(near_nephew) == Color::Black
                && self.color_of(far_nephew) == Color::Black
            {
                trace!(above, "erase fixup: black nephews, recolor and ascend");
                self.set_color(sibling, Color::Red);
                hole = Some(above);
                parent = self.parent_of(above);
                continue;
            }

            if self.color_of(far_nephew) == Color::Black {
                trace!(above, "erase fixup: red near nephew, rotate at sibling");
                if let Some(near) = near_nephew {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                let Some(next) = self.child_of(above, far) else {
                    unreachable!("rotation lifted the near nephew")
                };
                sibling = next;
            }

            trace!(above, "erase fixup: red far nephew, rotate at parent");
            let above_color = self.node(above).color;
            self.set_color(sibling, above_color);
            self.set_color(above, Color::Black);
            if let Some(far) = self.child_of(sibling, far) {
                self.set_color(far, Color::Black);
            }
            self.rotate(above, side);
            hole = self.root;
            parent = None;
        }

        if let Some(hole) = hole {
            self.set_color(hole, Color::Black);
        }
    }
}

impl<K: Ord + Copy> RedBlackTree<K> {
    /// Removes a node holding `key` and returns the key.
    ///
    /// When several nodes hold `key`, the one [`find`](Self::find) returns is
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no node holds `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::error::TreeError;
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.try_extend([4, 4, 9]).unwrap();
    ///
    /// assert_eq!(tree.remove(&4).unwrap(), 4);
    /// assert_eq!(tree.to_vec(), vec![4, 9]);
    /// assert!(matches!(tree.remove(&7), Err(TreeError::KeyNotFound)));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<K, TreeError> {
        let Some(id) = self.find(key) else {
            trace!("remove: key not found");
            return Err(TreeError::KeyNotFound);
        };
        self.erase(id)
    }
}

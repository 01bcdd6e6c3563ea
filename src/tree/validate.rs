//! Structural self-check.

use smallvec::SmallVec;

use super::{Color, RedBlackTree, Side, WalkStack};
use crate::error::InvariantViolation;

impl<K: Ord> RedBlackTree<K> {
    /// Checks every red-black and search-tree invariant and returns the
    /// tree's black-height: the number of black nodes on any path from the
    /// root to an absent child. An empty tree has black-height 0.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.try_extend(0..100).unwrap();
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return if self.length == 0 {
                Ok(0)
            } else {
                Err(InvariantViolation::LengthMismatch {
                    recorded: self.length,
                    counted: 0,
                })
            };
        };

        if self.node(root).color == Color::Red {
            return Err(InvariantViolation::RedRoot);
        }
        if self.parent_of(root).is_some() {
            return Err(InvariantViolation::RootHasParent);
        }

        // (node, black nodes from the root down to and including this node)
        let mut stack: WalkStack<(usize, usize)> = SmallVec::new();
        stack.push((root, 1));
        let mut black_height = None;
        let mut counted = 0;

        while let Some((index, blacks)) = stack.pop() {
            counted += 1;
            let node = self.node(index);

            for side in [Side::Left, Side::Right] {
                let Some(child) = node.child(side) else {
                    match black_height {
                        None => black_height = Some(blacks),
                        Some(expected) if expected != blacks => {
                            return Err(InvariantViolation::BlackHeightMismatch {
                                expected,
                                found: blacks,
                            });
                        }
                        Some(_) => {}
                    }
                    continue;
                };

                let child_node = self.node(child);
                if child_node.parent != Some(index) {
                    return Err(InvariantViolation::BrokenParentLink {
                        parent: self.handle(index),
                        child: self.handle(child),
                    });
                }
                let child_blacks = match child_node.color {
                    Color::Black => blacks + 1,
                    Color::Red if node.color == Color::Red => {
                        return Err(InvariantViolation::RedRedViolation(self.handle(index)));
                    }
                    Color::Red => blacks,
                };
                stack.push((child, child_blacks));
            }
        }

        if counted != self.length {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.length,
                counted,
            });
        }

        let mut previous: Option<usize> = None;
        let mut out_of_order = None;
        self.walk_in_order(|index| {
            if let Some(previous) = previous
                && self.node(index).key < self.node(previous).key
            {
                out_of_order = Some(index);
                return false;
            }
            previous = Some(index);
            true
        });
        if let Some(index) = out_of_order {
            return Err(InvariantViolation::OrderViolation(self.handle(index)));
        }

        Ok(black_height.unwrap_or(0))
    }

    /// Returns the black-height of the tree, or `None` if the tree violates
    /// an invariant.
    #[must_use]
    pub fn black_height(&self) -> Option<usize> {
        self.validate().ok()
    }
}

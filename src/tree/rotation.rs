//! Rotation primitives.
//!
//! Both rotations are pure link rewiring: they never change a color and
//! never change the in-order key sequence.

use tracing::trace;

use super::{RedBlackTree, Side};

impl<K> RedBlackTree<K> {
    /// Rotates `pivot` down towards `side`.
    ///
    /// `rotate(pivot, Side::Left)` is the classic left rotation: the right
    /// child `y` of `pivot` takes `pivot`'s place, `pivot` becomes `y`'s left
    /// child and adopts `y`'s former left subtree as its right child.
    /// `rotate(pivot, Side::Right)` is the mirror image.
    ///
    /// The child on `side.opposite()` must exist.
    pub(super) fn rotate(&mut self, pivot: usize, side: Side) {
        let Some(riser) = self.child_of(pivot, side.opposite()) else {
            unreachable!("rotation at {pivot} without a child to lift")
        };
        trace!(pivot, ?side, "rotate");

        let inner = self.child_of(riser, side);
        self.node_mut(pivot).set_child(side.opposite(), inner);
        self.set_parent(inner, Some(pivot));

        let grandparent = self.parent_of(pivot);
        self.node_mut(riser).parent = grandparent;
        self.replace_child(grandparent, pivot, Some(riser));

        self.node_mut(riser).set_child(side, Some(pivot));
        self.node_mut(pivot).parent = Some(riser);
    }
}

#[cfg(test)]
mod tests {
    use super::super::Color;
    use super::*;
    use rstest::rstest;

    /// Builds `1 <- 2 -> 4`, with `3 <- 4 -> 5`, by inserting in an order that
    /// needs no rebalancing, and returns the arena indices of 2 and 4.
    fn right_heavy_tree() -> (RedBlackTree<i32>, usize, usize) {
        let mut tree = RedBlackTree::new();
        for key in [2, 1, 4, 3, 5] {
            tree.insert(key).unwrap();
        }
        let two = tree.root.unwrap();
        let four = tree.child_of(two, Side::Right).unwrap();
        (tree, two, four)
    }

    fn keys_of(tree: &RedBlackTree<i32>, link: Option<usize>) -> Option<i32> {
        link.map(|index| tree.node(index).key)
    }

    #[rstest]
    fn test_rotate_left_lifts_right_child() {
        let (mut tree, two, four) = right_heavy_tree();
        let colors_before: Vec<Color> = [two, four].iter().map(|&i| tree.node(i).color).collect();

        tree.rotate(two, Side::Left);

        assert_eq!(tree.root, Some(four));
        assert_eq!(tree.parent_of(four), None);
        assert_eq!(tree.child_of(four, Side::Left), Some(two));
        assert_eq!(tree.parent_of(two), Some(four));
        assert_eq!(keys_of(&tree, tree.child_of(two, Side::Right)), Some(3));
        assert_eq!(keys_of(&tree, tree.child_of(two, Side::Left)), Some(1));
        assert_eq!(keys_of(&tree, tree.child_of(four, Side::Right)), Some(5));

        let three = tree.child_of(two, Side::Right).unwrap();
        assert_eq!(tree.parent_of(three), Some(two));

        let colors_after: Vec<Color> = [two, four].iter().map(|&i| tree.node(i).color).collect();
        assert_eq!(colors_before, colors_after);
        assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_rotate_right_undoes_rotate_left() {
        let (mut tree, two, four) = right_heavy_tree();
        tree.rotate(two, Side::Left);
        tree.rotate(four, Side::Right);

        assert_eq!(tree.root, Some(two));
        assert_eq!(tree.child_of(two, Side::Right), Some(four));
        assert_eq!(keys_of(&tree, tree.child_of(four, Side::Left)), Some(3));
        assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_rotate_below_root_updates_grandparent_link() {
        let (mut tree, two, four) = right_heavy_tree();
        tree.rotate(four, Side::Right);

        let three = tree.child_of(two, Side::Right).unwrap();
        assert_eq!(tree.node(three).key, 3);
        assert_eq!(tree.parent_of(three), Some(two));
        assert_eq!(tree.child_of(three, Side::Right), Some(four));
        assert_eq!(tree.child_of(four, Side::Left), None);
        assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5]);
    }
}

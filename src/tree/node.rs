//! Node storage for the arena-backed tree.

/// The color of a Red-Black Tree node.
///
/// An absent child is treated as [`Color::Black`] wherever a color is read.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// A red node. Never the root, never the child of another red node.
    Red,
    /// A black node.
    Black,
}

impl Color {
    /// Returns the one-letter tag used by the debug dump.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Black => 'B',
        }
    }
}

/// Which child of a node a link refers to.
///
/// The fixup routines are written once against a `Side` and its
/// [`opposite`](Side::opposite), instead of once per mirror image.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    /// The left child: keys strictly less than the node's key.
    Left,
    /// The right child: keys greater than or equal to the node's key.
    Right,
}

impl Side {
    /// Returns the mirror image of this side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[inline]
    const fn slot(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Internal node structure for the Red-Black Tree.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: Option<usize>,
    children: [Option<usize>; 2],
}

impl<K> Node<K> {
    /// Creates a new red node with no children.
    pub(crate) const fn new_red(key: K, parent: Option<usize>) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            children: [None, None],
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<usize> {
        self.children[side.slot()]
    }

    #[inline]
    pub(crate) const fn set_child(&mut self, side: Side, child: Option<usize>) {
        self.children[side.slot()] = child;
    }
}

/// One arena cell. `generation` is bumped every time the cell is vacated.
#[derive(Clone, Debug)]
pub(crate) struct Slot<K> {
    pub(crate) generation: u32,
    pub(crate) node: Option<Node<K>>,
}

//! Arena-backed red-black tree.
//!
//! This module provides [`RedBlackTree`], a mutable ordered container of
//! totally ordered scalar keys.
//!
//! # Overview
//!
//! - O(log N) insert
//! - O(log N) find
//! - O(log N) erase
//! - O(log N) min/max
//! - O(N) in-order linearization into a caller-provided buffer
//! - O(1) len and `is_empty`
//!
//! Duplicate keys are kept as separate nodes. A key that compares equal to a
//! node's key is placed in that node's right subtree, so duplicates come out
//! of an in-order walk in insertion order.
//!
//! # Examples
//!
//! ```rust
//! use redblack::tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for key in [10, 5, 8, 34] {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert_eq!(tree.to_vec(), vec![5, 8, 10, 34]);
//!
//! let node = tree.find(&8).unwrap();
//! assert_eq!(tree.erase(node).unwrap(), 8);
//! assert!(!tree.contains(&8));
//! ```
//!
//! # Internal Structure
//!
//! Nodes are stored in a `Vec` of slots and linked by index. An absent child
//! or parent is `None` and reads as a black leaf. Erased slots go onto a free
//! list and are reused; each slot carries a generation counter so that a
//! [`NodeId`] to an erased node is rejected instead of silently aliasing the
//! slot's next occupant.
//!
//! The tree maintains the following invariants between public calls:
//! 1. In-order keys are non-decreasing
//! 2. The root is black
//! 3. Red nodes have only black children
//! 4. Every path from a node to an absent child crosses the same number of
//!    black nodes

mod erase;
mod insert;
mod lookup;
mod node;
mod rotation;
mod traversal;
mod validate;

pub use node::{Color, Side};
pub use traversal::{DumpOptions, TreeDump};

use node::{Node, Slot};
use smallvec::SmallVec;
use static_assertions::assert_impl_all;
use tracing::debug;

use crate::error::TreeError;

/// Explicit stack for tree walks. 64 entries are kept inline; deeper or
/// wider walks spill to the heap.
type WalkStack<T> = SmallVec<[T; 64]>;

/// A handle to a node stored in a [`RedBlackTree`].
///
/// Handles are cheap to copy. A handle stays valid until its node is erased
/// or the tree is cleared; after that every operation taking it returns
/// [`TreeError::StaleHandle`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

assert_impl_all!(NodeId: Copy, Send, Sync, std::hash::Hash);

/// A self-balancing ordered container based on a Red-Black Tree.
///
/// Keys must implement `Ord + Copy`. Nodes are addressed through [`NodeId`]
/// handles returned by [`insert`](Self::insert), [`find`](Self::find),
/// [`min`](Self::min) and [`max`](Self::max).
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `insert`       | O(log N)   |
/// | `find`         | O(log N)   |
/// | `erase`        | O(log N)   |
/// | `min`/`max`    | O(log N)   |
/// | `to_array`     | O(N)       |
/// | `len`          | O(1)       |
///
/// # Examples
///
/// ```rust
/// use redblack::tree::{Color, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// let root = tree.insert(42).unwrap();
///
/// assert_eq!(tree.key(root).unwrap(), 42);
/// assert_eq!(tree.color(root).unwrap(), Color::Black);
/// ```
#[derive(Clone, Debug)]
pub struct RedBlackTree<K> {
    slots: Vec<Slot<K>>,
    /// Vacated slot indices. Its capacity always covers every slot, so
    /// releasing a node never allocates.
    free: Vec<usize>,
    root: Option<usize>,
    length: usize,
}

impl<K> RedBlackTree<K> {
    /// Creates a new empty tree.
    ///
    /// No storage is allocated until the first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            length: 0,
        }
    }

    /// Creates an empty tree with room for `capacity` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::AllocationFailure`] if the storage cannot be
    /// reserved. Nothing is left allocated in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u64> = RedBlackTree::try_with_capacity(128).unwrap();
    /// assert!(tree.is_empty());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TreeError> {
        let mut tree = Self::new();
        let reserved = tree
            .slots
            .try_reserve_exact(capacity)
            .and_then(|()| tree.free.try_reserve_exact(capacity));
        if let Err(source) = reserved {
            debug!(capacity, "tree storage reservation failed");
            return Err(TreeError::AllocationFailure {
                requested: capacity,
                source,
            });
        }
        Ok(tree)
    }

    /// Returns the number of keys in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every node, keeping the allocated storage.
    ///
    /// All previously issued handles become stale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// let node = tree.insert(1).unwrap();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert!(tree.key(node).is_err());
    /// ```
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index);
        }
        self.root = None;
        self.length = 0;
    }

    /// Returns the handle of the root node, or `None` if the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root.map(|index| self.handle(index))
    }

    /// Returns the color of a node.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StaleHandle`] if the node has been erased.
    pub fn color(&self, id: NodeId) -> Result<Color, TreeError> {
        self.resolve(id).map(|index| self.node(index).color)
    }

    /// Returns the parent of a node, or `None` for the root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StaleHandle`] if the node has been erased.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        let index = self.resolve(id)?;
        Ok(self.node(index).parent.map(|parent| self.handle(parent)))
    }

    /// Returns the child of a node on the given side, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StaleHandle`] if the node has been erased.
    pub fn child(&self, id: NodeId, side: Side) -> Result<Option<NodeId>, TreeError> {
        let index = self.resolve(id)?;
        Ok(self.node(index).child(side).map(|child| self.handle(child)))
    }

    // -------------------------------------------------------------------------
    // Arena plumbing
    // -------------------------------------------------------------------------

    fn handle(&self, index: usize) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn resolve(&self, id: NodeId) -> Result<usize, TreeError> {
        match self.slots.get(id.index) {
            Some(slot) if slot.generation == id.generation && slot.node.is_some() => Ok(id.index),
            _ => {
                debug!(?id, "rejected stale node handle");
                Err(TreeError::StaleHandle(id))
            }
        }
    }

    fn node(&self, index: usize) -> &Node<K> {
        match &self.slots[index].node {
            Some(node) => node,
            None => unreachable!("tree link points at vacant slot {index}"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<K> {
        match &mut self.slots[index].node {
            Some(node) => node,
            None => unreachable!("tree link points at vacant slot {index}"),
        }
    }

    fn parent_of(&self, index: usize) -> Option<usize> {
        self.node(index).parent
    }

    fn child_of(&self, index: usize, side: Side) -> Option<usize> {
        self.node(index).child(side)
    }

    /// Absent links read as black.
    fn color_of(&self, link: Option<usize>) -> Color {
        link.map_or(Color::Black, |index| self.node(index).color)
    }

    fn set_color(&mut self, index: usize, color: Color) {
        self.node_mut(index).color = color;
    }

    fn set_parent(&mut self, link: Option<usize>, parent: Option<usize>) {
        if let Some(index) = link {
            self.node_mut(index).parent = parent;
        }
    }

    /// Which side of `parent` the (possibly absent) `child` hangs on.
    fn side_of(&self, parent: usize, child: Option<usize>) -> Side {
        if self.child_of(parent, Side::Left) == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Points whatever link referred to `old` (a child link of `parent`, or
    /// the root) at `new`. Does not touch `new`'s parent link.
    fn replace_child(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(parent, Some(old));
                self.node_mut(parent).set_child(side, new);
            }
        }
    }

    /// Makes sure the next [`allocate`](Self::allocate) cannot fail.
    fn reserve_node(&mut self) -> Result<(), TreeError> {
        if !self.free.is_empty() {
            return Ok(());
        }
        let wanted_free = (self.slots.len() + 1).saturating_sub(self.free.len());
        self.slots
            .try_reserve(1)
            .and_then(|()| self.free.try_reserve(wanted_free))
            .map_err(|source| {
                debug!(len = self.length, "node allocation failed");
                TreeError::AllocationFailure {
                    requested: 1,
                    source,
                }
            })
    }

    /// Stores `node`, reusing a vacated slot when one exists.
    fn allocate(&mut self, node: Node<K>) -> usize {
        if let Some(index) = self.free.pop() {
            self.slots[index].node = Some(node);
            index
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            self.slots.len() - 1
        }
    }

    /// Vacates a slot and returns the node it held.
    fn release(&mut self, index: usize) -> Node<K> {
        let slot = &mut self.slots[index];
        let Some(node) = slot.node.take() else {
            unreachable!("released vacant slot {index}")
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        node
    }
}

impl<K> Default for RedBlackTree<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

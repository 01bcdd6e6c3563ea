//! Error types for the red-black tree.
//!
//! Every fallible operation on [`RedBlackTree`](crate::tree::RedBlackTree)
//! reports failure through [`TreeError`]. Structural self-checks performed by
//! [`RedBlackTree::validate`](crate::tree::RedBlackTree::validate) report
//! through [`InvariantViolation`].

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

use crate::tree::NodeId;

/// Represents errors that can occur while operating on a tree.
///
/// # Examples
///
/// ```rust
/// use redblack::error::TreeError;
///
/// let error = TreeError::CapacityExceeded { required: 3, capacity: 1 };
/// assert_eq!(
///     error.to_string(),
///     "buffer capacity 1 is too small for 3 keys"
/// );
/// ```
#[derive(Debug, Error)]
pub enum TreeError {
    /// Storage for new nodes could not be reserved.
    ///
    /// The tree is left exactly as it was before the failing call.
    #[error("failed to allocate storage for {requested} node(s)")]
    AllocationFailure {
        /// The number of additional nodes that were requested.
        requested: usize,
        /// The underlying reservation error.
        #[source]
        source: TryReserveError,
    },

    /// No node holds the requested key.
    #[error("key not found")]
    KeyNotFound,

    /// The output buffer cannot hold every key of the tree.
    ///
    /// The buffer contents are not guaranteed to be complete.
    #[error("buffer capacity {capacity} is too small for {required} keys")]
    CapacityExceeded {
        /// The number of keys stored in the tree.
        required: usize,
        /// The length of the buffer that was provided.
        capacity: usize,
    },

    /// No output sink was provided for the debug dump.
    #[error("no output sink was provided")]
    InvalidSink,

    /// The handle does not refer to a live node of this tree.
    ///
    /// Returned for handles whose node has already been erased.
    #[error("node handle {0:?} does not refer to a live node")]
    StaleHandle(NodeId),

    /// Writing the debug dump to the sink failed.
    #[error("failed to write tree dump: {0}")]
    Sink(#[from] io::Error),
}

/// A broken red-black or search-tree invariant found by
/// [`RedBlackTree::validate`](crate::tree::RedBlackTree::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root node is red.
    #[error("root node is red")]
    RedRoot,

    /// The root node has a parent link.
    #[error("root node has a parent link")]
    RootHasParent,

    /// A child's parent link does not point back at its parent.
    #[error("parent link of node {child:?} does not point at {parent:?}")]
    BrokenParentLink {
        /// The node whose child link was followed.
        parent: NodeId,
        /// The child whose parent link disagrees.
        child: NodeId,
    },

    /// A red node has a red child.
    #[error("red node {0:?} has a red child")]
    RedRedViolation(NodeId),

    /// Two paths to absent children cross a different number of black nodes.
    #[error("black-height mismatch: expected {expected}, found {found}")]
    BlackHeightMismatch {
        /// The black-height of the first path examined.
        expected: usize,
        /// The black-height of the offending path.
        found: usize,
    },

    /// An in-order walk produced a key smaller than its predecessor.
    #[error("in-order walk is out of order at node {0:?}")]
    OrderViolation(NodeId),

    /// The recorded length disagrees with the reachable node count.
    #[error("recorded length {recorded} but {counted} nodes are reachable")]
    LengthMismatch {
        /// The length the tree reports.
        recorded: usize,
        /// The number of nodes reachable from the root.
        counted: usize,
    },
}

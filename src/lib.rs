//! # redblack
//!
//! An arena-backed red-black tree for ordered in-memory key storage.
//!
//! ## Overview
//!
//! [`RedBlackTree`](tree::RedBlackTree) stores totally ordered scalar keys
//! and keeps itself balanced, giving logarithmic insertion, lookup, erasure
//! and min/max retrieval. Keys can be linearized into a caller-provided
//! buffer in sorted order, and the tree can print a pre-order debug dump.
//!
//! - **Duplicates**: equal keys are stored as separate nodes and come out of
//!   an in-order walk in insertion order.
//! - **Handles**: nodes are addressed through [`NodeId`](tree::NodeId)
//!   handles; a handle to an erased node is rejected rather than reused.
//! - **No recursion**: every walk uses an explicit stack.
//!
//! ## Example
//!
//! ```rust
//! use redblack::prelude::*;
//!
//! let mut tree = RedBlackTree::new();
//! tree.try_extend([10, 5, 8, 34, 67, 23, 156, 24, 2, 12, 24, 36, 990, 25])?;
//!
//! let mut buffer = [0; 14];
//! tree.to_array(&mut buffer)?;
//! assert_eq!(buffer, [2, 5, 8, 10, 12, 23, 24, 24, 25, 34, 36, 67, 156, 990]);
//!
//! let largest = tree.max().expect("tree is not empty");
//! tree.erase(largest)?;
//! assert!(!tree.contains(&990));
//! # Ok::<(), TreeError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{InvariantViolation, TreeError};
    pub use crate::tree::{Color, DumpOptions, NodeId, RedBlackTree, Side, TreeDump};
}

pub mod error;
pub mod tree;

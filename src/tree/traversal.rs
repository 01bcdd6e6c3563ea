//! In-order linearization and the pre-order debug dump.
//!
//! Every walk here keeps its own stack instead of recursing, so depth is
//! bounded by heap memory rather than the call stack even if the tree were
//! ever left unbalanced.

use std::fmt;
use std::io::Write;

use smallvec::SmallVec;
use tracing::debug;

use super::{RedBlackTree, Side, WalkStack};
use crate::error::TreeError;

/// Run of spaces written in chunks for indentation.
const PADDING: &str = "                                ";

/// Formatting options for the debug dump.
///
/// # Examples
///
/// ```rust
/// use redblack::tree::{DumpOptions, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// tree.try_extend([2, 1, 3]).unwrap();
///
/// let dump = tree.dump_with(DumpOptions { indent_width: 2 }).to_string();
/// assert_eq!(dump, "2(B)\n  1(R)\n  3(R)\n");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DumpOptions {
    /// Spaces of indentation added per level of depth.
    ///
    /// Values above [`DumpOptions::MAX_INDENT_WIDTH`] are treated as
    /// `MAX_INDENT_WIDTH`.
    pub indent_width: usize,
}

impl DumpOptions {
    /// The largest per-level indentation the dump honors.
    pub const MAX_INDENT_WIDTH: usize = 1024;

    const fn effective_indent_width(self) -> usize {
        if self.indent_width > Self::MAX_INDENT_WIDTH {
            Self::MAX_INDENT_WIDTH
        } else {
            self.indent_width
        }
    }
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// A [`Display`](fmt::Display) view of a tree's pre-order debug dump.
///
/// Created by [`RedBlackTree::dump`] and [`RedBlackTree::dump_with`]. Each
/// node is written on its own line as `key(B)` or `key(R)`, indented by its
/// depth times [`DumpOptions::indent_width`]. An empty tree prints nothing.
pub struct TreeDump<'a, K> {
    tree: &'a RedBlackTree<K>,
    options: DumpOptions,
}

impl<K: fmt::Display> fmt::Display for TreeDump<'_, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: WalkStack<(usize, usize)> = SmallVec::new();
        stack.extend(self.tree.root.map(|root| (root, 0)));

        while let Some((index, depth)) = stack.pop() {
            let node = self.tree.node(index);
            let indent = depth.saturating_mul(self.options.effective_indent_width());
            write_indent(formatter, indent)?;
            writeln!(formatter, "{}({})", node.key, node.color.tag())?;

            // Right is pushed first so that left is printed first.
            for side in [Side::Right, Side::Left] {
                stack.extend(node.child(side).map(|child| (child, depth + 1)));
            }
        }
        Ok(())
    }
}

fn write_indent(formatter: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    let mut remaining = width;
    while remaining > 0 {
        let chunk = remaining.min(PADDING.len());
        formatter.write_str(&PADDING[..chunk])?;
        remaining -= chunk;
    }
    Ok(())
}

impl<K> RedBlackTree<K> {
    /// Returns a view that formats the tree as a pre-order debug dump with
    /// the default [`DumpOptions`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.try_extend([10, 5, 8]).unwrap();
    ///
    /// assert_eq!(tree.dump().to_string(), "8(B)\n    5(R)\n    10(R)\n");
    /// ```
    #[must_use]
    pub fn dump(&self) -> TreeDump<'_, K> {
        self.dump_with(DumpOptions::default())
    }

    /// Returns a debug dump view using the given options.
    #[must_use]
    pub const fn dump_with(&self, options: DumpOptions) -> TreeDump<'_, K> {
        TreeDump {
            tree: self,
            options,
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut stack: WalkStack<(usize, usize)> = SmallVec::new();
        stack.extend(self.root.map(|root| (root, 1)));

        let mut height = 0;
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            for side in [Side::Left, Side::Right] {
                stack.extend(self.child_of(index, side).map(|child| (child, depth + 1)));
            }
        }
        height
    }

    /// Visits every node in ascending key order, stopping early when `visit`
    /// returns `false`.
    pub(super) fn walk_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(usize) -> bool,
    {
        let mut stack: WalkStack<usize> = SmallVec::new();
        let mut cursor = self.root;
        loop {
            while let Some(index) = cursor {
                stack.push(index);
                cursor = self.child_of(index, Side::Left);
            }
            let Some(index) = stack.pop() else {
                return;
            };
            if !visit(index) {
                return;
            }
            cursor = self.child_of(index, Side::Right);
        }
    }
}

impl<K: Copy> RedBlackTree<K> {
    /// Writes every key into `buffer` in ascending order and returns how many
    /// keys were written.
    ///
    /// Duplicate keys appear next to each other, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::CapacityExceeded`] if `buffer` is shorter than
    /// [`len`](Self::len). The keys that fitted have been written, but the
    /// buffer must not be treated as a complete listing.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::error::TreeError;
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.try_extend([3, 1, 2]).unwrap();
    ///
    /// let mut buffer = [0; 4];
    /// assert_eq!(tree.to_array(&mut buffer).unwrap(), 3);
    /// assert_eq!(&buffer[..3], &[1, 2, 3]);
    ///
    /// let mut small = [0; 2];
    /// assert!(matches!(
    ///     tree.to_array(&mut small),
    ///     Err(TreeError::CapacityExceeded { required: 3, capacity: 2 })
    /// ));
    /// ```
    pub fn to_array(&self, buffer: &mut [K]) -> Result<usize, TreeError> {
        let capacity = buffer.len();
        let mut written = 0;
        let mut overflowed = false;

        self.walk_in_order(|index| {
            let Some(slot) = buffer.get_mut(written) else {
                overflowed = true;
                return false;
            };
            *slot = self.node(index).key;
            written += 1;
            true
        });

        if overflowed {
            debug!(
                required = self.length,
                capacity, "to_array buffer too small"
            );
            return Err(TreeError::CapacityExceeded {
                required: self.length,
                capacity,
            });
        }
        Ok(written)
    }

    /// Returns every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.try_extend([5, 3, 5, 1]).unwrap();
    /// assert_eq!(tree.to_vec(), vec![1, 3, 5, 5]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.length);
        self.walk_in_order(|index| {
            keys.push(self.node(index).key);
            true
        });
        keys
    }
}

impl<K: fmt::Display> RedBlackTree<K> {
    /// Writes the pre-order debug dump to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidSink`] if `sink` is `None`, and
    /// [`TreeError::Sink`] if writing fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::error::TreeError;
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.try_extend([1, 2]).unwrap();
    ///
    /// let mut output = Vec::new();
    /// tree.print(Some(&mut output)).unwrap();
    /// assert_eq!(String::from_utf8(output).unwrap(), "1(B)\n    2(R)\n");
    ///
    /// assert!(matches!(
    ///     tree.print(None::<&mut Vec<u8>>),
    ///     Err(TreeError::InvalidSink)
    /// ));
    /// ```
    pub fn print<W>(&self, sink: Option<&mut W>) -> Result<(), TreeError>
    where
        W: Write + ?Sized,
    {
        let Some(sink) = sink else {
            debug!("print called without a sink");
            return Err(TreeError::InvalidSink);
        };
        write!(sink, "{}", self.dump())?;
        sink.flush()?;
        Ok(())
    }
}

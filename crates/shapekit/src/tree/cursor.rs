//! In-order cursor with a fixed-capacity ancestor stack.
//!
//! Model
//! - Trees have no parent links, so the cursor records the nodes it left via a
//!   left edge since the last right turn (or the root). Those are exactly the
//!   nodes still waiting to be visited.
//! - The stack is an inline `[TreeNodeId; N]`: moving the cursor never
//!   allocates. When a left descent would need more than `N` entries it stops
//!   on the node reached so far. The nodes below it on that left spine are
//!   skipped, and no error is reported.
//! - States: on a node (`shape()` is `Some`) or at end. End is terminal.

use std::iter::FusedIterator;

use super::cfg::MAX_DEPTH;
use super::types::{Tree, TreeNode, TreeNodeId};
use crate::shape::Shape;

#[derive(Clone, Debug)]
pub struct TreeCursor<'t, 's, const N: usize = MAX_DEPTH> {
    tree: &'t Tree<'s>,
    curr: Option<TreeNodeId>,
    parents: [TreeNodeId; N],
    depth: usize,
}

impl<'t, 's> TreeCursor<'t, 's> {
    /// Cursor on the first in-order node of `tree`, default capacity.
    pub fn begin(tree: &'t Tree<'s>) -> Self {
        Self::begin_at(tree, tree.root())
    }
}

impl<'t, 's, const N: usize> TreeCursor<'t, 's, N> {
    /// Cursor on the first in-order node of `tree`, capacity `N`.
    pub fn begin_bounded(tree: &'t Tree<'s>) -> Self {
        Self::begin_at(tree, tree.root())
    }

    /// Cursor on the first in-order node of the subtree under `root`.
    /// `None` yields a cursor already at end.
    pub fn begin_at(tree: &'t Tree<'s>, root: Option<TreeNodeId>) -> Self {
        let mut cursor = Self {
            tree,
            curr: None,
            parents: [TreeNodeId(0); N],
            depth: 0,
        };
        if let Some(root) = root {
            cursor.descend_left(root);
        }
        cursor
    }

    /// Stack capacity of this cursor.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Ancestors currently recorded.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.curr.is_none()
    }

    #[inline]
    pub fn current(&self) -> Option<TreeNodeId> {
        self.curr
    }

    #[inline]
    pub fn node(&self) -> Option<&'t TreeNode<'s>> {
        self.curr.map(|id| self.tree.at(id))
    }

    #[inline]
    pub fn shape(&self) -> Option<&'s dyn Shape> {
        self.node().map(|n| n.shape)
    }

    /// Move to the in-order successor, or to end. No-op at end.
    pub fn advance(&mut self) {
        let Some(mut curr) = self.curr else {
            return;
        };
        if let Some(right) = self.tree.at(curr).right {
            self.descend_left(right);
            return;
        }
        // climb past ancestors whose right subtree we just finished
        while let Some(top) = self.peek() {
            if self.tree.at(top).right != Some(curr) {
                break;
            }
            self.depth -= 1;
            curr = top;
        }
        self.curr = self.pop();
    }

    /// Walk left from `from`, recording ancestors until the leftmost node or
    /// a full stack; the cursor lands on the node reached.
    fn descend_left(&mut self, from: TreeNodeId) {
        let mut node = from;
        while let Some(left) = self.tree.at(node).left {
            if self.depth >= N {
                tracing::trace!(capacity = N, node = node.0, "left descent truncated");
                break;
            }
            self.parents[self.depth] = node;
            self.depth += 1;
            node = left;
        }
        self.curr = Some(node);
    }

    #[inline]
    fn peek(&self) -> Option<TreeNodeId> {
        self.depth.checked_sub(1).map(|top| self.parents[top])
    }

    #[inline]
    fn pop(&mut self) -> Option<TreeNodeId> {
        let top = self.peek()?;
        self.depth -= 1;
        Some(top)
    }
}

/// Yields the current shape, then advances.
impl<'s, const N: usize> Iterator for TreeCursor<'_, 's, N> {
    type Item = &'s dyn Shape;

    fn next(&mut self) -> Option<Self::Item> {
        let shape = self.shape()?;
        self.advance();
        Some(shape)
    }
}

impl<const N: usize> FusedIterator for TreeCursor<'_, '_, N> {}

impl<'t, 's> IntoIterator for &'t Tree<'s> {
    type Item = &'s dyn Shape;
    type IntoIter = TreeCursor<'t, 's>;
    fn into_iter(self) -> Self::IntoIter {
        TreeCursor::begin(self)
    }
}

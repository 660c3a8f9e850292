//! Arena-backed binary tree of borrowed shapes.
//!
//! Nodes carry no parent link. The builder only accepts existing children
//! that are not attached anywhere yet, so every structure it produces is a
//! proper tree: no cycles, no shared subtrees.

use std::fmt;

use crate::shape::Shape;

/// Index of a node inside the arena of the tree that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeNodeId(pub usize);

#[derive(Clone, Copy, Debug)]
pub struct TreeNode<'s> {
    pub shape: &'s dyn Shape,
    pub left: Option<TreeNodeId>,
    pub right: Option<TreeNodeId>,
    attached: bool,
}

/// Errors surfaced by the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The id does not belong to this tree's arena.
    UnknownNode(TreeNodeId),
    /// The node already has a parent (or is used twice in one call).
    AlreadyAttached(TreeNodeId),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnknownNode(id) => write!(f, "node {} is not part of this tree", id.0),
            TreeError::AlreadyAttached(id) => {
                write!(f, "node {} already has a parent", id.0)
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// Binary tree built bottom-up: leaves first, then parents over them.
#[derive(Clone, Debug, Default)]
pub struct Tree<'s> {
    nodes: Vec<TreeNode<'s>>,
    root: Option<TreeNodeId>,
}

impl<'s> Tree<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    #[inline]
    pub fn root(&self) -> Option<TreeNodeId> {
        self.root
    }

    /// Nodes in the arena, attached or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: TreeNodeId) -> Option<&TreeNode<'s>> {
        self.nodes.get(id.0)
    }

    /// Node by id. Ids handed out by this tree are always valid.
    ///
    /// # Panics
    ///
    /// Panics if `id` comes from another tree and is out of range.
    #[inline]
    pub(crate) fn at(&self, id: TreeNodeId) -> &TreeNode<'s> {
        &self.nodes[id.0]
    }

    /// Detached node without children.
    pub fn leaf(&mut self, shape: &'s dyn Shape) -> TreeNodeId {
        let id = TreeNodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            shape,
            left: None,
            right: None,
            attached: false,
        });
        id
    }

    /// Detached node over the given children, which become attached.
    pub fn node(
        &mut self,
        shape: &'s dyn Shape,
        left: Option<TreeNodeId>,
        right: Option<TreeNodeId>,
    ) -> Result<TreeNodeId, TreeError> {
        for child in [left, right].into_iter().flatten() {
            self.check_detached(child)?;
        }
        if let (Some(l), Some(r)) = (left, right) {
            if l == r {
                return Err(TreeError::AlreadyAttached(l));
            }
        }
        for child in [left, right].into_iter().flatten() {
            self.nodes[child.0].attached = true;
        }
        let id = self.leaf(shape);
        let node = &mut self.nodes[id.0];
        node.left = left;
        node.right = right;
        Ok(id)
    }

    /// Use a detached node as the traversal root. Replaces any previous root.
    pub fn set_root(&mut self, id: TreeNodeId) -> Result<(), TreeError> {
        self.check_detached(id)?;
        self.root = Some(id);
        Ok(())
    }

    fn check_detached(&self, id: TreeNodeId) -> Result<(), TreeError> {
        match self.nodes.get(id.0) {
            None => Err(TreeError::UnknownNode(id)),
            Some(n) if n.attached => Err(TreeError::AlreadyAttached(id)),
            Some(_) => Ok(()),
        }
    }
}

use std::fmt;

use crate::node::Node;

/// Read-only view of a node inside a [`Treap`](crate::Treap).
///
/// Handed out by lookups; it borrows the tree and offers no way to change
/// its structure.
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        Self { node }
    }

    pub fn key(&self) -> i64 {
        self.node.key
    }

    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    pub fn priority(&self) -> u32 {
        self.node.prio
    }

    /// Number of nodes in the subtree rooted here, this one included.
    pub fn size(&self) -> usize {
        self.node.size as usize
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node.left.as_deref().map(NodeRef::new)
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node.right.as_deref().map(NodeRef::new)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.node.key)
            .field("value", &self.node.value)
            .field("priority", &self.node.prio)
            .field("size", &self.node.size)
            .finish()
    }
}

//! Borrowed navigation over a [`NodeTree`].

use super::{Node, NodeId, NodeTree};

/// A node together with the tree it lives in.
///
/// Dereferences to [`Node`] for field access.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    tree: &'a NodeTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(super) const fn new(tree: &'a NodeTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Id of the viewed node.
    #[must_use]
    pub const fn id(self) -> NodeId {
        self.id
    }

    /// Parent view, `None` at the root.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.node().parent().map(|id| Self::new(self.tree, id))
    }

    /// Child views in declaration order.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> {
        let tree = self.tree;
        tree.node(self.id)
            .children()
            .iter()
            .map(move |&id| NodeRef::new(tree, id))
    }

    /// Direct child with the given key.
    #[must_use]
    pub fn get_child(self, key: &str) -> Option<Self> {
        self.tree
            .get_child(self.id, key)
            .map(|id| Self::new(self.tree, id))
    }

    /// Descendant addressed by a dotted path.
    #[must_use]
    pub fn find_node(self, path: &str) -> Option<Self> {
        self.tree
            .find_node(self.id, path)
            .map(|id| Self::new(self.tree, id))
    }

    /// Dotted path from the root.
    #[must_use]
    pub fn path(self) -> String {
        self.tree.path(self.id)
    }

    /// The viewed node.
    #[must_use]
    pub fn node(self) -> &'a Node {
        self.tree.node(self.id)
    }
}

impl std::ops::Deref for NodeRef<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.tree.node(self.id)
    }
}

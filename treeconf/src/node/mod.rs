//! The configuration node tree.
//!
//! Nodes live in an arena owned by [`NodeTree`] and refer to each other by
//! [`NodeId`]. Children are owned edges; the parent link is a plain id and
//! never keeps anything alive. The root is created with the tree and has no
//! parent.

mod cursor;

pub use cursor::NodeRef;

use crate::tag::Tag;
use crate::value::{Kind, Value};

const PATH_SEPARATOR: char = '.';

/// Index of a node inside its [`NodeTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Layer that produced a leaf's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueSource {
    /// Converted from the field's environment variable.
    Environment,
    /// Taken from the decoded document.
    Document,
    /// Converted from the field's declared default.
    Default,
    /// Nothing supplied a value; branches always report this.
    Unset,
    /// Overwritten after loading through `Configuration::set`.
    Assigned,
}

/// One schema field (leaf) or nested record (branch).
#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    key: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: Option<Kind>,
    value: Option<Value>,
    source: ValueSource,
    tag: Tag,
}

impl Node {
    /// Create a branch node. Branches carry no declared kind and no value.
    #[must_use]
    pub fn branch(name: impl Into<String>, key: impl Into<String>, tag: Tag) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            parent: None,
            children: Vec::new(),
            kind: None,
            value: None,
            source: ValueSource::Unset,
            tag,
        }
    }

    /// Create a leaf node holding a resolved value.
    #[must_use]
    pub fn leaf(
        name: impl Into<String>,
        key: impl Into<String>,
        tag: Tag,
        kind: Kind,
        value: Option<Value>,
        source: ValueSource,
    ) -> Self {
        Self {
            kind: Some(kind),
            value,
            source,
            ..Self::branch(name, key, tag)
        }
    }

    /// Field identifier the node was built from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lookup segment used by dotted paths.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in field declaration order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Declared kind for leaves, `None` for branches.
    #[must_use]
    pub const fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// Current value, `None` when absent.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Layer that produced [`Node::value`].
    #[must_use]
    pub const fn source(&self) -> ValueSource {
        self.source
    }

    /// Parsed annotation of the field.
    #[must_use]
    pub const fn tag(&self) -> &Tag {
        &self.tag
    }

    pub(crate) fn assign(&mut self, value: Value) {
        self.value = Some(value);
        self.source = ValueSource::Assigned;
    }
}

/// Arena holding every node of one configuration.
#[derive(Clone, Debug)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    /// Create a tree containing only a root branch called `root_name`.
    ///
    /// The root's key is empty; dotted paths start at its children.
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::branch(root_name, "", Tag::default())],
        }
    }

    /// Id of the root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different tree.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "ids are only issued by `attach` on the owning tree"
    )]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "ids are only issued by `attach` on the owning tree"
    )]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Attach `node` as the last child of `parent` and return its id.
    pub fn attach(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.node_mut(parent).children.push(id);
        id
    }

    /// Find the direct child of `parent` whose key equals `key`.
    ///
    /// Children are scanned in order; configuration trees are small.
    #[must_use]
    pub fn get_child(&self, parent: NodeId, key: &str) -> Option<NodeId> {
        self.node(parent)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).key == key)
    }

    /// Resolve a dotted `path` relative to `from`.
    ///
    /// Every segment must match a child key exactly; if any segment is
    /// missing the whole lookup yields `None`.
    #[must_use]
    pub fn find_node(&self, from: NodeId, path: &str) -> Option<NodeId> {
        path.split(PATH_SEPARATOR)
            .try_fold(from, |context, segment| self.get_child(context, segment))
    }

    /// Rebuild the dotted path of `id` by walking parent links.
    ///
    /// The root's path is the empty string.
    #[must_use]
    pub fn path(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            if node.parent.is_some() {
                segments.push(node.key.as_str());
            }
            current = node.parent;
        }
        segments.reverse();
        segments.join(".")
    }

    /// Dotted path of `key` as a child of `parent`.
    #[must_use]
    pub fn child_path(&self, parent: NodeId, key: &str) -> String {
        let base = self.path(parent);
        if base.is_empty() {
            key.to_owned()
        } else {
            format!("{base}{PATH_SEPARATOR}{key}")
        }
    }

    /// Navigation view rooted at `id`.
    #[must_use]
    pub const fn cursor(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(self, id)
    }
}

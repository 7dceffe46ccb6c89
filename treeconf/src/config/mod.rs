//! The configuration facade: dotted-path lookup and mutation over a tree.
//!
//! A [`Configuration`] owns one node tree. Reads never fail; absent paths
//! and mismatched types degrade to `None` or the type's zero value. The
//! tree is not internally synchronised: share it across threads behind a
//! lock if it must be mutated concurrently.

mod decode;
mod loader;

pub use loader::{Loader, load, load_file, load_str};

use crate::error::{TreeconfError, TreeconfResult};
use crate::node::{Node, NodeRef, NodeTree};
use crate::value::Value;

/// Conventional name of the root node.
pub const ROOT_NAME: &str = "Application";

/// A loaded configuration tree.
#[derive(Clone, Debug)]
pub struct Configuration {
    tree: NodeTree,
}

impl Configuration {
    pub(crate) const fn new(tree: NodeTree) -> Self {
        Self { tree }
    }

    /// Build a configuration from an already populated schema, skipping YAML
    /// decoding.
    ///
    /// # Errors
    ///
    /// Fails when a field's environment override or default cannot be
    /// converted, or when two sibling fields share a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeconf::{Configuration, Schema};
    ///
    /// #[derive(Schema)]
    /// struct Limits {
    ///     #[treeconf(default = 16)]
    ///     workers: i64,
    /// }
    ///
    /// let cfg = Configuration::from_schema(&Limits { workers: 0 })?;
    /// assert_eq!(cfg.get_int("workers"), 16);
    /// # Ok::<(), treeconf::TreeconfError>(())
    /// ```
    pub fn from_schema<S: crate::Schema>(schema: &S) -> TreeconfResult<Self> {
        Loader::new().build(schema)
    }

    /// The underlying node tree.
    #[must_use]
    pub const fn tree(&self) -> &NodeTree {
        &self.tree
    }

    /// Navigation view of the root node.
    #[must_use]
    pub const fn root(&self) -> NodeRef<'_> {
        self.tree.cursor(self.tree.root())
    }

    /// Node addressed by a dotted path, if the whole path resolves.
    #[must_use]
    pub fn node(&self, key: &str) -> Option<&Node> {
        self.tree
            .find_node(self.tree.root(), key)
            .map(|id| self.tree.node(id))
    }

    /// Value at a dotted path.
    ///
    /// Returns `None` when the path does not resolve, when it names a
    /// branch, or when the leaf resolved to nothing. Fields without a
    /// primitive kind, such as `Vec<T>` or maps, always read as `None`; their
    /// decoded contents stay on the schema value passed to the loader.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.node(key).and_then(Node::value)
    }

    /// String at `key`, or `""` when absent or not a string.
    #[must_use]
    pub fn get_string(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    /// Integer at `key`, or `0` when absent or not an integer.
    #[must_use]
    pub fn get_int(&self, key: &str) -> i64 {
        self.get(key).and_then(Value::as_int).unwrap_or_default()
    }

    /// Float at `key`, or `0.0` when absent or not a float.
    #[must_use]
    pub fn get_float(&self, key: &str) -> f64 {
        self.get(key).and_then(Value::as_float).unwrap_or_default()
    }

    /// Boolean at `key`, or `false` when absent or not a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or_default()
    }

    /// Overwrite the value at a dotted path.
    ///
    /// The new value is stored as given; it is not checked against the
    /// field's declared kind.
    ///
    /// # Errors
    ///
    /// Returns [`TreeconfError::KeyNotFound`] when `key` does not resolve.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> TreeconfResult<()> {
        let id = self
            .tree
            .find_node(self.tree.root(), key)
            .ok_or_else(|| TreeconfError::key_not_found(key))?;
        self.tree.node_mut(id).assign(value.into());
        Ok(())
    }
}

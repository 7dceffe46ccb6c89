//! Builds a [`NodeTree`] by walking schema field descriptors.
//!
//! Each field becomes one node, in declaration order. Nested records become
//! branches and are walked recursively; every other field becomes a leaf
//! whose value is resolved from the environment, the decoded document and
//! the declared default, in that order.

mod resolve;

use tracing::{debug, warn};

use crate::environment::EnvLookup;
use crate::error::{TreeconfError, TreeconfResult};
use crate::node::{Node, NodeId, NodeTree, ValueSource};
use crate::schema::{FieldSource, Schema};
use crate::tag::Tag;
use crate::value::{Kind, Value};

use resolve::resolve_leaf;

/// How conversion failures are handled while building the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversionPolicy {
    /// Abort the load with [`TreeconfError::Resolve`].
    #[default]
    Strict,
    /// Log a warning and leave the failing leaf without a value.
    Lenient,
}

/// Lookup key for a field: the annotation's override key when present,
/// otherwise the field name lowercased with `-` replaced by `_`.
///
/// # Examples
///
/// ```
/// use treeconf::{Tag, node_key};
/// assert_eq!(node_key("DefI", &Tag::default()), "defi");
/// assert_eq!(node_key("max-conns", &Tag::default()), "max_conns");
/// assert_eq!(node_key("CustomKey", &Tag::parse(r#"yaml:"custom_key""#)), "custom_key");
/// ```
#[must_use]
pub fn node_key(name: &str, tag: &Tag) -> String {
    if tag.key().is_empty() {
        name.to_lowercase().replace('-', "_")
    } else {
        tag.key().to_owned()
    }
}

pub(crate) struct TreeBuilder<'e> {
    tree: NodeTree,
    env: &'e dyn EnvLookup,
    policy: ConversionPolicy,
}

impl<'e> TreeBuilder<'e> {
    pub(crate) fn new(root_name: &str, env: &'e dyn EnvLookup, policy: ConversionPolicy) -> Self {
        Self {
            tree: NodeTree::new(root_name),
            env,
            policy,
        }
    }

    pub(crate) fn build(mut self, schema: &dyn Schema) -> TreeconfResult<NodeTree> {
        let root = self.tree.root();
        self.build_children(root, schema)?;
        debug!(nodes = self.tree.len(), "built configuration tree");
        Ok(self.tree)
    }

    fn build_children(&mut self, parent: NodeId, schema: &dyn Schema) -> TreeconfResult<()> {
        for field in schema.fields() {
            let tag = Tag::parse(field.tag);
            let key = node_key(field.name, &tag);
            let path = self.tree.child_path(parent, &key);
            if self.tree.get_child(parent, &key).is_some() {
                return Err(TreeconfError::DuplicateKey { path });
            }

            match field.source {
                FieldSource::Nested(inner) => {
                    let branch = self.tree.attach(parent, Node::branch(field.name, key, tag));
                    self.build_children(branch, inner)?;
                }
                FieldSource::Leaf { kind, value } => {
                    let (value, source) = self.resolve(&path, &tag, kind, value)?;
                    self.tree
                        .attach(parent, Node::leaf(field.name, key, tag, kind, value, source));
                }
            }
        }
        Ok(())
    }

    fn resolve(
        &self,
        path: &str,
        tag: &Tag,
        kind: Kind,
        document: Option<Value>,
    ) -> TreeconfResult<(Option<Value>, ValueSource)> {
        match resolve_leaf(path, tag, kind, document, self.env) {
            Ok(resolved) => Ok(resolved),
            Err(err) => match self.policy {
                ConversionPolicy::Strict => Err(TreeconfError::resolve(path, err)),
                ConversionPolicy::Lenient => {
                    warn!(path, error = %err, "discarding unconvertible configuration value");
                    Ok((None, ValueSource::Unset))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests;

//! Loading entry points and their options.

use std::io::Read;

use camino::Utf8Path;
use serde::de::DeserializeOwned;

use super::decode::decode_yaml;
use super::{Configuration, ROOT_NAME};
use crate::builder::{ConversionPolicy, TreeBuilder};
use crate::environment::{EnvLookup, ProcessEnv};
use crate::error::{TreeconfError, TreeconfResult};
use crate::schema::Schema;

/// Configurable loader.
///
/// The defaults match [`load`]: a root named `"Application"`, strict
/// conversion and the process environment.
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use treeconf::{ConversionPolicy, Loader, Schema};
///
/// #[derive(Default, Deserialize, Schema)]
/// #[serde(default)]
/// struct Http {
///     #[treeconf(env = "HTTP_PORT")]
///     port: i64,
/// }
///
/// let mut schema = Http::default();
/// let cfg = Loader::new()
///     .conversion_policy(ConversionPolicy::Lenient)
///     .env_lookup(|name: &str| (name == "HTTP_PORT").then(|| "9090".to_owned()))
///     .load_str(&mut schema, "port: 80")?;
/// assert_eq!(schema.port, 80);
/// assert_eq!(cfg.get_int("port"), 9090);
/// # Ok::<(), treeconf::TreeconfError>(())
/// ```
pub struct Loader {
    root_name: String,
    policy: ConversionPolicy,
    env: Box<dyn EnvLookup>,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            root_name: ROOT_NAME.to_owned(),
            policy: ConversionPolicy::default(),
            env: Box::new(ProcessEnv),
        }
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("root_name", &self.root_name)
            .field("policy", &self.policy)
            .field("env", &"<lookup>")
            .finish()
    }
}

impl Loader {
    /// Loader with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name given to the root node.
    #[must_use]
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// How conversion failures during tree building are handled.
    #[must_use]
    pub const fn conversion_policy(mut self, policy: ConversionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Source of environment overrides. Variables are read once per load.
    #[must_use]
    pub fn env_lookup(mut self, env: impl EnvLookup + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Decode YAML from `source` into `schema`, then build the tree.
    ///
    /// `schema` is replaced by the decoded value. Fields absent from the
    /// document need `#[serde(default)]` to decode.
    ///
    /// # Errors
    ///
    /// Returns [`TreeconfError::Read`] if `source` cannot be read,
    /// [`TreeconfError::Decode`] if the document does not fit the schema,
    /// and any error raised while building the tree.
    pub fn load<S, R>(&self, schema: &mut S, mut source: R) -> TreeconfResult<Configuration>
    where
        S: Schema + DeserializeOwned,
        R: Read,
    {
        let mut contents = String::new();
        source
            .read_to_string(&mut contents)
            .map_err(|source| TreeconfError::Read { source })?;
        self.load_str(schema, &contents)
    }

    /// Decode YAML held in memory into `schema`, then build the tree.
    ///
    /// # Errors
    ///
    /// As for [`Loader::load`], minus read failures.
    pub fn load_str<S>(&self, schema: &mut S, contents: &str) -> TreeconfResult<Configuration>
    where
        S: Schema + DeserializeOwned,
    {
        *schema = decode_yaml(contents)?;
        self.build(schema)
    }

    /// Read a YAML file into `schema`, then build the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeconfError::File`] if the file cannot be read, otherwise
    /// as for [`Loader::load_str`].
    pub fn load_file<S>(
        &self,
        schema: &mut S,
        path: impl AsRef<Utf8Path>,
    ) -> TreeconfResult<Configuration>
    where
        S: Schema + DeserializeOwned,
    {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TreeconfError::File {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(schema, &contents)
    }

    /// Build the tree from an already populated schema.
    ///
    /// # Errors
    ///
    /// Fails on conversion errors under [`ConversionPolicy::Strict`] and on
    /// duplicate sibling keys.
    pub fn build<S: Schema>(&self, schema: &S) -> TreeconfResult<Configuration> {
        TreeBuilder::new(&self.root_name, self.env.as_ref(), self.policy)
            .build(schema)
            .map(Configuration::new)
    }
}

/// Decode YAML from `source` into `schema` and build its configuration tree
/// with default [`Loader`] options.
///
/// # Errors
///
/// See [`Loader::load`].
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use treeconf::Schema;
///
/// #[derive(Default, Deserialize, Schema)]
/// #[serde(default)]
/// struct Grammar {
///     test: String,
///     #[serde(rename = "custom_key")]
///     custom: String,
/// }
///
/// let mut grammar = Grammar::default();
/// let source = "test: test_value\ncustom_key: other".as_bytes();
/// let cfg = treeconf::load(&mut grammar, source)?;
/// assert_eq!(cfg.get_string("test"), "test_value");
/// assert_eq!(cfg.get_string("custom_key"), "other");
/// # Ok::<(), treeconf::TreeconfError>(())
/// ```
pub fn load<S, R>(schema: &mut S, source: R) -> TreeconfResult<Configuration>
where
    S: Schema + DeserializeOwned,
    R: Read,
{
    Loader::new().load(schema, source)
}

/// Like [`load`], reading the document from a string.
///
/// # Errors
///
/// See [`Loader::load_str`].
pub fn load_str<S>(schema: &mut S, contents: &str) -> TreeconfResult<Configuration>
where
    S: Schema + DeserializeOwned,
{
    Loader::new().load_str(schema, contents)
}

/// Like [`load`], reading the document from a file.
///
/// # Errors
///
/// See [`Loader::load_file`].
pub fn load_file<S>(schema: &mut S, path: impl AsRef<Utf8Path>) -> TreeconfResult<Configuration>
where
    S: Schema + DeserializeOwned,
{
    Loader::new().load_file(schema, path)
}

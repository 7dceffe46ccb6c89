//! Typed YAML configuration with dotted-path lookup.
//!
//! `treeconf` decodes a YAML document into a caller-supplied schema, then
//! builds a tree of nodes mirroring the schema's fields. Each leaf resolves
//! its value from three sources, highest precedence first:
//!
//! 1. the environment variable named by the field's `env` annotation, when
//!    set and non-empty;
//! 2. the value decoded from the document;
//! 3. the field's declared `default`, when the value chosen above is absent
//!    or a zero value, including a zero value read from the environment.
//!
//! Values are then read or overwritten by dotted path, for example
//! `http.server.host`.
//!
//! ```
//! use serde::Deserialize;
//! use treeconf::Schema;
//!
//! #[derive(Default, Deserialize, Schema)]
//! #[serde(default)]
//! struct Config {
//!     http: Http,
//! }
//!
//! #[derive(Default, Deserialize, Schema)]
//! #[serde(default)]
//! struct Http {
//!     host: String,
//!     #[treeconf(default = 8080, env = "DOC_HTTP_PORT")]
//!     port: i64,
//! }
//!
//! let mut config = Config::default();
//! let mut cfg = treeconf::load_str(&mut config, "http:\n  host: example.org\n")?;
//! assert_eq!(cfg.get_string("http.host"), "example.org");
//! assert_eq!(cfg.get_int("http.port"), 8080);
//!
//! cfg.set("http.port", 9000)?;
//! assert_eq!(cfg.get_int("http.port"), 9000);
//! # Ok::<(), treeconf::TreeconfError>(())
//! ```
//!
//! The derive macro lives in the companion `treeconf_macros` crate.

pub use treeconf_macros::Schema;

mod builder;
mod config;
mod env_key;
mod environment;
mod error;
mod node;
mod schema;
mod tag;
mod value;

pub use builder::{ConversionPolicy, node_key};
pub use config::{Configuration, Loader, ROOT_NAME, load, load_file, load_str};
pub use env_key::normalize_env_key;
pub use environment::{EnvLookup, ProcessEnv};
pub use error::{TreeconfError, TreeconfResult};
pub use node::{Node, NodeId, NodeRef, NodeTree, ValueSource};
pub use schema::{FieldDescriptor, FieldSource, Leaf, Schema};
pub use tag::{Tag, TagStore};
pub use value::{InvalidBool, Kind, Value, convert};

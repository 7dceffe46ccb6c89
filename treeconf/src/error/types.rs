//! Primary error enum for loading and mutating configuration trees.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::value::Kind;

/// Convenience alias for results returned by this crate.
pub type TreeconfResult<T> = Result<T, TreeconfError>;

/// Errors that can occur while loading or updating configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TreeconfError {
    /// The configuration source could not be read.
    #[error("failed to read configuration source: {source}")]
    Read {
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be opened or read.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The YAML decoder rejected the document.
    ///
    /// The message is the decoder's own, unchanged.
    #[error("{source}")]
    Decode {
        /// Error reported by the YAML decoder.
        #[source]
        source: Box<serde_saphyr::Error>,
    },

    /// A textual value could not be parsed into the declared kind.
    #[error("cannot convert {value:?} to {kind}: {source}")]
    Conversion {
        /// Raw text taken from the environment or a declared default.
        value: String,
        /// Kind the text was converted into.
        kind: Kind,
        /// Parser failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No conversion exists for the declared kind.
    #[error("no conversion available for this kind: {kind}")]
    UnsupportedKind {
        /// Declared kind of the field.
        kind: Kind,
    },

    /// `set` targeted a dotted path with no matching node.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// Dotted path that did not resolve.
        key: String,
    },

    /// Two sibling fields resolved to the same lookup key.
    #[error("duplicate configuration key '{path}'")]
    DuplicateKey {
        /// Dotted path of the second field claiming the key.
        path: String,
    },

    /// Resolving a field's value failed while building the tree.
    #[error("failed to resolve '{path}': {source}")]
    Resolve {
        /// Dotted path of the field being resolved.
        path: String,
        /// Conversion failure raised for the field.
        #[source]
        source: Box<TreeconfError>,
    },
}

//! Constructors for `TreeconfError` variants that carry boxed sources.

use super::TreeconfError;
use crate::value::Kind;

impl TreeconfError {
    /// Construct a conversion error for `value` parsed as `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeconf::{Kind, TreeconfError};
    /// let err = TreeconfError::conversion("abc", Kind::Int, "not a number");
    /// assert!(matches!(err, TreeconfError::Conversion { .. }));
    /// ```
    #[must_use]
    pub fn conversion(
        value: impl Into<String>,
        kind: Kind,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Conversion {
            value: value.into(),
            kind,
            source: source.into(),
        }
    }

    /// Wrap `source` with the dotted path of the field being resolved.
    #[must_use]
    pub fn resolve(path: impl Into<String>, source: Self) -> Self {
        Self::Resolve {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Construct a [`TreeconfError::KeyNotFound`] for `key`.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Returns the innermost error, looking through [`TreeconfError::Resolve`].
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Resolve { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<serde_saphyr::Error> for TreeconfError {
    fn from(source: serde_saphyr::Error) -> Self {
        Self::Decode {
            source: Box::new(source),
        }
    }
}

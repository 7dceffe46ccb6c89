//! Key/value storage for annotation tokens.

use std::collections::BTreeMap;

/// Raw tokens parsed from an annotation, keyed by token name.
///
/// Bare tokens are stored with an empty value. A repeated key keeps the
/// last value seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagStore {
    entries: BTreeMap<String, String>,
}

impl TagStore {
    pub(super) fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    /// Whether `key` appeared in the annotation, with or without a value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value recorded for `key`, or `""` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map_or("", String::as_str)
    }

    /// Iterate over the recorded tokens in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the annotation held no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

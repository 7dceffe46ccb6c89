//! Parsing of field annotations into tag descriptors.
//!
//! An annotation is a space separated list of tokens, each either a bare
//! `key` or `key:"value"`:
//!
//! ```text
//! yaml:"custom_key" default:"1" env:"CFG_PORT" required
//! ```
//!
//! The parser is total. Malformed tokens are stored with whatever key and
//! value they split into, and unrecognised keys are kept but unused.

mod store;

pub use store::TagStore;

use crate::env_key::normalize_env_key;

const SEPARATOR: char = ' ';
const ASSIGN: char = ':';
const QUOTE: char = '"';

/// Parsed field annotation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tag {
    default: String,
    key: String,
    required: bool,
    env: String,
    store: TagStore,
}

impl Tag {
    /// Parse a raw annotation string.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeconf::Tag;
    /// let tag = Tag::parse(r#"yaml:"port" default:"8080" env:"app.port" required"#);
    /// assert_eq!(tag.key(), "port");
    /// assert_eq!(tag.default_value(), "8080");
    /// assert_eq!(tag.env(), "APP_PORT");
    /// assert!(tag.required());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut store = TagStore::default();
        for token in raw.split(SEPARATOR).filter(|t| !t.is_empty()) {
            match token.split_once(ASSIGN) {
                Some((key, value)) => store.insert(key, strip_quotes(value)),
                None => store.insert(token, ""),
            }
        }

        let env = store.get("env");
        Self {
            default: store.get("default").to_owned(),
            key: store.get("yaml").to_owned(),
            required: store.has("required"),
            env: if env.is_empty() {
                String::new()
            } else {
                normalize_env_key(env)
            },
            store,
        }
    }

    /// Default used when a field resolves to nothing or to a zero value.
    /// Empty when none was declared.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Override lookup key. Empty when none was declared.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the field was annotated `required`. Parsed but not enforced.
    #[must_use]
    pub const fn required(&self) -> bool {
        self.required
    }

    /// Normalised environment variable name. Empty when none was declared.
    #[must_use]
    pub fn env(&self) -> &str {
        &self.env
    }

    /// Every token of the annotation, including unrecognised ones.
    #[must_use]
    pub const fn store(&self) -> &TagStore {
        &self.store
    }
}

/// Remove at most one leading and one trailing quote character.
///
/// This is not a full trim: doubled quotes survive, so `default:""x""`
/// yields `"x"` rather than `x`.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTE).unwrap_or(value);
    value.strip_suffix(QUOTE).unwrap_or(value)
}

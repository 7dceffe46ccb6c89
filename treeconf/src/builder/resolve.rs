//! Value precedence for a single leaf.

use tracing::debug;

use crate::environment::EnvLookup;
use crate::error::TreeconfResult;
use crate::node::ValueSource;
use crate::tag::Tag;
use crate::value::{Kind, Value, convert};

/// Resolve a leaf value: environment override, then document value, then
/// declared default.
///
/// A declared environment variable that is set and non-empty replaces the
/// document value. If the value chosen so far is absent or a zero value and
/// a default is declared, the default replaces it, even when it came from
/// the environment.
pub(super) fn resolve_leaf(
    path: &str,
    tag: &Tag,
    kind: Kind,
    document: Option<Value>,
    env: &dyn EnvLookup,
) -> TreeconfResult<(Option<Value>, ValueSource)> {
    let (value, source) = match env_override(tag, env) {
        Some(raw) => {
            let converted = convert(&raw, kind)?;
            debug!(path, env = tag.env(), "applied environment override");
            (Some(converted), ValueSource::Environment)
        }
        None if document.is_some() => (document, ValueSource::Document),
        None => (None, ValueSource::Unset),
    };

    let needs_default = value.as_ref().is_none_or(Value::is_zero);
    if needs_default && !tag.default_value().is_empty() {
        let default = convert(tag.default_value(), kind)?;
        debug!(path, default = tag.default_value(), "applied declared default");
        return Ok((Some(default), ValueSource::Default));
    }
    Ok((value, source))
}

fn env_override(tag: &Tag, env: &dyn EnvLookup) -> Option<String> {
    if tag.env().is_empty() {
        return None;
    }
    env.lookup(tag.env()).filter(|raw| !raw.is_empty())
}

//! Composes the raw annotation string carried by each field descriptor.

use crate::derive::parse::SchemaField;

fn quoted(name: &str, value: &str) -> String {
    format!("{name}:\"{value}\"")
}

/// Build the annotation for `field`.
///
/// Tokens appear in a fixed order: the serde mapping key, the raw `tag`
/// contents, then the structured `key`, `default`, `env` and `required`
/// attributes. Later tokens win when the runtime parser sees a name twice,
/// so an explicit `key` overrides a serde rename.
pub(crate) fn compose_annotation(field: &SchemaField) -> String {
    let attrs = &field.attrs;
    let mut tokens = Vec::new();
    if let Some(key) = &field.serde_key {
        tokens.push(quoted("yaml", key));
    }
    if let Some(raw) = attrs.tag.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        tokens.push(raw.to_owned());
    }
    if let Some(key) = &attrs.key {
        tokens.push(quoted("yaml", key));
    }
    if let Some(default) = &attrs.default {
        tokens.push(quoted("default", default));
    }
    if let Some(env) = &attrs.env {
        tokens.push(quoted("env", env));
    }
    if attrs.required {
        tokens.push(String::from("required"));
    }
    tokens.join(" ")
}

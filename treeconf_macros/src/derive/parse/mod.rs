//! Parsing utilities for the `Schema` derive macro.
//!
//! Gathers `#[treeconf(...)]` metadata from the struct and its fields,
//! together with the serde attributes that change a field's mapping key.

use syn::meta::ParseNestedMeta;
use syn::parenthesized;
use syn::{Attribute, LitStr, Token};

mod input;
mod literals;
mod serde_attrs;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{SchemaField, SchemaInput, parse_input};
use literals::{lit_default, lit_str};
use serde_attrs::{serde_mapping_key, serde_rename_all};
pub(crate) use type_utils::{FieldShape, classify, type_label};

#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[treeconf(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `treeconf::`.
    pub crate_path: Option<syn::Path>,
}

/// Explicit leaf or nested classification requested by the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldClass {
    Leaf,
    Nested,
}

/// Field-level attributes recognised by `#[derive(Schema)]`.
///
/// - `tag` holds a raw annotation passed through unchanged.
/// - `default`, `env` and `key` render single annotation tokens; their
///   values may not contain whitespace since tokens are space separated.
/// - `required` renders the bare `required` token.
/// - `class` records a `leaf` or `nested` override.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub tag: Option<String>,
    pub default: Option<String>,
    pub env: Option<String>,
    pub key: Option<String>,
    pub required: bool,
    pub class: Option<FieldClass>,
}

/// Iterate all `#[treeconf(...)]` attributes once and apply a callback.
fn parse_treeconf<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("treeconf")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Rejects values that would split into several annotation tokens.
fn single_token(value: String, span: proc_macro2::Span, key: &str) -> syn::Result<String> {
    if value.chars().any(char::is_whitespace) {
        return Err(syn::Error::new(
            span,
            format!("{key} must not contain whitespace; annotation tokens are space separated"),
        ));
    }
    Ok(value)
}

fn token_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<String> {
    let lit: LitStr = lit_str(meta, key)?;
    single_token(lit.value(), lit.span(), key)
}

/// Extracts `#[treeconf(...)]` metadata applied to a struct.
///
/// Only the `crate` key is recognised. Unknown keys are ignored so callers
/// keep compiling when new attributes appear.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_treeconf(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            return Ok(());
        }
        discard_unknown(meta)
    })?;
    Ok(out)
}

fn set_class(out: &mut FieldAttrs, meta: &ParseNestedMeta, class: FieldClass) -> syn::Result<()> {
    match out.class {
        Some(existing) if existing != class => Err(meta.error(
            "a field cannot be both `leaf` and `nested`",
        )),
        _ => {
            out.class = Some(class);
            Ok(())
        }
    }
}

/// Applies a recognised field attribute, returning `true` if handled.
fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<bool> {
    let Some(ident) = meta.path.get_ident() else {
        return Ok(false);
    };
    match ident.to_string().as_str() {
        "tag" => {
            out.tag = Some(lit_str(meta, "tag")?.value());
        }
        "default" => {
            let (value, span) = lit_default(meta)?;
            out.default = Some(single_token(value, span, "default")?);
        }
        "env" => {
            out.env = Some(token_str(meta, "env")?);
        }
        "key" => {
            let key = token_str(meta, "key")?;
            if key.is_empty() {
                return Err(meta.error("key must not be empty"));
            }
            out.key = Some(key);
        }
        "required" => {
            // Accept both `required` and `required = true`
            out.required = if meta.input.peek(Token![=]) {
                meta.value()?.parse::<syn::LitBool>()?.value
            } else {
                true
            };
        }
        "leaf" => set_class(out, meta, FieldClass::Leaf)?,
        "nested" => set_class(out, meta, FieldClass::Nested)?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Parses field-level `#[treeconf(...)]` attributes.
///
/// Recognised keys are `tag`, `default`, `env`, `key`, `required`, `leaf`
/// and `nested`. Unknown keys are ignored, matching [`parse_struct_attrs`].
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_treeconf(attrs, |meta| {
        if !apply_field_attr(meta, &mut out)? {
            discard_unknown(meta)?;
        }
        Ok(())
    })?;
    Ok(out)
}

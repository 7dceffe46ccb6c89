//! Procedural macros for `treeconf`.
//!
//! `#[derive(Schema)]` describes a struct's fields to the tree builder in
//! place of runtime reflection. For each named field it emits the field's
//! name, its annotation string and how to read it: as a primitive leaf, as a
//! nested schema, or as an opaque leaf whose type has no primitive mapping.
//!
//! Field annotations come from `#[treeconf(...)]`:
//!
//! - `tag = "..."` passes a raw annotation such as
//!   `yaml:"port" default:"8080"` through verbatim;
//! - `default = <literal>`, `env = "..."` and `key = "..."` render the
//!   matching `default`, `env` and `yaml` tokens;
//! - `required` renders the bare `required` token;
//! - `leaf` and `nested` override the type-based classification.
//!
//! `#[serde(rename = "...")]` and `#[serde(rename_all = "...")]` are the
//! decoder's mapping keys, so they become the `yaml` override as well.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for the `treeconf::Schema` trait.
///
/// Only structs with named fields are accepted.
#[proc_macro_derive(Schema, attributes(treeconf))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

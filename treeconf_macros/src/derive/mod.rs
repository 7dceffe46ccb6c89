//! Implementation of `#[derive(Schema)]`.
//!
//! Parsing validates the input and gathers attribute metadata; generation
//! turns the parsed fields into the `Schema` impl.

pub(crate) mod generate;
pub(crate) mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expand the derive for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::generate_schema_impl(&parsed))
}

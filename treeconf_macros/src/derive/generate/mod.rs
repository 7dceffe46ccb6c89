//! Code generation for `#[derive(Schema)]`.

mod annotation;
mod fields;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::parse::SchemaInput;

pub(crate) use annotation::compose_annotation;
pub(crate) use fields::field_descriptor;

/// Prefix for runtime items named by the generated impl.
///
/// `#[treeconf(crate = "...")]` replaces the default `treeconf`, for callers
/// that rename the dependency or derive inside the runtime crate itself.
fn runtime_path(input: &SchemaInput) -> TokenStream {
    input
        .struct_attrs
        .crate_path
        .as_ref()
        .map_or_else(|| quote! { treeconf }, ToTokens::to_token_stream)
}

/// Generate the `Schema` impl for a parsed struct.
///
/// Fields are listed in declaration order.
pub(crate) fn generate_schema_impl(input: &SchemaInput) -> TokenStream {
    let krate = runtime_path(input);
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let descriptors = input
        .fields
        .iter()
        .map(|field| field_descriptor(&krate, field));
    quote! {
        impl #impl_generics #krate::Schema for #ident #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<#krate::FieldDescriptor<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }
    }
}

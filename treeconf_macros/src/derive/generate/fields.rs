//! Per-field descriptor tokens.

use proc_macro2::TokenStream;
use quote::quote;

use super::compose_annotation;
use crate::derive::parse::{FieldClass, FieldShape, SchemaField, classify, type_label};

fn shape(field: &SchemaField) -> FieldShape {
    match field.attrs.class {
        Some(FieldClass::Leaf) => FieldShape::Leaf,
        Some(FieldClass::Nested) => FieldShape::Nested,
        None => classify(&field.ty),
    }
}

/// Tokens constructing the `FieldDescriptor` for `field`.
pub(crate) fn field_descriptor(krate: &TokenStream, field: &SchemaField) -> TokenStream {
    let name = &field.name;
    let member = &field.member;
    let tag = compose_annotation(field);
    match shape(field) {
        FieldShape::Leaf => quote! {
            #krate::FieldDescriptor::leaf(#name, #tag, &self.#member)
        },
        FieldShape::Nested => quote! {
            #krate::FieldDescriptor::nested(#name, #tag, &self.#member)
        },
        FieldShape::Opaque => {
            let label = type_label(&field.ty);
            quote! {
                #krate::FieldDescriptor::opaque(#name, #tag, #label)
            }
        }
    }
}

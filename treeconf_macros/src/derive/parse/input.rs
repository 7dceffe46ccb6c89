//! Input parsing for the `Schema` derive macro.
//!
//! Collects the struct identifier, generics and per-field metadata in one
//! pass so expansion can fail fast with useful errors.

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type};

use super::{
    FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs, serde_mapping_key,
    serde_rename_all, single_token,
};

/// A named field together with everything the generator needs.
pub(crate) struct SchemaField {
    /// Member used to borrow the field, raw prefix included.
    pub member: Ident,
    /// Node name: the field identifier without a raw prefix.
    pub name: String,
    pub ty: Type,
    pub attrs: FieldAttrs,
    /// Mapping key implied by serde renames, if any.
    pub serde_key: Option<String>,
}

/// Parsed derive input.
pub(crate) struct SchemaInput {
    pub ident: Ident,
    pub generics: Generics,
    pub struct_attrs: StructAttrs,
    pub fields: Vec<SchemaField>,
}

fn shape_error(input: &DeriveInput) -> syn::Error {
    let ident = &input.ident;
    let got = match &input.data {
        Data::Struct(data) => match data.fields {
            Fields::Unnamed(_) => "tuple struct",
            _ => "unit struct",
        },
        Data::Enum(_) => "enum",
        Data::Union(_) => "union",
    };
    syn::Error::new_spanned(
        ident,
        format!("Schema expected a struct with named fields but got {got} `{ident}`"),
    )
}

/// Gathers information from the user-provided struct.
///
/// Enums, unions, tuple structs and unit structs are rejected.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<SchemaInput> {
    let Data::Struct(data) = &input.data else {
        return Err(shape_error(input));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(shape_error(input));
    };
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let rename_all = serde_rename_all(&input.attrs)?;

    let mut fields = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let Some(member) = field.ident.clone() else {
            return Err(shape_error(input));
        };
        fields.push(SchemaField {
            name: member.unraw().to_string(),
            member,
            ty: field.ty.clone(),
            attrs: parse_field_attrs(&field.attrs)?,
            serde_key: serde_mapping_key(field, rename_all)?
                .map(|key| single_token(key, field.span(), "serde rename"))
                .transpose()?,
        });
    }

    Ok(SchemaInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        struct_attrs,
        fields,
    })
}

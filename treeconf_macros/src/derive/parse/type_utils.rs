//! Type introspection helpers.
//!
//! The derive has no type information beyond the field's syntax, so leaf and
//! nested fields are told apart by shape: known scalar paths and `Option`s
//! of them are leaves, collections and unmapped scalars are opaque, and any
//! other named type is assumed to be a nested schema.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

/// Scalars with a primitive `Leaf` mapping in the runtime crate.
const LEAF_TYPES: &[&str] = &[
    "String", "bool", "f64", "f32", "i64", "i32", "i16", "i8", "u32", "u16", "u8",
];

/// Scalars whose range or shape has no primitive mapping.
const OPAQUE_SCALARS: &[&str] = &["u64", "u128", "i128", "usize", "isize", "char", "str"];

/// Containers that never form part of the tree.
const COLLECTIONS: &[&str] = &[
    "Vec",
    "VecDeque",
    "HashMap",
    "BTreeMap",
    "HashSet",
    "BTreeSet",
];

/// How a field participates in the node tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FieldShape {
    /// A primitive leaf read through the `Leaf` trait.
    Leaf,
    /// A nested schema that becomes a branch.
    Nested,
    /// A leaf with no conversion, labelled with its type.
    Opaque,
}

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}

/// Returns the generic parameter if `ty` is the provided wrapper.
///
/// The check is shallow: it inspects only the final path segment so forms
/// like `std::option::Option<T>` match as well.
fn type_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }
    extract_first_type_argument(&last.arguments)
}

/// Returns the inner type if `ty` is `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Option")
}

/// Returns the inner type if `ty` is `Box<T>`.
pub(crate) fn box_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Box")
}

/// Returns the final path segment's name when it carries no generic
/// arguments.
fn plain_name(ty: &Type) -> Option<String> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    let last = p.path.segments.last()?;
    last.arguments
        .is_none()
        .then(|| last.ident.to_string())
}

fn last_ident(ty: &Type) -> Option<String> {
    let Type::Path(p) = ty else {
        return None;
    };
    p.path.segments.last().map(|seg| seg.ident.to_string())
}

fn is_leaf_scalar(ty: &Type) -> bool {
    plain_name(ty).is_some_and(|name| LEAF_TYPES.contains(&name.as_str()))
}

/// Classify a field type by its syntax.
///
/// `Option<T>` and `Box<T>` are leaves when `T` is a leaf scalar and opaque
/// otherwise. Non-path types such as tuples, arrays and references are
/// opaque.
pub(crate) fn classify(ty: &Type) -> FieldShape {
    if let Some(inner) = option_inner(ty).or_else(|| box_inner(ty)) {
        return if is_leaf_scalar(inner) {
            FieldShape::Leaf
        } else {
            FieldShape::Opaque
        };
    }
    if is_leaf_scalar(ty) {
        return FieldShape::Leaf;
    }
    match last_ident(ty) {
        Some(name) if OPAQUE_SCALARS.contains(&name.as_str()) => FieldShape::Opaque,
        Some(name) if COLLECTIONS.contains(&name.as_str()) => FieldShape::Opaque,
        Some(_) => FieldShape::Nested,
        None => FieldShape::Opaque,
    }
}

/// Render `ty` as a compact label such as `Vec<String>`.
pub(crate) fn type_label(ty: &Type) -> String {
    const JOINS: &[(&str, &str)] = &[
        (" :: ", "::"),
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" ,", ","),
        (" ;", ";"),
        ("& ", "&"),
    ];
    JOINS
        .iter()
        .fold(ty.to_token_stream().to_string(), |label, (from, to)| {
            label.replace(from, to)
        })
}

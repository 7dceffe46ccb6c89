//! Literal parsing helpers for derive attributes.

use proc_macro2::Span;
use syn::{Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp};

/// Parses a string literal from a field attribute.
///
/// # Examples
///
/// ```rust,ignore
/// use syn::Attribute;
/// let attr: Attribute = syn::parse_quote!(#[treeconf(env = "PORT")]);
/// attr.parse_nested_meta(|meta| {
///     let s = lit_str(&meta, "env")?;
///     assert_eq!(s.value(), "PORT");
///     Ok(())
/// })?;
/// ```
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}

/// Renders a scalar literal in the textual form the runtime converts.
fn scalar_text(lit: &Lit) -> Option<String> {
    match lit {
        Lit::Str(s) => Some(s.value()),
        Lit::Int(i) => Some(i.base10_digits().to_owned()),
        Lit::Float(f) => Some(f.base10_digits().to_owned()),
        Lit::Bool(b) => Some(b.value.to_string()),
        _ => None,
    }
}

/// Parses the `default = ...` value into its annotation text.
///
/// Strings are taken verbatim. Integer, float and boolean literals, including
/// negated numbers, are rendered without suffixes so `default = 8080u16`
/// yields `8080`.
pub(crate) fn lit_default(meta: &syn::meta::ParseNestedMeta) -> syn::Result<(String, Span)> {
    let expr = meta.value()?.parse::<Expr>()?;
    let text = match &expr {
        Expr::Lit(ExprLit { lit, .. }) => scalar_text(lit),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit {
                lit: lit @ (Lit::Int(_) | Lit::Float(_)),
                ..
            }) => scalar_text(lit).map(|digits| format!("-{digits}")),
            _ => None,
        },
        _ => None,
    };
    let span = syn::spanned::Spanned::span(&expr);
    text.map(|value| (value, span)).ok_or_else(|| {
        syn::Error::new(
            span,
            "default must be a string, integer, float or boolean literal",
        )
    })
}

//! Conversion from environment and default text into typed values.

use thiserror::Error;

use super::{Kind, Value};
use crate::error::{TreeconfError, TreeconfResult};

/// Text that is not one of the accepted boolean spellings.
#[derive(Debug, Error)]
#[error("invalid boolean literal; expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")]
pub struct InvalidBool;

fn parse_bool(raw: &str) -> Result<bool, InvalidBool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(InvalidBool),
    }
}

/// Convert `raw` into a [`Value`] of the given `kind`.
///
/// Strings pass through unchanged. Integers are parsed as base-10 `i64`
/// and floats as `f64`.
///
/// # Errors
///
/// Returns [`TreeconfError::Conversion`] when `raw` does not parse as
/// `kind`, and [`TreeconfError::UnsupportedKind`] for
/// [`Kind::Unsupported`].
///
/// # Examples
///
/// ```
/// use treeconf::{Kind, Value, convert};
/// assert_eq!(convert("42", Kind::Int)?, Value::Int(42));
/// assert_eq!(convert("T", Kind::Bool)?, Value::Bool(true));
/// # Ok::<(), treeconf::TreeconfError>(())
/// ```
pub fn convert(raw: &str, kind: Kind) -> TreeconfResult<Value> {
    match kind {
        Kind::String => Ok(Value::String(raw.to_owned())),
        Kind::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|err| TreeconfError::conversion(raw, kind, err)),
        Kind::Float => raw
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|err| TreeconfError::conversion(raw, kind, err)),
        Kind::Bool => parse_bool(raw)
            .map(Value::Bool)
            .map_err(|err| TreeconfError::conversion(raw, kind, err)),
        Kind::Unsupported(_) => Err(TreeconfError::UnsupportedKind { kind }),
    }
}

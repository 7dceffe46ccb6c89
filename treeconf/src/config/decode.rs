//! YAML decoding backed by `serde-saphyr`.

use serde::de::DeserializeOwned;
use serde_saphyr::Options;

use crate::error::TreeconfResult;

/// Decode `contents` into `S` using YAML 1.2 boolean semantics, so `yes`
/// and `on` stay strings.
pub(super) fn decode_yaml<S: DeserializeOwned>(contents: &str) -> TreeconfResult<S> {
    let schema = serde_saphyr::from_str_with_options(
        contents,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )?;
    Ok(schema)
}

//! Canonicalisation of environment variable names.

use std::sync::LazyLock;

use regex_lite::Regex;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and always compiles"
)]
static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^A-Z0-9]+").expect("valid pattern"));

/// Normalise `raw` into an environment variable name.
///
/// The input is uppercased, every run of characters outside `A-Z0-9`
/// becomes a single `_`, and leading or trailing underscores are removed.
/// Normalising an already normalised name returns it unchanged.
///
/// # Examples
///
/// ```
/// use treeconf::normalize_env_key;
/// assert_eq!(normalize_env_key("with%two%%symbols"), "WITH_TWO_SYMBOLS");
/// assert_eq!(normalize_env_key("_trim_"), "TRIM");
/// ```
#[must_use]
pub fn normalize_env_key(raw: &str) -> String {
    let upper = raw.to_uppercase();
    NON_ALNUM
        .replace_all(&upper, "_")
        .trim_matches('_')
        .to_owned()
}

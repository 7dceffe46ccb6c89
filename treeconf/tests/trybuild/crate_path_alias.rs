//! Trybuild fixture verifying `#[treeconf(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use serde::Deserialize;
use treeconf as my_cfg;

/// Generated code must reference types through `my_cfg`.
#[derive(Debug, Default, Deserialize, my_cfg::Schema)]
#[treeconf(crate = "my_cfg")]
#[serde(default)]
struct AliasedConfig {
    #[treeconf(default = "hello")]
    value: String,
    count: u32,
    inner: Inner,
}

#[derive(Debug, Default, Deserialize, my_cfg::Schema)]
#[treeconf(crate = "my_cfg")]
#[serde(default)]
struct Inner {
    enabled: Option<bool>,
}

fn main() {
    let mut config = AliasedConfig::default();
    let result: my_cfg::TreeconfResult<my_cfg::Configuration> =
        my_cfg::load_str(&mut config, "count: 2\n");
    let _ = result;
}

//! Typed getters and `set` on a loaded configuration.

use rstest::{fixture, rstest};
use serde::Deserialize;
use treeconf::{Configuration, Loader, Schema, TreeconfError, Value, ValueSource};

#[derive(Debug, Default, Deserialize, Schema)]
#[serde(default)]
struct Grammar {
    test_string: String,
    test_int: i64,
    test_float: f64,
    test_bool: bool,
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[fixture]
fn cfg() -> Configuration {
    let mut grammar = Grammar::default();
    Loader::new()
        .env_lookup(no_env)
        .load_str(
            &mut grammar,
            "test_string: \"val\"\ntest_int: 1\ntest_float: 2.5\ntest_bool: true\n",
        )
        .expect("load grammar")
}

#[rstest]
fn getters_return_typed_values(cfg: Configuration) {
    assert_eq!(cfg.get_string("test_string"), "val");
    assert_eq!(cfg.get_int("test_int"), 1);
    assert_eq!(cfg.get("test_float"), Some(&Value::Float(2.5)));
    assert!(cfg.get_bool("test_bool"));
}

#[rstest]
#[case::missing_key("nonexistent")]
#[case::past_a_leaf("test_int.more")]
#[case::empty_segment("test_int.")]
fn unresolved_paths_are_absent(cfg: Configuration, #[case] path: &str) {
    assert_eq!(cfg.get(path), None);
}

#[rstest]
fn mismatched_getters_return_zero_values(cfg: Configuration) {
    assert_eq!(cfg.get_string("test_int"), "");
    assert_eq!(cfg.get_int("test_string"), 0);
    assert_eq!(cfg.get("test_string").and_then(Value::as_float), None);
    assert!(!cfg.get_bool("test_string"));
}

#[rstest]
#[case::string("test_string", Value::from("set"))]
#[case::int("test_int", Value::Int(10))]
#[case::float("test_float", Value::Float(4.5))]
#[case::bool("test_bool", Value::Bool(false))]
fn set_overwrites_the_value(mut cfg: Configuration, #[case] key: &str, #[case] value: Value) {
    cfg.set(key, value.clone()).expect("set existing key");
    assert_eq!(cfg.get(key), Some(&value));
    assert_eq!(cfg.node(key).map(|n| n.source()), Some(ValueSource::Assigned));
}

#[rstest]
fn set_does_not_check_the_declared_kind(mut cfg: Configuration) {
    cfg.set("test_int", "eleven").expect("set existing key");
    assert_eq!(cfg.get_string("test_int"), "eleven");
    assert_eq!(cfg.get_int("test_int"), 0);
}

#[rstest]
fn set_on_a_missing_key_fails(mut cfg: Configuration) {
    let err = cfg
        .set("non_existent", true)
        .expect_err("missing key should fail");
    assert!(matches!(&err, TreeconfError::KeyNotFound { key } if key == "non_existent"));
    assert_eq!(err.to_string(), "key not found: non_existent");
}

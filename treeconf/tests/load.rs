//! End-to-end loading: document values, environment overrides, declared
//! defaults and custom mapping keys resolved through one schema.

use rstest::rstest;
use serde::Deserialize;
use treeconf::{Loader, Schema, Value, ValueSource};

#[derive(Debug, Default, Deserialize, Schema)]
#[serde(default)]
struct Grammar {
    test: String,
    #[treeconf(key = "custom_key")]
    #[serde(rename = "custom_key")]
    custom: String,
    nested: Nested,
    typed: Typed,
    #[serde(rename = "nested_custom")]
    custom_nested: NestedCustom,
}

#[derive(Debug, Default, Deserialize, Schema)]
#[serde(default)]
struct Nested {
    nestedkey: String,
    #[treeconf(env = "CFG_NESTED_OVERWRITE")]
    overwrite: String,
}

#[derive(Debug, Default, Deserialize, Schema)]
#[serde(default)]
struct Typed {
    i: i64,
    #[treeconf(default = 1)]
    defi: i64,
    f: f64,
    #[treeconf(default = 0.1)]
    deff: f64,
    b: bool,
    #[treeconf(default = true)]
    defb: bool,
}

#[derive(Debug, Default, Deserialize, Schema)]
#[serde(default)]
struct NestedCustom {
    key: String,
}

const DOCUMENT: &str = r#"test: "test_value"
custom_key: "test"
nested:
    nestedkey: "this is nested"
    overwrite: "don't look"
typed:
    i: 10
    f: 0.1
    b: true
nested_custom:
    key: "test"
"#;

#[test]
fn resolves_every_source_through_the_process_environment() {
    figment::Jail::expect_with(|j| {
        j.set_env("CFG_NESTED_OVERWRITE", "look");
        let mut grammar = Grammar::default();
        let cfg = treeconf::load(&mut grammar, DOCUMENT.as_bytes()).map_err(|e| e.to_string())?;

        assert_eq!(cfg.get("test"), Some(&Value::from("test_value")));
        assert_eq!(cfg.get("nested.nestedkey"), Some(&Value::from("this is nested")));
        assert_eq!(cfg.get("nested.overwrite"), Some(&Value::from("look")));
        assert_eq!(cfg.get("typed.i"), Some(&Value::Int(10)));
        assert_eq!(cfg.get("typed.defi"), Some(&Value::Int(1)));
        assert_eq!(cfg.get("typed.f"), Some(&Value::Float(0.1)));
        assert_eq!(cfg.get("typed.deff"), Some(&Value::Float(0.1)));
        assert_eq!(cfg.get("typed.b"), Some(&Value::Bool(true)));
        assert_eq!(cfg.get("typed.defb"), Some(&Value::Bool(true)));
        assert_eq!(cfg.get("custom_key"), Some(&Value::from("test")));
        assert_eq!(cfg.get("nested_custom.key"), Some(&Value::from("test")));

        // The decoded schema keeps the document value; only the tree sees
        // the override.
        assert_eq!(grammar.nested.overwrite, "don't look");
        Ok(())
    });
}

#[test]
fn empty_environment_value_does_not_override() {
    figment::Jail::expect_with(|j| {
        j.set_env("CFG_NESTED_OVERWRITE", "");
        let mut grammar = Grammar::default();
        let cfg = treeconf::load_str(&mut grammar, DOCUMENT).map_err(|e| e.to_string())?;
        assert_eq!(cfg.get_string("nested.overwrite"), "don't look");
        Ok(())
    });
}

fn lookup(name: &str) -> Option<String> {
    (name == "CFG_NESTED_OVERWRITE").then(|| String::from("injected"))
}

#[rstest]
#[case::document("typed.i", ValueSource::Document)]
#[case::default("typed.defi", ValueSource::Default)]
#[case::environment("nested.overwrite", ValueSource::Environment)]
fn records_the_source_of_each_leaf(#[case] path: &str, #[case] expected: ValueSource) {
    let mut grammar = Grammar::default();
    let cfg = Loader::new()
        .env_lookup(lookup)
        .load_str(&mut grammar, DOCUMENT)
        .expect("load grammar");
    let node = cfg.node(path).expect("leaf node");
    assert_eq!(node.source(), expected);
}

#[rstest]
fn defaults_apply_to_zero_document_values() {
    let mut grammar = Grammar::default();
    let cfg = Loader::new()
        .env_lookup(lookup)
        .load_str(&mut grammar, "typed:\n    defi: 0\n    defb: false\n")
        .expect("load grammar");
    assert_eq!(cfg.get_int("typed.defi"), 1);
    assert!(cfg.get_bool("typed.defb"));
    assert_eq!(cfg.get_string("test"), "");
    assert_eq!(cfg.node("test").map(|n| n.source()), Some(ValueSource::Document));
}

#[rstest]
fn root_path_is_empty_and_children_follow_declaration_order() {
    let mut grammar = Grammar::default();
    let cfg = Loader::new()
        .env_lookup(lookup)
        .load_str(&mut grammar, DOCUMENT)
        .expect("load grammar");
    let root = cfg.root();
    assert_eq!(root.path(), "");
    assert_eq!(root.name(), treeconf::ROOT_NAME);
    let keys: Vec<_> = root.children().map(|child| child.key().to_owned()).collect();
    assert_eq!(
        keys,
        ["test", "custom_key", "nested", "typed", "nested_custom"]
    );
    let key = root.find_node("nested_custom.key").expect("nested key");
    assert_eq!(key.path(), "nested_custom.key");
    assert_eq!(key.parent().map(|p| p.name().to_owned()).as_deref(), Some("custom_nested"));
}

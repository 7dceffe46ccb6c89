//! Tests for tree construction and value precedence.

use std::collections::HashMap;

use super::*;
use crate::schema::FieldDescriptor;
use crate::{Leaf, Schema};
use rstest::rstest;

#[derive(Default, Schema)]
#[treeconf(crate = "crate")]
struct Server {
    #[treeconf(env = "SRV_HOST", default = "localhost")]
    host: String,
    #[treeconf(env = "SRV_PORT", default = 8080)]
    port: i64,
    #[treeconf(env = "SRV_TLS", default = true)]
    tls: bool,
    ratio: f64,
}

#[derive(Default, Schema)]
#[treeconf(crate = "crate")]
struct App {
    name: String,
    #[treeconf(key = "http")]
    server: Server,
    tags: Vec<String>,
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

fn build(schema: &dyn Schema, env: &dyn EnvLookup, policy: ConversionPolicy) -> TreeconfResult<NodeTree> {
    TreeBuilder::new("Application", env, policy).build(schema)
}

fn leaf(tree: &NodeTree, path: &str) -> (Option<Value>, ValueSource) {
    let id = tree
        .find_node(tree.root(), path)
        .unwrap_or_else(|| panic!("missing node {path}"));
    let node = tree.node(id);
    (node.value().cloned(), node.source())
}

#[rstest]
fn nested_fields_become_branches_in_declaration_order() {
    let tree = build(&App::default(), &env_from(&[]), ConversionPolicy::Strict).expect("build");
    let root = tree.cursor(tree.root());
    let keys: Vec<_> = root.children().map(|c| c.key().to_owned()).collect();
    assert_eq!(keys, ["name", "http", "tags"]);

    let http = root.get_child("http").expect("http branch");
    assert_eq!(http.name(), "server");
    assert_eq!(http.kind(), None);
    assert_eq!(http.value(), None);
    let server_keys: Vec<_> = http.children().map(|c| c.key().to_owned()).collect();
    assert_eq!(server_keys, ["host", "port", "tls", "ratio"]);
}

#[rstest]
fn defaults_fill_zero_values() {
    let tree = build(&App::default(), &env_from(&[]), ConversionPolicy::Strict).expect("build");
    assert_eq!(
        leaf(&tree, "http.host"),
        (Some(Value::from("localhost")), ValueSource::Default)
    );
    assert_eq!(leaf(&tree, "http.port"), (Some(Value::Int(8080)), ValueSource::Default));
    assert_eq!(leaf(&tree, "http.tls"), (Some(Value::Bool(true)), ValueSource::Default));
    assert_eq!(leaf(&tree, "http.ratio"), (Some(Value::Float(0.0)), ValueSource::Document));
}

#[rstest]
fn document_values_beat_defaults() {
    let app = App {
        server: Server {
            host: "example.org".to_owned(),
            port: 9000,
            ..Server::default()
        },
        ..App::default()
    };
    let tree = build(&app, &env_from(&[]), ConversionPolicy::Strict).expect("build");
    assert_eq!(
        leaf(&tree, "http.host"),
        (Some(Value::from("example.org")), ValueSource::Document)
    );
    assert_eq!(leaf(&tree, "http.port"), (Some(Value::Int(9000)), ValueSource::Document));
}

#[rstest]
#[case("SRV_PORT", "7000", "http.port", Value::Int(7000))]
#[case("SRV_HOST", "env.example", "http.host", Value::from("env.example"))]
fn environment_beats_document_and_default(
    #[case] var: &str,
    #[case] raw: &str,
    #[case] path: &str,
    #[case] expected: Value,
) {
    let app = App {
        server: Server {
            host: "example.org".to_owned(),
            port: 9000,
            ..Server::default()
        },
        ..App::default()
    };
    let tree = build(&app, &env_from(&[(var, raw)]), ConversionPolicy::Strict).expect("build");
    assert_eq!(leaf(&tree, path), (Some(expected), ValueSource::Environment));
}

#[rstest]
#[case::int("SRV_PORT", "0", "http.port", Value::Int(8080))]
#[case::bool("SRV_TLS", "false", "http.tls", Value::Bool(true))]
fn zero_environment_values_fall_back_to_defaults(
    #[case] var: &str,
    #[case] raw: &str,
    #[case] path: &str,
    #[case] expected: Value,
) {
    let app = App {
        server: Server {
            port: 9000,
            tls: true,
            ..Server::default()
        },
        ..App::default()
    };
    let tree = build(&app, &env_from(&[(var, raw)]), ConversionPolicy::Strict).expect("build");
    assert_eq!(leaf(&tree, path), (Some(expected), ValueSource::Default));
}

#[rstest]
fn empty_environment_value_is_ignored() {
    let tree = build(
        &App::default(),
        &env_from(&[("SRV_HOST", "")]),
        ConversionPolicy::Strict,
    )
    .expect("build");
    assert_eq!(
        leaf(&tree, "http.host"),
        (Some(Value::from("localhost")), ValueSource::Default)
    );
}

#[rstest]
fn strict_policy_aborts_on_bad_environment_value() {
    let err = build(
        &App::default(),
        &env_from(&[("SRV_PORT", "eighty")]),
        ConversionPolicy::Strict,
    )
    .err()
    .expect("conversion should fail");
    assert!(
        matches!(&err, TreeconfError::Resolve { path, .. } if path == "http.port"),
        "unexpected error: {err}"
    );
    assert!(matches!(
        err.root_cause(),
        TreeconfError::Conversion { kind: Kind::Int, .. }
    ));
}

#[rstest]
fn lenient_policy_leaves_the_leaf_absent() {
    let tree = build(
        &App::default(),
        &env_from(&[("SRV_PORT", "eighty")]),
        ConversionPolicy::Lenient,
    )
    .expect("build");
    assert_eq!(leaf(&tree, "http.port"), (None, ValueSource::Unset));
    assert_eq!(
        leaf(&tree, "http.host"),
        (Some(Value::from("localhost")), ValueSource::Default)
    );
}

#[rstest]
fn opaque_fields_are_valueless_leaves() {
    let tree = build(&App::default(), &env_from(&[]), ConversionPolicy::Strict).expect("build");
    let id = tree.find_node(tree.root(), "tags").expect("tags leaf");
    let node = tree.node(id);
    assert_eq!(node.kind(), Some(Kind::Unsupported("Vec<String>")));
    assert_eq!(node.value(), None);
    assert_eq!(node.source(), ValueSource::Unset);
}

struct Manual {
    level: Option<i64>,
    hosts: Vec<String>,
}

impl Schema for Manual {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![
            FieldDescriptor::leaf("Level", r#"default:"3""#, &self.level),
            FieldDescriptor::opaque("Hosts", r#"env:"HOSTS""#, "Vec<String>"),
        ]
    }
}

#[rstest]
fn absent_values_take_the_default() {
    let manual = Manual {
        level: None,
        hosts: Vec::new(),
    };
    assert!(manual.hosts.is_empty());
    assert_eq!(<Option<i64> as Leaf>::KIND, Kind::Int);
    let tree = build(&manual, &env_from(&[]), ConversionPolicy::Strict).expect("build");
    assert_eq!(leaf(&tree, "level"), (Some(Value::Int(3)), ValueSource::Default));
}

#[rstest]
fn overriding_an_unsupported_kind_fails() {
    let manual = Manual {
        level: Some(1),
        hosts: Vec::new(),
    };
    let err = build(&manual, &env_from(&[("HOSTS", "a,b")]), ConversionPolicy::Strict)
        .err()
        .expect("unsupported kind");
    assert!(matches!(
        err.root_cause(),
        TreeconfError::UnsupportedKind {
            kind: Kind::Unsupported("Vec<String>")
        }
    ));
}

struct Clashing;

impl Schema for Clashing {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![
            FieldDescriptor::leaf("Port", "", &1_i64),
            FieldDescriptor::leaf("Other", r#"yaml:"port""#, &2_i64),
        ]
    }
}

#[rstest]
fn sibling_keys_must_be_unique() {
    let err = build(&Clashing, &env_from(&[]), ConversionPolicy::Strict)
        .err()
        .expect("duplicate key");
    assert!(matches!(err, TreeconfError::DuplicateKey { path } if path == "port"));
}

#[rstest]
#[case("DefI", "", "defi")]
#[case("max-conns", "", "max_conns")]
#[case("Name", r#"yaml:"Custom-Key""#, "Custom-Key")]
fn derives_lookup_keys(#[case] name: &str, #[case] tag: &str, #[case] expected: &str) {
    assert_eq!(node_key(name, &Tag::parse(tag)), expected);
}

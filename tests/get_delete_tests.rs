//! Integration tests for reading and removing values by path expression.

use dotyaml::document::node::YamlValue;
use dotyaml::document::parser::{parse_json, parse_yaml};
use dotyaml::document::tree::YamlTree;
use dotyaml::yamlpath::{self, PathError};

const FIXTURE: &str = r#"map:
  name: foo
  empty:

array:
- bar
- var
- zar

ports:
- 80
- 443

flags:
- true
- false

mapArray:
- foo: bar
  zoo: lion
  arr:
  - one
  - two
  - three
- foo: var
  boo: laa
"#;

fn fixture() -> YamlTree {
    YamlTree::new(parse_yaml(FIXTURE).unwrap())
}

fn seq_len(tree: &YamlTree, path: &str) -> usize {
    match tree.get(path).unwrap().value() {
        YamlValue::Array(items) => items.len(),
        other => panic!("expected sequence at '{}', got {:?}", path, other),
    }
}

#[test]
fn test_get_every_segment_kind() {
    let tree = fixture();

    assert_eq!(tree.get("map.name").unwrap().as_str(), Some("foo"));
    assert_eq!(tree.get("array.1").unwrap().as_str(), Some("var"));
    assert_eq!(tree.get("array.:zar").unwrap().as_str(), Some("zar"));
    assert_eq!(tree.get("mapArray.foo:var.boo").unwrap().as_str(), Some("laa"));
    assert_eq!(tree.get("mapArray.foo|bar.arr.2").unwrap().as_str(), Some("three"));
}

#[test]
fn test_get_container_nodes() {
    let tree = fixture();

    assert!(tree.get("map").unwrap().value().is_object());
    assert!(tree.get("mapArray.0.arr").unwrap().value().is_array());
}

#[test]
fn test_value_match_compares_scalar_text() {
    let tree = fixture();

    assert_eq!(tree.get("ports.:443").unwrap().as_i64(), Some(443));
    assert_eq!(tree.get("flags.|false").unwrap().as_bool(), Some(false));
    assert!(matches!(
        tree.get("ports.:8080"),
        Err(PathError::NotFound { .. })
    ));
}

#[test]
fn test_field_match_on_json_numbers() {
    let root = parse_json(r#"{"users": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]}"#).unwrap();

    let node = yamlpath::get(&root, "users.id:2.name").unwrap();
    assert_eq!(node.as_str(), Some("b"));
}

#[test]
fn test_get_does_not_modify() {
    let tree = fixture();
    let before = tree.clone();

    let _ = tree.get("missing.deep.path");
    let _ = tree.get("array.:nothing");
    let _ = tree.get("mapArray.luffy:gomugomuno.beat");

    assert_eq!(tree, before);
}

#[test]
fn test_get_missing_key_is_not_found() {
    let tree = fixture();

    let err = tree.get("map.nope").unwrap_err();
    assert_eq!(
        err,
        PathError::NotFound {
            segment: "nope".to_string()
        }
    );
}

#[test]
fn test_get_index_out_of_range() {
    let tree = fixture();

    assert_eq!(
        tree.get("array.99").unwrap_err(),
        PathError::IndexOutOfRange { index: 99, len: 3 }
    );
}

#[test]
fn test_get_through_null_is_not_found() {
    let tree = fixture();

    assert!(tree.get("map.empty").unwrap().value().is_null());
    assert!(matches!(
        tree.get("map.empty.inner"),
        Err(PathError::NotFound { .. })
    ));
}

#[test]
fn test_get_kind_mismatch() {
    let tree = fixture();

    assert!(matches!(
        tree.get("map.0"),
        Err(PathError::KindMismatch {
            expected: "sequence",
            found: "map",
            ..
        })
    ));
    assert!(matches!(
        tree.get("map.name.first"),
        Err(PathError::KindMismatch {
            expected: "map",
            found: "scalar",
            ..
        })
    ));
}

#[test]
fn test_get_append_segment() {
    let tree = fixture();

    assert!(matches!(
        tree.get("array.+"),
        Err(PathError::UnsupportedTerminal { .. })
    ));
    assert!(matches!(
        tree.get("mapArray.+.foo"),
        Err(PathError::NotFound { .. })
    ));
}

#[test]
fn test_error_messages_name_the_segment() {
    let tree = fixture();

    let message = tree.get("mapArray.foo|nope.boo").unwrap_err().to_string();
    assert!(message.contains("foo:nope"), "{}", message);
}

#[test]
fn test_delete_map_key_keeps_order() {
    let mut tree = fixture();

    let removed = tree.delete("map.name").unwrap();

    assert_eq!(removed.as_str(), Some("foo"));
    match tree.get("map").unwrap().value() {
        YamlValue::Object(entries) => {
            let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["empty"]);
        }
        other => panic!("Expected map, got {:?}", other),
    }
}

#[test]
fn test_delete_by_index_and_selectors() {
    let mut tree = fixture();

    assert_eq!(tree.delete("array.1").unwrap().as_str(), Some("var"));
    assert_eq!(tree.delete("array.:zar").unwrap().as_str(), Some("zar"));
    assert_eq!(seq_len(&tree, "array"), 1);
    assert_eq!(tree.get("array.0").unwrap().as_str(), Some("bar"));

    let removed = tree.delete("mapArray.foo|var").unwrap();
    assert!(removed.value().is_object());
    assert_eq!(seq_len(&tree, "mapArray"), 1);
    assert_eq!(tree.get("mapArray.0.foo").unwrap().as_str(), Some("bar"));
}

#[test]
fn test_delete_nested_through_selector() {
    let mut tree = fixture();

    tree.delete("mapArray.foo:bar.arr.0").unwrap();

    assert_eq!(seq_len(&tree, "mapArray.foo:bar.arr"), 2);
    assert_eq!(tree.get("mapArray.foo:bar.arr.0").unwrap().as_str(), Some("two"));
}

#[test]
fn test_delete_missing_leaves_document_unchanged() {
    let mut tree = fixture();
    let before = tree.clone();

    assert!(matches!(
        tree.delete("map.nope"),
        Err(PathError::NotFound { .. })
    ));
    assert!(matches!(
        tree.delete("missing.deep.path"),
        Err(PathError::NotFound { .. })
    ));
    assert_eq!(
        tree.delete("array.7").unwrap_err(),
        PathError::IndexOutOfRange { index: 7, len: 3 }
    );
    assert!(matches!(
        tree.delete("array.+"),
        Err(PathError::UnsupportedTerminal { .. })
    ));

    assert_eq!(tree, before);
}

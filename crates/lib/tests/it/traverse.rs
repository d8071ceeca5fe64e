//! Path resolution and typed accessor tests
//!
//! These cover the traversal rules over decoded data (maps and lists), the
//! handling of malformed paths, and how typed accessors fold type mismatches
//! into `None`.

use nested::{Map, Traverser, Value};

use super::helpers::*;

// ===== FIXTURE SCENARIOS =====

#[test]
fn test_fixture_deep_string() {
    let root = fixture();
    assert_eq!(root.get_str("hello.this.is.an.example"), Some("hi"));
}

#[test]
fn test_fixture_list_of_maps() {
    let root = fixture();
    assert_eq!(root.get_str("that[0].try"), Some("this"));
    // `that` is a sibling of `hello`, not a child of it
    assert_eq!(root.get_str("hello.that[0].try"), None);
}

#[test]
fn test_fixture_with_list_nested_under_hello() {
    let root = json(r#"{"hello": {"that": [{"try": "this"}]}}"#);
    assert_eq!(root.get_str("hello.that[0].try"), Some("this"));
}

#[test]
fn test_fixture_missing_intermediate() {
    let root = fixture();
    assert_eq!(root.get_str("hello.nope.x"), None);
    assert_eq!(root.get("hello.nope"), None);
}

#[test]
fn test_fixture_type_mismatch_is_not_found() {
    let root = fixture();
    // The value exists, but it is a string
    assert_eq!(root.get_int("hello.this.is.an.example"), None);
    assert_eq!(root.get_bool("hello.this.is.an.example"), None);
    assert_eq!(root.get_map("hello.this.is.an.example"), None);
    assert_eq!(root.get_list("hello.this.is.an.example"), None);
}

// ===== EMPTY AND DEGENERATE PATHS =====

#[test]
fn test_empty_path_returns_root() {
    let values = vec![
        Value::Null,
        Value::Bool(false),
        Value::Int(7),
        Value::from("text"),
        fixture(),
        json("[1, 2, 3]"),
    ];
    for value in &values {
        assert_eq!(value.get(""), Some(value));
        assert_eq!(Traverser::restricted().get(value, ""), Some(value));
    }
}

#[test]
fn test_delimiter_only_paths_return_root() {
    let root = fixture();
    for path in [".", "..", "[]", "[.]", "]]["] {
        assert_eq!(root.get(path), Some(&root), "path {path:?}");
    }
}

#[test]
fn test_empty_segments_are_skipped() {
    let root = fixture();
    assert_eq!(root.get_str(".hello..this.is.an.example."), Some("hi"));
    assert_eq!(root.get_str("that[[0]].try"), Some("this"));
}

#[test]
fn test_brackets_and_dots_are_interchangeable() {
    let root = fixture();
    assert_eq!(root.get_str("that.0.try"), Some("this"));
    assert_eq!(root.get_str("that]0[try"), Some("this"));
    assert_eq!(root.get_str("[that][0][try]"), Some("this"));
}

// ===== LIST INDEXING =====

#[test]
fn test_list_index_bounds() {
    let root = json("[10, 20, 30]");
    assert_eq!(root.get_int("[0]"), Some(10));
    assert_eq!(root.get_int("[2]"), Some(30));
    assert_eq!(root.get("[3]"), None);
    assert_eq!(root.get("[1000]"), None);
}

#[test]
fn test_list_rejects_negative_and_huge_indices() {
    let root = json("[10, 20, 30]");
    assert_eq!(root.get("[-1]"), None);
    assert_eq!(root.get("[-0]"), None);
    assert_eq!(root.get("[18446744073709551616]"), None);
    assert_eq!(root.get("[99999999999999999999999999]"), None);
}

#[test]
fn test_list_rejects_keys() {
    let root = json(r#"{"items": ["a", "b"]}"#);
    assert_eq!(root.get("items.first"), None);
    assert_eq!(root.get("items.length"), None);
    assert_eq!(root.get("items[1.5]"), None);
}

#[test]
fn test_empty_list() {
    let root = json(r#"{"items": []}"#);
    assert_eq!(root.get_list("items").map(<[Value]>::len), Some(0));
    assert_eq!(root.get("items[0]"), None);
}

#[test]
fn test_nested_lists() {
    let root = json("[[1, 2], [3, [4, 5]]]");
    assert_eq!(root.get_int("[1][1][0]"), Some(4));
    assert_eq!(root.get_int("1.1.1"), Some(5));
    assert_eq!(root.get("[1][1][2]"), None);
}

// ===== MAP LOOKUP =====

#[test]
fn test_numeric_map_keys() {
    let root = json(r#"{"2024": {"01": "january"}, "-1": "negative"}"#);
    assert_eq!(root.get_str("2024.01"), Some("january"));
    assert_eq!(root.get_str("[2024][01]"), Some("january"));
    assert_eq!(root.get_str("-1"), Some("negative"));
}

#[test]
fn test_keys_with_spaces_and_unicode() {
    let root = json(r#"{"first name": {"名前": "Ada"}}"#);
    assert_eq!(root.get_str("first name.名前"), Some("Ada"));
}

#[test]
fn test_keys_containing_delimiters_are_unreachable() {
    let root = json(r#"{"a.b": 1, "a": {"b": 2}}"#);
    // The path always splits, so the dotted key cannot be addressed
    assert_eq!(root.get_int("a.b"), Some(2));
}

#[test]
fn test_missing_final_key() {
    let root = json(r#"{"a": {"b": {}}}"#);
    assert_eq!(root.get("a.b.c"), None);
    assert!(root.get_map("a.b").is_some_and(Map::is_empty));
}

// ===== SCALARS STOP TRAVERSAL =====

#[test]
fn test_scalars_cannot_be_stepped_into() {
    let root = json(r#"{"n": null, "b": true, "i": 1, "f": 1.5, "s": "str"}"#);
    for key in ["n", "b", "i", "f", "s"] {
        assert!(root.get(key).is_some(), "{key} should resolve");
        assert_eq!(root.get(format!("{key}.x")), None);
        assert_eq!(root.get(format!("{key}[0]")), None);
    }
}

#[test]
fn test_null_is_found() {
    let root = json(r#"{"n": null}"#);
    assert_eq!(root.get("n"), Some(&Value::Null));
    assert_eq!(root.get("missing"), None);
}

// ===== TYPED ACCESSORS =====

#[test]
fn test_typed_accessors() {
    let root = json(
        r#"{
            "name": "svc",
            "port": 8080,
            "ratio": 0.25,
            "enabled": true,
            "tags": ["a", "b"],
            "limits": {"cpu": 2}
        }"#,
    );

    assert_eq!(root.get_str("name"), Some("svc"));
    assert_eq!(root.get_int("port"), Some(8080));
    assert_eq!(root.get_float("ratio"), Some(0.25));
    assert_eq!(root.get_bool("enabled"), Some(true));
    assert_eq!(root.get_list("tags").map(<[Value]>::len), Some(2));
    assert_eq!(
        root.get_map("limits").and_then(|m| m.get("cpu")),
        Some(&Value::Int(2))
    );
}

#[test]
fn test_typed_accessors_do_not_coerce() {
    let root = json(r#"{"port": "8080", "count": 3, "ratio": 1.0, "flag": 1}"#);

    assert_eq!(root.get_int("port"), None);
    assert_eq!(root.get_float("count"), None);
    assert_eq!(root.get_int("ratio"), None);
    assert_eq!(root.get_bool("flag"), None);
    assert_eq!(root.get_str("count"), None);
}

#[test]
fn test_get_as() {
    let root = json(r#"{"name": "svc", "port": 8080, "tags": ["a"]}"#);

    assert_eq!(root.get_as::<String>("name"), Some("svc".to_string()));
    assert_eq!(root.get_as::<&str>("name"), Some("svc"));
    assert_eq!(root.get_as::<i64>("port"), Some(8080));
    assert_eq!(root.get_as::<i64>("name"), None);
    assert_eq!(root.get_as::<String>("missing"), None);
    assert!(root.get_as::<&[Value]>("tags").is_some());
    assert!(root.get_as::<&Map>("tags").is_none());
}

#[test]
fn test_traverser_matches_value_methods_on_decoded_data() {
    let root = fixture();
    for traverser in [Traverser::restricted(), Traverser::general()] {
        assert_eq!(
            traverser.get_str(&root, "hello.this.is.an.example"),
            root.get_str("hello.this.is.an.example")
        );
        assert_eq!(
            traverser.get(&root, "that[0]"),
            root.get("that[0]")
        );
        assert_eq!(traverser.get(&root, "that[1]"), None);
    }
}

#[test]
fn test_large_numbers_decode_as_floats() {
    let root = json(r#"{"big": 18446744073709551615, "small": -9223372036854775808}"#);
    assert_eq!(root.get_int("big"), None);
    assert_eq!(root.get_float("big"), Some(18446744073709551615.0));
    assert_eq!(root.get_int("small"), Some(i64::MIN));
}

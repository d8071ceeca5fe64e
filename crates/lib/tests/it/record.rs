//! Record traversal tests
//!
//! Records are reachable in general mode only. These tests cover native
//! structures exposed through `ToRecord`, mixing records with decoded data,
//! and the difference between the two traversal modes.

use nested::{Mode, Record, Traverser, Value};

use super::helpers::*;

#[test]
fn test_record_fields_by_name() {
    let root = Value::from_record(&deployment());

    assert_eq!(root.get_str("name"), Some("api"));
    assert_eq!(root.get_str("primary.host"), Some("primary.local"));
    assert_eq!(root.get_int("primary.port"), Some(443));
    assert_eq!(root.get_str("primary.tags[1]"), Some("primary.local"));
}

#[test]
fn test_record_lists_and_nested_documents() {
    let root = Value::from_record(&deployment());

    assert_eq!(root.get_int("replicas[1].port"), Some(9443));
    assert_eq!(root.get_str("replicas.0.host"), Some("r1.local"));
    assert_eq!(root.get("replicas[2]"), None);
    assert_eq!(root.get_str("metadata.labels.tier"), Some("web"));
    assert!(root.has_value("metadata.owners", &Value::from("ops")));
}

#[test]
fn test_record_missing_fields() {
    let root = Value::from_record(&deployment());

    assert_eq!(root.get("primary.scheme"), None);
    assert_eq!(root.get("Primary.host"), None);
    // Fields are not indexable by position
    assert_eq!(root.get("primary[0]"), None);
}

#[test]
fn test_get_record() {
    let root = Value::from_record(&deployment());

    let primary = root.get_record("primary").expect("primary is a record");
    assert_eq!(primary.name(), "Endpoint");
    assert_eq!(primary.len(), 3);
    assert_eq!(root.get_record("name"), None);
    assert_eq!(root.get_record("").map(Record::name), Some("Deployment"));
}

#[test]
fn test_restricted_mode_fails_on_records() {
    let root = Value::from_record(&deployment());
    let restricted = Traverser::new(Mode::Restricted);

    assert_eq!(restricted.get(&root, "name"), None);
    assert_eq!(restricted.get(&root, "metadata.labels.tier"), None);
    assert_eq!(restricted.get(&root, ""), Some(&root));
}

#[test]
fn test_restricted_mode_fails_on_records_below_decoded_data() {
    let mut root = json(r#"{"services": []}"#);
    if let Value::Map(map) = &mut root {
        map.insert(
            "services".to_string(),
            Value::from(vec![Value::from_record(&deployment())]),
        );
    }

    assert_eq!(
        Traverser::general().get_str(&root, "services[0].name"),
        Some("api")
    );
    assert_eq!(Traverser::restricted().get_str(&root, "services[0].name"), None);
    // Reaching the record itself does not need to step into it
    assert!(Traverser::restricted()
        .get(&root, "services[0]")
        .is_some_and(|v| v.as_record().is_some()));
}

#[test]
fn test_modes() {
    assert_eq!(Traverser::restricted().mode(), Mode::Restricted);
    assert_eq!(Traverser::general().mode(), Mode::General);
    assert_eq!(Traverser::default(), Traverser::GENERAL);
}

#[test]
fn test_record_encodes_as_object() -> nested::Result<()> {
    let root = Value::from_record(&deployment().primary);
    let text = nested::codec::encode(&root)?;
    assert_eq!(
        text,
        r#"{"host":"primary.local","port":443,"tags":["blue","primary.local"]}"#
    );

    // Decoding gives a map, which both modes understand
    let decoded = nested::codec::decode(&text)?;
    assert_eq!(
        Traverser::restricted().get_int(&decoded, "port"),
        Some(443)
    );
    Ok(())
}

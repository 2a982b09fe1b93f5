//! Reply Tests
//!
//! Tests for the tagged reply union and its type-safe accessors.

use crimson::{Buffer, CrimsonError, Reply, ReplyKind};

#[test]
fn test_integer_accessor() {
    let reply = Reply::Integer(42);
    assert_eq!(reply.kind(), ReplyKind::Integer);
    assert_eq!(reply.as_integer().unwrap(), 42);
}

#[test]
fn test_bool_accessor() {
    assert!(Reply::Bool(true).as_bool().unwrap());
    assert!(!Reply::Bool(false).as_bool().unwrap());
}

#[test]
fn test_double_accessor() {
    let reply = Reply::Double(1.5);
    assert_eq!(reply.as_double().unwrap(), 1.5);
}

#[test]
fn test_bulk_accessors() {
    let reply = Reply::Bulk(Buffer::from("payload"));
    assert_eq!(reply.as_bulk().unwrap(), &Buffer::from("payload"));
    assert_eq!(reply.into_bulk().unwrap(), Buffer::from("payload"));
}

#[test]
fn test_list_accessor_preserves_order() {
    let reply = Reply::List(vec![Buffer::from("b"), Buffer::from("a")]);
    let items = reply.as_list().unwrap();
    assert_eq!(items[0], Buffer::from("b"));
    assert_eq!(items[1], Buffer::from("a"));
}

#[test]
fn test_zset_accessor_preserves_wire_order() {
    // Pairs stay exactly as delivered, even when scores are descending
    let reply = Reply::ZSet(vec![
        (Buffer::from("high"), 9.0),
        (Buffer::from("low"), 1.0),
    ]);
    let pairs = reply.as_zset().unwrap();
    assert_eq!(pairs[0], (Buffer::from("high"), 9.0));
    assert_eq!(pairs[1], (Buffer::from("low"), 1.0));
}

#[test]
fn test_map_accessor_and_lookup() {
    let reply = Reply::Map(vec![
        ("first".to_string(), Buffer::from("1")),
        ("second".to_string(), Buffer::from("2")),
    ]);

    let entries = reply.as_map().unwrap();
    assert_eq!(entries[0].0, "first");
    assert_eq!(entries[1].0, "second");

    assert_eq!(reply.map_get("second").unwrap(), Some(&Buffer::from("2")));
    assert_eq!(reply.map_get("missing").unwrap(), None);
}

#[test]
fn test_error_is_a_value() {
    let reply = Reply::Error("ERR wrong type".to_string());
    assert!(reply.is_error());
    assert_eq!(reply.error_message().unwrap(), "ERR wrong type");
}

#[test]
fn test_predicates() {
    assert!(Reply::Nil.is_nil());
    assert!(Reply::Queued.is_queued());
    assert!(!Reply::Integer(0).is_nil());
    assert!(!Reply::Nil.is_error());
}

#[test]
fn test_mismatched_accessor_fails() {
    // The integer accessor on a bulk reply must not coerce
    let reply = Reply::Bulk(Buffer::from("123"));
    let err = reply.as_integer().unwrap_err();

    match err {
        CrimsonError::TypeMismatch { expected, found } => {
            assert_eq!(expected, "integer");
            assert_eq!(found, "bulk string");
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_mismatched_accessor_on_nil() {
    assert!(Reply::Nil.as_bulk().is_err());
    assert!(Reply::Nil.as_list().is_err());
    assert!(Reply::Nil.as_integer().is_err());
}

#[test]
fn test_map_lookup_on_non_map_fails() {
    assert!(Reply::Integer(1).map_get("key").is_err());
}

//! Session Tests
//!
//! Tests for immediate-mode dispatch: write one command, decode one reply
//! with the selector bound to it.

use std::io::Cursor;

use crimson::{Buffer, Command, CrimsonError, Decoder, Reply, Session};

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

fn session(replies: &[u8]) -> TestSession {
    Session::new(Cursor::new(replies.to_vec()), Vec::new())
}

#[test]
fn test_immediate_mode_roundtrip() {
    let mut session = session(b"$5\r\nhello\r\n");

    let reply = session
        .run(&Command::new("GET").arg("greeting"), Decoder::Bulk)
        .unwrap();
    assert_eq!(reply, Reply::Bulk(Buffer::from("hello")));

    let (_, written) = session.into_parts();
    assert_eq!(written, b"*2\r\n$3\r\nGET\r\n$8\r\ngreeting\r\n");
}

#[test]
fn test_replies_decode_in_send_order() {
    let mut session = session(b":1\r\n$3\r\ntwo\r\n");

    let first = session
        .run(&Command::new("INCR").arg("counter"), Decoder::Integer)
        .unwrap();
    let second = session
        .run(&Command::new("GET").arg("name"), Decoder::Bulk)
        .unwrap();

    assert_eq!(first, Reply::Integer(1));
    assert_eq!(second, Reply::Bulk(Buffer::from("two")));
}

#[test]
fn test_server_error_returned_as_value() {
    let mut session = session(b"-ERR wrong type\r\n");

    let reply = session
        .run(&Command::new("INCR").arg("a-list"), Decoder::Integer)
        .unwrap();
    assert_eq!(reply, Reply::Error("ERR wrong type".to_string()));
}

#[test]
fn test_protocol_error_surfaces() {
    let mut session = session(b"?bogus\r\n");

    let err = session
        .run(&Command::new("PING"), Decoder::Status)
        .unwrap_err();
    assert!(matches!(err, CrimsonError::Protocol(_)));
}

#[test]
fn test_fresh_session_is_idle() {
    let session = session(b"");
    assert!(!session.is_queuing());
    assert!(!session.is_pipelining());
}

#[test]
fn test_each_command_is_one_frame() {
    let mut session = session(b"+OK\r\n+OK\r\n");

    session
        .run(&Command::new("SET").arg("a").arg("1"), Decoder::Bool)
        .unwrap();
    session
        .run(&Command::new("SET").arg("b").arg("2"), Decoder::Bool)
        .unwrap();

    let (_, written) = session.into_parts();
    let expected: Vec<u8> = [
        &b"*3\r\n$3\r\nSET\r\n$1\r\na\r\n$1\r\n1\r\n"[..],
        &b"*3\r\n$3\r\nSET\r\n$1\r\nb\r\n$1\r\n2\r\n"[..],
    ]
    .concat();
    assert_eq!(written, expected);
}

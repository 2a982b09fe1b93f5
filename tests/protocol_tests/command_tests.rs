//! Command Encoding Tests
//!
//! Tests for request framing: `*<argc>` followed by length-prefixed,
//! binary-safe elements.

use crimson::{Buffer, Command};

#[test]
fn test_wire_format_single_key() {
    let frame = Command::new("GET").arg("key").encode();
    assert_eq!(frame, b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n");
}

#[test]
fn test_wire_format_keyword_only() {
    let frame = Command::new("PING").encode();
    assert_eq!(frame, b"*1\r\n$4\r\nPING\r\n");
}

#[test]
fn test_wire_format_mixed_argument_kinds() {
    // Numbers are emitted as their canonical decimal text
    let frame = Command::new("ZADD").arg("board").arg(1.5).arg(42i64).encode();
    assert_eq!(
        frame,
        b"*4\r\n$4\r\nZADD\r\n$5\r\nboard\r\n$3\r\n1.5\r\n$2\r\n42\r\n"
    );
}

#[test]
fn test_empty_argument() {
    let frame = Command::new("SET").arg("key").arg("").encode();
    assert_eq!(frame, b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$0\r\n\r\n");
}

#[test]
fn test_args_from_iterator() {
    let keys = vec![Buffer::from("a"), Buffer::from("b"), Buffer::from("c")];
    let frame = Command::new("MGET").args(&keys).encode();
    assert_eq!(
        frame,
        b"*4\r\n$4\r\nMGET\r\n$1\r\na\r\n$1\r\nb\r\n$1\r\nc\r\n"
    );
}

#[test]
fn test_element_count() {
    let command = Command::new("SET").arg("k").arg("v");
    assert_eq!(command.len(), 3);
    assert!(!command.is_empty());
}

#[test]
fn test_binary_argument_roundtrip() {
    // Arguments with embedded NULs and CRLF bytes survive framing
    // length-for-length: the length prefix, not any terminator scan,
    // delimits the payload.
    let payload: Vec<u8> = vec![0x00, b'\r', b'\n', 0xff, 0x00];
    let frame = Command::new("SET").arg("bin").arg(payload.as_slice()).encode();

    let mut expected = b"*3\r\n$3\r\nSET\r\n$3\r\nbin\r\n$5\r\n".to_vec();
    expected.extend_from_slice(&payload);
    expected.extend_from_slice(b"\r\n");
    assert_eq!(frame, expected);

    // Re-parse the final element by its declared length
    let header_len = b"*3\r\n$3\r\nSET\r\n$3\r\nbin\r\n$5\r\n".len();
    let recovered = &frame[header_len..header_len + payload.len()];
    assert_eq!(recovered, payload.as_slice());
}

#[test]
fn test_encoding_is_repeatable() {
    // Encoding does not consume the builder
    let command = Command::new("GET").arg("key");
    assert_eq!(command.encode(), command.encode());
}

//! Reply decoders
//!
//! One decoding routine per reply shape, each consuming exactly the bytes
//! belonging to one reply and no more. Decoding is driven by a one-byte
//! type prefix:
//!
//! ```text
//! +  simple string      -  error            :  integer
//! $  bulk string        *  array (multi-bulk)
//! ```
//!
//! `$-1` is the null bulk string, `*-1` the null array; both decode to
//! [`Reply::Nil`] and are distinct from their empty counterparts.
//!
//! The [`Decoder`] enum is the selector a caller binds to each issued
//! command: it names the reply shape the command expects, and is plain
//! `Copy` data so transaction and pipeline queues stay ordinary vectors.

use std::io::BufRead;

use crate::error::{CrimsonError, Result};
use super::{Buffer, Reply};

/// Upper bound on a single bulk payload (matches the server's default
/// proto-max-bulk-len of 512 MB)
pub const MAX_BULK_LEN: i64 = 512 * 1024 * 1024;

/// Upper bound on multi-bulk element counts
pub const MAX_MULTI_BULK_LEN: i64 = 1024 * 1024;

/// Selects the decoding routine for one expected reply
///
/// Bound to a command when it is issued and applied when its reply is
/// read. Under pipelining and transactions the binding is queued in FIFO
/// order instead of being applied immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    /// `+` status line (or bulk string), kept as its text
    Status,
    /// `:0`/`:1` or any `+` status, as a boolean
    Bool,
    /// `:` signed integer
    Integer,
    /// Bulk string parsed as a floating-point number
    Double,
    /// `$` bulk string, binary-safe
    Bulk,
    /// Multi-bulk of strings, order preserved
    List,
    /// Multi-bulk of interleaved member/score pairs, re-paired
    ZSet,
    /// Multi-bulk of interleaved key/value pairs, re-paired
    Map,
    /// Bulk info text parsed line-by-line into key/value pairs
    Info,
    /// `+QUEUED` transaction acknowledgment
    Queued,
}

impl Decoder {
    /// Decode one complete reply from the stream
    ///
    /// A well-formed `-` error line decodes to [`Reply::Error`] under every
    /// selector: a server-reported failure is a normal value, not a client
    /// fault. Structurally invalid bytes or a reply shape that contradicts
    /// the selector indicate desynchronization and fail with a protocol
    /// error; the session should be discarded.
    pub fn decode<R: BufRead>(self, reader: &mut R) -> Result<Reply> {
        let line = read_line(reader)?;
        let (prefix, rest) = split_line(&line)?;

        if prefix == b'-' {
            return Ok(Reply::Error(String::from_utf8_lossy(rest).into_owned()));
        }

        match self {
            Decoder::Status => decode_status(reader, prefix, rest),
            Decoder::Bool => decode_bool(prefix, rest),
            Decoder::Integer => decode_integer(prefix, rest),
            Decoder::Double => decode_double(reader, prefix, rest),
            Decoder::Bulk => decode_bulk(reader, prefix, rest),
            Decoder::List => decode_list(reader, prefix, rest),
            Decoder::ZSet => decode_zset(reader, prefix, rest),
            Decoder::Map => decode_map(reader, prefix, rest),
            Decoder::Info => decode_info(reader, prefix, rest),
            Decoder::Queued => decode_queued(prefix, rest),
        }
    }
}

// =============================================================================
// Per-shape decoders
// =============================================================================

/// Decode a `+` status line (PING, TYPE); bulk replies are accepted too
fn decode_status<R: BufRead>(reader: &mut R, prefix: u8, rest: &[u8]) -> Result<Reply> {
    match prefix {
        b'+' => Ok(Reply::Bulk(Buffer::from(rest))),
        b'$' => read_bulk_tail(reader, rest),
        _ => Err(unexpected(prefix, "status line")),
    }
}

/// Decode a boolean: `:0`/`:1` integers, or any `+` status as success
fn decode_bool(prefix: u8, rest: &[u8]) -> Result<Reply> {
    match prefix {
        b':' => Ok(Reply::Bool(parse_int(rest)? != 0)),
        b'+' => Ok(Reply::Bool(true)),
        _ => Err(unexpected(prefix, "boolean")),
    }
}

/// Decode a `:` integer line
fn decode_integer(prefix: u8, rest: &[u8]) -> Result<Reply> {
    match prefix {
        b':' => Ok(Reply::Integer(parse_int(rest)?)),
        _ => Err(unexpected(prefix, "integer")),
    }
}

/// Decode a score carried as bulk text (ZSCORE, ZINCRBY)
fn decode_double<R: BufRead>(reader: &mut R, prefix: u8, rest: &[u8]) -> Result<Reply> {
    match prefix {
        b'$' => match read_bulk_payload(reader, rest)? {
            Some(payload) => Ok(Reply::Double(parse_double(payload.as_bytes())?)),
            None => Ok(Reply::Nil),
        },
        b':' => Ok(Reply::Double(parse_int(rest)? as f64)),
        _ => Err(unexpected(prefix, "double")),
    }
}

/// Decode a `$` bulk string; `$-1` is the null reply
fn decode_bulk<R: BufRead>(reader: &mut R, prefix: u8, rest: &[u8]) -> Result<Reply> {
    match prefix {
        b'$' => read_bulk_tail(reader, rest),
        b'+' => Ok(Reply::Bulk(Buffer::from(rest))),
        _ => Err(unexpected(prefix, "bulk string")),
    }
}

/// Decode a `*` multi-bulk into an ordered list of strings
fn decode_list<R: BufRead>(reader: &mut R, prefix: u8, rest: &[u8]) -> Result<Reply> {
    let count = match multi_bulk_count(prefix, rest)? {
        Some(count) => count,
        None => return Ok(Reply::Nil),
    };

    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        // A nil element (missing key in MGET) decodes to an empty string
        items.push(read_element(reader)?.unwrap_or_default());
    }
    Ok(Reply::List(items))
}

/// Decode a `*` multi-bulk of interleaved member/score pairs
///
/// The pair order is exactly the wire order; the server already sorted.
fn decode_zset<R: BufRead>(reader: &mut R, prefix: u8, rest: &[u8]) -> Result<Reply> {
    let count = match multi_bulk_count(prefix, rest)? {
        Some(count) => count,
        None => return Ok(Reply::Nil),
    };
    if count % 2 != 0 {
        return Err(CrimsonError::Protocol(format!(
            "scored-set reply has odd element count {}",
            count
        )));
    }

    let mut pairs = Vec::with_capacity(count / 2);
    for _ in 0..count / 2 {
        let member = require_element(reader, "zset member")?;
        let score = require_element(reader, "zset score")?;
        let score = parse_double(score.as_bytes())?;
        pairs.push((member, score));
    }
    Ok(Reply::ZSet(pairs))
}

/// Decode a `*` multi-bulk of interleaved key/value pairs (HGETALL, CONFIG GET)
fn decode_map<R: BufRead>(reader: &mut R, prefix: u8, rest: &[u8]) -> Result<Reply> {
    let count = match multi_bulk_count(prefix, rest)? {
        Some(count) => count,
        None => return Ok(Reply::Nil),
    };
    if count % 2 != 0 {
        return Err(CrimsonError::Protocol(format!(
            "map reply has odd element count {}",
            count
        )));
    }

    let mut entries = Vec::with_capacity(count / 2);
    for _ in 0..count / 2 {
        let key = require_element(reader, "map key")?;
        let value = read_element(reader)?.unwrap_or_default();
        entries.push((key.to_string_lossy(), value));
    }
    Ok(Reply::Map(entries))
}

/// Decode the INFO blob: one bulk string of `key:value` lines
///
/// Blank lines and `#` section headers are skipped.
fn decode_info<R: BufRead>(reader: &mut R, prefix: u8, rest: &[u8]) -> Result<Reply> {
    let payload = match prefix {
        b'$' => match read_bulk_payload(reader, rest)? {
            Some(payload) => payload,
            None => return Ok(Reply::Nil),
        },
        _ => return Err(unexpected(prefix, "info text")),
    };

    let text = payload.to_string_lossy();
    let mut entries = Vec::new();
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            entries.push((key.to_string(), Buffer::from(value)));
        }
    }
    Ok(Reply::Map(entries))
}

/// Decode the `+QUEUED` acknowledgment a transaction gives each command
fn decode_queued(prefix: u8, rest: &[u8]) -> Result<Reply> {
    match prefix {
        b'+' if rest == b"QUEUED" => Ok(Reply::Queued),
        b'+' => Err(CrimsonError::Protocol(format!(
            "expected QUEUED acknowledgment, got '+{}'",
            String::from_utf8_lossy(rest)
        ))),
        _ => Err(unexpected(prefix, "QUEUED acknowledgment")),
    }
}

// =============================================================================
// Transaction support
// =============================================================================

/// The header of an EXEC reply, read before the per-command replies
#[derive(Debug)]
pub(crate) enum MultiHeader {
    /// `*N`: N replies follow, one per queued command
    Count(usize),
    /// `*-1`: the transaction was aborted server-side
    Null,
    /// `-`: the server rejected EXEC outright
    Error(String),
}

/// Read the `*N` header line of an EXEC reply
pub(crate) fn read_multi_header<R: BufRead>(reader: &mut R) -> Result<MultiHeader> {
    let line = read_line(reader)?;
    let (prefix, rest) = split_line(&line)?;

    if prefix == b'-' {
        return Ok(MultiHeader::Error(
            String::from_utf8_lossy(rest).into_owned(),
        ));
    }

    Ok(match multi_bulk_count(prefix, rest)? {
        Some(count) => MultiHeader::Count(count),
        None => MultiHeader::Null,
    })
}

// =============================================================================
// Framing primitives
// =============================================================================

/// Read one CRLF-terminated line, returning it without the terminator
fn read_line<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    let n = reader.read_until(b'\n', &mut line)?;

    if n == 0 {
        return Err(CrimsonError::Protocol(
            "unexpected end of stream while reading reply line".to_string(),
        ));
    }
    if !line.ends_with(b"\r\n") {
        return Err(CrimsonError::Protocol(
            "reply line not terminated with CRLF".to_string(),
        ));
    }

    line.truncate(line.len() - 2);
    Ok(line)
}

/// Split a reply line into its type prefix and remainder
fn split_line(line: &[u8]) -> Result<(u8, &[u8])> {
    match line.split_first() {
        Some((&prefix, rest)) if matches!(prefix, b'+' | b'-' | b':' | b'$' | b'*') => {
            Ok((prefix, rest))
        }
        Some((&prefix, _)) => Err(CrimsonError::Protocol(format!(
            "invalid reply type prefix 0x{:02x}",
            prefix
        ))),
        None => Err(CrimsonError::Protocol("empty reply line".to_string())),
    }
}

/// Read a bulk payload given the text after the `$` prefix
///
/// Returns `None` for the `-1` null length. Consumes the trailing CRLF.
fn read_bulk_payload<R: BufRead>(reader: &mut R, rest: &[u8]) -> Result<Option<Buffer>> {
    let len = parse_int(rest)?;

    if len == -1 {
        return Ok(None);
    }
    if len < 0 || len > MAX_BULK_LEN {
        return Err(CrimsonError::Protocol(format!(
            "invalid bulk length {}",
            len
        )));
    }

    let mut payload = vec![0u8; len as usize];
    read_exact(reader, &mut payload)?;

    let mut crlf = [0u8; 2];
    read_exact(reader, &mut crlf)?;
    if crlf != *b"\r\n" {
        return Err(CrimsonError::Protocol(
            "bulk payload not terminated with CRLF".to_string(),
        ));
    }

    Ok(Some(Buffer::from_vec(payload)))
}

/// Decode a bulk header's remainder into a reply: payload or `Nil`
fn read_bulk_tail<R: BufRead>(reader: &mut R, rest: &[u8]) -> Result<Reply> {
    Ok(match read_bulk_payload(reader, rest)? {
        Some(payload) => Reply::Bulk(payload),
        None => Reply::Nil,
    })
}

/// Validate a `*` header and return its element count; `None` is the null array
fn multi_bulk_count(prefix: u8, rest: &[u8]) -> Result<Option<usize>> {
    if prefix != b'*' {
        return Err(unexpected(prefix, "multi-bulk"));
    }

    let count = parse_int(rest)?;
    if count == -1 {
        return Ok(None);
    }
    if count < 0 || count > MAX_MULTI_BULK_LEN {
        return Err(CrimsonError::Protocol(format!(
            "invalid multi-bulk count {}",
            count
        )));
    }
    Ok(Some(count as usize))
}

/// Read one multi-bulk element as a byte string
///
/// Accepts `$` bulks, `+` status lines, and `:` integers (as their decimal
/// text). Returns `None` for a nil element. Nested arrays inside a flat
/// reply indicate desynchronization.
fn read_element<R: BufRead>(reader: &mut R) -> Result<Option<Buffer>> {
    let line = read_line(reader)?;
    let (prefix, rest) = split_line(&line)?;

    match prefix {
        b'$' => read_bulk_payload(reader, rest),
        b'+' => Ok(Some(Buffer::from(rest))),
        b':' => Ok(Some(Buffer::from(parse_int(rest)?))),
        b'-' => Err(CrimsonError::Protocol(format!(
            "error inside multi-bulk reply: {}",
            String::from_utf8_lossy(rest)
        ))),
        _ => Err(unexpected(prefix, "multi-bulk element")),
    }
}

/// Read one element that must be present
fn require_element<R: BufRead>(reader: &mut R, what: &str) -> Result<Buffer> {
    read_element(reader)?
        .ok_or_else(|| CrimsonError::Protocol(format!("unexpected nil {}", what)))
}

/// `read_exact` with truncation reported as a protocol error
///
/// A clean EOF mid-frame means the frame was cut short, which is a
/// framing fault rather than a transport one.
fn read_exact<R: BufRead>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            CrimsonError::Protocol("premature end of stream inside reply frame".to_string())
        } else {
            CrimsonError::Io(e)
        }
    })
}

// =============================================================================
// Text parsing
// =============================================================================

/// Parse a signed decimal from reply-line bytes
fn parse_int(bytes: &[u8]) -> Result<i64> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            CrimsonError::Protocol(format!(
                "invalid integer text {:?}",
                String::from_utf8_lossy(bytes)
            ))
        })
}

/// Parse a floating-point number from reply bytes
fn parse_double(bytes: &[u8]) -> Result<f64> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| {
            CrimsonError::Protocol(format!(
                "invalid double text {:?}",
                String::from_utf8_lossy(bytes)
            ))
        })
}

fn unexpected(prefix: u8, expected: &str) -> CrimsonError {
    CrimsonError::Protocol(format!(
        "unexpected '{}' reply where {} was expected",
        prefix as char, expected
    ))
}

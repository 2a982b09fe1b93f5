//! Binary-safe byte buffer
//!
//! The argument and payload carrier for the wire protocol. A [`Buffer`] is
//! an immutable byte sequence that may contain embedded NUL bytes; equality
//! and ordering are byte-wise. Cloning is cheap (reference-counted via
//! [`bytes::Bytes`]).

use std::fmt;

use bytes::Bytes;

use crate::error::{CrimsonError, Result};

/// An immutable, binary-safe byte string.
///
/// Used uniformly for command arguments and decoded scalar replies. Numbers
/// convert to their canonical decimal text form, so `Buffer::from(42)` holds
/// the bytes `b"42"`.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Buffer(Bytes);

impl Buffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Buffer(Bytes::new())
    }

    /// Wrap an owned byte vector without copying
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Buffer(Bytes::from(bytes))
    }

    /// View the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the bytes as UTF-8 text
    ///
    /// Fails with a protocol error when the payload is not valid UTF-8;
    /// use [`Buffer::to_string_lossy`] when replacement characters are
    /// acceptable.
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.0)
            .map_err(|e| CrimsonError::Protocol(format!("buffer is not valid UTF-8: {}", e)))
    }

    /// Interpret the bytes as UTF-8 text, replacing invalid sequences
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Buffer {
    /// Print printable ASCII as-is and escape everything else
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"")?;
        for &byte in self.0.iter() {
            match byte {
                b'"' => write!(f, "\\\"")?,
                b'\\' => write!(f, "\\\\")?,
                0x20..=0x7e => write!(f, "{}", byte as char)?,
                b'\r' => write!(f, "\\r")?,
                b'\n' => write!(f, "\\n")?,
                _ => write!(f, "\\x{:02x}", byte)?,
            }
        }
        write!(f, "\"")
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Buffer(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Buffer {
    fn from(s: String) -> Self {
        Buffer(Bytes::from(s.into_bytes()))
    }
}

impl From<&String> for Buffer {
    fn from(s: &String) -> Self {
        Buffer::from(s.as_str())
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Buffer(Bytes::from(bytes))
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Buffer(Bytes::copy_from_slice(bytes))
    }
}

impl<const N: usize> From<&[u8; N]> for Buffer {
    fn from(bytes: &[u8; N]) -> Self {
        Buffer(Bytes::copy_from_slice(bytes))
    }
}

impl From<&Buffer> for Buffer {
    fn from(buffer: &Buffer) -> Self {
        buffer.clone()
    }
}

impl From<Bytes> for Buffer {
    fn from(bytes: Bytes) -> Self {
        Buffer(bytes)
    }
}

impl From<i64> for Buffer {
    fn from(n: i64) -> Self {
        Buffer(Bytes::from(n.to_string().into_bytes()))
    }
}

impl From<i32> for Buffer {
    fn from(n: i32) -> Self {
        Buffer::from(n as i64)
    }
}

impl From<u64> for Buffer {
    fn from(n: u64) -> Self {
        Buffer(Bytes::from(n.to_string().into_bytes()))
    }
}

impl From<usize> for Buffer {
    fn from(n: usize) -> Self {
        Buffer(Bytes::from(n.to_string().into_bytes()))
    }
}

impl From<f64> for Buffer {
    /// Canonical decimal text: `1.0` renders as `"1"`, `2.5` as `"2.5"`
    fn from(d: f64) -> Self {
        Buffer(Bytes::from(format!("{}", d).into_bytes()))
    }
}

impl PartialEq<[u8]> for Buffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Buffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Buffer {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == &other[..]
    }
}

impl PartialEq<&str> for Buffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

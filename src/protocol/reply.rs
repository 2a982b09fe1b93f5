//! Reply definitions
//!
//! A decoded server reply is a tagged union: the active variant is fixed at
//! construction time from the wire data and never changes. Typed accessors
//! fail with a type-mismatch error when the stored variant does not match
//! the request — there is no silent coercion.

use super::Buffer;
use crate::error::{CrimsonError, Result};

/// The kind of an active [`Reply`] variant, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Nil,
    Error,
    Integer,
    Bulk,
    Bool,
    Double,
    List,
    ZSet,
    Map,
    Queued,
}

impl ReplyKind {
    /// Human-readable variant name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            ReplyKind::Nil => "nil",
            ReplyKind::Error => "error",
            ReplyKind::Integer => "integer",
            ReplyKind::Bulk => "bulk string",
            ReplyKind::Bool => "boolean",
            ReplyKind::Double => "double",
            ReplyKind::List => "list",
            ReplyKind::ZSet => "zset",
            ReplyKind::Map => "map",
            ReplyKind::Queued => "queued",
        }
    }
}

/// A decoded server reply
///
/// - `Nil` is the null bulk string (`$-1`) or null array (`*-1`) and is
///   distinct from an empty string or an empty list.
/// - `ZSet` pairs are `(member, score)` in the order delivered on the
///   wire; the client never re-sorts them.
/// - `Map` keys are insertion-ordered text.
/// - `Queued` is the acknowledgment a transaction gives for each command
///   issued between MULTI and EXEC; it is also what deferred modes return
///   in place of a real reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Nil,
    Error(String),
    Integer(i64),
    Bulk(Buffer),
    Bool(bool),
    Double(f64),
    List(Vec<Buffer>),
    ZSet(Vec<(Buffer, f64)>),
    Map(Vec<(String, Buffer)>),
    Queued,
}

impl Reply {
    /// The kind of the active variant
    pub fn kind(&self) -> ReplyKind {
        match self {
            Reply::Nil => ReplyKind::Nil,
            Reply::Error(_) => ReplyKind::Error,
            Reply::Integer(_) => ReplyKind::Integer,
            Reply::Bulk(_) => ReplyKind::Bulk,
            Reply::Bool(_) => ReplyKind::Bool,
            Reply::Double(_) => ReplyKind::Double,
            Reply::List(_) => ReplyKind::List,
            Reply::ZSet(_) => ReplyKind::ZSet,
            Reply::Map(_) => ReplyKind::Map,
            Reply::Queued => ReplyKind::Queued,
        }
    }

    fn mismatch(&self, expected: ReplyKind) -> CrimsonError {
        CrimsonError::TypeMismatch {
            expected: expected.name(),
            found: self.kind().name(),
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// True for the null bulk string / null array
    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Nil)
    }

    /// True for a server-reported error
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// True for the transaction queuing acknowledgment
    pub fn is_queued(&self) -> bool {
        matches!(self, Reply::Queued)
    }

    // =========================================================================
    // Typed accessors
    // =========================================================================

    /// The integer payload
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Reply::Integer(n) => Ok(*n),
            other => Err(other.mismatch(ReplyKind::Integer)),
        }
    }

    /// The boolean payload
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Reply::Bool(b) => Ok(*b),
            other => Err(other.mismatch(ReplyKind::Bool)),
        }
    }

    /// The double payload
    pub fn as_double(&self) -> Result<f64> {
        match self {
            Reply::Double(d) => Ok(*d),
            other => Err(other.mismatch(ReplyKind::Double)),
        }
    }

    /// The bulk-string payload
    pub fn as_bulk(&self) -> Result<&Buffer> {
        match self {
            Reply::Bulk(b) => Ok(b),
            other => Err(other.mismatch(ReplyKind::Bulk)),
        }
    }

    /// Consume the reply, taking the bulk-string payload
    pub fn into_bulk(self) -> Result<Buffer> {
        match self {
            Reply::Bulk(b) => Ok(b),
            other => Err(other.mismatch(ReplyKind::Bulk)),
        }
    }

    /// The list payload
    pub fn as_list(&self) -> Result<&[Buffer]> {
        match self {
            Reply::List(items) => Ok(items),
            other => Err(other.mismatch(ReplyKind::List)),
        }
    }

    /// The scored-set payload, `(member, score)` pairs in wire order
    pub fn as_zset(&self) -> Result<&[(Buffer, f64)]> {
        match self {
            Reply::ZSet(pairs) => Ok(pairs),
            other => Err(other.mismatch(ReplyKind::ZSet)),
        }
    }

    /// The key/value payload, insertion-ordered
    pub fn as_map(&self) -> Result<&[(String, Buffer)]> {
        match self {
            Reply::Map(entries) => Ok(entries),
            other => Err(other.mismatch(ReplyKind::Map)),
        }
    }

    /// The server's error message
    pub fn error_message(&self) -> Result<&str> {
        match self {
            Reply::Error(msg) => Ok(msg),
            other => Err(other.mismatch(ReplyKind::Error)),
        }
    }

    /// Look up a map value by key, preserving the map's own ordering
    pub fn map_get(&self, key: &str) -> Result<Option<&Buffer>> {
        let entries = self.as_map()?;
        Ok(entries.iter().find(|(k, _)| k == key).map(|(_, v)| v))
    }
}

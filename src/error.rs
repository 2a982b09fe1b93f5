//! Error types for crimson
//!
//! Provides a unified error type for all operations.
//!
//! Server-reported errors (`-ERR ...` replies) are deliberately absent
//! here: a well-formed error reply decodes into [`crate::Reply::Error`]
//! and is returned as an ordinary value for the caller to inspect.

use thiserror::Error;

/// Result type alias using CrimsonError
pub type Result<T> = std::result::Result<T, CrimsonError>;

/// Unified error type for crimson operations
#[derive(Debug, Error)]
pub enum CrimsonError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Malformed or unexpected reply bytes. Indicates desynchronization
    /// with the server; the session should be discarded, not reused.
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Reply Access Errors
    // -------------------------------------------------------------------------
    /// A typed accessor was called on a reply holding a different variant.
    #[error("Type mismatch: expected {expected} reply, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    /// An operation was issued in the wrong session mode, e.g. EXEC
    /// without MULTI, or entering a transaction while pipelining.
    #[error("Invalid session state: {0}")]
    State(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

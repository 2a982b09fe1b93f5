//! # crimson
//!
//! A synchronous Redis client built around a binary-safe protocol codec:
//! - Length-prefixed request framing that round-trips arbitrary bytes
//! - A tagged reply union with type-safe accessors
//! - Per-command reply decoders selected at dispatch time
//! - Free-form pipelining and MULTI/EXEC transactions with strict
//!   request/reply ordering
//!
//! ## Data Flow
//!
//! ```text
//! caller
//!   │
//!   ▼
//! ┌─────────────┐    ┌──────────────┐    ┌───────────────┐
//! │   Command   │───▶│   Session    │───▶│   transport   │
//! │  (encoder)  │    │  (dispatch)  │    │  (TcpStream)  │
//! └─────────────┘    └──────┬───────┘    └───────┬───────┘
//!                           │                    │
//!                    ┌──────▼───────┐            │
//!                    │   Decoder    │◀───────────┘
//!                    │ (per command)│
//!                    └──────┬───────┘
//!                           ▼
//!                        Reply ──▶ caller
//! ```
//!
//! A session is strictly ordered: each command's reply is decoded with the
//! selector bound to that command, in the order the commands were sent.
//! One session, one logical caller; independent sessions are independent.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CrimsonError, Result};
pub use config::ClientConfig;
pub use protocol::{Buffer, Command, Decoder, Reply, ReplyKind};
pub use client::{Aggregate, Client, Session, SortOptions};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of crimson
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

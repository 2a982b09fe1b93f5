//! Protocol Module
//!
//! The wire codec: binary-safe framing of requests and typed decoding of
//! replies.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! *<argc>\r\n
//! $<len(arg0)>\r\n<arg0>\r\n
//! $<len(arg1)>\r\n<arg1>\r\n
//! ...
//! ```
//!
//! ### Reply Prefixes
//! - `+` simple string      (`+OK\r\n`)
//! - `-` error              (`-ERR wrong type\r\n`)
//! - `:` integer            (`:42\r\n`)
//! - `$` bulk string        (`$5\r\nhello\r\n`, `$-1\r\n` = null)
//! - `*` array              (`*2\r\n...`, `*-1\r\n` = null)
//!
//! The line terminator is CR LF for all textual framing. Bulk payloads are
//! length-prefixed and binary-safe: embedded NUL and CR LF bytes round-trip
//! untouched.

mod buffer;
mod command;
mod reply;
pub(crate) mod decode;

pub use buffer::Buffer;
pub use command::{Command, CRLF};
pub use reply::{Reply, ReplyKind};
pub use decode::{Decoder, MAX_BULK_LEN, MAX_MULTI_BULK_LEN};

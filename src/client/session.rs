//! Request/response dispatch engine
//!
//! Maintains one-to-one, in-order correspondence between commands written
//! and replies read on a single byte stream. A session is in exactly one
//! mode at a time:
//!
//! ```text
//! Idle ──multi()──▶ Queuing ──exec()/discard()──▶ Idle
//! Idle ──pipeline()──▶ Pipelining ──flush_pipeline()──▶ Idle
//! ```
//!
//! Transaction and pipeline modes are mutually exclusive: entering one
//! while the other is active is a state error.
//!
//! A session assumes exactly one logical caller. Reply decoding depends on
//! strict FIFO correspondence with the commands sent, so concurrent use of
//! one session requires external serialization; independent sessions are
//! fully independent.

use std::io::{BufRead, Write};

use crate::error::{CrimsonError, Result};
use crate::protocol::decode::{read_multi_header, MultiHeader};
use crate::protocol::{Command, Decoder, Reply};

/// Session mode plus the state owned by each deferred mode
#[derive(Debug)]
enum SessionState {
    /// Commands are written and their replies read immediately
    Idle,

    /// Inside MULTI: commands are written immediately, acknowledged with
    /// `+QUEUED`, and their real decoders accumulate for EXEC
    Queuing { pending: Vec<Decoder> },

    /// Encoded commands accumulate unsent; the flush writes them as one
    /// batch and reads the replies back in order
    Pipelining { buf: Vec<u8>, pending: Vec<Decoder> },
}

/// The protocol engine: a reader/writer pair plus explicit session state
///
/// Generic over the underlying stream halves so the engine can run against
/// an in-memory transcript in tests and a buffered TCP stream in
/// production.
#[derive(Debug)]
pub struct Session<R, W> {
    reader: R,
    writer: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create an idle session over the given stream halves
    pub fn new(reader: R, writer: W) -> Self {
        Session {
            reader,
            writer,
            state: SessionState::Idle,
        }
    }

    /// True while a MULTI transaction is open
    pub fn is_queuing(&self) -> bool {
        matches!(self.state, SessionState::Queuing { .. })
    }

    /// True while pipeline mode is enabled
    pub fn is_pipelining(&self) -> bool {
        matches!(self.state, SessionState::Pipelining { .. })
    }

    /// Tear the session apart, returning the stream halves
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Issue one command, decoding its reply with the given selector
    ///
    /// - Idle: write the frame, block for the reply, decode, return it.
    /// - Queuing: write the frame, consume the `+QUEUED` acknowledgment,
    ///   remember the selector for EXEC, return [`Reply::Queued`]. A
    ///   server error at queue time is returned as-is and the selector is
    ///   not recorded (the server did not queue the command either).
    /// - Pipelining: append the frame to the batch buffer, remember the
    ///   selector for the flush, return [`Reply::Queued`].
    pub fn run(&mut self, command: &Command, decoder: Decoder) -> Result<Reply> {
        let frame = command.encode();
        tracing::trace!(
            "issuing command ({} elements, {} bytes)",
            command.len(),
            frame.len()
        );

        match &mut self.state {
            SessionState::Idle => {
                write_frame(&mut self.writer, &frame)?;
                decoder.decode(&mut self.reader)
            }
            SessionState::Queuing { pending } => {
                write_frame(&mut self.writer, &frame)?;
                let ack = Decoder::Queued.decode(&mut self.reader)?;
                if ack.is_error() {
                    return Ok(ack);
                }
                pending.push(decoder);
                Ok(Reply::Queued)
            }
            SessionState::Pipelining { buf, pending } => {
                buf.extend_from_slice(&frame);
                pending.push(decoder);
                Ok(Reply::Queued)
            }
        }
    }

    // =========================================================================
    // Transactions (MULTI/EXEC)
    // =========================================================================

    /// Open a transaction
    ///
    /// Sends MULTI and switches the session into queuing mode: every
    /// subsequent command is queued server-side until [`Session::exec`] or
    /// [`Session::discard`].
    pub fn multi(&mut self) -> Result<()> {
        match self.state {
            SessionState::Idle => {}
            SessionState::Queuing { .. } => {
                return Err(CrimsonError::State(
                    "transaction already open".to_string(),
                ))
            }
            SessionState::Pipelining { .. } => {
                return Err(CrimsonError::State(
                    "cannot open a transaction while pipelining".to_string(),
                ))
            }
        }

        let reply = self.run(&Command::new("MULTI"), Decoder::Status)?;
        if let Reply::Error(msg) = reply {
            return Err(CrimsonError::State(format!("MULTI rejected: {}", msg)));
        }

        tracing::debug!("transaction opened");
        self.state = SessionState::Queuing {
            pending: Vec::new(),
        };
        Ok(())
    }

    /// Commit the open transaction
    ///
    /// Sends EXEC, then decodes one reply per queued command with the
    /// decoder recorded when that command was issued, in original order.
    /// An aborted transaction (`*-1` header) yields an empty vector.
    pub fn exec(&mut self) -> Result<Vec<Reply>> {
        let pending = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Queuing { pending } => pending,
            other => {
                self.state = other;
                return Err(CrimsonError::State(
                    "EXEC outside of a transaction".to_string(),
                ));
            }
        };

        write_frame(&mut self.writer, &Command::new("EXEC").encode())?;

        match read_multi_header(&mut self.reader)? {
            MultiHeader::Error(msg) => {
                Err(CrimsonError::State(format!("EXEC rejected: {}", msg)))
            }
            MultiHeader::Null => {
                tracing::debug!("transaction aborted by server");
                Ok(Vec::new())
            }
            MultiHeader::Count(count) => {
                if count != pending.len() {
                    return Err(CrimsonError::Protocol(format!(
                        "EXEC returned {} replies for {} queued commands",
                        count,
                        pending.len()
                    )));
                }

                let mut replies = Vec::with_capacity(count);
                for decoder in pending {
                    replies.push(decoder.decode(&mut self.reader)?);
                }
                tracing::debug!("transaction committed, {} replies", replies.len());
                Ok(replies)
            }
        }
    }

    /// Abort the open transaction
    ///
    /// Sends DISCARD and clears the queued decoders; no further decoding
    /// happens for the commands that were queued.
    pub fn discard(&mut self) -> Result<()> {
        match self.state {
            SessionState::Queuing { .. } => {}
            _ => {
                return Err(CrimsonError::State(
                    "DISCARD outside of a transaction".to_string(),
                ))
            }
        }
        self.state = SessionState::Idle;

        write_frame(&mut self.writer, &Command::new("DISCARD").encode())?;
        let reply = Decoder::Status.decode(&mut self.reader)?;
        if let Reply::Error(msg) = reply {
            return Err(CrimsonError::State(format!("DISCARD rejected: {}", msg)));
        }

        tracing::debug!("transaction discarded");
        Ok(())
    }

    // =========================================================================
    // Pipelining
    // =========================================================================

    /// Enable pipeline mode
    ///
    /// Subsequent commands accumulate locally instead of being written;
    /// [`Session::flush_pipeline`] sends the whole batch at once.
    pub fn pipeline(&mut self) -> Result<()> {
        match self.state {
            SessionState::Idle => {}
            SessionState::Queuing { .. } => {
                return Err(CrimsonError::State(
                    "cannot enable pipelining inside a transaction".to_string(),
                ))
            }
            SessionState::Pipelining { .. } => {
                return Err(CrimsonError::State("already pipelining".to_string()))
            }
        }

        tracing::debug!("pipeline mode enabled");
        self.state = SessionState::Pipelining {
            buf: Vec::new(),
            pending: Vec::new(),
        };
        Ok(())
    }

    /// Write the accumulated batch and read the replies back
    ///
    /// Returns exactly one reply per accumulated command, in the order the
    /// commands were issued, and returns the session to immediate mode.
    pub fn flush_pipeline(&mut self) -> Result<Vec<Reply>> {
        let (buf, pending) = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Pipelining { buf, pending } => (buf, pending),
            other => {
                self.state = other;
                return Err(CrimsonError::State(
                    "flush outside of pipeline mode".to_string(),
                ));
            }
        };

        if !buf.is_empty() {
            write_frame(&mut self.writer, &buf)?;
        }

        let mut replies = Vec::with_capacity(pending.len());
        for decoder in pending {
            replies.push(decoder.decode(&mut self.reader)?);
        }
        tracing::debug!("pipeline flushed, {} replies", replies.len());
        Ok(replies)
    }
}

/// Write one frame (or batch of frames) and push it onto the wire
fn write_frame<W: Write>(writer: &mut W, frame: &[u8]) -> Result<()> {
    writer.write_all(frame)?;
    writer.flush()?;
    Ok(())
}

//! Command encoder
//!
//! Builds one request frame from a keyword and an ordered list of
//! arguments. A [`Command`] is a short-lived builder: created, appended to,
//! encoded once, discarded.
//!
//! Arguments are anything convertible to a [`Buffer`] — string slices, byte
//! slices, integers, doubles. The `Into<Buffer>` bound makes an
//! out-of-domain argument kind a compile error rather than a runtime one.

use super::Buffer;

/// Line terminator for all textual framing
pub const CRLF: &[u8] = b"\r\n";

/// A request under construction: keyword followed by arguments
#[derive(Debug, Clone)]
pub struct Command {
    elements: Vec<Buffer>,
}

impl Command {
    /// Start a command with the given keyword
    pub fn new(keyword: impl Into<Buffer>) -> Self {
        Command {
            elements: vec![keyword.into()],
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<Buffer>) -> Self {
        self.elements.push(arg.into());
        self
    }

    /// Append every argument from an iterator
    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Buffer>,
    {
        self.elements.extend(args.into_iter().map(Into::into));
        self
    }

    /// Number of elements including the keyword
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Encode the command as a single wire frame
    ///
    /// Format: `*<argc>\r\n` followed by, for each element,
    /// `$<byte-length>\r\n<raw-bytes>\r\n`. Encoding is atomic: the frame
    /// is fully built before any byte can reach the transport.
    pub fn encode(&self) -> Vec<u8> {
        // Framing overhead is roughly 15 bytes per element
        let payload: usize = self.elements.iter().map(Buffer::len).sum();
        let mut frame = Vec::with_capacity(payload + 15 * (self.elements.len() + 1));

        frame.push(b'*');
        frame.extend_from_slice(self.elements.len().to_string().as_bytes());
        frame.extend_from_slice(CRLF);

        for element in &self.elements {
            frame.push(b'$');
            frame.extend_from_slice(element.len().to_string().as_bytes());
            frame.extend_from_slice(CRLF);
            frame.extend_from_slice(element.as_bytes());
            frame.extend_from_slice(CRLF);
        }

        frame
    }
}

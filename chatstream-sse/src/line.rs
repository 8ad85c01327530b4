//! Line reassembly over a chunked byte stream.

use std::string::FromUtf8Error;

/// Accumulates transport byte chunks and yields complete text lines.
///
/// Chunk boundaries can fall anywhere — mid-line, even mid-codepoint — so
/// bytes are buffered until a `\n` arrives and UTF-8 is validated per line.
/// Trailing `\r` is stripped, matching both `\n` and `\r\n` framing.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: Vec<u8>,
}

impl LineBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk of bytes from the transport.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Pop the next complete line, without its terminator.
    ///
    /// Returns `None` when no full line is buffered yet.
    pub fn next_line(&mut self) -> Option<Result<String, FromUtf8Error>> {
        let pos = self.buf.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8(line))
    }

    /// Drain whatever remains once the source is exhausted.
    ///
    /// A final line without a trailing newline still counts as a line.
    pub fn take_rest(&mut self) -> Option<Result<String, FromUtf8Error>> {
        if self.buf.is_empty() {
            return None;
        }
        Some(String::from_utf8(std::mem::take(&mut self.buf)))
    }
}

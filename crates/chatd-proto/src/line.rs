//! Line-based codec for tokio.
//!
//! Reads newline-terminated lines and writes reply lines verbatim. Lines
//! split across TCP reads are reassembled; several lines in one read are
//! yielded one at a time.

use std::io;

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::limits::READ_CHUNK;

/// One decoded unit of client input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A complete line, terminator (`\n` or `\r\n`) stripped.
    Line(String),
    /// A line longer than the codec limit. Its bytes have been dropped.
    Overlong {
        /// Bytes seen before the line was given up on.
        len: usize,
    },
}

/// Line-based codec that handles newline-terminated messages.
///
/// By default, lines are limited to [`READ_CHUNK`] bytes, terminator included.
/// Anything longer is reported once as [`Frame::Overlong`] and the remainder
/// of that line is skipped, so the stream stays usable.
#[derive(Debug)]
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
    /// Skipping the tail of an overlong line
    discarding: bool,
}

impl LineCodec {
    /// Create a codec with the default limit.
    pub fn new() -> Self {
        Self::with_max_len(READ_CHUNK)
    }

    /// Create a codec with a custom max line length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
            discarding: false,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = Frame;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> io::Result<Option<Frame>> {
        loop {
            let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
                if self.discarding {
                    src.clear();
                    self.next_index = 0;
                    return Ok(None);
                }

                // A full-size chunk without a newline can never become a valid line
                if src.len() >= self.max_len {
                    let len = src.len();
                    src.clear();
                    self.next_index = 0;
                    self.discarding = true;
                    return Ok(Some(Frame::Overlong { len }));
                }

                self.next_index = src.len();
                return Ok(None);
            };

            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if self.discarding {
                self.discarding = false;
                continue;
            }

            if line.len() > self.max_len {
                return Ok(Some(Frame::Overlong { len: line.len() }));
            }

            let content = &line[..line.len() - 1];
            let content = content.strip_suffix(b"\r").unwrap_or(content);
            return Ok(Some(Frame::Line(
                String::from_utf8_lossy(content).into_owned(),
            )));
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> io::Result<Option<Frame>> {
        let frame = self.decode(src)?;
        if frame.is_none() {
            // An unterminated tail at EOF is not a command
            src.clear();
            self.next_index = 0;
        }
        Ok(frame)
    }
}

impl Encoder<String> for LineCodec {
    type Error = io::Error;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> io::Result<()> {
        dst.extend_from_slice(line.as_bytes());
        Ok(())
    }
}

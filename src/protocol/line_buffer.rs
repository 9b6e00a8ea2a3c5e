//! Line buffer for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` for buffer management. The link delivers arbitrary
//! byte chunks; this buffer re-assembles them into complete
//! newline-terminated lines, stripping `\r` so CRLF links behave like LF
//! links.
//!
//! # Example
//!
//! ```
//! use prt7_decoder::protocol::LineBuffer;
//!
//! let mut buffer = LineBuffer::new();
//! let lines = buffer.push(b"L,A\nM,").unwrap();
//! assert_eq!(lines, vec!["L,A".to_string()]);
//!
//! // The partial "M," stays buffered until its newline arrives.
//! let lines = buffer.push(b"5\n").unwrap();
//! assert_eq!(lines, vec!["M,5".to_string()]);
//! ```

use bytes::BytesMut;

use crate::error::{DecoderError, Result};

/// Default maximum line length in bytes (matches the 256-byte line buffer of
/// the reference serial reader).
pub const DEFAULT_MAX_LINE_LEN: usize = 256;

/// Buffer for accumulating incoming bytes and extracting complete lines.
///
/// Partial lines are kept internally between pushes, so no frame is lost or
/// reordered regardless of how the link fragments its reads.
pub struct LineBuffer {
    /// Accumulated bytes from link reads.
    buffer: BytesMut,
    /// Maximum allowed line length.
    max_line_len: usize,
}

impl LineBuffer {
    /// Create a new line buffer with the default maximum line length.
    pub fn new() -> Self {
        Self::with_max_line_len(DEFAULT_MAX_LINE_LEN)
    }

    /// Create a new line buffer with a custom maximum line length.
    pub fn with_max_line_len(max_line_len: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(1024),
            max_line_len,
        }
    }

    /// Push data into the buffer and extract all complete lines.
    ///
    /// Returns the completed lines in arrival order, with line endings
    /// stripped. May return an empty vector if no newline has arrived yet.
    ///
    /// # Errors
    ///
    /// Returns an error if a line exceeds the maximum line length.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<String>> {
        self.buffer.extend_from_slice(data);

        let mut lines = Vec::new();
        while let Some(line) = self.try_extract_one()? {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Try to extract a single line from the buffer.
    fn try_extract_one(&mut self) -> Result<Option<String>> {
        match self.buffer.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                if pos > self.max_line_len {
                    return Err(self.oversize_error(pos));
                }

                let mut raw = self.buffer.split_to(pos + 1);
                raw.truncate(pos); // drop the '\n'

                // CR bytes are link noise (CRLF endings), never payload.
                let line = String::from_utf8_lossy(&raw).replace('\r', "");
                Ok(Some(line))
            }
            None => {
                if self.buffer.len() > self.max_line_len {
                    return Err(self.oversize_error(self.buffer.len()));
                }
                Ok(None)
            }
        }
    }

    fn oversize_error(&self, len: usize) -> DecoderError {
        DecoderError::Protocol(format!(
            "Line length {} exceeds maximum {}",
            len, self.max_line_len
        ))
    }

    /// Get the number of buffered bytes awaiting a newline.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_complete_line() {
        let mut buffer = LineBuffer::new();
        let lines = buffer.push(b"L,A\n").unwrap();

        assert_eq!(lines, vec!["L,A".to_string()]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_multiple_lines_in_one_push() {
        let mut buffer = LineBuffer::new();
        let lines = buffer.push(b"M,1\nL,A\nL,B\n").unwrap();

        assert_eq!(
            lines,
            vec!["M,1".to_string(), "L,A".to_string(), "L,B".to_string()]
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_fragmented_line() {
        let mut buffer = LineBuffer::new();

        assert!(buffer.push(b"L,Sp").unwrap().is_empty());
        assert_eq!(buffer.len(), 4);

        let lines = buffer.push(b"ace\n").unwrap();
        assert_eq!(lines, vec!["L,Space".to_string()]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_crlf_stripped() {
        let mut buffer = LineBuffer::new();
        let lines = buffer.push(b"L,A\r\nM,2\r\n").unwrap();

        assert_eq!(lines, vec!["L,A".to_string(), "M,2".to_string()]);
    }

    #[test]
    fn test_empty_line_preserved() {
        // Blank lines reach the session, which discards them silently.
        let mut buffer = LineBuffer::new();
        let lines = buffer.push(b"\nL,A\n").unwrap();

        assert_eq!(lines, vec![String::new(), "L,A".to_string()]);
    }

    #[test]
    fn test_byte_at_a_time() {
        let mut buffer = LineBuffer::new();
        let mut all_lines = Vec::new();

        for byte in b"M,-3\nFIN\n" {
            all_lines.extend(buffer.push(&[*byte]).unwrap());
        }

        assert_eq!(all_lines, vec!["M,-3".to_string(), "FIN".to_string()]);
    }

    #[test]
    fn test_partial_line_remains_buffered() {
        let mut buffer = LineBuffer::new();
        let lines = buffer.push(b"L,A\nM,4").unwrap();

        assert_eq!(lines, vec!["L,A".to_string()]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_max_line_len_complete_line() {
        let mut buffer = LineBuffer::with_max_line_len(8);
        let result = buffer.push(b"L,AAAAAAAAAAAAAAAA\n");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_max_line_len_unterminated() {
        let mut buffer = LineBuffer::with_max_line_len(8);
        let result = buffer.push(b"L,AAAAAAAAAAAAAAAA");

        assert!(result.is_err());
    }

    #[test]
    fn test_line_at_exact_max_len_accepted() {
        let mut buffer = LineBuffer::with_max_line_len(3);
        let lines = buffer.push(b"M,5\n").unwrap();

        assert_eq!(lines, vec!["M,5".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut buffer = LineBuffer::new();
        buffer.push(b"L,partial").unwrap();
        assert!(!buffer.is_empty());

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_non_utf8_bytes_are_lossy() {
        let mut buffer = LineBuffer::new();
        let lines = buffer.push(b"L,\xFF\n").unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], format!("L,{}", char::REPLACEMENT_CHARACTER));
    }
}

//! Frame text format: parsing one line into a typed frame.
//!
//! The PRT-7 wire format is line-oriented, one frame per line:
//!
//! ```text
//! L,<char>   load frame    — one plaintext-bearing symbol
//! M,<int>    map frame     — signed rotation applied to the cipher rotor
//! FIN        end sentinel  — exact match, no comma (handled by the session)
//! ```
//!
//! The payload `Space` in a load frame denotes the space character, since the
//! link may not transmit a bare trailing space reliably.
//!
//! # Example
//!
//! ```
//! use prt7_decoder::protocol::Frame;
//!
//! assert_eq!(Frame::parse("L,A"), Ok(Frame::Load('A')));
//! assert_eq!(Frame::parse("L,Space"), Ok(Frame::Load(' ')));
//! assert_eq!(Frame::parse("M,-3"), Ok(Frame::Map(-3)));
//! ```

use thiserror::Error;

/// End-of-session sentinel line (exact match, no separator).
pub const END_SENTINEL: &str = "FIN";

/// Field separator between type byte and payload.
pub const FIELD_SEPARATOR: u8 = b',';

/// Load payload keyword denoting the space character.
pub const SPACE_KEYWORD: &str = "Space";

/// Minimum frame length in bytes: type byte, separator, one payload byte.
pub const MIN_FRAME_LEN: usize = 3;

/// One parsed unit of the wire format.
///
/// The frame type is closed: the session matches it exhaustively, so adding a
/// new frame kind is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Plaintext-bearing frame carrying one (still enciphered) symbol.
    Load(char),
    /// Control frame rotating the cipher rotor by a signed amount.
    Map(i32),
}

/// Reasons a line fails to parse as a frame.
///
/// Parse failures are absorbed by the session loop; they never become a
/// [`DecoderError`](crate::error::DecoderError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Line is empty. Skipped silently.
    #[error("empty line")]
    EmptyLine,

    /// Line is too short or the separator is not at byte 1.
    #[error("malformed frame")]
    Malformed,

    /// First byte is neither `L` nor `M`.
    #[error("unknown frame type: {0}")]
    UnknownType(char),
}

impl Frame {
    /// Parse one line (trailing line-ending already stripped) into a frame.
    ///
    /// Leniencies, matching the wire contract:
    /// - a load payload longer than one character contributes only its first
    ///   character; the rest is silently ignored;
    /// - a map payload is read as optional sign + leading digits, stopping at
    ///   the first non-digit; missing or invalid numeric content yields `0`.
    pub fn parse(line: &str) -> Result<Self, FrameError> {
        let bytes = line.as_bytes();

        if bytes.is_empty() {
            return Err(FrameError::EmptyLine);
        }

        if bytes.len() < MIN_FRAME_LEN || bytes[1] != FIELD_SEPARATOR {
            return Err(FrameError::Malformed);
        }

        // bytes[1] == b',' implies bytes[0] is ASCII, so byte 2 starts a char
        // and the slice below is on a boundary.
        let payload = &line[2..];

        match bytes[0] {
            b'L' => {
                if payload == SPACE_KEYWORD {
                    return Ok(Frame::Load(' '));
                }
                match payload.chars().next() {
                    Some(c) => Ok(Frame::Load(c)),
                    None => Err(FrameError::Malformed),
                }
            }
            b'M' => Ok(Frame::Map(parse_leading_int(payload))),
            other => Err(FrameError::UnknownType(other as char)),
        }
    }

    /// Check if this is a load frame.
    #[inline]
    pub fn is_load(&self) -> bool {
        matches!(self, Frame::Load(_))
    }

    /// Check if this is a map frame.
    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Frame::Map(_))
    }

    /// Get the carried symbol, if this is a load frame.
    #[inline]
    pub fn symbol(&self) -> Option<char> {
        match self {
            Frame::Load(c) => Some(*c),
            Frame::Map(_) => None,
        }
    }

    /// Get the rotation amount, if this is a map frame.
    #[inline]
    pub fn rotation(&self) -> Option<i32> {
        match self {
            Frame::Load(_) => None,
            Frame::Map(n) => Some(*n),
        }
    }
}

/// Parse an optional sign followed by leading digits, `atoi`-style.
///
/// Stops at the first non-digit; no digits yields 0; values beyond the `i32`
/// range saturate.
fn parse_leading_int(s: &str) -> i32 {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut negative = false;

    match bytes.first() {
        Some(b'+') => i = 1,
        Some(b'-') => {
            negative = true;
            i = 1;
        }
        _ => {}
    }

    let mut value: i64 = 0;
    while let Some(&b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
        i += 1;
    }

    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

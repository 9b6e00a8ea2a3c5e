//! Protocol module - PRT-7 wire format and line re-assembly.
//!
//! Provides:
//! - [`Frame`] - typed frame parsed from one text line
//! - [`LineBuffer`] - accumulator turning raw link bytes into complete lines

mod frame;
mod line_buffer;

pub use frame::{Frame, FrameError, END_SENTINEL, FIELD_SEPARATOR, MIN_FRAME_LEN, SPACE_KEYWORD};
pub use line_buffer::{LineBuffer, DEFAULT_MAX_LINE_LEN};

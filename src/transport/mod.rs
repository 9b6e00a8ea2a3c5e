//! Transport module - the byte link supplying frame lines.
//!
//! Provides abstraction over:
//! - Unix Domain Sockets (Linux/macOS)
//! - Named Pipes (Windows)
//! - stdin (piped input)
//!
//! The decode session itself is transport-agnostic: it accepts any
//! `AsyncRead`. This module only supplies concrete sources.

mod link;

pub use link::{stdin_source, LinkStream};

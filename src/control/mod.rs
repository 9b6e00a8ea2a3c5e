//! Control module - stdout-facing session reporting.
//!
//! The decoded message and session statistics go to stdout; all diagnostics
//! go to stderr via `tracing`, so a parent process can consume stdout
//! mechanically.

mod report;
mod stdio;

pub use report::{build_report_message, PROTOCOL_NAME};
pub use stdio::{write_stdout_json, write_stdout_line};

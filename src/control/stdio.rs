//! Stdout writers for the session report.
//!
//! # Important
//!
//! - **stdout**: the decoded message / report (one line)
//! - **stderr**: logs, debug output
//! - **Never use `println!`**: it may add `\r\n` on Windows, and consumers
//!   wait for a complete `\n`-terminated line

use std::io::Write;

/// Write a line to stdout.
///
/// Writes the string followed by a single `\n` and flushes immediately.
///
/// # Errors
///
/// Returns an IO error if write or flush fails.
pub fn write_stdout_line(line: &str) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(line.as_bytes())?;
    handle.write_all(b"\n")?;
    handle.flush()?;
    Ok(())
}

/// Write a JSON value to stdout as a single line.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_stdout_json<T: serde::Serialize>(value: &T) -> crate::error::Result<()> {
    let json = serde_json::to_string(value)?;
    write_stdout_line(&json)?;
    Ok(())
}

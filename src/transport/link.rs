//! Platform-specific link implementation.
//!
//! The device bridge (the process that owns the physical serial port and its
//! configuration) exposes the frame stream at a filesystem path; this module
//! connects to it and hands the session a plain byte stream.
//!
//! - Unix: Unix Domain Socket
//! - Windows: Named Pipe (client side)
//!
//! # Example
//!
//! ```ignore
//! use prt7_decoder::transport::LinkStream;
//!
//! let link = LinkStream::connect("/tmp/prt7-bridge.sock").await?;
//! ```

use crate::error::Result;
use tokio::io::AsyncRead;

/// Obtain stdin as a line source, for piped input.
pub fn stdin_source() -> tokio::io::Stdin {
    tokio::io::stdin()
}

// ============================================================================
// Unix Implementation
// ============================================================================

#[cfg(unix)]
mod unix_impl {
    use super::*;
    use tokio::net::UnixStream;

    /// Connected Unix Domain Socket link.
    pub struct LinkStream {
        stream: UnixStream,
    }

    impl LinkStream {
        /// Connect to the bridge socket at the given path.
        pub async fn connect(path: &str) -> Result<Self> {
            let stream = UnixStream::connect(path).await?;
            tracing::debug!("Connected to frame link at {}", path);
            Ok(Self { stream })
        }

        /// Get a reference to the underlying stream.
        pub fn inner(&self) -> &UnixStream {
            &self.stream
        }
    }

    impl AsyncRead for LinkStream {
        fn poll_read(
            mut self: std::pin::Pin<&mut Self>,
            cx: &mut std::task::Context<'_>,
            buf: &mut tokio::io::ReadBuf<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::pin::Pin::new(&mut self.stream).poll_read(cx, buf)
        }
    }
}

// ============================================================================
// Windows Implementation
// ============================================================================

#[cfg(windows)]
mod windows_impl {
    use super::*;
    use tokio::net::windows::named_pipe::{ClientOptions, NamedPipeClient};

    /// Connected Named Pipe link (client side).
    pub struct LinkStream {
        pipe: NamedPipeClient,
    }

    impl LinkStream {
        /// Connect to the bridge pipe at the given path.
        pub async fn connect(path: &str) -> Result<Self> {
            let pipe = ClientOptions::new().open(path)?;
            tracing::debug!("Connected to frame link at {}", path);
            Ok(Self { pipe })
        }

        /// Get a reference to the underlying pipe.
        pub fn inner(&self) -> &NamedPipeClient {
            &self.pipe
        }
    }

    impl AsyncRead for LinkStream {
        fn poll_read(
            mut self: std::pin::Pin<&mut Self>,
            cx: &mut std::task::Context<'_>,
            buf: &mut tokio::io::ReadBuf<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::pin::Pin::new(&mut self.pipe).poll_read(cx, buf)
        }
    }
}

// ============================================================================
// Platform-independent re-exports
// ============================================================================

#[cfg(unix)]
pub use unix_impl::LinkStream;

#[cfg(windows)]
pub use windows_impl::LinkStream;

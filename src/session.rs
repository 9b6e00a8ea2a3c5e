//! Decode session: the orchestrator driving the frame loop.
//!
//! The [`Decoder`] owns the cipher rotor and the message buffer for one
//! session. It pulls bytes from the link, re-assembles lines, parses each
//! line into a frame and applies its effect before touching the next line,
//! so frame order and content are never affected by how the link fragments
//! its reads.
//!
//! # Example
//!
//! ```
//! use prt7_decoder::session::Decoder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut decoder = Decoder::new();
//! let summary = decoder.run(&b"M,1\nL,A\nL,B\nFIN\n"[..]).await.unwrap();
//! assert_eq!(summary.message, "BC");
//! # }
//! ```

use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::cipher::Rotor;
use crate::error::Result;
use crate::message::MessageBuffer;
use crate::protocol::{Frame, FrameError, LineBuffer, END_SENTINEL, DEFAULT_MAX_LINE_LEN};

/// Default safety cap on processed frames per session.
///
/// Reaching the cap is a normal, deterministic early stop, not an error; it
/// bounds consumption from a misbehaving or endless link.
pub const DEFAULT_MAX_FRAMES: usize = 100;

/// Link read chunk size.
const READ_BUF_SIZE: usize = 4096;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The `FIN` sentinel line arrived.
    Sentinel,
    /// The processed-frame cap was reached.
    FrameCap,
    /// The link reported end of stream.
    SourceClosed,
    /// The link reported a fatal read error; the message assembled so far
    /// is kept.
    SourceError,
}

/// Final state of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Rendered message (the empty indicator if nothing was decoded).
    pub message: String,
    /// Successfully acted-upon frames, both load and map.
    pub frames_processed: usize,
    /// Lines skipped because they failed to parse (empty lines not counted).
    pub parse_failures: usize,
    /// Rotor offset at session end.
    pub rotor_offset: u8,
    /// Why the session ended.
    pub termination: Termination,
}

/// Effect of feeding one line to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Load frame: the decoded symbol was appended to the message.
    Symbol(char),
    /// Map frame: the rotor was rotated by the given amount.
    Rotated(i32),
    /// Line did not parse; nothing was counted or mutated.
    Skipped(FrameError),
    /// The end sentinel arrived.
    Finished,
}

/// Builder for configuring a [`Decoder`].
pub struct DecoderBuilder {
    max_frames: usize,
    max_line_len: usize,
}

impl DecoderBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }

    /// Set the processed-frame cap. Default: 100.
    pub fn max_frames(mut self, limit: usize) -> Self {
        self.max_frames = limit;
        self
    }

    /// Set the maximum accepted line length in bytes. Default: 256.
    pub fn max_line_len(mut self, limit: usize) -> Self {
        self.max_line_len = limit;
        self
    }

    /// Build the decoder.
    pub fn build(self) -> Decoder {
        Decoder {
            rotor: Rotor::new(),
            message: MessageBuffer::new(),
            max_frames: self.max_frames,
            max_line_len: self.max_line_len,
            frames_processed: 0,
            parse_failures: 0,
        }
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One decode session: rotor, message buffer and frame counters.
///
/// A decoder value represents a single session; state accumulates across
/// [`handle_line`](Decoder::handle_line) calls and is reported by
/// [`run`](Decoder::run) when the loop ends.
pub struct Decoder {
    rotor: Rotor,
    message: MessageBuffer,
    max_frames: usize,
    max_line_len: usize,
    frames_processed: usize,
    parse_failures: usize,
}

impl Decoder {
    /// Create a decoder with default settings.
    pub fn new() -> Self {
        DecoderBuilder::new().build()
    }

    /// Create a decoder builder.
    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    /// Frames successfully acted upon so far.
    pub fn frames_processed(&self) -> usize {
        self.frames_processed
    }

    /// Lines skipped due to parse failures so far.
    pub fn parse_failures(&self) -> usize {
        self.parse_failures
    }

    /// The cipher rotor in its current position.
    pub fn rotor(&self) -> &Rotor {
        &self.rotor
    }

    /// The message assembled so far.
    pub fn message(&self) -> &MessageBuffer {
        &self.message
    }

    /// Main decode loop: read from the link until the sentinel, the frame
    /// cap, end of stream or a fatal read error.
    ///
    /// A fatal read error ends the loop but is not propagated; the summary
    /// carries whatever was buffered, with [`Termination::SourceError`].
    ///
    /// # Errors
    ///
    /// Returns an error only for protocol violations in the byte stream
    /// itself (a line exceeding the configured maximum length).
    pub async fn run<R>(&mut self, mut reader: R) -> Result<SessionSummary>
    where
        R: AsyncRead + Unpin,
    {
        let mut lines = LineBuffer::with_max_line_len(self.max_line_len);
        let mut buf = vec![0u8; READ_BUF_SIZE];

        let termination = 'session: loop {
            // Guards a zero cap before the first read.
            if self.frames_processed >= self.max_frames {
                break Termination::FrameCap;
            }

            let n = match reader.read(&mut buf).await {
                Ok(0) => break Termination::SourceClosed,
                Ok(n) => n,
                Err(e) => {
                    tracing::error!("Link read failed: {}", e);
                    break Termination::SourceError;
                }
            };

            for line in lines.push(&buf[..n])? {
                if let LineOutcome::Finished = self.handle_line(&line) {
                    break 'session Termination::Sentinel;
                }
                if self.frames_processed >= self.max_frames {
                    break 'session Termination::FrameCap;
                }
            }
        };

        tracing::debug!(
            "Session ended ({:?}): {} frames, {} parse failures",
            termination,
            self.frames_processed,
            self.parse_failures
        );

        Ok(self.summarize(termination))
    }

    /// Apply one line to the session.
    ///
    /// Parse failures are fully absorbed here: they are logged, counted (for
    /// non-empty lines) and leave rotor, message and frame counter untouched.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        if line == END_SENTINEL {
            tracing::debug!("End sentinel received");
            return LineOutcome::Finished;
        }

        match Frame::parse(line) {
            Ok(Frame::Load(symbol)) => {
                let decoded = self.rotor.map_char(symbol);
                self.message.append(decoded);
                self.frames_processed += 1;
                tracing::debug!(
                    "Load frame: '{}' decoded as '{}', message {}",
                    symbol,
                    decoded,
                    self.message.render_delimited()
                );
                LineOutcome::Symbol(decoded)
            }
            Ok(Frame::Map(rotation)) => {
                self.rotor.rotate(rotation);
                self.frames_processed += 1;
                tracing::debug!(
                    "Map frame: rotated by {}, offset now {}",
                    rotation,
                    self.rotor.offset()
                );
                LineOutcome::Rotated(rotation)
            }
            Err(FrameError::EmptyLine) => {
                // Blank lines are link keep-alive noise; skip without logging.
                LineOutcome::Skipped(FrameError::EmptyLine)
            }
            Err(e) => {
                self.parse_failures += 1;
                tracing::warn!("Skipping line {:?}: {}", line, e);
                LineOutcome::Skipped(e)
            }
        }
    }

    fn summarize(&self, termination: Termination) -> SessionSummary {
        SessionSummary {
            message: self.message.render(),
            frames_processed: self.frames_processed,
            parse_failures: self.parse_failures,
            rotor_offset: self.rotor.offset(),
            termination,
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

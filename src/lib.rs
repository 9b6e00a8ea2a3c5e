//! # prt7-decoder
//!
//! Decoder for the PRT-7 frame protocol: a hidden text message transmitted
//! as short textual frames over a line-oriented byte link, enciphered with a
//! rotating single-alphabet substitution whose rotation is advanced by
//! dedicated control frames.
//!
//! ## Architecture
//!
//! ```text
//! transport   (byte link: socket / pipe / stdin)
//!     │  raw bytes
//! protocol    (LineBuffer: bytes → lines, Frame: line → Load/Map)
//!     │  typed frames
//! session     (Decoder: dispatch loop, counters, termination)
//!     ├─ cipher::Rotor     rotation state + substitution mapping
//!     └─ message::MessageBuffer   ordered decoded symbols
//! ```
//!
//! ## Example
//!
//! ```
//! use prt7_decoder::Decoder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut decoder = Decoder::new();
//! let summary = decoder.run(&b"M,1\nL,A\nL,B\nFIN\n"[..]).await.unwrap();
//! assert_eq!(summary.message, "BC");
//! # }
//! ```

pub mod cipher;
pub mod control;
pub mod error;
pub mod message;
pub mod protocol;
pub mod session;
pub mod transport;

pub use error::DecoderError;
pub use session::{Decoder, DecoderBuilder, SessionSummary, Termination};

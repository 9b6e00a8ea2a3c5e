//! Cipher rotor: a 26-symbol circular substitution alphabet.
//!
//! The rotor is functionally a Caesar shift whose shift amount accumulates
//! from every map frame seen so far. It is represented as a single integer
//! offset under mod-26 arithmetic rather than a concrete rotating container;
//! the observable behavior is identical, including unbounded rotation
//! magnitudes in either direction.
//!
//! # Example
//!
//! ```
//! use prt7_decoder::cipher::Rotor;
//!
//! let mut rotor = Rotor::new();
//! rotor.rotate(1);
//! assert_eq!(rotor.map_char('A'), 'B');
//! assert_eq!(rotor.map_char(' '), ' ');
//!
//! rotor.rotate(-1);
//! assert_eq!(rotor.map_char('A'), 'A');
//! ```

/// Number of symbols on the rotor (A-Z).
pub const ALPHABET_LEN: u8 = 26;

/// Rotating substitution mapping over the uppercase alphabet.
///
/// Created at offset 0; mutated only by [`rotate`](Rotor::rotate). Both
/// operations are total: there is no error condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rotor {
    /// Net rotation, always normalized into `[0, 26)`.
    offset: u8,
}

impl Rotor {
    /// Create a rotor at the neutral position (identity mapping).
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    /// Create a rotor at an arbitrary rotation.
    pub fn with_offset(n: i32) -> Self {
        let mut rotor = Self::new();
        rotor.rotate(n);
        rotor
    }

    /// Get the current offset, in `[0, 26)`.
    #[inline]
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Rotate by `n` positions.
    ///
    /// Accepts any integer: 0 is a no-op, negative rotates backwards, and
    /// magnitudes beyond 26 reduce mod 26 (rotating by 26 is a no-op,
    /// rotating by -1 equals rotating by 25).
    pub fn rotate(&mut self, n: i32) {
        let total = i64::from(self.offset) + i64::from(n);
        self.offset = total.rem_euclid(i64::from(ALPHABET_LEN)) as u8;
    }

    /// Map one symbol through the rotor at its current position.
    ///
    /// Space is never substituted, and any symbol outside `A..=Z` passes
    /// through verbatim — a deliberate leniency of the wire contract, not a
    /// validation rule.
    pub fn map_char(&self, input: char) -> char {
        if input == ' ' {
            return ' ';
        }
        if !input.is_ascii_uppercase() {
            return input;
        }

        let idx = input as u8 - b'A';
        let mapped = (idx + self.offset) % ALPHABET_LEN;
        (b'A' + mapped) as char
    }
}

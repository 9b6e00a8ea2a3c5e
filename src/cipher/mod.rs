//! Cipher module - the rotating substitution alphabet.

mod rotor;

pub use rotor::{Rotor, ALPHABET_LEN};

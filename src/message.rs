//! Message buffer - ordered accumulation of decoded symbols.
//!
//! Strictly append-only for the lifetime of a session; the assembled message
//! is rendered once at session end. No removal operation exists.

/// Rendering of an empty buffer, distinguishable from any real
/// one-character message.
pub const EMPTY_INDICATOR: &str = "[empty message]";

/// Insertion-ordered sequence of decoded characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBuffer {
    symbols: Vec<char>,
}

impl MessageBuffer {
    /// Create an empty message buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoded symbol. Always succeeds.
    pub fn append(&mut self, symbol: char) {
        self.symbols.push(symbol);
    }

    /// Render the assembled message in insertion order.
    ///
    /// An empty buffer renders as [`EMPTY_INDICATOR`].
    pub fn render(&self) -> String {
        if self.symbols.is_empty() {
            return EMPTY_INDICATOR.to_string();
        }
        self.symbols.iter().collect()
    }

    /// Render each symbol bracketed, for debug traces (`[H][I]`).
    pub fn render_delimited(&self) -> String {
        if self.symbols.is_empty() {
            return EMPTY_INDICATOR.to_string();
        }
        self.symbols.iter().map(|c| format!("[{}]", c)).collect()
    }

    /// Number of decoded symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if no symbols have been decoded yet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut buffer = MessageBuffer::new();
        buffer.append('H');
        buffer.append('I');
        buffer.append('!');

        assert_eq!(buffer.render(), "HI!");
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_render_empty_indicator() {
        let buffer = MessageBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.render(), EMPTY_INDICATOR);
    }

    #[test]
    fn test_empty_indicator_distinct_from_one_char_message() {
        let mut buffer = MessageBuffer::new();
        buffer.append('A');
        assert_ne!(buffer.render(), EMPTY_INDICATOR);
        assert_eq!(buffer.render(), "A");
    }

    #[test]
    fn test_render_keeps_spaces() {
        let mut buffer = MessageBuffer::new();
        for c in "A B".chars() {
            buffer.append(c);
        }
        assert_eq!(buffer.render(), "A B");
    }

    #[test]
    fn test_render_delimited() {
        let mut buffer = MessageBuffer::new();
        buffer.append('H');
        buffer.append('I');

        assert_eq!(buffer.render_delimited(), "[H][I]");
        assert_eq!(MessageBuffer::new().render_delimited(), EMPTY_INDICATOR);
    }
}

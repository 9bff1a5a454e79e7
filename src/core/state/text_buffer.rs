//! Text buffer with a caret
//!
//! The buffer is a flat sequence of characters with no hard line breaks. The
//! caret is an index between characters and is kept in `0..=len` by every
//! operation.

/// Editable character sequence plus caret index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Vec<char>,
    /// Caret position within the buffer (0 = before first character)
    caret: usize,
    /// Maximum number of characters accepted, `None` for unbounded
    max_chars: Option<usize>,
}

impl TextBuffer {
    /// Create an empty buffer that accepts at most `max_chars` characters
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..Default::default()
        }
    }

    /// Create a buffer holding `text` with the caret at the end
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::default();
        buffer.insert_str(text);
        buffer
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        let mut in_word = false;
        for ch in &self.chars {
            if ch.is_whitespace() {
                in_word = false;
            } else if !in_word {
                in_word = true;
                count += 1;
            }
        }
        count
    }

    /// Move the caret to `index`, clamped to the buffer
    pub fn set_caret(&mut self, index: usize) {
        self.caret = index.min(self.chars.len());
    }

    fn has_room(&self) -> bool {
        self.max_chars.is_none_or(|max| self.chars.len() < max)
    }

    /// Insert one character at the caret. Returns false if it was dropped.
    ///
    /// Newlines and tabs become spaces since the grid has no hard breaks;
    /// other control characters are dropped.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let Some(ch) = normalize(ch) else {
            return false;
        };
        if !self.has_room() {
            return false;
        }
        self.chars.insert(self.caret, ch);
        self.caret += 1;
        true
    }

    /// Insert a string at the caret. Returns the number of characters inserted.
    pub fn insert_str(&mut self, text: &str) -> usize {
        let mut inserted = 0;
        for ch in text.chars() {
            if self.insert_char(ch) {
                inserted += 1;
            } else if !self.has_room() {
                break;
            }
        }
        inserted
    }

    /// Delete the character before the caret
    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        self.chars.remove(self.caret);
        true
    }

    /// Delete the character after the caret
    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.caret);
        true
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.set_caret(self.caret + 1);
    }

    /// Move up one grid line of `chars_per_line` characters
    pub fn move_up(&mut self, chars_per_line: usize) {
        if chars_per_line == 0 {
            return;
        }
        self.caret = self.caret.saturating_sub(chars_per_line);
    }

    /// Move down one grid line, stopping at the end of the text
    pub fn move_down(&mut self, chars_per_line: usize) {
        if chars_per_line == 0 {
            return;
        }
        self.set_caret(self.caret.saturating_add(chars_per_line));
    }

    pub fn move_to_start(&mut self) {
        self.caret = 0;
    }

    pub fn move_to_end(&mut self) {
        self.caret = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.caret = 0;
    }
}

fn normalize(ch: char) -> Option<char> {
    match ch {
        '\n' | '\r' | '\t' => Some(' '),
        c if c.is_control() => None,
        c => Some(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_advances_caret() {
        let mut buffer = TextBuffer::default();
        buffer.insert_str("abc");
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.caret(), 3);

        buffer.set_caret(1);
        buffer.insert_char('X');
        assert_eq!(buffer.text(), "aXbc");
        assert_eq!(buffer.caret(), 2);
    }

    #[test]
    fn control_characters_are_normalised() {
        let buffer = TextBuffer::from_text("a\tb\nc\u{7}d");
        assert_eq!(buffer.text(), "a b cd");
    }

    #[test]
    fn deletes_at_edges_are_noops() {
        let mut buffer = TextBuffer::from_text("ab");
        assert!(!buffer.delete_forward());
        assert!(buffer.delete_backward());
        assert_eq!(buffer.text(), "a");
        buffer.move_to_start();
        assert!(!buffer.delete_backward());
        assert!(buffer.delete_forward());
        assert!(buffer.is_empty());
    }

    #[test]
    fn caret_moves_are_clamped() {
        let mut buffer = TextBuffer::from_text("hello");
        buffer.set_caret(99);
        assert_eq!(buffer.caret(), 5);
        buffer.move_right();
        assert_eq!(buffer.caret(), 5);
        buffer.move_to_start();
        buffer.move_left();
        assert_eq!(buffer.caret(), 0);
    }

    #[test]
    fn vertical_moves_step_by_line_width() {
        let mut buffer = TextBuffer::from_text("abcdefghijk");
        buffer.set_caret(7);
        buffer.move_up(4);
        assert_eq!(buffer.caret(), 3);
        buffer.move_up(4);
        assert_eq!(buffer.caret(), 0);
        buffer.move_down(4);
        assert_eq!(buffer.caret(), 4);
        buffer.move_down(40);
        assert_eq!(buffer.caret(), 11);
        buffer.move_up(0);
        assert_eq!(buffer.caret(), 11);
    }

    #[test]
    fn max_chars_caps_insertions() {
        let mut buffer = TextBuffer::with_max_chars(4);
        assert_eq!(buffer.insert_str("abcdef"), 4);
        assert_eq!(buffer.text(), "abcd");
        assert!(!buffer.insert_char('z'));
        buffer.delete_backward();
        assert!(buffer.insert_char('z'));
        assert_eq!(buffer.text(), "abcz");
    }

    #[test]
    fn counts_words_across_whitespace_runs() {
        assert_eq!(TextBuffer::from_text("").word_count(), 0);
        assert_eq!(TextBuffer::from_text("   ").word_count(), 0);
        assert_eq!(TextBuffer::from_text("one").word_count(), 1);
        assert_eq!(TextBuffer::from_text("  one   two three ").word_count(), 3);
        assert_eq!(TextBuffer::from_text("שלום עולם").word_count(), 2);
    }
}

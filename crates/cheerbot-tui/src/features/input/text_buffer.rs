//! Minimal single-line text buffer for the reply box.
//!
//! The cursor is a char index. Pasted newlines become spaces since a reply
//! is submitted with Enter.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width (columns) of the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text[..byte_idx].width()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        let ch = if ch == '\n' || ch == '\r' { ' ' } else { ch };
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\r' {
                continue;
            }
            self.insert_char(ch);
        }
    }

    /// Deletes the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_idx);
    }

    /// Deletes the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_idx);
    }

    /// Deletes everything before the cursor (Ctrl+U).
    pub fn delete_to_head(&mut self) {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.drain(..byte_idx);
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Returns the text and clears the buffer.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    if col == 0 {
        return 0;
    }
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_move() {
        let mut buf = TextBuffer::default();
        buf.insert_str("helo");
        buf.move_left();
        buf.insert_char('l');
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), 4);

        buf.move_end();
        assert_eq!(buf.cursor(), 5);
        buf.move_right();
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_backspace_and_delete_multibyte() {
        let mut buf = TextBuffer::default();
        buf.insert_str("ok 😊!");
        buf.move_left();
        buf.backspace();
        assert_eq!(buf.text(), "ok !");

        buf.move_home();
        buf.delete();
        assert_eq!(buf.text(), "k !");
        buf.backspace();
        assert_eq!(buf.text(), "k !");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut buf = TextBuffer::default();
        buf.insert_str("no\r\nthanks");
        assert_eq!(buf.text(), "no thanks");
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let mut buf = TextBuffer::default();
        buf.insert_str("🎉a");
        assert_eq!(buf.cursor_column(), 3);
        buf.move_left();
        assert_eq!(buf.cursor_column(), 2);
    }

    #[test]
    fn test_delete_to_head() {
        let mut buf = TextBuffer::default();
        buf.insert_str("hello world");
        for _ in 0..5 {
            buf.move_left();
        }
        buf.delete_to_head();
        assert_eq!(buf.text(), "world");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_take_clears() {
        let mut buf = TextBuffer::default();
        buf.insert_str("fine");
        assert_eq!(buf.take(), "fine");
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }
}

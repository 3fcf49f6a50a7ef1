//! Text input widget
//!
//! A single-line text field with a character-based cursor, used for typing
//! beneficiary names and percentages.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Placeholder text shown while empty
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Maximum number of characters accepted
    pub max_len: Option<usize>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        if self.max_len.is_some_and(|max| self.char_count() >= max) {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() as u16 + 2
        };

        if label_width > 0 {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let input_start = area.x + label_width;
        let input_width = area.width.saturating_sub(label_width) as usize;

        if self.content.is_empty() {
            buf.set_stringn(
                input_start,
                area.y,
                &self.placeholder,
                input_width,
                Style::default().fg(Color::DarkGray),
            );
        } else {
            buf.set_stringn(
                input_start,
                area.y,
                &self.content,
                input_width,
                Style::default().fg(Color::White),
            );
        }

        let cursor_x = input_start + self.cursor as u16;
        if cursor_x < area.x + area.width {
            let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
            buf.set_string(
                cursor_x,
                area.y,
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Ali".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Ali");
        input.backspace();
        assert_eq!(input.value(), "Al");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().content("Zé");
        assert_eq!(input.cursor, 2);
        input.move_left();
        input.insert('ü');
        assert_eq!(input.value(), "Züé");
        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "Zü");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new().content("50.5");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "0.5");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "0.5");
    }

    #[test]
    fn test_max_len() {
        let mut input = TextInput::new().max_len(3);
        for c in "1234".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "123");
    }
}

//! Single-field text input widget.

use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// A text input widget.
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    /// The text content.
    content: &'a str,
    /// Cursor position (character index).
    cursor: usize,
    /// Optional block for borders/title.
    block: Option<Block<'a>>,
    /// Whether the input refuses edits.
    disabled: bool,
    /// Placeholder text.
    placeholder: Option<&'a str>,
    /// Prompt prefix (e.g., "> ").
    prompt: &'a str,
}

impl<'a> TextInput<'a> {
    /// Create a new text input over `content`.
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            cursor: content.chars().count(),
            block: None,
            disabled: false,
            placeholder: None,
            prompt: "> ",
        }
    }

    /// Set the block for the text input.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Render as disabled (no cursor, dimmed text).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let show_cursor = !self.disabled;
        let text_style = if self.disabled {
            Styles::dim()
        } else {
            Styles::default()
        };

        let mut spans = vec![Span::styled(self.prompt, Styles::active())];

        if self.content.is_empty() {
            if show_cursor {
                spans.push(Span::styled("_", Styles::active()));
            }
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(placeholder, Styles::dim()));
            }
        } else {
            let mut cursor_drawn = false;
            for (i, ch) in self.content.chars().enumerate() {
                if show_cursor && i == self.cursor && !cursor_drawn {
                    spans.push(Span::styled("|", Styles::active()));
                    cursor_drawn = true;
                }
                spans.push(Span::styled(ch.to_string(), text_style));
            }
            if show_cursor && !cursor_drawn {
                spans.push(Span::styled("_", Styles::active()));
            }
        }

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .style(Styles::default())
            .render(inner, buf);
    }
}

/// State for a text input, managing content and cursor position.
///
/// The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content.
    content: String,
    /// Cursor position (character index).
    pub cursor: usize,
}

impl TextInputState {
    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the character at `index`.
    fn byte_offset(&self, index: usize) -> usize {
        self.content
            .char_indices()
            .nth(index)
            .map_or(self.content.len(), |(offset, _)| offset)
    }

    /// Replace the content, moving the cursor to the end.
    pub fn set(&mut self, content: String) {
        self.content = content;
        self.cursor = self.char_len();
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Create a widget from this state.
    pub fn widget(&self) -> TextInput<'_> {
        TextInput::new(&self.content).cursor(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_text_input_state_basic() {
        let mut state = TextInputState::default();
        assert!(state.content().is_empty());

        state.insert('H');
        state.insert('i');
        assert_eq!(state.content(), "Hi");
        assert_eq!(state.cursor, 2);

        state.backspace();
        assert_eq!(state.content(), "H");

        state.clear();
        assert!(state.content().is_empty());
    }

    #[test]
    fn test_text_input_state_cursor_movement() {
        let mut state = TextInputState::default();
        state.set("Hello".into());

        state.move_left();
        state.move_left();
        assert_eq!(state.cursor, 3);

        state.insert('X');
        assert_eq!(state.content(), "HelXlo");

        state.move_home();
        assert_eq!(state.cursor, 0);

        state.move_end();
        assert_eq!(state.cursor, 6);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = TextInputState::default();
        state.set("Faça".into());
        state.move_left();
        state.move_left();
        state.backspace();
        assert_eq!(state.content(), "Fça");

        state.move_right();
        state.delete();
        assert_eq!(state.content(), "Fç");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_set_moves_cursor_to_end() {
        let mut state = TextInputState::default();
        state.set("olá mundo".into());
        assert_eq!(state.cursor, 9);
    }

    #[test]
    fn test_placeholder_rendered_when_empty() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        TextInput::new("")
            .disabled(true)
            .placeholder("Faça sua pergunta")
            .render(area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "> Faça sua pergunta");
    }

    #[test]
    fn test_disabled_input_hides_cursor() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        TextInput::new("Tell me a joke")
            .disabled(true)
            .render(area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "> Tell me a joke");
    }
}

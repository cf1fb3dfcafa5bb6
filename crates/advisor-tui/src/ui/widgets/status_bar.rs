//! Bottom status line: mode badge, key hints and conversation state.

use crate::ui::theme::{Palette, Styles};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// A key and what it does.
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Status line under the launcher and the chat modal.
///
/// The right edge reports the conversation: `sending...` while a message is
/// in flight, otherwise the transcript size.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    mode: &'a str,
    hints: &'a [KeyHint],
    sending: bool,
    messages: usize,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: &'a str, hints: &'a [KeyHint]) -> Self {
        Self {
            mode,
            hints,
            sending: false,
            messages: 0,
        }
    }

    /// Conversation state shown at the right edge.
    #[must_use]
    pub fn conversation(mut self, sending: bool, messages: usize) -> Self {
        self.sending = sending;
        self.messages = messages;
        self
    }

    fn conversation_text(&self) -> String {
        match (self.sending, self.messages) {
            (true, _) => "sending...".to_string(),
            (false, 0) => String::new(),
            (false, 1) => "1 message".to_string(),
            (false, n) => format!("{n} messages"),
        }
    }
}

impl Widget for StatusBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, area.y)].set_char(' ').set_bg(Palette::STATUS_BG);
        }

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.mode),
                Styles::default().bg(Palette::ACCENT).fg(Palette::BG),
            ),
            Span::styled(" ", Styles::status_bar()),
        ];
        for hint in self.hints {
            spans.push(Span::styled(format!(" {} ", hint.key), Styles::key_hint()));
            spans.push(Span::styled(format!(" {} ", hint.label), Styles::key_label()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let right = self.conversation_text();
        let right_width = right.width() as u16;
        if right_width > 0 && right_width < area.width {
            let style = if self.sending {
                Styles::status_bar().fg(Palette::ACCENT)
            } else {
                Styles::status_bar()
            };
            let x = area.x + area.width - right_width - 1;
            buf.set_string(x, area.y, right, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    const HINTS: [KeyHint; 1] = [KeyHint::new("Esc", "Close")];

    fn render(bar: StatusBar<'_>) -> String {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_sending_shown_at_right_edge() {
        let line = render(StatusBar::new("CHAT", &HINTS).conversation(true, 2));
        assert!(line.starts_with(" CHAT "));
        assert!(line.contains(" Esc  Close "));
        assert!(line.ends_with("sending..."));
    }

    #[test]
    fn test_idle_shows_transcript_size() {
        assert!(render(StatusBar::new("CHAT", &HINTS).conversation(false, 1)).ends_with("1 message"));
        assert!(render(StatusBar::new("CHAT", &HINTS).conversation(false, 4)).ends_with("4 messages"));
        assert!(render(StatusBar::new("HOME", &HINTS)).ends_with("Close"));
    }
}

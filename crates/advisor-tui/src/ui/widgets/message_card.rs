//! Message cards and the transcript column.

use advisor_engine::{Message, Role, Transcript};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::{role_icon, Styles};

/// Wrap message content to the card's inner width.
fn wrap_content(content: &str, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.saturating_sub(2)).max(1);
    let lines: Vec<Line<'static>> = textwrap::wrap(content, width)
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect();
    if lines.is_empty() {
        vec![Line::default()]
    } else {
        lines
    }
}

/// Rows a card needs at `width`: the wrapped content plus its border.
#[allow(clippy::cast_possible_truncation)]
pub fn card_height(message: &Message, width: u16) -> u16 {
    let lines = wrap_content(message.content(), width).len();
    (lines as u16).saturating_add(2)
}

/// A single message card.
///
/// ```text
/// ┌(@)──────────────────────────┐
/// │Tell me a joke               │
/// └─────────────────────────user┘
/// ```
pub struct MessageCard<'a> {
    message: &'a Message,
}

impl<'a> MessageCard<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }
}

impl Widget for MessageCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let role = self.message.role();
        let border = match role {
            Role::User => Styles::border(),
            Role::Assistant => Styles::border_active(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(role_icon(role), Styles::title()))
            .title_bottom(Line::from(Span::styled(role.as_str(), Styles::dim())).right_aligned())
            .style(Styles::default());

        Paragraph::new(wrap_content(self.message.content(), area.width))
            .block(block)
            .render(area, buf);
    }
}

/// The transcript drawn as a column of cards, newest first.
pub struct TranscriptView<'a> {
    transcript: &'a Transcript,
    scroll: usize,
}

impl<'a> TranscriptView<'a> {
    pub fn new(transcript: &'a Transcript) -> Self {
        Self {
            transcript,
            scroll: 0,
        }
    }

    /// Skip this many cards from the top.
    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for TranscriptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bottom = area.y.saturating_add(area.height);
        let mut y = area.y;

        for message in self.transcript.display_order().skip(self.scroll) {
            if y >= bottom {
                break;
            }
            let height = card_height(message, area.width).min(bottom - y);
            MessageCard::new(message).render(Rect::new(area.x, y, area.width, height), buf);
            y += height;
        }
    }
}

//! Launcher screen with the chat button.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Screen;
use crate::app::App;
use crate::ui::widgets::{KeyHint, StatusBar};
use crate::ui::{main_layout, Styles, Symbols};

const HOME_HINTS: [KeyHint; 3] = [
    KeyHint::new("c", "Chat"),
    KeyHint::new("?", "Help"),
    KeyHint::new("q", "Quit"),
];

const CHAT_HINTS: [KeyHint; 3] = [
    KeyHint::new("Enter", "Send"),
    KeyHint::new("Esc", "Close"),
    KeyHint::new("Up/Down", "Scroll"),
];

/// The page behind the modal.
pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);

        let block = Block::default()
            .title(" advisor ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .style(Styles::default());
        let inner = block.inner(main_area);
        block.render(main_area, buf);

        // Chat button, top right
        Paragraph::new(Line::from(vec![
            Span::styled(" chat ", Styles::dim()),
            Span::styled(format!(" {} ", Symbols::CHAT_BUTTON), Styles::button()),
        ]))
        .alignment(Alignment::Right)
        .render(Rect::new(inner.x, inner.y, inner.width, 1.min(inner.height)), buf);

        if inner.height > 2 {
            let y = inner.y + inner.height / 2;
            Paragraph::new(Line::from(vec![
                Span::styled("Press ", Styles::dim()),
                Span::styled("c", Styles::active()),
                Span::styled(" to ask for advice", Styles::dim()),
            ]))
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
        }

        let hints: &[KeyHint] = if app.widget.is_modal_open() {
            &CHAT_HINTS
        } else {
            &HOME_HINTS
        };
        StatusBar::new(app.mode(), hints)
            .conversation(app.widget.is_submitting(), app.widget.transcript().len())
            .render(status_area, buf);
    }
}

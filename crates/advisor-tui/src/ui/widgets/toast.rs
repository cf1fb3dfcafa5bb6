//! Toast stack drawn over the bottom-right corner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::toast::ToastQueue;
use crate::ui::layout::bottom_right;
use crate::ui::theme::Styles;

/// Rows taken by one toast (border, title, description, border).
const TOAST_HEIGHT: u16 = 4;

/// Renders the visible toasts, newest at the bottom.
pub struct ToastStack<'a> {
    queue: &'a ToastQueue,
}

impl<'a> ToastStack<'a> {
    pub fn new(queue: &'a ToastQueue) -> Self {
        Self { queue }
    }
}

impl Widget for ToastStack<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut bottom = area.y.saturating_add(area.height);

        for toast in self.queue.visible().collect::<Vec<_>>().into_iter().rev() {
            if bottom.saturating_sub(area.y) < TOAST_HEIGHT {
                break;
            }
            let n = &toast.notification;
            let width = n.title.width().max(n.description.width()) as u16 + 4;
            let slot = Rect::new(area.x, area.y, area.width, bottom - area.y);
            let rect = bottom_right(width, TOAST_HEIGHT, slot);

            Clear.render(rect, buf);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::toast_border(n.variant))
                .style(Styles::default());
            let title_style = if n.is_destructive() {
                Styles::error()
            } else {
                Styles::success()
            };
            Paragraph::new(vec![
                Line::from(Span::styled(format!(" {}", n.title), title_style)),
                Line::from(format!(" {}", n.description)),
            ])
            .block(block)
            .render(rect, buf);

            bottom -= TOAST_HEIGHT;
        }
    }
}

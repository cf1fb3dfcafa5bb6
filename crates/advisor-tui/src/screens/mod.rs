//! Screen definitions for the advisor TUI.

pub mod chat;
pub mod home;

use crate::app::App;
use crate::ui::widgets::ToastStack;
use crate::ui::{centered_fixed, main_layout, Styles};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the whole application: launcher, modal, toasts and help.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    home::HomeScreen.render(app, area, buf);

    if app.widget.is_modal_open() {
        chat::ChatModal.render(app, area, buf);
    }

    let (main_area, _) = main_layout(area);
    ToastStack::new(app.widget.notifier()).render(main_area, buf);

    if app.show_help {
        render_help_overlay(area, buf);
    }
}

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let help_text = r"
  Launcher
    c / Enter         Open the chat
    q / Ctrl+C        Quit
    ?                 Toggle this help

  Chat
    Enter             Send the message
    Up/Down           Scroll the conversation
    Ctrl+X            Dismiss notification
    Esc               Close the chat

  [Press Esc to close]
";

    let width = 50.min(area.width.saturating_sub(4));
    let height = 17.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());

    Paragraph::new(help_text)
        .block(block)
        .style(Styles::default())
        .render(overlay_area, buf);
}

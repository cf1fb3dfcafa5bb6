//! Chat modal: the form, the loading indicator and the transcript.
//!
//! ```text
//! ┌ Advisor ─────────────────────────────┐
//! │Ask for Advice                         │
//! │┌─────────────────────────────────────┐│
//! ││> Faça sua pergunta                  ││
//! │└─────────────────────────────────────┘│
//! │<inline validation error>              │
//! │Inform the message.                    │
//! │ Enviar                                │
//! │               {#}                     │
//! │┌{#}──────────────────────────────────┐│
//! ││Why did...                           ││
//! │└────────────────────────────assistant┘│
//! └───────────────────────────────────────┘
//! ```

use advisor_engine::FormController;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::Screen;
use crate::app::App;
use crate::ui::widgets::TranscriptView;
use crate::ui::{centered_rect, main_layout, pulse_frame, Styles};

pub const FORM_LABEL: &str = "Ask for Advice";
pub const PLACEHOLDER: &str = "Faça sua pergunta";
pub const DESCRIPTION: &str = "Inform the message.";
pub const SUBMIT_LABEL: &str = "Enviar";

/// The modal dialog holding the conversation.
pub struct ChatModal;

impl Screen for ChatModal {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, _) = main_layout(area);
        let modal_area = centered_rect(90, 90, main_area);

        Clear.render(modal_area, buf);
        let block = Block::default()
            .title(" Advisor ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::default());
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // label
                Constraint::Length(3), // input
                Constraint::Length(1), // inline error
                Constraint::Length(1), // description
                Constraint::Length(1), // submit button
                Constraint::Length(1), // loading indicator
                Constraint::Min(0),    // transcript
            ])
            .split(inner);

        let submitting = app.widget.is_submitting();
        let form = app.widget.form();

        Paragraph::new(Span::styled(FORM_LABEL, Styles::title())).render(chunks[0], buf);

        let input_border = if submitting {
            Styles::border()
        } else {
            Styles::border_active()
        };
        form.input()
            .widget()
            .placeholder(PLACEHOLDER)
            .disabled(submitting)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(input_border),
            )
            .render(chunks[1], buf);

        if let Some(error) = form.error() {
            Paragraph::new(Span::styled(error.to_string(), Styles::error())).render(chunks[2], buf);
        }

        Paragraph::new(Span::styled(DESCRIPTION, Styles::dim())).render(chunks[3], buf);

        let button_style = if submitting {
            Styles::button_disabled()
        } else {
            Styles::button()
        };
        Paragraph::new(Line::from(Span::styled(
            format!(" {SUBMIT_LABEL} "),
            button_style,
        )))
        .render(chunks[4], buf);

        if submitting {
            Paragraph::new(Span::styled(pulse_frame(app.tick), Styles::active()))
                .alignment(Alignment::Center)
                .render(chunks[5], buf);
        }

        TranscriptView::new(app.widget.transcript())
            .scroll(app.transcript_scroll)
            .render(chunks[6], buf);
    }
}

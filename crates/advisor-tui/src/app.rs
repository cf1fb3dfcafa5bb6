//! Application state and update logic for the advisor TUI.

use std::sync::Arc;

use advisor_engine::{
    ConversationService, ConversationWidget, FormController, Message, PendingSubmission,
    ServiceError, SubmitError, SubmitOutcome,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::{key_to_action, modal_key_to_action, Action};
use crate::form::InputForm;
use crate::toast::ToastQueue;
use crate::ui::widgets::TextInputState;

/// The widget as the terminal front end binds it.
pub type ChatWidget = ConversationWidget<InputForm, ToastQueue>;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// The chat widget: modal, transcript, form and toasts.
    pub widget: ChatWidget,

    /// Tick counter for animations.
    pub tick: usize,

    /// Cards skipped from the top of the transcript.
    pub transcript_scroll: usize,

    /// Accepted submission the event loop has not dispatched yet.
    outbox: Option<PendingSubmission>,
}

impl App {
    /// Create a new app instance.
    pub fn new(service: Arc<dyn ConversationService>, toast_ticks: usize) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            widget: ConversationWidget::new(service, InputForm::new(), ToastQueue::new(toast_ticks)),
            tick: 0,
            transcript_scroll: 0,
            outbox: None,
        }
    }

    /// Label for the status bar mode indicator.
    pub fn mode(&self) -> &'static str {
        if self.widget.is_modal_open() {
            "CHAT"
        } else {
            "HOME"
        }
    }

    /// Route a key press to the modal or the launcher.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.widget.is_modal_open() {
            match modal_key_to_action(key) {
                Action::None => self.edit_input(key),
                action => self.handle_action(action),
            }
        } else {
            self.handle_action(key_to_action(key));
        }
    }

    /// Handle a user action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = !self.show_help,
            Action::OpenChat => {
                self.show_help = false;
                self.widget.open_modal();
            }
            Action::Back => {
                if self.show_help {
                    self.show_help = false;
                } else if self.widget.is_modal_open() {
                    self.widget.close_modal();
                }
            }
            Action::Submit => self.submit(),
            Action::Up => {
                self.transcript_scroll = self.transcript_scroll.saturating_sub(1);
            }
            Action::Down => {
                if self.transcript_scroll + 1 < self.widget.transcript().len() {
                    self.transcript_scroll += 1;
                }
            }
            Action::Dismiss => self.widget.notifier_mut().dismiss_latest(),
            Action::None => {}
        }
    }

    fn submit(&mut self) {
        if !self.widget.is_modal_open() {
            return;
        }
        match self.widget.begin_submit() {
            Ok(pending) => self.outbox = Some(pending),
            Err(SubmitError::Invalid(e)) => tracing::debug!(error = %e, "message rejected"),
            Err(SubmitError::Busy | SubmitError::Stale) => {}
        }
    }

    fn edit_input(&mut self, key: KeyEvent) {
        // Input is disabled while a message is being sent
        let Some(form) = self.widget.form_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.edit(|input| input.insert(c));
            }
            KeyCode::Backspace => form.edit(TextInputState::backspace),
            KeyCode::Delete => form.edit(TextInputState::delete),
            KeyCode::Left => form.edit(TextInputState::move_left),
            KeyCode::Right => form.edit(TextInputState::move_right),
            KeyCode::Home => form.edit(TextInputState::move_home),
            KeyCode::End => form.edit(TextInputState::move_end),
            _ => {}
        }
    }

    /// Take the submission waiting to be sent, if any.
    pub fn take_outbox(&mut self) -> Option<PendingSubmission> {
        self.outbox.take()
    }

    /// Apply the result of a dispatched submission.
    pub fn finish_submission(
        &mut self,
        pending: PendingSubmission,
        result: Result<Message, ServiceError>,
    ) -> Result<SubmitOutcome, SubmitError> {
        let outcome = self.widget.complete_submit(pending, result)?;
        if outcome.is_sent() {
            // Newest exchange is drawn on top
            self.transcript_scroll = 0;
        }
        Ok(outcome)
    }

    /// Called on every tick (for animations and toast expiry).
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.widget.notifier_mut().tick();
    }

    /// Current text of the message field.
    pub fn input_value(&self) -> &str {
        self.widget.form().value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use advisor_engine::Role;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_open_and_close_modal() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('c'));
        assert!(app.widget.is_modal_open());
        assert_eq!(app.mode(), "CHAT");

        type_text(&mut app, "draft");
        press(&mut app, KeyCode::Esc);
        assert!(!app.widget.is_modal_open());
        assert_eq!(app.input_value(), "draft");
    }

    #[test]
    fn test_q_types_inside_modal_and_quits_outside() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input_value(), "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_short_message_stays_in_form() {
        let mut app = create_test_app();
        app.handle_action(Action::OpenChat);
        type_text(&mut app, "hi");
        press(&mut app, KeyCode::Enter);

        assert!(app.take_outbox().is_none());
        assert!(!app.widget.is_submitting());
        assert!(app.widget.form().error().is_some());
        assert_eq!(app.input_value(), "hi");
    }

    #[test]
    fn test_submit_cycle() {
        let mut app = create_test_app();
        app.handle_action(Action::OpenChat);
        type_text(&mut app, "Tell me a joke");
        press(&mut app, KeyCode::Enter);

        let pending = app.take_outbox().expect("submission accepted");
        assert!(app.widget.is_submitting());

        // Input is disabled while sending
        type_text(&mut app, "more");
        assert_eq!(app.input_value(), "Tell me a joke");
        press(&mut app, KeyCode::Enter);
        assert!(app.take_outbox().is_none());

        let outcome = app
            .finish_submission(pending, Ok(Message::assistant("Why did...")))
            .unwrap();
        assert!(outcome.is_sent());
        assert!(!app.widget.is_submitting());
        assert_eq!(app.input_value(), "");
        assert_eq!(app.widget.transcript().len(), 2);
        assert_eq!(app.widget.transcript().messages()[1].role(), Role::Assistant);
        assert_eq!(app.widget.notifier().len(), 1);
    }

    #[test]
    fn test_failed_submission_clears_form() {
        let mut app = create_test_app();
        app.handle_action(Action::OpenChat);
        type_text(&mut app, "Tell me a joke");
        press(&mut app, KeyCode::Enter);
        let pending = app.take_outbox().unwrap();

        app.finish_submission(pending, Err(ServiceError::Interrupted("aborted".into())))
            .unwrap();

        assert!(app.widget.transcript().is_empty());
        assert_eq!(app.input_value(), "");
        let toast = app.widget.notifier().visible().next().unwrap();
        assert!(toast.notification.is_destructive());
    }

    #[test]
    fn test_toasts_expire_with_ticks() {
        let mut app = create_test_app();
        app.handle_action(Action::OpenChat);
        type_text(&mut app, "Tell me a joke");
        press(&mut app, KeyCode::Enter);
        let pending = app.take_outbox().unwrap();
        app.finish_submission(pending, Ok(Message::assistant("ok")))
            .unwrap();

        for _ in 0..crate::test_utils::TEST_TOAST_TICKS {
            app.tick();
        }
        assert!(app.widget.notifier().is_empty());
    }

    #[test]
    fn test_scroll_is_bounded_by_transcript() {
        let mut app = create_test_app();
        app.handle_action(Action::Down);
        assert_eq!(app.transcript_scroll, 0);

        app.handle_action(Action::OpenChat);
        type_text(&mut app, "Tell me a joke");
        app.handle_action(Action::Submit);
        let pending = app.take_outbox().unwrap();
        app.finish_submission(pending, Ok(Message::assistant("ok")))
            .unwrap();

        app.handle_action(Action::Down);
        app.handle_action(Action::Down);
        assert_eq!(app.transcript_scroll, 1);
        app.handle_action(Action::Up);
        assert_eq!(app.transcript_scroll, 0);
    }

    #[test]
    fn test_help_toggle_and_back() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}

//! Conversation widget state machine.
//!
//! One submission cycle runs `Idle -> Submitting -> {Success, Failure} -> Idle`.
//! The cycle is split into [`ConversationWidget::begin_submit`] and
//! [`ConversationWidget::complete_submit`] so an event loop can keep drawing
//! while the service call runs elsewhere; [`ConversationWidget::submit`] is the
//! awaited composition of the two.

use std::sync::Arc;

use crate::form::FormController;
use crate::message::{Message, Transcript};
use crate::notify::{Notification, NotificationSink};
use crate::service::{ConversationService, ServiceError};
use crate::validation::ValidationError;

/// Where the widget is in the submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

/// A submission that has been accepted and is waiting for the service.
///
/// Not `Clone`: each accepted submission completes at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    question: Message,
    context: Vec<Message>,
}

impl PendingSubmission {
    /// The user message being sent. Not yet part of the transcript.
    pub fn question(&self) -> &Message {
        &self.question
    }

    /// Full outbound history: the transcript followed by the question.
    pub fn context(&self) -> &[Message] {
        &self.context
    }
}

/// Result of a submission that reached the service.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The reply was appended after the question.
    Sent { reply: Message },
    /// The transcript was left untouched.
    Failed(ServiceError),
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent { .. })
    }
}

/// A submission that never started, or a completion with nothing in flight.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The field failed validation; the error is also attached to the form.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Another submission is still in flight.
    #[error("a message is already being sent")]
    Busy,

    /// A result arrived while no submission was in flight.
    #[error("no message is being sent")]
    Stale,
}

/// Chat widget: modal visibility, transcript, busy flag and the bound form.
pub struct ConversationWidget<F, N> {
    modal_open: bool,
    phase: SubmissionPhase,
    transcript: Transcript,
    form: F,
    notifier: N,
    service: Arc<dyn ConversationService>,
}

impl<F: FormController, N: NotificationSink> ConversationWidget<F, N> {
    /// Create a closed, idle widget with an empty transcript.
    pub fn new(service: Arc<dyn ConversationService>, form: F, notifier: N) -> Self {
        Self {
            modal_open: false,
            phase: SubmissionPhase::Idle,
            transcript: Transcript::new(),
            form,
            notifier,
            service,
        }
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Hide the modal. Transcript and form are kept.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the form, or `None` while the input is disabled.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        if self.is_submitting() {
            None
        } else {
            Some(&mut self.form)
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Shared handle to the injected service, for callers that run the call
    /// on their own task.
    pub fn service(&self) -> Arc<dyn ConversationService> {
        Arc::clone(&self.service)
    }

    /// Validate the form and enter `Submitting`.
    ///
    /// On rejection nothing but the form's inline error changes.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }

        let text = self.form.validate()?;
        let question = Message::user(text);
        let context = self.transcript.context_with(&question);

        self.phase = SubmissionPhase::Submitting;
        tracing::debug!(context = context.len(), "submission started");

        Ok(PendingSubmission { question, context })
    }

    /// Apply the service result and return to `Idle`.
    ///
    /// The form is cleared on both paths. A result delivered while the widget
    /// is not `Submitting` is dropped with [`SubmitError::Stale`].
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmission,
        result: Result<Message, ServiceError>,
    ) -> Result<SubmitOutcome, SubmitError> {
        if !self.is_submitting() {
            tracing::warn!("dropping result for a submission that is not in flight");
            return Err(SubmitError::Stale);
        }

        let outcome = match result {
            Ok(reply) => {
                self.transcript
                    .append_exchange(pending.question, reply.clone());
                self.notifier.emit(Notification::sent());
                tracing::info!(transcript = self.transcript.len(), "reply received");
                SubmitOutcome::Sent { reply }
            }
            Err(e) => {
                tracing::error!(error = %e, "conversation request failed");
                self.notifier.emit(Notification::send_failed());
                SubmitOutcome::Failed(e)
            }
        };

        self.phase = SubmissionPhase::Idle;
        self.form.reset();
        Ok(outcome)
    }

    /// Run one full submission of the current form value.
    pub async fn submit_form(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let pending = self.begin_submit()?;
        let service = self.service();
        let result = service.converse(pending.context()).await;
        self.complete_submit(pending, result)
    }

    /// Put `text` in the form and submit it.
    pub async fn submit(&mut self, text: impl Into<String>) -> Result<SubmitOutcome, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }
        self.form.set_value(text.into());
        self.submit_form().await
    }
}

impl<F: std::fmt::Debug, N: std::fmt::Debug> std::fmt::Debug for ConversationWidget<F, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationWidget")
            .field("modal_open", &self.modal_open)
            .field("phase", &self.phase)
            .field("transcript", &self.transcript)
            .field("form", &self.form)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

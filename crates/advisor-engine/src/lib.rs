//! advisor-engine: state machine behind the advisor chat widget
//!
//! This crate is independent of any UI runtime. It provides:
//! - The message model and append-only transcript
//! - Validation of the message field
//! - The form and notification seams a front end plugs in
//! - The conversation service client
//! - The widget's submission cycle

pub mod config;
pub mod form;
pub mod message;
pub mod notify;
pub mod service;
pub mod validation;
pub mod widget;

// Re-export commonly used types
pub use config::{Config, ConfigError, ServiceKind};
pub use form::{FormController, MessageForm};
pub use message::{Message, Role, Transcript};
pub use notify::{LogSink, Notification, NotificationSink, Variant};
pub use service::{
    ConversationService, HttpConversationService, MockConversationService, ServiceError,
    DEFAULT_ENDPOINT,
};
pub use validation::{MessageSchema, ValidationError, MESSAGE_TOO_SHORT, MIN_MESSAGE_CHARS};
pub use widget::{ConversationWidget, PendingSubmission, SubmissionPhase, SubmitError, SubmitOutcome};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Transient notifications fired once per submission outcome.

use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// A transient, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub variant: Variant,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(variant: Variant, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Notification shown after a reply was received.
    pub fn sent() -> Self {
        Self::new(Variant::Default, "...Obaaa", "Mensagem enviada com sucesso")
    }

    /// Notification shown when the conversation service failed.
    pub fn send_failed() -> Self {
        Self::new(
            Variant::Destructive,
            "...Opss",
            "Não foi possível enviar a mensagem.",
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Surface that displays notifications.
pub trait NotificationSink {
    fn emit(&mut self, notification: Notification);
}

/// Recording sink, handy for headless callers and tests.
impl NotificationSink for Vec<Notification> {
    fn emit(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Sink that forwards notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn emit(&mut self, notification: Notification) {
        match notification.variant {
            Variant::Default => tracing::info!(
                title = %notification.title,
                "{}",
                notification.description
            ),
            Variant::Destructive => tracing::warn!(
                title = %notification.title,
                "{}",
                notification.description
            ),
        }
    }
}

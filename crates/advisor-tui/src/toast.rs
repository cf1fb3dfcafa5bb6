//! Transient toasts fed by the widget's notifications.

use std::collections::VecDeque;

use advisor_engine::{Notification, NotificationSink};

/// Maximum number of toasts kept on screen.
const MAX_TOASTS: usize = 3;

/// A notification with the ticks it has left on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    ttl: usize,
}

/// Queue of visible toasts, oldest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl_ticks: usize,
}

impl ToastQueue {
    /// Create a queue whose toasts live for `ttl_ticks` ticks.
    pub fn new(ttl_ticks: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl_ticks: ttl_ticks.max(1),
        }
    }

    /// Age every toast by one tick and drop expired ones.
    pub fn tick(&mut self) {
        for toast in &mut self.toasts {
            toast.ttl = toast.ttl.saturating_sub(1);
        }
        self.toasts.retain(|t| t.ttl > 0);
    }

    /// Dismiss the newest toast.
    pub fn dismiss_latest(&mut self) {
        self.toasts.pop_back();
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> + '_ {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl NotificationSink for ToastQueue {
    fn emit(&mut self, notification: Notification) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            ttl: self.ttl_ticks,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_ttl() {
        let mut queue = ToastQueue::new(2);
        queue.emit(Notification::sent());
        assert_eq!(queue.len(), 1);

        queue.tick();
        assert_eq!(queue.len(), 1);
        queue.tick();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = ToastQueue::new(10);
        for _ in 0..5 {
            queue.emit(Notification::sent());
        }
        queue.emit(Notification::send_failed());

        assert_eq!(queue.len(), MAX_TOASTS);
        assert!(queue.visible().last().unwrap().notification.is_destructive());
    }

    #[test]
    fn test_dismiss_latest() {
        let mut queue = ToastQueue::new(10);
        queue.emit(Notification::sent());
        queue.emit(Notification::send_failed());
        queue.dismiss_latest();

        assert_eq!(queue.len(), 1);
        assert!(!queue.visible().next().unwrap().notification.is_destructive());
    }
}

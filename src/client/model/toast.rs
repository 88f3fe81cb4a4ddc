use dioxus::prelude::*;

use crate::editor::{Notification, NotificationKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

/// Queue of on-screen notifications, shared through context.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    /// Shows a notification and returns its id for dismissal.
    pub fn push(&mut self, notification: Notification) -> u32 {
        let id = *self.next_id.read();
        self.next_id.set(id.wrapping_add(1));
        self.toasts.write().push(Toast {
            id,
            kind: notification.kind,
            message: notification.message,
        });
        id
    }

    pub fn push_all(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            self.push(notification);
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

//! Transient notification stack rendered by the provider.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use uuid::Uuid;

/// Visual level of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Green confirmation.
    Success,
    /// Red failure notice.
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique id, used for dismissal and render keys.
    pub id: Uuid,
    /// Visual level.
    pub level: ToastLevel,
    /// Message shown to the editor.
    pub message: String,
}

/// Ordered stack of live toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    /// Live toasts.
    pub toasts: Vec<Toast>,
}

impl ToastStack {
    /// Push a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Push a success toast.
    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Success, message)
    }

    /// Push an error toast.
    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Error, message)
    }

    /// Drop the toast with the given id, if still live.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

//! Notification port
//!
//! Transient, non-blocking messages ("toasts").

/// Visual severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient titled message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Callback surface for transient notifications.
///
/// Implementations live in the presentation layer.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

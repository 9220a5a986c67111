//! Toast notification

use serde::Serialize;

/// Toast severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ToastLevel {
    #[default]
    Success,
    Error,
}

impl ToastLevel {
    /// Heading shown above the message
    pub fn heading(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
        }
    }
}

/// The single visible notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    /// Monotonic per queue, so two toasts with the same text are distinguishable
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

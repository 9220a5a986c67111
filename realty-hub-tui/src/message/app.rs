//! Application message enum

use super::{ContentMessage, NavigationMessage};

/// Top-level message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Exit the application
    Quit,

    /// Switch focus between sidebar and content
    ToggleFocus,

    /// Sidebar messages
    Navigation(NavigationMessage),

    /// Content panel messages
    Content(ContentMessage),

    /// Close the toast now
    DismissToast,

    /// Clear the status bar message
    ClearStatus,

    /// Nothing to do (ignored events)
    Noop,
}

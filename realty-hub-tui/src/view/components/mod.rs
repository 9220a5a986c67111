//! Shared UI components

pub mod navigation;
pub mod statusbar;
pub mod toast;

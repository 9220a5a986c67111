//! Abstractions over platform collaborators

mod clipboard;

pub use clipboard::{Clipboard, InMemoryClipboard};

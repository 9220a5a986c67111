//!
//! src/event/mod.rs
//! Event layer: terminal input
//!
//! Reads crossterm events and translates each one into an `AppMessage`.
//! Nothing here mutates the model; the handler only looks at it to pick the
//! right message (which panel has focus, which page is shown).
//!
//!
//! Module layout:
//!     src/event/mod.rs
//!         mod handler;        // poll_event + handle_event
//!         mod keymap;         // KeyBinding and the default bindings
//!
//!
//!     Key routing:
//!         global      Ctrl+C / Alt+q quit, Tab toggles focus, Esc closes the toast
//!         sidebar     ↑/↓ j/k Home/End move, Enter opens, 1-5 jump
//!         content     Alt+c copies; lists move with ↑/↓ and copy with Enter;
//!                     the listing form edits text, Enter / Alt+g generates
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

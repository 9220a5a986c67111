//!
//! src/update/mod.rs
//! Update layer: state transitions
//!
//! Consumes a Message and mutates the Model. The only place that writes to
//! `App`; the view only ever reads it.
//!
//!
//! Module layout:
//!     src/update/mod.rs
//!         mod navigation;         // sidebar sub-messages
//!         mod content;            // content panel sub-messages
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!     Sub-messages are delegated to their module; everything that touches a
//!     timer (page switch, toast, copy) goes through `App`, which forwards to
//!     the `UiStore`.
//!
//!     `update` first brings the store clock up to wall time (`app.tick()`),
//!     so a timer started by this message counts from now and not from the
//!     last loop turn, which may be a whole poll timeout ago.
//!

mod content;
mod navigation;

use crate::message::AppMessage;
use crate::model::App;

/// Apply one message to the application state
pub fn update(app: &mut App, msg: AppMessage) {
    app.tick();

    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::DismissToast => {
            app.store.dismiss_toast();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

//!
//! src/message/mod.rs
//! Message layer: event messages
//!
//! The bridge between Event and Update. Every user action is expressed as a
//! Message; the Update layer reads Messages and changes the Model.
//!
//!
//! Module layout:
//!     src/message/mod.rs
//!         mod app;            // AppMessage, the top-level enum
//!         mod content;        // ContentMessage, actions inside a page
//!         mod navigation;     // NavigationMessage, sidebar actions
//!
//!
//!     pub enum AppMessage {
//!         Quit,                               // exit
//!         ToggleFocus,                        // sidebar ↔ content
//!         Navigation(NavigationMessage),      // sidebar sub-messages
//!         Content(ContentMessage),            // content sub-messages
//!         DismissToast,                       // close the toast early
//!         ClearStatus,                        // clear the status bar
//!         Noop,                               // stands in for Option::None
//!     }
//!
//!
//!     src/event/handler.rs builds one of these per key press:
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage
//!
//!     and src/app.rs hands it to:
//!         update::update(app, msg)
//!

mod app;
mod content;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;

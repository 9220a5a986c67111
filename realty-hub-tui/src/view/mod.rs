//!
//! src/view/mod.rs
//! View layer: rendering
//!
//! Pure reads of `App`; nothing here mutates state.
//!
//!
//! Module layout:
//!     src/view/mod.rs
//!         mod layout;             // frame split, page header, skeleton switch
//!         pub mod theme;          // palette + common styles
//!         mod components;         // sidebar, status bar, toast overlay
//!         mod pages;              // one module per page, plus skeletons
//!
//!
//!     ┌──────────────────────── title bar ────────────────────────┐
//!     │ sidebar │  Page title                                ┌─────┐│
//!     │         │  subtitle                                  │toast││
//!     │ ▦ Dash  │ ─────────────────────────────────────────  └─────┘│
//!     │ @ Leads │  page body, or its skeleton while loading         │
//!     │ ...     │                                                   │
//!     ├──────────────────────── status bar ───────────────────────┤
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

//!┌─────────────────────────────────────────────────────────────────────────────┐
//!│                            main loop (app.rs)                               │
//!│                                                                             │
//!│   ┌─────────┐          ┌───────────┐          ┌──────────┐                  │
//!│   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │                  │
//!│   │  layer  │ translate│   layer   │ consume  │  layer   │                  │
//!│   └─────────┘          └───────────┘          └────┬─────┘                  │
//!│        ▲                                           │ mutate                 │
//!│        │                                           ▼                        │
//!│   ┌─────────┐                                ┌──────────┐     tick()        │
//!│   │  View   │ ◀────────── read ───────────── │  Model   │ ◀──────────┐      │
//!│   │  layer  │                                │  layer   │            │      │
//!│   └─────────┘                                └────┬─────┘      ┌─────┴────┐ │
//!│                                                   │ owns       │  clock   │ │
//!│                                                   ▼            └──────────┘ │
//!│                                        ┌───────────────────┐                │
//!│                                        │ realty-hub-core   │                │
//!│                                        │     UiStore       │                │
//!│                                        └───────────────────┘                │
//!└─────────────────────────────────────────────────────────────────────────────┘
//!
//! src/model/mod.rs
//! Model layer: application state
//!
//! The Model is the single source of truth the View reads from. It holds plain
//! data; every mutation goes through the Update layer.
//!
//!
//! Module layout:
//!     src/model/mod.rs
//!         mod app;            // top-level App
//!         mod focus;          // focused panel (Navigation / Content)
//!         mod navigation;     // sidebar highlight
//!
//!         pub mod state;      // per-page UI data (selection, form input)
//!
//!     Note the split between the sidebar and the store:
//!         - `SidebarState` is only the highlighted row, moved with ↑/↓;
//!         - the page actually shown, its loading flag, the toast and the
//!           copied flags live in `realty_hub_core::UiStore`, which runs the
//!           timers behind them.
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! App
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub struct App {
//!         pub should_quit: bool,
//!         pub focus: FocusPanel,
//!         pub sidebar: SidebarState,
//!         pub store: UiStore,
//!         pub status_message: Option<String>,
//!
//!         pub leads: LeadsState,
//!         pub listings: ListingsState,
//!         pub followups: FollowupsState,
//!         ...
//!     }
//!
//!     Usage:
//!         - created in main.rs:      App::new(&config, clipboard)
//!         - advanced in app.rs:      app.tick() maps wall time onto the store clock
//!         - mutated in update/:      app.navigate_to(page), app.copy(id)
//!         - read in view/:           app.store.navigation(), app.store.toast()
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Data flow of a page switch
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         user presses Enter on a sidebar row
//!             ↓
//!         event/handler.rs returns Navigation(Confirm)
//!             ↓
//!         update/navigation.rs calls app.navigate_to(page)
//!             ↓
//!         UiStore: current page := page, loading := true, settle timer restarted
//!             ↓
//!         view renders the page skeleton until the settle timer fires
//!

mod app;
mod focus;
mod navigation;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::SidebarState;
pub use state::{FollowupsState, LeadsState, ListingField, ListingsState};

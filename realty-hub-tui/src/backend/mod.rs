//!
//! src/backend/mod.rs
//! Backend layer: platform services
//!
//! The pieces of the TUI that touch the outside world. The timing logic
//! itself lives in `realty-hub-core`; this layer only supplies what the core
//! abstracts away.
//!
//!
//! Module layout:
//!     src/backend/mod.rs
//!         mod clipboard;          // SystemClipboard (arboard) + headless fallback
//!         mod config_service;     // AppConfig loaded from config.json
//!
//!
//!     Startup (main.rs):
//!         JsonConfigService::new().load()     // missing file → AppConfig::default()
//!             ↓
//!         open_clipboard()                    // Box<dyn realty_hub_core::Clipboard>
//!             ↓
//!         App::new(&config, clipboard)
//!

mod clipboard;
mod config_service;

pub use clipboard::open_clipboard;
pub use config_service::{AppConfig, ConfigService, JsonConfigService};

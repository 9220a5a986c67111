//! Realty Hub TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: config and clipboard (`backend/`)
//!
//! The settle window, toast slot and copy flags are owned by
//! `realty_hub_core::UiStore`; this binary feeds it input and wall time.
//!
//!
//! main.rs
//!
//!     JsonConfigService::load()   // config.json; defaults when missing or invalid
//!     init_logging()              // env_logger into a log file
//!     set_theme()                 // palette for the view layer
//!     open_clipboard()            // arboard, or a refusing stand-in
//!     init_terminal()             // raw mode + alternate screen
//!     App::new()
//!     app::run()                  // main loop
//!     restore_terminal()          // always, even when run() failed

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{open_clipboard, AppConfig, ConfigService, JsonConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    let config_service = JsonConfigService::new();
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let log_path = init_logging(&config.log_level)?;
    log::info!(
        "Realty Hub starting (config: {}, log: {})",
        config_service.path().display(),
        log_path.display()
    );

    view::theme::set_theme(config.theme);
    let clipboard = open_clipboard();

    let mut terminal = init_terminal()?;
    let mut app = model::App::new(&config, clipboard);

    // A broken config file should not keep the dashboard from starting
    if let Some(err) = config_error {
        log::warn!("Config ignored: {err:#}");
        app.store.show_error_toast("Config file invalid, using defaults");
    }

    let result = app::run(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    if let Err(ref err) = result {
        log::error!("Main loop failed: {err:#}");
    }
    result
}

//!
//! src/util/mod.rs
//! Util layer: terminal and process plumbing
//!
//!
//! Module layout:
//!     src/util/mod.rs
//!         mod logging;        // env_logger writing to a file
//!         mod terminal;       // raw mode + alternate screen
//!         mod text;           // width-aware truncation for table cells
//!
//!
//!     main.rs brackets the main loop:
//!         let mut terminal = init_terminal()?;
//!         let result = app::run(&mut terminal, &mut app);
//!         restore_terminal(&mut terminal)?;       // runs even when run() failed
//!         result
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::truncate;

//!
//! app.rs
//! Main loop
//!
//! loop {
//!     app.tick()                                  // fire timers due by now
//!     terminal.draw(|f| view::render(&app, f))    // render
//!     if app.should_quit { break }
//!     poll_event(app.poll_timeout())              // wait for a key, at most until
//!                                                 // the next timer deadline
//!     handle_event → update::update               // ticks again first, so new
//!                                                 // timers count from the key press
//! }
//!
//! The poll timeout shrinks to the next pending deadline so the skeleton,
//! the toast and the "Copied" label change on time even with no input.

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(app.poll_timeout())? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    log::info!("Main loop exited");
    Ok(())
}

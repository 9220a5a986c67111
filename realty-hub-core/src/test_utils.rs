//! Test helpers
//!
//! Shorthand for virtual time and ready-made stores.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::TimingConfig;
use crate::scheduler::{Scheduler, TimerTicket};
use crate::store::{StoreEvent, UiStore};
use crate::types::PageId;

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Pop every timer due by `until`, then move the clock there.
pub fn drain(scheduler: &mut Scheduler, until: Duration) -> Vec<TimerTicket> {
    let mut fired = Vec::new();
    while let Some(ticket) = scheduler.pop_due(until) {
        fired.push(ticket);
    }
    scheduler.advance_clock(until);
    fired
}

/// Store with default timings whose boot settle window has already passed
pub fn settled_store() -> UiStore {
    let mut store = UiStore::new(TimingConfig::default());
    store.advance(ms(400));
    store
}

/// Store sitting on `page` with its content mounted
pub fn store_on(page: PageId) -> UiStore {
    let mut store = settled_store();
    store.navigate_to(page);
    store.advance(ms(400));
    store
}

/// Attach a listener that records every event
pub fn record_events(store: &mut UiStore) -> Rc<RefCell<Vec<StoreEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

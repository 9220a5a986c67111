//! Navigation controller
//!
//! Owns the current page and the derived loading flag. Every navigation enters
//! a settle window; the flag clears when the settle timer of the *latest*
//! navigation fires.

use std::time::Duration;

use crate::config::{ReentryPolicy, TimingConfig};
use crate::scheduler::{Scheduler, TimerKey, TimerTicket};
use crate::types::{NavigationState, PageId};

/// What a call to [`NavigationController::navigate_to`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Moved to a different page
    Switched { from: PageId },
    /// Same page, loading restarted
    Reloaded,
    /// Same page, nothing changed
    Ignored,
}

#[derive(Debug)]
pub struct NavigationController {
    current: PageId,
    loading: bool,
    settle: Option<TimerTicket>,
    settle_delay: Duration,
    reentry: ReentryPolicy,
}

impl NavigationController {
    /// Settled on `initial`; call [`reload`](Self::reload) to start with a settle window.
    pub fn new(initial: PageId, timing: &TimingConfig) -> Self {
        Self {
            current: initial,
            loading: false,
            settle: None,
            settle_delay: timing.settle_delay(),
            reentry: timing.reentry,
        }
    }

    pub fn navigate_to(&mut self, page: PageId, scheduler: &mut Scheduler) -> NavigationOutcome {
        let from = self.current;

        let outcome = if page != from {
            NavigationOutcome::Switched { from }
        } else if self.reentry == ReentryPolicy::Ignore {
            log::debug!("Already on {page}, navigation ignored");
            return NavigationOutcome::Ignored;
        } else {
            NavigationOutcome::Reloaded
        };

        self.current = page;
        self.enter_loading(scheduler);
        log::debug!("Navigate {from} -> {page}");
        outcome
    }

    /// Navigate by raw id; unknown ids land on the default page.
    pub fn navigate_to_id(&mut self, raw: &str, scheduler: &mut Scheduler) -> NavigationOutcome {
        self.navigate_to(PageId::parse_or_default(raw), scheduler)
    }

    /// Re-enter the settle window on the current page
    pub fn reload(&mut self, scheduler: &mut Scheduler) {
        self.enter_loading(scheduler);
    }

    /// Settle timer fired. Returns `true` if it was the live one and loading ended.
    pub fn on_settle(&mut self, ticket: TimerTicket) -> bool {
        if self.settle != Some(ticket) {
            log::debug!("Stale settle timer gen {} ignored", ticket.generation);
            return false;
        }
        self.settle = None;
        self.loading = false;
        log::debug!("{} settled", self.current);
        true
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            current_page: self.current,
            is_loading: self.loading,
        }
    }

    pub fn current_page(&self) -> PageId {
        self.current
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn enter_loading(&mut self, scheduler: &mut Scheduler) {
        self.loading = true;
        // schedule() supersedes any pending settle timer
        self.settle = Some(scheduler.schedule(TimerKey::NavigationSettle, self.settle_delay));
    }
}

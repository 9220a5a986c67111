//! Application state

use std::time::{Duration, Instant};

use realty_hub_core::services::NavigationOutcome;
use realty_hub_core::{AffordanceId, Clipboard, PageId, UiStore};

use super::{FocusPanel, FollowupsState, LeadsState, ListingsState, SidebarState};
use crate::backend::AppConfig;

/// Longest the main loop waits for input before advancing timers
const MAX_POLL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Panel receiving keys
    pub focus: FocusPanel,

    /// Sidebar highlight
    pub sidebar: SidebarState,

    /// Navigation, toast and copy state
    pub store: UiStore,

    /// Status bar message (errors that are not toasts)
    pub status_message: Option<String>,

    // === Page states ===
    pub leads: LeadsState,
    pub listings: ListingsState,
    pub followups: FollowupsState,

    clipboard: Box<dyn Clipboard>,
    started: Instant,
}

impl App {
    pub fn new(config: &AppConfig, clipboard: Box<dyn Clipboard>) -> Self {
        let start_page = config.start_page();
        let mut sidebar = SidebarState::new();
        sidebar.highlight(start_page);

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            sidebar,
            store: UiStore::with_start_page(start_page, config.timing),
            status_message: None,
            leads: LeadsState::new(),
            listings: ListingsState::new(),
            followups: FollowupsState::new(),
            clipboard,
            started: Instant::now(),
        }
    }

    /// Feed elapsed wall time into the store, firing due timers.
    ///
    /// Also runs before every update so timers started by input are measured
    /// from the key press, not from the previous loop turn.
    pub fn tick(&mut self) {
        self.store.advance_to(self.started.elapsed());
    }

    /// How long the next input poll may block without delaying a timer
    pub fn poll_timeout(&self) -> Duration {
        self.store
            .next_deadline()
            .map_or(MAX_POLL, |deadline| {
                deadline.saturating_sub(self.started.elapsed()).min(MAX_POLL)
            })
    }

    pub fn current_page(&self) -> PageId {
        self.store.navigation().current_page
    }

    /// Navigate and keep the sidebar highlight in step
    pub fn navigate_to(&mut self, page: PageId) {
        let outcome = self.store.navigate_to(page);
        self.sidebar.highlight(page);
        if outcome != NavigationOutcome::Ignored {
            self.clear_status();
        }
    }

    /// Copy the element behind `id`; failures go to the status bar.
    pub fn copy(&mut self, id: AffordanceId) {
        match self.store.copy(id, self.clipboard.as_mut()) {
            Ok(()) => self.clear_status(),
            Err(err) => {
                if err.is_expected() {
                    log::warn!("Copy failed: {err}");
                } else {
                    log::error!("Copy failed: {err}");
                }
                self.set_status(format!("Copy failed: {err}"));
            }
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

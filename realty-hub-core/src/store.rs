//! UI store
//!
//! The single owner of all transient UI state: the scheduler, the navigation
//! controller, the toast slot and the copy affordances of whatever page content
//! is currently mounted. Front-ends hold one `UiStore`, call its operations from
//! input handlers, feed it time through [`UiStore::advance_to`], and read or
//! subscribe to its state.
//!
//! Page content mounts when the navigation settles (the placeholder shows until
//! then). Any navigation that re-enters loading unmounts the previous content,
//! tearing down its affordances together with their revert timers.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::TimingConfig;
use crate::error::{CoreError, CoreResult};
use crate::scheduler::{Scheduler, TimerKey, TimerTicket};
use crate::services::{CopyAffordance, NavigationController, NavigationOutcome, ToastQueue};
use crate::traits::Clipboard;
use crate::types::{
    generate_listing, templates, AffordanceId, AffordanceSlot, ListingDraft, NavigationState,
    PageId, Toast, ToastLevel,
};

/// Change notification delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Navigation(NavigationState),
    Toast(Option<Toast>),
    Affordance { id: AffordanceId, copied: bool },
}

/// Handle returned by [`UiStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct UiStore {
    timing: TimingConfig,
    scheduler: Scheduler,
    navigation: NavigationController,
    toasts: ToastQueue,
    affordances: BTreeMap<AffordanceId, CopyAffordance>,
    generated_listing: Option<String>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl UiStore {
    /// Store starting on the default page
    pub fn new(timing: TimingConfig) -> Self {
        Self::with_start_page(PageId::default(), timing)
    }

    /// Store starting on `page`, which goes through one settle window like any navigation
    pub fn with_start_page(page: PageId, timing: TimingConfig) -> Self {
        let mut scheduler = Scheduler::new();
        let mut navigation = NavigationController::new(page, &timing);
        navigation.reload(&mut scheduler);

        Self {
            timing,
            scheduler,
            navigation,
            toasts: ToastQueue::new(&timing),
            affordances: BTreeMap::new(),
            generated_listing: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Earliest moment a pending timer is due
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    // ========== Navigation ==========

    pub fn navigate_to(&mut self, page: PageId) -> NavigationOutcome {
        let outcome = self.navigation.navigate_to(page, &mut self.scheduler);
        if outcome != NavigationOutcome::Ignored {
            self.unmount_content();
            self.emit(&StoreEvent::Navigation(self.navigation.state()));
        }
        outcome
    }

    /// Navigate by raw id; unknown ids land on the default page.
    pub fn navigate_to_id(&mut self, raw: &str) -> NavigationOutcome {
        self.navigate_to(PageId::parse_or_default(raw))
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigation.state()
    }

    // ========== Toast ==========

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toasts.show(message, &mut self.scheduler);
        self.emit_toast();
    }

    pub fn show_error_toast(&mut self, message: impl Into<String>) {
        self.toasts
            .show_with_level(message, ToastLevel::Error, &mut self.scheduler);
        self.emit_toast();
    }

    pub fn dismiss_toast(&mut self) {
        if self.toasts.dismiss(&mut self.scheduler).is_some() {
            self.emit_toast();
        }
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.current()
    }

    // ========== Copy ==========

    /// Copy the text behind `id` and flag it as copied.
    ///
    /// Fails with `AffordanceNotMounted` when the element is not on screen and
    /// with `ClipboardUnavailable` when the write is refused; neither touches state.
    pub fn copy(&mut self, id: AffordanceId, clipboard: &mut dyn Clipboard) -> CoreResult<()> {
        let text = self
            .copy_text(id)
            .ok_or(CoreError::AffordanceNotMounted(id))?;
        let affordance = self
            .affordances
            .get_mut(&id)
            .ok_or(CoreError::AffordanceNotMounted(id))?;

        affordance.copy(&text, clipboard, &mut self.toasts, &mut self.scheduler)?;

        self.emit(&StoreEvent::Affordance { id, copied: true });
        self.emit_toast();
        Ok(())
    }

    pub fn is_copied(&self, id: AffordanceId) -> bool {
        self.affordances
            .get(&id)
            .is_some_and(CopyAffordance::is_copied)
    }

    pub fn is_mounted(&self, id: AffordanceId) -> bool {
        self.affordances.contains_key(&id)
    }

    pub fn mounted_affordances(&self) -> impl Iterator<Item = AffordanceId> + '_ {
        self.affordances.keys().copied()
    }

    // ========== Listing generator ==========

    /// Run the listing generator and announce the result.
    pub fn generate_listing(&mut self, draft: &ListingDraft) {
        self.generated_listing = Some(generate_listing(draft));
        self.show_toast("Listing generated successfully");

        let nav = self.navigation.state();
        if nav.current_page == PageId::Listings && !nav.is_loading {
            self.mount(AffordanceId::generated_listing());
        }
    }

    pub fn generated_listing(&self) -> Option<&str> {
        self.generated_listing.as_deref()
    }

    // ========== Time ==========

    /// Move time forward by `elapsed`
    pub fn advance(&mut self, elapsed: Duration) {
        self.advance_to(self.scheduler.now() + elapsed);
    }

    /// Fire every timer due by `now`, in deadline order.
    pub fn advance_to(&mut self, now: Duration) {
        while let Some(ticket) = self.scheduler.pop_due(now) {
            self.dispatch(ticket);
        }
        self.scheduler.advance_clock(now);
    }

    // ========== Subscription ==========

    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    // ========== Internals ==========

    fn dispatch(&mut self, ticket: TimerTicket) {
        match ticket.key {
            TimerKey::NavigationSettle => {
                if self.navigation.on_settle(ticket) {
                    self.mount_content(self.navigation.current_page());
                    self.emit(&StoreEvent::Navigation(self.navigation.state()));
                }
            }
            TimerKey::ToastDismiss => {
                if self.toasts.on_dismiss_timer(ticket) {
                    self.emit(&StoreEvent::Toast(None));
                }
            }
            TimerKey::AffordanceRevert(id) => {
                let reverted = self
                    .affordances
                    .get_mut(&id)
                    .is_some_and(|affordance| affordance.on_revert(ticket));
                if reverted {
                    self.emit(&StoreEvent::Affordance { id, copied: false });
                }
            }
        }
    }

    fn copy_text(&self, id: AffordanceId) -> Option<String> {
        match id.slot {
            AffordanceSlot::Template(index) => templates().get(index).map(|t| t.text.to_string()),
            AffordanceSlot::GeneratedListing => self.generated_listing.clone(),
        }
    }

    fn mount_content(&mut self, page: PageId) {
        match page {
            PageId::Followups => {
                for index in 0..templates().len() {
                    self.mount(AffordanceId::template(index));
                }
            }
            PageId::Listings if self.generated_listing.is_some() => {
                self.mount(AffordanceId::generated_listing());
            }
            _ => {}
        }
    }

    fn mount(&mut self, id: AffordanceId) {
        let timing = self.timing;
        self.affordances
            .entry(id)
            .or_insert_with(|| CopyAffordance::new(id, &timing));
    }

    fn unmount_content(&mut self) {
        for (_, mut affordance) in std::mem::take(&mut self.affordances) {
            affordance.teardown(&mut self.scheduler);
        }
    }

    fn emit_toast(&mut self) {
        let event = StoreEvent::Toast(self.toasts.current().cloned());
        self.emit(&event);
    }

    fn emit(&mut self, event: &StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReentryPolicy;
    use crate::test_utils::{ms, record_events, settled_store, store_on};
    use crate::traits::InMemoryClipboard;

    #[test]
    fn boots_into_a_settle_window() {
        let mut store = UiStore::new(TimingConfig::default());
        assert_eq!(
            store.navigation(),
            NavigationState {
                current_page: PageId::Dashboard,
                is_loading: true
            }
        );

        store.advance(ms(400));
        assert!(!store.navigation().is_loading);
    }

    #[test]
    fn start_page_is_honoured() {
        let mut store = UiStore::with_start_page(PageId::Followups, TimingConfig::default());
        store.advance(ms(400));
        assert_eq!(store.navigation().current_page, PageId::Followups);
        assert!(store.is_mounted(AffordanceId::template(2)));
    }

    #[test]
    fn renderer_sees_settled_then_loading_page() {
        let mut store = settled_store();
        let events = record_events(&mut store);

        store.navigate_to(PageId::Leads);
        store.advance(ms(450));
        assert_eq!(
            events.borrow().last(),
            Some(&StoreEvent::Navigation(NavigationState {
                current_page: PageId::Leads,
                is_loading: false
            }))
        );

        store.navigate_to(PageId::Listings);
        store.advance(ms(100));
        assert_eq!(
            events.borrow().last(),
            Some(&StoreEvent::Navigation(NavigationState {
                current_page: PageId::Listings,
                is_loading: true
            }))
        );
        assert!(store.navigation().is_loading);
    }

    #[test]
    fn templates_mount_only_after_settle() {
        let mut store = settled_store();
        store.navigate_to(PageId::Followups);

        assert!(!store.is_mounted(AffordanceId::template(0)));
        let mut clipboard = InMemoryClipboard::new();
        assert_eq!(
            store.copy(AffordanceId::template(0), &mut clipboard),
            Err(CoreError::AffordanceNotMounted(AffordanceId::template(0)))
        );

        store.advance(ms(400));
        assert_eq!(store.mounted_affordances().count(), 3);
    }

    #[test]
    fn copy_flags_element_and_toasts() {
        let mut store = store_on(PageId::Followups);
        let mut clipboard = InMemoryClipboard::new();
        let id = AffordanceId::template(1);

        store.copy(id, &mut clipboard).unwrap();
        assert!(store.is_copied(id));
        assert!(!store.is_copied(AffordanceId::template(0)));
        assert_eq!(clipboard.contents(), Some(templates()[1].text));
        assert_eq!(
            store.toast().map(|t| t.message.as_str()),
            Some("Template copied to clipboard")
        );

        store.advance(ms(1_500));
        assert!(!store.is_copied(id));
    }

    #[test]
    fn failed_copy_shows_nothing() {
        let mut store = store_on(PageId::Followups);
        let events = record_events(&mut store);
        let mut clipboard = InMemoryClipboard::failing("no display");

        let result = store.copy(AffordanceId::template(0), &mut clipboard);
        assert!(matches!(result, Err(CoreError::ClipboardUnavailable(_))));
        assert!(!store.is_copied(AffordanceId::template(0)));
        assert!(store.toast().is_none());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn navigating_away_tears_down_pending_reverts() {
        let mut store = store_on(PageId::Followups);
        let mut clipboard = InMemoryClipboard::new();
        store.copy(AffordanceId::template(0), &mut clipboard).unwrap();
        store.advance(ms(500));

        store.navigate_to(PageId::Leads);
        let events = record_events(&mut store);
        assert!(!store.is_mounted(AffordanceId::template(0)));

        store.advance(ms(5_000));
        assert!(events
            .borrow()
            .iter()
            .all(|e| !matches!(e, StoreEvent::Affordance { .. })));
    }

    #[test]
    fn reloading_the_same_page_remounts_fresh_affordances() {
        let mut store = store_on(PageId::Followups);
        let mut clipboard = InMemoryClipboard::new();
        store.copy(AffordanceId::template(0), &mut clipboard).unwrap();

        store.navigate_to(PageId::Followups);
        assert!(store.navigation().is_loading);
        store.advance(ms(400));
        assert!(store.is_mounted(AffordanceId::template(0)));
        assert!(!store.is_copied(AffordanceId::template(0)));
    }

    #[test]
    fn ignore_policy_keeps_content_mounted() {
        let timing = TimingConfig {
            reentry: ReentryPolicy::Ignore,
            ..TimingConfig::default()
        };
        let mut store = UiStore::with_start_page(PageId::Followups, timing);
        store.advance(ms(400));
        let mut clipboard = InMemoryClipboard::new();
        store.copy(AffordanceId::template(0), &mut clipboard).unwrap();

        assert_eq!(store.navigate_to(PageId::Followups), NavigationOutcome::Ignored);
        assert!(store.is_copied(AffordanceId::template(0)));
    }

    #[test]
    fn generated_listing_becomes_copyable() {
        let mut store = store_on(PageId::Listings);
        assert!(!store.is_mounted(AffordanceId::generated_listing()));

        store.generate_listing(&ListingDraft::default());
        assert!(store.generated_listing().is_some());
        assert_eq!(
            store.toast().map(|t| t.message.as_str()),
            Some("Listing generated successfully")
        );

        let mut clipboard = InMemoryClipboard::new();
        store
            .copy(AffordanceId::generated_listing(), &mut clipboard)
            .unwrap();
        assert_eq!(clipboard.contents(), store.generated_listing());
        assert_eq!(
            store.toast().map(|t| t.message.as_str()),
            Some("Listing description copied")
        );
    }

    #[test]
    fn generated_listing_survives_navigation() {
        let mut store = store_on(PageId::Listings);
        store.generate_listing(&ListingDraft::default());

        store.navigate_to(PageId::Dashboard);
        assert!(!store.is_mounted(AffordanceId::generated_listing()));
        store.advance(ms(400));
        store.navigate_to(PageId::Listings);
        store.advance(ms(400));
        assert!(store.is_mounted(AffordanceId::generated_listing()));
    }

    #[test]
    fn toast_events_track_the_slot() {
        let mut store = settled_store();
        let events = record_events(&mut store);

        store.show_toast("one");
        store.dismiss_toast();
        store.dismiss_toast();
        store.show_error_toast("two");
        store.advance(ms(2_000));

        let toasts: Vec<Option<String>> = events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                StoreEvent::Toast(t) => Some(t.as_ref().map(|t| t.message.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            toasts,
            vec![Some("one".to_string()), None, Some("two".to_string()), None]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut store = settled_store();
        let events = record_events(&mut store);
        let other = store.subscribe(|_| {});

        assert!(store.unsubscribe(other));
        assert!(!store.unsubscribe(other));
        store.show_toast("still delivered");
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn invalid_page_id_lands_on_dashboard() {
        let mut store = store_on(PageId::Scheduler);
        store.navigate_to_id("reports");
        assert_eq!(store.navigation().current_page, PageId::Dashboard);
    }
}

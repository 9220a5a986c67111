//! Copy affordance
//!
//! The "just copied" flag of one copyable element. Only a confirmed clipboard
//! write flips it; it reverts on its own after the revert delay, and a repeated
//! copy restarts that delay.

use std::time::Duration;

use crate::config::TimingConfig;
use crate::error::CoreResult;
use crate::scheduler::{Scheduler, TimerKey, TimerTicket};
use crate::services::ToastQueue;
use crate::traits::Clipboard;
use crate::types::AffordanceId;

#[derive(Debug)]
pub struct CopyAffordance {
    id: AffordanceId,
    copied: bool,
    revert: Option<TimerTicket>,
    revert_delay: Duration,
}

impl CopyAffordance {
    pub fn new(id: AffordanceId, timing: &TimingConfig) -> Self {
        Self {
            id,
            copied: false,
            revert: None,
            revert_delay: timing.copy_revert(),
        }
    }

    /// Write `text` to the clipboard, then mark copied and announce it.
    ///
    /// On a failed write nothing changes and the error is returned.
    pub fn copy(
        &mut self,
        text: &str,
        clipboard: &mut dyn Clipboard,
        toasts: &mut ToastQueue,
        scheduler: &mut Scheduler,
    ) -> CoreResult<()> {
        if let Err(err) = clipboard.write_text(text) {
            log::warn!("Copy of {} failed: {err}", self.id);
            return Err(err);
        }

        self.copied = true;
        self.revert = Some(scheduler.schedule(TimerKey::AffordanceRevert(self.id), self.revert_delay));
        toasts.show(self.id.confirmation(), scheduler);
        Ok(())
    }

    /// Revert timer fired. Returns `true` if the flag was cleared.
    pub fn on_revert(&mut self, ticket: TimerTicket) -> bool {
        if self.revert != Some(ticket) {
            log::debug!("Stale revert timer for {} ignored", self.id);
            return false;
        }
        self.revert = None;
        self.copied = false;
        true
    }

    /// Cancel the outstanding revert timer before the element goes away.
    pub fn teardown(&mut self, scheduler: &mut Scheduler) {
        if self.revert.take().is_some() {
            scheduler.cancel(&TimerKey::AffordanceRevert(self.id));
        }
    }

    pub fn id(&self) -> AffordanceId {
        self.id
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{drain, ms};
    use crate::traits::InMemoryClipboard;

    struct Fixture {
        affordance: CopyAffordance,
        toasts: ToastQueue,
        sched: Scheduler,
        clipboard: InMemoryClipboard,
    }

    impl Fixture {
        fn new() -> Self {
            let timing = TimingConfig::default();
            Self {
                affordance: CopyAffordance::new(AffordanceId::template(0), &timing),
                toasts: ToastQueue::new(&timing),
                sched: Scheduler::new(),
                clipboard: InMemoryClipboard::new(),
            }
        }

        fn copy(&mut self, text: &str) -> CoreResult<()> {
            self.affordance
                .copy(text, &mut self.clipboard, &mut self.toasts, &mut self.sched)
        }

        /// Run timers up to `until`; returns how many reverts took effect.
        fn run(&mut self, until: Duration) -> usize {
            let mut reverts = 0;
            for ticket in drain(&mut self.sched, until) {
                match ticket.key {
                    TimerKey::AffordanceRevert(_) => {
                        if self.affordance.on_revert(ticket) {
                            reverts += 1;
                        }
                    }
                    TimerKey::ToastDismiss => {
                        self.toasts.on_dismiss_timer(ticket);
                    }
                    TimerKey::NavigationSettle => {}
                }
            }
            reverts
        }
    }

    #[test]
    fn copy_sets_flag_and_reverts() {
        let mut fx = Fixture::new();
        fx.copy("Hi {{name}}").unwrap();

        assert!(fx.affordance.is_copied());
        assert_eq!(fx.clipboard.contents(), Some("Hi {{name}}"));
        assert_eq!(
            fx.toasts.current().map(|t| t.message.as_str()),
            Some("Template copied to clipboard")
        );

        assert_eq!(fx.run(ms(1_499)), 0);
        assert!(fx.affordance.is_copied());
        assert_eq!(fx.run(ms(1_500)), 1);
        assert!(!fx.affordance.is_copied());
    }

    #[test]
    fn second_copy_restarts_the_revert_window() {
        let mut fx = Fixture::new();
        fx.copy("first").unwrap();
        fx.run(ms(1_000));
        fx.copy("second").unwrap();

        // First copy's deadline
        assert_eq!(fx.run(ms(1_500)), 0);
        assert!(fx.affordance.is_copied());

        // Exactly one revert, at the second copy's deadline
        assert_eq!(fx.run(ms(2_500)), 1);
        assert!(!fx.affordance.is_copied());
        assert_eq!(fx.run(ms(10_000)), 0);
    }

    #[test]
    fn failed_write_changes_nothing() {
        let mut fx = Fixture::new();
        fx.clipboard.set_failure(Some("permission denied".to_string()));

        let err = fx.copy("Hi {{name}}...").unwrap_err();
        assert!(matches!(err, CoreError::ClipboardUnavailable(_)));
        assert!(!fx.affordance.is_copied());
        assert!(fx.toasts.current().is_none());
        assert_eq!(fx.sched.pending_count(), 0);
    }

    #[test]
    fn teardown_cancels_revert() {
        let mut fx = Fixture::new();
        fx.copy("text").unwrap();
        fx.affordance.teardown(&mut fx.sched);

        assert!(!fx.sched.is_pending(&TimerKey::AffordanceRevert(AffordanceId::template(0))));
        assert_eq!(fx.run(ms(5_000)), 0);
    }
}

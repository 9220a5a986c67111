//! Toast queue
//!
//! A single slot, not a FIFO: a new toast replaces whatever is showing and
//! restarts the dismissal timer. Nothing is ever queued behind it.

use std::time::Duration;

use crate::config::TimingConfig;
use crate::scheduler::{Scheduler, TimerKey, TimerTicket};
use crate::types::{Toast, ToastLevel};

#[derive(Debug)]
pub struct ToastQueue {
    current: Option<Toast>,
    dismissal: Option<TimerTicket>,
    duration: Duration,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            current: None,
            dismissal: None,
            duration: timing.toast_duration(),
            next_id: 0,
        }
    }

    /// Show a success toast; returns its id.
    pub fn show(&mut self, message: impl Into<String>, scheduler: &mut Scheduler) -> u64 {
        self.show_with_level(message, ToastLevel::Success, scheduler)
    }

    pub fn show_with_level(
        &mut self,
        message: impl Into<String>,
        level: ToastLevel,
        scheduler: &mut Scheduler,
    ) -> u64 {
        self.next_id += 1;
        let toast = Toast {
            id: self.next_id,
            message: message.into(),
            level,
        };
        log::debug!("Toast #{} ({:?}): {}", toast.id, toast.level, toast.message);

        self.current = Some(toast);
        // Supersedes the previous dismissal timer, if any
        self.dismissal = Some(scheduler.schedule(TimerKey::ToastDismiss, self.duration));
        self.next_id
    }

    /// Close the toast now. Returns the toast that was showing.
    pub fn dismiss(&mut self, scheduler: &mut Scheduler) -> Option<Toast> {
        if self.dismissal.take().is_some() {
            scheduler.cancel(&TimerKey::ToastDismiss);
        }
        self.current.take()
    }

    /// Dismissal timer fired. Returns `true` if it cleared the current toast.
    pub fn on_dismiss_timer(&mut self, ticket: TimerTicket) -> bool {
        if self.dismissal != Some(ticket) {
            log::debug!("Stale toast timer gen {} ignored", ticket.generation);
            return false;
        }
        self.dismissal = None;
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{drain, ms};

    fn queue() -> (ToastQueue, Scheduler) {
        (ToastQueue::new(&TimingConfig::default()), Scheduler::new())
    }

    fn run(queue: &mut ToastQueue, sched: &mut Scheduler, until: Duration) {
        for ticket in drain(sched, until) {
            queue.on_dismiss_timer(ticket);
        }
    }

    #[test]
    fn toast_dismisses_itself() {
        let (mut toasts, mut sched) = queue();
        toasts.show("Listing generated successfully", &mut sched);

        run(&mut toasts, &mut sched, ms(1_999));
        assert_eq!(
            toasts.current().map(|t| t.message.as_str()),
            Some("Listing generated successfully")
        );

        run(&mut toasts, &mut sched, ms(2_000));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn newer_toast_survives_older_deadline() {
        let (mut toasts, mut sched) = queue();
        toasts.show("first", &mut sched);
        run(&mut toasts, &mut sched, ms(1_500));
        toasts.show("second", &mut sched);

        run(&mut toasts, &mut sched, ms(2_000));
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("second"));

        run(&mut toasts, &mut sched, ms(3_500));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn manual_dismiss_cancels_timer() {
        let (mut toasts, mut sched) = queue();
        toasts.show("bye", &mut sched);

        let dismissed = toasts.dismiss(&mut sched);
        assert_eq!(dismissed.map(|t| t.message), Some("bye".to_string()));
        assert!(!sched.is_pending(&TimerKey::ToastDismiss));

        // A toast shown later keeps its full duration
        run(&mut toasts, &mut sched, ms(1_000));
        toasts.show("again", &mut sched);
        run(&mut toasts, &mut sched, ms(2_999));
        assert!(toasts.current().is_some());
    }

    #[test]
    fn ids_distinguish_identical_messages() {
        let (mut toasts, mut sched) = queue();
        let a = toasts.show("Template copied to clipboard", &mut sched);
        let b = toasts.show("Template copied to clipboard", &mut sched);
        assert_ne!(a, b);
        assert_eq!(toasts.current().map(|t| t.id), Some(b));
    }

    #[test]
    fn error_level_is_kept() {
        let (mut toasts, mut sched) = queue();
        toasts.show_with_level("Clipboard unavailable", ToastLevel::Error, &mut sched);
        assert_eq!(toasts.current().map(|t| t.level), Some(ToastLevel::Error));
    }
}

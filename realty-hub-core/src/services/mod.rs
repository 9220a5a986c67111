//! Orchestration state machines
//!
//! Each machine owns its slice of transient UI state and the ticket of the one
//! timer it may have outstanding. Timers are created through the shared
//! [`Scheduler`](crate::scheduler::Scheduler); fired tickets are routed back by
//! [`UiStore`](crate::store::UiStore).

mod copy;
mod navigation;
mod toast;

pub use copy::CopyAffordance;
pub use navigation::{NavigationController, NavigationOutcome};
pub use toast::ToastQueue;

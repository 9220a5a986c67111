//! Realty Hub Core Library
//!
//! Provides the transient UI orchestration behind the Realty Hub dashboard:
//! - Page navigation with a simulated settle window (Navigation Controller)
//! - A single-slot, auto-dismissing notification (Toast Queue)
//! - Per-element "just copied" flags with timed revert (Copy Affordance)
//!
//! All of it is driven by one [`Scheduler`] whose timers are cancellable and
//! generation-stamped, and composed by [`UiStore`], the explicitly owned state
//! container a front-end reads from and subscribes to.
//!
//! The library does no I/O of its own; the clipboard is abstracted through the
//! [`Clipboard`] trait so front-ends can plug in a platform implementation.

pub mod config;
pub mod error;
pub mod scheduler;
pub mod services;
pub mod store;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{ReentryPolicy, TimingConfig};
pub use error::{CoreError, CoreResult};
pub use scheduler::{Scheduler, TimerKey, TimerTicket};
pub use services::{CopyAffordance, NavigationController, ToastQueue};
pub use store::{StoreEvent, SubscriptionId, UiStore};
pub use traits::{Clipboard, InMemoryClipboard};
pub use types::{AffordanceId, AffordanceSlot, NavigationState, PageId, Toast, ToastLevel};

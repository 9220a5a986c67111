//! Page state module
//!
//! Per-page UI data (selection, form input). Transient orchestration state
//! (loading, toast, copied flags) is not here; it lives in the `UiStore`.

mod followups;
mod leads;
mod listings;

pub use followups::FollowupsState;
pub use leads::LeadsState;
pub use listings::{ListingField, ListingsState};

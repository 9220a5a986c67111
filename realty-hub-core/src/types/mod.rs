//! Core type definitions

mod affordance;
mod catalog;
mod listing;
mod navigation;
mod page;
mod toast;

pub use affordance::{AffordanceId, AffordanceSlot};
pub use catalog::{dashboard_metrics, leads, templates, DashboardMetric, Lead, LeadStatus, MessageTemplate};
pub use listing::{generate_listing, ListingDraft, GENERATED_LISTING};
pub use navigation::NavigationState;
pub use page::PageId;
pub use toast::{Toast, ToastLevel};

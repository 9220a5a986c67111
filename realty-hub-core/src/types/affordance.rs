//! Copy affordance identity

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PageId;

/// Which copyable block on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum AffordanceSlot {
    /// A message template card, by position in the catalog
    Template(usize),
    /// The generated listing description
    GeneratedListing,
}

/// Identifies one copyable element instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AffordanceId {
    pub page: PageId,
    pub slot: AffordanceSlot,
}

impl AffordanceId {
    pub const fn new(page: PageId, slot: AffordanceSlot) -> Self {
        Self { page, slot }
    }

    pub const fn template(index: usize) -> Self {
        Self::new(PageId::Followups, AffordanceSlot::Template(index))
    }

    pub const fn generated_listing() -> Self {
        Self::new(PageId::Listings, AffordanceSlot::GeneratedListing)
    }

    /// Toast shown after a successful copy
    pub fn confirmation(&self) -> &'static str {
        match self.slot {
            AffordanceSlot::Template(_) => "Template copied to clipboard",
            AffordanceSlot::GeneratedListing => "Listing description copied",
        }
    }
}

impl fmt::Display for AffordanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            AffordanceSlot::Template(i) => write!(f, "{}/template#{i}", self.page),
            AffordanceSlot::GeneratedListing => write!(f, "{}/generated-listing", self.page),
        }
    }
}

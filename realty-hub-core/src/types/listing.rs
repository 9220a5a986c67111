//! Listing generator stub

use serde::{Deserialize, Serialize};

/// Text returned by the generator for every draft
pub const GENERATED_LISTING: &str = "Experience elevated living in this stunning 3-bedroom residence located in the heart of Downtown Dubai. Designed for discerning buyers, this home features premium finishes, panoramic city views, and world-class amenities.";

/// Property details entered on the listings page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub property_type: String,
    pub location: String,
    pub bedrooms: Option<u8>,
    pub amenities: String,
}

/// Produce a listing description.
///
/// There is no synthesis behind this; the draft is only logged.
pub fn generate_listing(draft: &ListingDraft) -> String {
    log::debug!(
        "Generating listing for {:?} in {:?} ({:?} bedrooms)",
        draft.property_type,
        draft.location,
        draft.bedrooms
    );
    GENERATED_LISTING.to_string()
}

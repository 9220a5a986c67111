//! Navigation snapshot

use serde::Serialize;

use super::PageId;

/// What the renderer needs to pick a page view or its placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub current_page: PageId,
    /// True only during the settle window right after a navigation
    pub is_loading: bool,
}

//! Sidebar messages

use realty_hub_core::PageId;

#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// Highlight the previous row
    SelectPrevious,
    /// Highlight the next row
    SelectNext,
    /// Highlight the first row
    SelectFirst,
    /// Highlight the last row
    SelectLast,
    /// Open the highlighted page
    Confirm,
    /// Open a page directly (number keys)
    Jump(PageId),
}

//! Sidebar state
//!
//! Only tracks the highlighted row. Which page is *shown* lives in the
//! `UiStore`; the highlight follows it after every navigation.

use realty_hub_core::PageId;

/// Sidebar entry
#[derive(Debug, Clone)]
pub struct NavItem {
    pub page: PageId,
    pub icon: &'static str,
}

pub struct SidebarState {
    pub items: Vec<NavItem>,
    /// Highlighted row
    pub selected: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        let items = PageId::ALL
            .into_iter()
            .map(|page| NavItem {
                page,
                icon: icon_for(page),
            })
            .collect();

        Self { items, selected: 0 }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// Move the highlight onto `page`
    pub fn highlight(&mut self, page: PageId) {
        if let Some(index) = self.items.iter().position(|item| item.page == page) {
            self.selected = index;
        }
    }

    /// Page under the highlight
    pub fn current_page(&self) -> Option<PageId> {
        self.items.get(self.selected).map(|item| item.page)
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

fn icon_for(page: PageId) -> &'static str {
    match page {
        PageId::Dashboard => "▦",
        PageId::Leads => "@",
        PageId::Listings => "≡",
        PageId::Followups => "◷",
        PageId::Scheduler => "▤",
    }
}

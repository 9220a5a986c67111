//! Follow-ups page state

use realty_hub_core::types::templates;
use realty_hub_core::AffordanceId;

#[derive(Debug, Default)]
pub struct FollowupsState {
    /// Highlighted template card
    pub selected: usize,
}

impl FollowupsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < templates().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = templates().len().saturating_sub(1);
    }

    /// Copy target of the highlighted card
    pub fn selected_affordance(&self) -> AffordanceId {
        AffordanceId::template(self.selected)
    }
}

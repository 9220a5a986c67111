//! Leads page state

use chrono::{Local, NaiveDate};
use realty_hub_core::types::{leads, Lead};

#[derive(Debug)]
pub struct LeadsState {
    pub leads: Vec<Lead>,
    /// Date the relative "last contacted" labels are computed against
    pub today: NaiveDate,
    pub selected: usize,
}

impl LeadsState {
    pub fn new() -> Self {
        Self::anchored_on(Local::now().date_naive())
    }

    pub fn anchored_on(today: NaiveDate) -> Self {
        Self {
            leads: leads(today),
            today,
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.leads.is_empty() && self.selected < self.leads.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if !self.leads.is_empty() {
            self.selected = self.leads.len() - 1;
        }
    }
}

impl Default for LeadsState {
    fn default() -> Self {
        Self::new()
    }
}

//! Page bodies

mod dashboard;
mod followups;
mod leads;
mod listings;
mod scheduler;
pub mod skeleton;

use ratatui::{layout::Rect, Frame};
use realty_hub_core::PageId;

use crate::model::App;

/// Body of a settled page
pub fn render(app: &App, page: PageId, frame: &mut Frame, area: Rect) {
    match page {
        PageId::Dashboard => dashboard::render(frame, area),
        PageId::Leads => leads::render(app, frame, area),
        PageId::Listings => listings::render(app, frame, area),
        PageId::Followups => followups::render(app, frame, area),
        PageId::Scheduler => scheduler::render(frame, area),
    }
}

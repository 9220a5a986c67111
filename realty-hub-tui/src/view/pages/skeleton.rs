//! Loading placeholders
//!
//! Shown for the settle window after every navigation. Each page gets a
//! placeholder shaped like its real content.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};
use realty_hub_core::PageId;

use crate::view::theme::colors;

pub fn render(page: PageId, frame: &mut Frame, area: Rect) {
    match page {
        PageId::Dashboard => dashboard(frame, area),
        PageId::Leads => rows(frame, area, 5),
        PageId::Listings => rows(frame, area, 4),
        PageId::Followups => cards(frame, area, 3),
        PageId::Scheduler => bar(frame, area),
    }
}

/// Solid grey block
fn bar(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(colors().skeleton)),
        area,
    );
}

fn outlined(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().skeleton));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2) / 2, inner.height.min(1));
    bar(frame, line);
}

fn dashboard(frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    outlined(frame, layout[0]);
    cards(frame, layout[1], 4);
}

fn cards(frame: &mut Frame, area: Rect, count: u32) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for tile in tiles.iter() {
        outlined(frame, *tile);
    }
}

fn rows(frame: &mut Frame, area: Rect, count: u16) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            (0..count)
                .map(|_| Constraint::Length(3))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for row in layout.iter().take(count as usize) {
        outlined(frame, *row);
    }
}

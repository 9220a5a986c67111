//! Leads table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};
use realty_hub_core::types::LeadStatus;

use crate::model::App;
use crate::util::truncate;
use crate::view::theme::{colors, Styles};

const COLUMNS: [&str; 5] = ["Name", "Phone", "Property Interest", "Status", "Last Contacted"];
const WIDTHS: [u16; 5] = [18, 18, 26, 13, 15];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let header = Row::new(
        COLUMNS
            .iter()
            .map(|title| Cell::from(Span::styled(*title, Styles::accent().add_modifier(Modifier::BOLD)))),
    )
    .height(1)
    .bottom_margin(1);

    let rows = app.leads.leads.iter().map(|lead| {
        Row::new(vec![
            Cell::from(Span::styled(
                truncate(lead.name, WIDTHS[0] as usize),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            )),
            Cell::from(Span::styled(lead.phone, Styles::muted())),
            Cell::from(truncate(lead.interest, WIDTHS[2] as usize)),
            Cell::from(Span::styled(
                format!("● {}", lead.status.as_str()),
                Style::default().fg(status_color(lead.status)),
            )),
            Cell::from(Span::styled(
                lead.last_contact_label(app.leads.today),
                Styles::muted(),
            )),
        ])
    });

    let table = Table::new(rows, WIDTHS.map(Constraint::Length))
        .header(header)
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border(false)))
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if app.focus.is_content() {
        state.select(Some(app.leads.selected));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn status_color(status: LeadStatus) -> ratatui::style::Color {
    let c = colors();
    match status {
        LeadStatus::New => c.accent,
        LeadStatus::Negotiation => c.warning,
        LeadStatus::Closed => c.success,
    }
}

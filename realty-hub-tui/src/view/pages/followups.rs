//! Follow-up template cards with per-card copy state

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use realty_hub_core::types::templates;
use realty_hub_core::AffordanceId;

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let templates = templates();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, templates.len() as u32); templates.len()])
        .split(area);

    for (index, (template, card)) in templates.iter().zip(cards.iter()).enumerate() {
        let selected = app.focus.is_content() && index == app.followups.selected;
        let copied = app.store.is_copied(AffordanceId::template(index));
        render_card(frame, *card, template.title, template.text, selected, copied);
    }
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, text: &str, selected: bool, copied: bool) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(selected));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(text).style(Styles::muted()).wrap(Wrap { trim: true }),
        rows[0],
    );

    let button = if copied {
        Span::styled(
            "✓ Copied",
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ Copy ]", Styles::accent())
    };
    frame.render_widget(Paragraph::new(Line::from(button)), rows[1]);
}

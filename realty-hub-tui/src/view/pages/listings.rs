//! Listing generator: form plus generated description

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use realty_hub_core::AffordanceId;

use crate::model::{App, ListingField};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let fields = ListingField::all();

    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (field, row) in fields.iter().zip(rows.iter()) {
        render_field(app, *field, frame, *row);
    }

    let c = colors();
    let generate = Line::from(vec![
        Span::styled(
            " [ Generate Listing ] ",
            Style::default().fg(c.bg).bg(c.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Enter", Styles::hint_key()),
    ]);
    frame.render_widget(Paragraph::new(generate), rows[fields.len()]);

    if let Some(text) = app.store.generated_listing() {
        render_generated(app, text, frame, rows[fields.len() + 1]);
    }
}

fn render_field(app: &App, field: ListingField, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_content() && app.listings.focused == field;
    let value = app.listings.value(field);

    let text = if value.is_empty() {
        Span::styled(field.placeholder(), Styles::muted())
    } else if focused {
        Span::raw(format!("{value}▏"))
    } else {
        Span::raw(value.to_string())
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_style(if focused { Styles::accent() } else { Styles::muted() })
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}

fn render_generated(app: &App, text: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let copied = app.store.is_copied(AffordanceId::generated_listing());

    let label = if copied {
        Span::styled(" ✓ Copied ", Style::default().fg(c.success))
    } else {
        Span::styled(" Copy (Alt+c) ", Styles::accent())
    };

    let block = Block::default()
        .title(Span::styled(
            " GENERATED DESCRIPTION ",
            Styles::accent().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(label).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.accent));

    let body = Paragraph::new(format!("\"{text}\""))
        .style(Style::default().fg(c.fg).add_modifier(Modifier::ITALIC))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(body, area);
}

//! Dashboard: welcome card and metric tiles

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use realty_hub_core::types::dashboard_metrics;

use crate::view::theme::{colors, Styles};

pub fn render(frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let welcome = vec![
        Line::from(Span::styled(
            "Welcome back to Dubai Luxury Real Estate Hub",
            Styles::title(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your central command for managing high-end property dealings in Dubai. \
             Use the sidebar to track leads, generate exclusive listings, and automate \
             your client follow-ups.",
            Styles::muted(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(welcome)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(Styles::border(false))),
        layout[0],
    );

    render_metrics(frame, layout[1]);
}

fn render_metrics(frame: &mut Frame, area: Rect) {
    let c = colors();
    let metrics = dashboard_metrics();
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()])
        .split(area);

    for (metric, tile) in metrics.iter().zip(tiles.iter()) {
        let content = vec![
            Line::from(Span::styled("∿", Style::default().fg(c.accent))),
            Line::from(Span::styled(metric.label.as_str(), Styles::muted())),
            Line::from(Span::styled(
                metric.value.as_str(),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("▲ {}%", metric.change_percent),
                    Style::default().fg(c.success),
                ),
                Span::styled(" vs last month", Styles::muted()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(content)
                .block(Block::default().borders(Borders::ALL).border_style(Styles::border(false))),
            *tile,
        );
    }
}

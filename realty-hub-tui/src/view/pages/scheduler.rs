//! Scheduler placeholder

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::view::theme::{colors, Styles};

pub fn render(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled("▤", Style::default().fg(colors().accent))),
        Line::from(""),
        Line::from(Span::styled("Scheduler Coming Soon", Styles::title())),
        Line::from(Span::styled(
            "Integration with calendar API is in progress.",
            Styles::muted(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

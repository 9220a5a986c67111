//! Toast overlay, top-right of the content area

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use realty_hub_core::ToastLevel;
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::colors;

const MIN_WIDTH: u16 = 32;
const MAX_WIDTH: u16 = 48;
const HEIGHT: u16 = 4;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(toast) = app.store.toast() else {
        return;
    };
    let c = colors();

    let color = match toast.level {
        ToastLevel::Success => c.accent,
        ToastLevel::Error => c.error,
    };

    let wanted = u16::try_from(toast.message.width() + 6).unwrap_or(MAX_WIDTH);
    let rect = top_right(wanted.clamp(MIN_WIDTH, MAX_WIDTH), HEIGHT, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(c.bg));

    let content = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", toast.level.icon()), Style::default().fg(color)),
            Span::styled(
                toast.level.heading(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", toast.message),
            Style::default().fg(c.fg),
        )),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}

fn top_right(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width + 1);
    let y = area.y + 1.min(area.height.saturating_sub(height));
    Rect::new(x, y, width, height)
}

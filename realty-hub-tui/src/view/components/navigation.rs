//! Sidebar

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let shown = app.current_page();

    let block = Block::default()
        .title(" Menu ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    let items: Vec<ListItem> = app
        .sidebar
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == app.sidebar.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let content = format!("{prefix}{} {} {}", i + 1, item.icon, item.page.label());

            // Gold marks the page on screen, which can differ from the highlight
            let style = if is_selected {
                Styles::selected()
            } else if item.page == shown {
                Style::default().fg(c.accent)
            } else {
                Style::default().fg(c.fg)
            };
            let style = if item.page == shown {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.sidebar.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

const SIDEBAR_WIDTH: u16 = 24;

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Title bar + body + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // Overlay last so it sits on top
    components::toast::render(app, frame, columns[1]);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Line::from(vec![
        Span::styled(
            " ◆ Realty Hub",
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Dubai Luxury Real Estate", Styles::muted()),
    ]);
    frame.render_widget(
        Paragraph::new(title).style(Style::default().bg(c.bg)),
        area,
    );
}

/// Header (title + subtitle) over the page body or its skeleton
fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    let nav = app.store.navigation();
    let page = nav.current_page;

    let block = Block::default()
        .title(format!(" {} ", page.label()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let header = vec![
        Line::from(Span::styled(format!(" {}", page.title()), Styles::title())),
        Line::from(Span::styled(format!(" {}", page.subtitle()), Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(header), rows[0]);

    if nav.is_loading {
        pages::skeleton::render(page, frame, rows[1]);
    } else {
        pages::render(app, page, frame, rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{backend::TestBackend, Terminal};
    use realty_hub_core::{AffordanceId, InMemoryClipboard, PageId};

    use super::*;
    use crate::backend::AppConfig;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_on_followups() -> App {
        let config = AppConfig {
            start_page: "followups".to_string(),
            ..AppConfig::default()
        };
        App::new(&config, Box::new(InMemoryClipboard::new()))
    }

    #[test]
    fn skeleton_while_loading_then_cards() {
        let mut app = app_on_followups();
        assert_eq!(app.current_page(), PageId::Followups);

        let loading = draw(&app);
        assert!(loading.contains("Automated Follow-ups"));
        assert!(!loading.contains("New Inquiry"));
        assert!(!loading.contains("[ Copy ]"));

        app.store.advance(Duration::from_millis(400));
        let settled = draw(&app);
        assert!(settled.contains("New Inquiry"));
        assert!(settled.contains("Negotiation"));
        assert!(settled.contains("[ Copy ]"));
        assert!(!settled.contains("✓ Copied"));
    }

    #[test]
    fn copied_label_follows_revert_timer() {
        let mut app = app_on_followups();
        app.store.advance(Duration::from_millis(400));

        app.copy(AffordanceId::template(0));
        let copied = draw(&app);
        assert!(copied.contains("✓ Copied"));
        assert!(copied.contains("Template copied to clipboard"));

        app.store.advance(Duration::from_millis(1500));
        assert!(!draw(&app).contains("✓ Copied"));
    }

    #[test]
    fn navigating_away_shows_skeleton_again() {
        let mut app = app_on_followups();
        app.store.advance(Duration::from_millis(400));
        app.navigate_to(PageId::Leads);

        let frame = draw(&app);
        assert!(frame.contains("Manage your high-value prospects"));
        assert!(!frame.contains("John Smith"));
        assert!(!frame.contains("New Inquiry"));

        app.store.advance(Duration::from_millis(400));
        assert!(draw(&app).contains("John Smith"));
    }
}

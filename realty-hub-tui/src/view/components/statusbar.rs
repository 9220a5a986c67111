//! Status bar

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use realty_hub_core::PageId;

use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::muted()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Styles::muted()));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.error)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        area,
    );
}

fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Panel")];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Open"));
            hints.push(("1-5", "Jump"));
        }
        FocusPanel::Content => match app.current_page() {
            PageId::Leads => {
                hints.push(("↑↓", "Select"));
            }
            PageId::Listings => {
                hints.push(("↑↓", "Field"));
                hints.push(("Enter", "Generate"));
                hints.push(("Alt+c", "Copy"));
            }
            PageId::Followups => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Copy"));
            }
            PageId::Dashboard | PageId::Scheduler => {}
        },
    }

    if app.store.toast().is_some() {
        hints.push(("Esc", "Dismiss"));
    }
    hints.push(("Alt+q", "Quit"));

    hints
}

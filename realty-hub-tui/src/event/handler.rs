//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use realty_hub_core::PageId;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::App;

/// Wait up to `timeout` for a terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize just redraws on the next loop turn
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Windows terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::DISMISS.matches(&key) {
        return if app.store.toast().is_some() {
            AppMessage::DismissToast
        } else {
            AppMessage::ClearStatus
        };
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // 1-5 jump straight to a page
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(PageId::from_index)
            .map_or(AppMessage::Noop, |page| {
                AppMessage::Navigation(NavigationMessage::Jump(page))
            }),

        _ => AppMessage::Noop,
    }
}

fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::COPY.matches(&key) {
        return AppMessage::Content(ContentMessage::Copy);
    }

    match app.current_page() {
        PageId::Listings => handle_form_keys(key),
        _ => handle_list_keys(key),
    }
}

fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter | KeyCode::Char('c') => AppMessage::Content(ContentMessage::Copy),
        _ => AppMessage::Noop,
    }
}

/// Listing generator form: letters are text, so only arrows move
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::GENERATE.matches(&key) {
        return AppMessage::Content(ContentMessage::Generate);
    }

    match key.code {
        KeyCode::Up | KeyCode::BackTab => AppMessage::Content(ContentMessage::PrevField),
        KeyCode::Down => AppMessage::Content(ContentMessage::NextField),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Generate),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use realty_hub_core::InMemoryClipboard;

    use super::*;
    use crate::backend::AppConfig;
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
    }

    fn app_on(page: PageId, focus: FocusPanel) -> App {
        let mut app = App::new(&AppConfig::default(), Box::new(InMemoryClipboard::new()));
        app.navigate_to(page);
        app.store.advance(Duration::from_millis(400));
        app.focus = focus;
        app
    }

    #[test]
    fn digits_jump_from_the_sidebar() {
        let app = app_on(PageId::Dashboard, FocusPanel::Navigation);
        assert!(matches!(
            handle_event(press(KeyCode::Char('4')), &app),
            AppMessage::Navigation(NavigationMessage::Jump(PageId::Followups))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('0')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('6')), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn form_takes_letters_as_text() {
        let app = app_on(PageId::Listings, FocusPanel::Content);
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Content(ContentMessage::Input('j'))
        ));
        assert!(matches!(
            handle_event(alt('g'), &app),
            AppMessage::Content(ContentMessage::Generate)
        ));
    }

    #[test]
    fn copy_shortcut_works_on_any_page() {
        let app = app_on(PageId::Followups, FocusPanel::Content);
        assert!(matches!(
            handle_event(alt('c'), &app),
            AppMessage::Content(ContentMessage::Copy)
        ));
    }

    #[test]
    fn esc_dismisses_an_open_toast() {
        let mut app = app_on(PageId::Dashboard, FocusPanel::Navigation);
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::ClearStatus
        ));
        app.store.show_toast("saved");
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::DismissToast
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app_on(PageId::Dashboard, FocusPanel::Navigation);
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}

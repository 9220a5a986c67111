//! Sidebar update logic

use crate::message::NavigationMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.sidebar.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.sidebar.select_next();
        }

        NavigationMessage::SelectFirst => {
            app.sidebar.select_first();
        }

        NavigationMessage::SelectLast => {
            app.sidebar.select_last();
        }

        NavigationMessage::Confirm => {
            if let Some(page) = app.sidebar.current_page() {
                app.navigate_to(page);
            }
        }

        NavigationMessage::Jump(page) => {
            app.navigate_to(page);
        }
    }
}

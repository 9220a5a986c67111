//! Content panel update logic

use realty_hub_core::{AffordanceId, PageId};

use crate::message::ContentMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== List navigation ==========
        ContentMessage::SelectPrevious => handle_select_previous(app),
        ContentMessage::SelectNext => handle_select_next(app),
        ContentMessage::SelectFirst => handle_select_first(app),
        ContentMessage::SelectLast => handle_select_last(app),

        // ========== Copy ==========
        ContentMessage::Copy => handle_copy(app),

        // ========== Listing form ==========
        ContentMessage::Generate => handle_generate(app),
        ContentMessage::NextField => {
            if app.current_page() == PageId::Listings {
                app.listings.next_field();
            }
        }
        ContentMessage::PrevField => {
            if app.current_page() == PageId::Listings {
                app.listings.prev_field();
            }
        }
        ContentMessage::Input(c) => {
            if app.current_page() == PageId::Listings {
                app.listings.input(c);
            }
        }
        ContentMessage::Backspace => {
            if app.current_page() == PageId::Listings {
                app.listings.backspace();
            }
        }
    }
}

fn handle_select_previous(app: &mut App) {
    match app.current_page() {
        PageId::Leads => app.leads.select_previous(),
        PageId::Followups => app.followups.select_previous(),
        _ => {}
    }
}

fn handle_select_next(app: &mut App) {
    match app.current_page() {
        PageId::Leads => app.leads.select_next(),
        PageId::Followups => app.followups.select_next(),
        _ => {}
    }
}

fn handle_select_first(app: &mut App) {
    match app.current_page() {
        PageId::Leads => app.leads.select_first(),
        PageId::Followups => app.followups.select_first(),
        _ => {}
    }
}

fn handle_select_last(app: &mut App) {
    match app.current_page() {
        PageId::Leads => app.leads.select_last(),
        PageId::Followups => app.followups.select_last(),
        _ => {}
    }
}

fn handle_copy(app: &mut App) {
    let target = match app.current_page() {
        PageId::Followups => app.followups.selected_affordance(),
        PageId::Listings => AffordanceId::generated_listing(),
        _ => return,
    };
    app.copy(target);
}

fn handle_generate(app: &mut App) {
    let nav = app.store.navigation();
    if nav.current_page != PageId::Listings || nav.is_loading {
        return;
    }
    let draft = app.listings.draft();
    app.store.generate_listing(&draft);
    app.clear_status();
}

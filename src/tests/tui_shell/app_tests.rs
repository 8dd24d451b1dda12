use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::handle_key;
use super::*;
use crate::admin::NoticeKind;
use crate::model::UserId;
use crate::test_support::{MemoryStore, numbered_users, user};

fn app_with(users: Vec<User>) -> (Rc<MemoryStore>, App) {
    let store = Rc::new(MemoryStore::with_users(users));
    let mut app = App::new(
        Box::new(Rc::clone(&store)),
        CountryCatalog::default(),
        "http://127.0.0.1:5000",
    );
    assert!(app.take_pending_load());
    app.load();
    (store, app)
}

fn ann() -> User {
    user(1, "Ann", "A1", &["USA"])
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn add_flow_creates_user_and_reports_success() {
    let (store, mut app) = app_with(vec![ann()]);

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.active_modal(), Some(ActiveModal::Form));
    type_text(&mut app, "Bob");
    press(&mut app, KeyCode::Enter);

    let notice = app.notice.clone().expect("notice after create");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "User added successfully!");
    assert_eq!(store.calls(), vec!["list", "create"]);
    assert_eq!(app.table.collection().len(), 2);
    assert_eq!(app.table.collection()[1].id, UserId::Num(2));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.active_modal(), None);
}

#[test]
fn blank_name_keeps_form_open_and_sends_nothing() {
    let (store, mut app) = app_with(vec![ann()]);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.active_modal(), Some(ActiveModal::Form));
    assert_eq!(
        app.form_state.error.as_deref(),
        Some(crate::admin::NAME_REQUIRED)
    );
    assert_eq!(store.calls(), vec!["list"]);
}

#[test]
fn space_toggles_the_country_under_the_cursor() {
    let (store, mut app) = app_with(Vec::new());

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Cy");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char(' '));
    assert!(app.form.draft().countries.is_empty());

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    let created = store.users();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "Cy");
    assert_eq!(created[0].countries, vec!["UK".to_string()]);
}

#[test]
fn delete_needs_confirmation() {
    let (store, mut app) = app_with(vec![ann(), user(2, "Bob", "", &[])]);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.active_modal(), Some(ActiveModal::ConfirmDelete));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.active_modal(), None);
    assert_eq!(store.calls(), vec!["list"]);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(store.calls(), vec!["list", "delete"]);
    assert_eq!(app.table.collection().len(), 1);
    assert_eq!(app.table.collection()[0].name, "Bob");
    assert_eq!(
        app.notice.as_ref().map(|n| n.message.as_str()),
        Some("User deleted successfully!")
    );
}

#[test]
fn failed_edit_from_details_keeps_the_local_copy_on_screen() {
    let (store, mut app) = app_with(vec![ann()]);
    store.fail_with("server down");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.active_modal(), Some(ActiveModal::Details));
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.active_modal(), Some(ActiveModal::ViewEditor));
    assert_eq!(app.form_state.name.as_str(), "Ann");

    type_text(&mut app, "ie");
    press(&mut app, KeyCode::Enter);

    let notice = app.notice.clone().expect("error notice");
    assert!(notice.is_error());
    assert!(
        notice
            .message
            .ends_with("Changes were made locally but not saved to server."),
        "{}",
        notice.message
    );

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.active_modal(), Some(ActiveModal::Details));
    assert_eq!(app.view.shown().map(|u| u.name.as_str()), Some("Annie"));
    assert_eq!(app.table.collection()[0].name, "Annie");
    assert_eq!(store.users()[0].name, "Ann");
}

#[test]
fn ctrl_l_clears_only_in_edit_mode() {
    let (_store, mut app) = app_with(vec![ann()]);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "X");
    ctrl(&mut app, 'l');
    assert_eq!(app.form.draft().name, "X");
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.form.draft().name, "Ann");
    ctrl(&mut app, 'l');
    assert_eq!(app.form.draft().name, "");
    assert!(app.form.draft().countries.is_empty());
    assert_eq!(app.form_state.name.as_str(), "");
}

#[test]
fn filter_bar_applies_on_enter_and_r_resets() {
    let (_store, mut app) = app_with(numbered_users(12));

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "user-1");
    assert_eq!(app.table.filtered().len(), 12);
    press(&mut app, KeyCode::Enter);
    assert!(!app.filter_editing);
    assert_eq!(app.table.filtered().len(), 3);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.table.filtered(), app.table.collection());
    assert!(app.filter_inputs.iter().all(|i| i.as_str().is_empty()));
}

#[test]
fn arrows_page_through_and_stop_at_the_ends() {
    let (_store, mut app) = app_with(numbered_users(12));

    press(&mut app, KeyCode::Left);
    assert_eq!(app.table.page(), 1);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.table.page(), 2);
    assert_eq!(app.selected, 0);
    assert_eq!(app.table.visible().len(), 2);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.table.page(), 2);

    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.selected_user().map(|u| u.name.as_str()), Some("user-12"));
}

#[test]
fn failed_load_offers_retry() {
    let store = Rc::new(MemoryStore::with_users(vec![ann()]));
    store.fail_with("connection refused");
    let mut app = App::new(
        Box::new(Rc::clone(&store)),
        CountryCatalog::default(),
        "http://127.0.0.1:5000",
    );
    assert!(app.take_pending_load());
    app.load();
    assert!(matches!(app.table.state(), LoadState::Failed(_)));
    assert!(app.notice.is_none());

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.active_modal(), None);

    store.recover();
    press(&mut app, KeyCode::Char('r'));
    assert!(app.take_pending_load());
    app.load();
    assert_eq!(*app.table.state(), LoadState::Ready);
    assert_eq!(app.table.visible().len(), 1);
}

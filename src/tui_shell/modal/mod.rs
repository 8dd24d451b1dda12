use crossterm::event::KeyEvent;

use self::keymap::{FieldEdit, ModalAction, map_modal_key};

mod draw;
mod keymap;

pub(super) use self::draw::draw_modal;

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    let Some(kind) = app.active_modal() else {
        return;
    };

    match map_modal_key(kind, app.form_state.focus, key) {
        ModalAction::None => {}

        ModalAction::DismissNotice => app.dismiss_notice(),

        ModalAction::ConfirmDelete => app.confirm_delete(),
        ModalAction::CancelDelete => app.delete.cancel(),

        ModalAction::CloseDetails => app.view.close(),
        ModalAction::EditFromDetails => app.edit_from_details(),

        ModalAction::CloseForm => app.close_form(),
        ModalAction::SubmitForm => app.submit_form(),
        ModalAction::ClearForm => app.clear_form(),
        ModalAction::NextField => app.form_state.focus = app.form_state.focus.next(),
        ModalAction::PrevField => app.form_state.focus = app.form_state.focus.prev(),
        ModalAction::MoveCountry(delta) => {
            let n = app.catalog.len();
            app.form_state.move_country(delta, n);
        }
        ModalAction::ToggleCountry => app.toggle_country_at_cursor(),
        ModalAction::Edit(edit) => {
            let Some(input) = app.form_state.focused_input_mut() else {
                return;
            };
            match edit {
                FieldEdit::Insert(c) => input.insert_char(c),
                FieldEdit::Backspace => input.backspace(),
                FieldEdit::Delete => input.delete(),
                FieldEdit::Left => input.move_left(),
                FieldEdit::Right => input.move_right(),
            }
            app.sync_form_text();
        }
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{ActiveModal, FormField};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FieldEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ModalAction {
    None,
    DismissNotice,
    ConfirmDelete,
    CancelDelete,
    CloseDetails,
    EditFromDetails,
    CloseForm,
    SubmitForm,
    ClearForm,
    NextField,
    PrevField,
    MoveCountry(isize),
    ToggleCountry,
    Edit(FieldEdit),
}

pub(super) fn map_modal_key(kind: ActiveModal, focus: FormField, key: KeyEvent) -> ModalAction {
    match kind {
        ActiveModal::Notice => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ModalAction::DismissNotice,
            _ => ModalAction::None,
        },

        ActiveModal::ConfirmDelete => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => ModalAction::ConfirmDelete,
            KeyCode::Char('n') | KeyCode::Esc => ModalAction::CancelDelete,
            _ => ModalAction::None,
        },

        ActiveModal::Details => match key.code {
            KeyCode::Char('e') => ModalAction::EditFromDetails,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::CloseDetails,
            _ => ModalAction::None,
        },

        ActiveModal::Form | ActiveModal::ViewEditor => map_form_key(focus, key),
    }
}

fn map_form_key(focus: FormField, key: KeyEvent) -> ModalAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return ModalAction::CloseForm,
        KeyCode::Enter => return ModalAction::SubmitForm,
        KeyCode::Tab => return ModalAction::NextField,
        KeyCode::BackTab => return ModalAction::PrevField,
        KeyCode::Char('l') if ctrl => return ModalAction::ClearForm,
        _ => {}
    }

    if focus == FormField::Countries {
        return match key.code {
            KeyCode::Up | KeyCode::Char('k') => ModalAction::MoveCountry(-1),
            KeyCode::Down | KeyCode::Char('j') => ModalAction::MoveCountry(1),
            KeyCode::Char(' ') => ModalAction::ToggleCountry,
            _ => ModalAction::None,
        };
    }

    match key.code {
        KeyCode::Backspace => ModalAction::Edit(FieldEdit::Backspace),
        KeyCode::Delete => ModalAction::Edit(FieldEdit::Delete),
        KeyCode::Left => ModalAction::Edit(FieldEdit::Left),
        KeyCode::Right => ModalAction::Edit(FieldEdit::Right),
        KeyCode::Char(c) if !ctrl => ModalAction::Edit(FieldEdit::Insert(c)),
        _ => ModalAction::None,
    }
}

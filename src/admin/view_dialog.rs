use crate::model::User;

use super::{AdminError, Submission, UserDialog, UserStore, UserTable};

/// Read-only details of one record with an embedded editor.
///
/// Saving from the editor goes through [`UserTable::update`], the same path
/// the table's own edit action uses.
#[derive(Clone, Debug, Default)]
pub struct ViewDialog {
    shown: Option<User>,
    editor: UserDialog,
}

impl ViewDialog {
    pub fn open(&mut self, user: &User) {
        self.shown = Some(user.clone());
        self.editor.close();
    }

    pub fn close(&mut self) {
        self.shown = None;
        self.editor.close();
    }

    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    pub fn shown(&self) -> Option<&User> {
        self.shown.as_ref()
    }

    /// Opens the editor seeded with the displayed record.
    pub fn begin_edit(&mut self) {
        if let Some(user) = &self.shown {
            self.editor.open_edit(user);
        }
    }

    pub fn editor(&self) -> &UserDialog {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut UserDialog {
        &mut self.editor
    }

    /// Submits the editor and pushes the result through the table.
    ///
    /// The displayed copy takes the new values before the store is called.
    /// On success the whole view closes; on a store failure it stays open on
    /// the local copy, which then differs from the server.
    pub fn save_edit<S: UserStore>(
        &mut self,
        table: &mut UserTable<S>,
    ) -> Result<Option<User>, AdminError> {
        let (id, draft) = match self.editor.submit()? {
            Submission::Update { id, draft } => (id, draft),
            // The embedded editor is only ever opened in edit mode.
            Submission::Create(_) => return Ok(None),
        };

        let local = match &self.shown {
            Some(shown) => draft.clone().overlay(shown),
            None => draft.clone().into_user(id.clone()),
        };
        self.shown = Some(local);
        let saved = table.update(&id, draft)?;
        self.close();
        Ok(Some(saved))
    }
}

#[cfg(test)]
#[path = "../tests/admin/view_dialog_tests.rs"]
mod tests;

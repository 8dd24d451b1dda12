use crate::model::{User, UserDraft, UserId};

use super::AdminError;

pub const NAME_REQUIRED: &str = "User Name is required";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    /// Editing the carried record; its id is preserved on submit.
    Edit(User),
}

/// What a successful submit asks the caller to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(UserDraft),
    Update { id: UserId, draft: UserDraft },
}

/// Create/edit form for one user. Owns the draft; never talks to the store.
#[derive(Clone, Debug)]
pub struct UserDialog {
    open: bool,
    mode: DialogMode,
    draft: UserDraft,
}

impl Default for UserDialog {
    fn default() -> Self {
        Self {
            open: false,
            mode: DialogMode::Add,
            draft: UserDraft::default(),
        }
    }
}

impl UserDialog {
    pub fn open_add(&mut self) {
        self.mode = DialogMode::Add;
        self.draft = UserDraft::default();
        self.open = true;
    }

    pub fn open_edit(&mut self, user: &User) {
        self.draft = UserDraft::from_user(user);
        self.mode = DialogMode::Edit(user.clone());
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, DialogMode::Edit(_))
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    pub fn set_code(&mut self, code: &str) {
        self.draft.code = code.to_string();
    }

    pub fn toggle_country(&mut self, country: &str) {
        self.draft.toggle_country(country);
    }

    /// Empties every field but stays in the current mode.
    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Validates the draft and, when it passes, closes the dialog and hands
    /// back the payload. A rejected draft leaves the dialog open and
    /// untouched.
    pub fn submit(&mut self) -> Result<Submission, AdminError> {
        if self.draft.name.trim().is_empty() {
            return Err(AdminError::Validation(NAME_REQUIRED.to_string()));
        }

        let draft = self.draft.clone();
        let out = match &self.mode {
            DialogMode::Add => Submission::Create(draft),
            DialogMode::Edit(user) => Submission::Update {
                id: user.id.clone(),
                draft,
            },
        };
        self.open = false;
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../tests/admin/user_dialog_tests.rs"]
mod tests;

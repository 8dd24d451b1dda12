use crate::model::{User, UserId};

/// Two-step guard in front of a delete. Holds the target record and nothing
/// else.
#[derive(Clone, Debug, Default)]
pub struct DeleteConfirm {
    target: Option<User>,
}

impl DeleteConfirm {
    pub fn open(&mut self, user: &User) {
        self.target = Some(user.clone());
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&User> {
        self.target.as_ref()
    }

    /// Closes the dialog and returns the id the caller should delete.
    pub fn confirm(&mut self) -> Option<UserId> {
        self.target.take().map(|u| u.id)
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }
}

use std::collections::VecDeque;

use crate::model::{User, UserDraft, UserId};

use super::{AdminError, Notice, Operation, Pager, Submission, UserFilter, UserStore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Owns the in-memory copy of the user collection and every store call.
///
/// `filtered` is derived from `collection`; whenever the collection changes
/// the view falls back to the whole collection on page 1. Mutation policy
/// differs per operation: create and delete touch local state only after the
/// store acknowledged, update writes locally first.
pub struct UserTable<S> {
    store: S,
    collection: Vec<User>,
    filtered: Vec<User>,
    filter: UserFilter,
    pager: Pager,
    state: LoadState,
    notices: VecDeque<Notice>,
}

impl<S: UserStore> UserTable<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            collection: Vec::new(),
            filtered: Vec::new(),
            filter: UserFilter::default(),
            pager: Pager::default(),
            state: LoadState::Loading,
            notices: VecDeque::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn collection(&self) -> &[User] {
        &self.collection
    }

    pub fn filtered(&self) -> &[User] {
        &self.filtered
    }

    /// The filter inputs as typed; they only take effect on `apply_filter`.
    pub fn filter(&self) -> &UserFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut UserFilter {
        &mut self.filter
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered.len())
    }

    /// Rows of the current page. Empty unless the last load succeeded.
    pub fn visible(&self) -> &[User] {
        if self.state != LoadState::Ready {
            return &[];
        }
        &self.filtered[self.pager.range(self.filtered.len())]
    }

    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.collection.iter().find(|u| &u.id == id)
    }

    /// Fetches the whole collection, replacing local state on success.
    /// Calling it again after a failure is the retry.
    pub fn load(&mut self) -> Result<(), AdminError> {
        self.state = LoadState::Loading;
        match self.store.list() {
            Ok(users) => {
                tracing::info!(count = users.len(), "loaded users");
                self.collection = users;
                self.collection_changed();
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                let err = AdminError::network(Operation::Fetch, &e);
                tracing::warn!(error = %err, "load failed");
                self.state = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Recomputes `filtered` from the collection with the given inputs and
    /// returns to page 1.
    pub fn apply_filter(&mut self, filter: UserFilter) -> usize {
        self.filter = filter;
        self.apply_current_filter()
    }

    pub fn apply_current_filter(&mut self) -> usize {
        self.filtered = self.filter.apply(&self.collection);
        self.pager.reset();
        tracing::debug!(matches = self.filtered.len(), filter = ?self.filter, "filter applied");
        self.filtered.len()
    }

    pub fn reset_filter(&mut self) {
        self.filter.clear();
        self.filtered = self.collection.clone();
    }

    /// Refused (returns false) when `page` is outside `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pager.go_to(page, self.filtered.len())
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page() + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.page() > 1 && self.go_to_page(self.page() - 1)
    }

    pub fn create(&mut self, draft: UserDraft) -> Result<User, AdminError> {
        match self.store.create(&draft) {
            Ok(user) => {
                tracing::info!(id = %user.id, name = %user.name, "user created");
                self.collection.push(user.clone());
                self.collection_changed();
                self.notices.push_back(Notice::success("User added successfully!"));
                Ok(user)
            }
            Err(e) => {
                let err = AdminError::network(Operation::Create, &e);
                tracing::warn!(error = %err, "create failed");
                self.notices.push_back(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn delete(&mut self, id: &UserId) -> Result<(), AdminError> {
        match self.store.delete(id) {
            Ok(()) => {
                tracing::info!(%id, "user deleted");
                self.collection.retain(|u| &u.id != id);
                self.collection_changed();
                self.notices
                    .push_back(Notice::success("User deleted successfully!"));
                Ok(())
            }
            Err(e) => {
                let err = AdminError::network(Operation::Delete, &e);
                tracing::warn!(%id, error = %err, "delete failed");
                self.notices.push_back(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Writes the record locally, then sends the full replacement. Fields the
    /// draft does not cover are carried over from the local record.
    pub fn update(&mut self, id: &UserId, draft: UserDraft) -> Result<User, AdminError> {
        let local = match self.find(id) {
            Some(existing) => draft.overlay(existing),
            None => draft.into_user(id.clone()),
        };
        self.replace_local(&local);

        match self.store.update(&local) {
            Ok(saved) => {
                tracing::info!(%id, "user updated");
                self.replace_local(&saved);
                self.notices
                    .push_back(Notice::success("User updated successfully!"));
                Ok(saved)
            }
            Err(e) => {
                // TODO: restore the previous record or re-read the collection
                // so local state stops diverging from the store.
                let err = AdminError::network(Operation::Update, &e);
                tracing::warn!(%id, error = %err, "update failed; local copy kept");
                self.notices.push_back(Notice::error(format!(
                    "{}. Changes were made locally but not saved to server.",
                    err
                )));
                Err(err)
            }
        }
    }

    /// Routes a dialog submission to `create` or `update`.
    pub fn dispatch(&mut self, submission: Submission) -> Result<User, AdminError> {
        match submission {
            Submission::Create(draft) => self.create(draft),
            Submission::Update { id, draft } => self.update(&id, draft),
        }
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    #[cfg(test)]
    pub(crate) fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    fn replace_local(&mut self, user: &User) {
        if let Some(slot) = self.collection.iter_mut().find(|u| u.id == user.id) {
            *slot = user.clone();
        }
        self.collection_changed();
    }

    fn collection_changed(&mut self) {
        self.filtered = self.collection.clone();
        self.pager.reset();
    }
}

#[cfg(test)]
#[path = "../tests/admin/table_tests.rs"]
mod tests;

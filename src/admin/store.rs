use anyhow::Result;

use crate::model::{User, UserDraft, UserId};

/// The remote user collection as the table controller sees it.
///
/// Implementations report failures as errors whose display text is what
/// the operator should read; the controller adds the operation name.
pub trait UserStore {
    fn list(&self) -> Result<Vec<User>>;
    fn create(&self, draft: &UserDraft) -> Result<User>;
    fn update(&self, user: &User) -> Result<User>;
    fn delete(&self, id: &UserId) -> Result<()>;
}

impl<S: UserStore + ?Sized> UserStore for Box<S> {
    fn list(&self) -> Result<Vec<User>> {
        (**self).list()
    }

    fn create(&self, draft: &UserDraft) -> Result<User> {
        (**self).create(draft)
    }

    fn update(&self, user: &User) -> Result<User> {
        (**self).update(user)
    }

    fn delete(&self, id: &UserId) -> Result<()> {
        (**self).delete(id)
    }
}

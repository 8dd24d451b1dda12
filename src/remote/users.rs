//! CRUD calls against `/users`.

use super::*;

use crate::admin::UserStore;
use crate::model::{User, UserDraft, UserId};

impl RemoteClient {
    pub fn list_users(&self) -> Result<Vec<User>> {
        let url = self.url("/users");
        tracing::debug!(%url, "GET users");
        let resp = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {}", url))?;
        let users: Vec<User> = self
            .ensure_ok(resp, "failed to fetch users")?
            .json()
            .context("parse users")?;
        Ok(users)
    }

    pub fn get_user(&self, id: &UserId) -> Result<User> {
        let url = self.url(&format!("/users/{}", id));
        let resp = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {}", url))?;
        let user: User = self
            .ensure_ok(resp, "failed to fetch user")?
            .json()
            .context("parse user")?;
        Ok(user)
    }

    pub fn create_user(&self, draft: &UserDraft) -> Result<User> {
        let url = self.url("/users");
        tracing::debug!(%url, name = %draft.name, "POST user");
        let resp = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .with_context(|| format!("POST {}", url))?;
        let user: User = self
            .ensure_ok(resp, "failed to save user")?
            .json()
            .context("parse created user")?;
        Ok(user)
    }

    /// Full replace of the record at `user.id`.
    pub fn update_user(&self, user: &User) -> Result<User> {
        let url = self.url(&format!("/users/{}", user.id));
        tracing::debug!(%url, "PUT user");
        let resp = self
            .client
            .put(&url)
            .json(user)
            .send()
            .with_context(|| format!("PUT {}", url))?;
        let user: User = self
            .ensure_ok(resp, "failed to update user")?
            .json()
            .context("parse updated user")?;
        Ok(user)
    }

    pub fn delete_user(&self, id: &UserId) -> Result<()> {
        let url = self.url(&format!("/users/{}", id));
        tracing::debug!(%url, "DELETE user");
        let resp = self
            .client
            .delete(&url)
            .send()
            .with_context(|| format!("DELETE {}", url))?;
        self.ensure_ok(resp, "failed to delete user")?;
        Ok(())
    }
}

impl UserStore for RemoteClient {
    fn list(&self) -> Result<Vec<User>> {
        self.list_users()
    }

    fn create(&self, draft: &UserDraft) -> Result<User> {
        self.create_user(draft)
    }

    fn update(&self, user: &User) -> Result<User> {
        self.update_user(user)
    }

    fn delete(&self, id: &UserId) -> Result<()> {
        self.delete_user(id)
    }
}

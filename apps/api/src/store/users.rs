use std::path::PathBuf;

use crate::models::user::User;
use crate::store::{JsonFile, StoreError};

/// `users.json`: a flat array of users. Lookups are linear scans.
#[derive(Debug)]
pub struct UserStore {
    file: JsonFile,
}

impl UserStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub async fn all(&self) -> Result<Vec<User>, StoreError> {
        let _guard = self.file.lock().await;
        self.file.load().await
    }

    pub async fn find(&self, username: &str) -> Result<Option<User>, StoreError> {
        let _guard = self.file.lock().await;
        let users: Vec<User> = self.file.load().await?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    /// Appends `user` unless the username is taken. Returns `false` on a duplicate.
    pub async fn insert(&self, user: User) -> Result<bool, StoreError> {
        let _guard = self.file.lock().await;
        let mut users: Vec<User> = self.file.load().await?;
        if users.iter().any(|u| u.username == user.username) {
            return Ok(false);
        }
        users.push(user);
        self.file.save(&users).await?;
        Ok(true)
    }
}

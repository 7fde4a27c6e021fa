use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::info;

use crate::models::performance::{PerformanceUpdate, UserPerformanceData};
use crate::store::{JsonFile, StoreError};

type PerformanceMap = BTreeMap<String, UserPerformanceData>;

/// `user_performance.json`: an object mapping username to history.
#[derive(Debug)]
pub struct PerformanceStore {
    file: JsonFile,
}

impl PerformanceStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    /// Returns the user's history, or an empty record if none exists. Never writes a new key.
    pub async fn get(&self, username: &str) -> Result<UserPerformanceData, StoreError> {
        let _guard = self.file.lock().await;
        let all: PerformanceMap = self.file.load().await?;
        Ok(all.get(username).cloned().unwrap_or_default())
    }

    /// Creates an empty record for `username` if none exists.
    pub async fn ensure(&self, username: &str) -> Result<(), StoreError> {
        if username.is_empty() {
            return Err(StoreError::EmptyUsername);
        }
        let _guard = self.file.lock().await;
        let mut all: PerformanceMap = self.file.load().await?;
        if !all.contains_key(username) {
            all.insert(username.to_string(), UserPerformanceData::default());
            self.file.save(&all).await?;
        }
        Ok(())
    }

    /// Appends the entries carried by `update`, creating the user's record on demand.
    pub async fn update(&self, username: &str, update: PerformanceUpdate) -> Result<(), StoreError> {
        if username.is_empty() {
            return Err(StoreError::EmptyUsername);
        }
        let _guard = self.file.lock().await;
        let mut all: PerformanceMap = self.file.load().await?;
        all.entry(username.to_string()).or_default().apply(update);
        self.file.save(&all).await?;
        info!("Performance history updated for {username}");
        Ok(())
    }

    /// Clears all three histories. Returns `false` if the user had no record.
    pub async fn reset(&self, username: &str) -> Result<bool, StoreError> {
        if username.is_empty() {
            return Err(StoreError::EmptyUsername);
        }
        let _guard = self.file.lock().await;
        let mut all: PerformanceMap = self.file.load().await?;
        match all.get_mut(username) {
            Some(record) => {
                *record = UserPerformanceData::default();
                self.file.save(&all).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

//! Flat-file JSON persistence for users and performance history.
//!
//! Each file is loaded whole, modified in memory and written back. A per-file
//! async mutex serialises read-modify-write cycles inside this process; there
//! is no cross-process locking.

pub mod performance;
pub mod users;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info};

pub use performance::PerformanceStore;
pub use users::UserStore;

pub const USERS_FILE: &str = "users.json";
pub const USER_PERFORMANCE_FILE: &str = "user_performance.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Username is required.")]
    EmptyUsername,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Background write task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// One JSON document on disk guarded by an in-process lock.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquires the file's lock. Hold the guard across a load/save pair.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Reads the document.
    ///
    /// A missing file is created with `T::default()`. An unreadable or corrupt
    /// file is logged and treated as `T::default()`; the next save replaces it.
    pub async fn load<T>(&self) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    error!("Error parsing {}: {e}", self.path.display());
                    Ok(T::default())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = T::default();
                self.save(&empty).await?;
                info!("Initialised empty store file {}", self.path.display());
                Ok(empty)
            }
            Err(e) => {
                error!("Error reading {}: {e}", self.path.display());
                Ok(T::default())
            }
        }
    }

    /// Writes the document as pretty-printed JSON via temp file + rename.
    pub async fn save<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::io(&dir, e))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| StoreError::io(&dir, e))?;
            tmp.write_all(&bytes).map_err(|e| StoreError::io(tmp.path(), e))?;
            tmp.persist(&path)
                .map_err(|e| StoreError::io(&path, e.error))?;
            Ok(())
        })
        .await??;

        Ok(())
    }
}

/// Both stores rooted at one data directory.
#[derive(Debug)]
pub struct Store {
    pub users: UserStore,
    pub performance: PerformanceStore,
}

impl Store {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            users: UserStore::new(data_dir.join(USERS_FILE)),
            performance: PerformanceStore::new(data_dir.join(USER_PERFORMANCE_FILE)),
        }
    }
}

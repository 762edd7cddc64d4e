//! # Local Storage
//!
//! A small key/value store in the spirit of the browser's `localStorage`. The hooks
//! only ever read from it (the [`TOKEN_KEY`] entry); writing is left to whatever
//! performs the login.
//!
//! Two implementations are provided:
//!
//! * [`MemoryStorage`]: process-local, lost on exit.
//! * [`FileStorage`]: persisted as a JSON object in the user's config directory.
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

/// Key under which the admin bearer token is stored.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Could not determine the config directory")]
    NoConfigDir,
    #[error("Failed to access storage file '{path}': '{source}'")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Storage file '{path}' is not a JSON object of strings: '{source}'")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to serialize storage: '{0}'")]
    Serialize(#[from] serde_json::Error),
}

/// Persisted key/value storage shared by the hooks.
pub trait LocalStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates a storage pre-populated with a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let storage = Self::default();
        storage
            .items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TOKEN_KEY.to_string(), token.into());
        storage
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(transparent)]
struct StoredItems(BTreeMap<String, String>);

/// Storage persisted as a JSON object on disk.
///
/// The file is re-read on every access so values written by another process
/// (e.g. a login tool) are picked up. A file that does not hold a JSON object of
/// strings reads as empty and is never overwritten: writes fail with
/// [`StorageError::Corrupt`] until it is fixed or removed.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Opens the storage file in the platform config directory, creating the directory if needed.
    pub fn new() -> Result<Self, StorageError> {
        let proj_dirs =
            ProjectDirs::from("com", "avored", "avored-admin").ok_or(StorageError::NoConfigDir)?;
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir).map_err(|source| StorageError::Io {
            path: config_dir.to_path_buf(),
            source,
        })?;

        Ok(Self::at(config_dir.join("local_storage.json")))
    }

    /// Uses `path` as the storage file. The file does not need to exist yet.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoredItems, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(StoredItems::default()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, items: &StoredItems) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut items = self.load()?;
        f(&mut items.0);
        self.save(&items)
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut items) => items.0.remove(key),
            Err(err) => {
                tracing::warn!(key, %err, "failed to read storage");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.remove(key);
        })
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const DEFAULT_STORAGE_KEY: &str = "preferred-package-manager";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt selection file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not find home directory")]
    NoHome,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Where the selected manager is remembered between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    None,
    Session,
    Local,
}

impl StorageKind {
    pub fn open(self) -> StorageResult<Box<dyn SelectionStore>> {
        Ok(match self {
            StorageKind::None => Box::new(NoStore),
            StorageKind::Session => Box::new(SessionStore::new()),
            StorageKind::Local => Box::new(FileStore::open_default()?),
        })
    }
}

/// Key-value persistence for the selected manager id.
pub trait SelectionStore: Send + Sync {
    fn load(&self, key: &str) -> StorageResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Remembers nothing.
pub struct NoStore;

impl SelectionStore for NoStore {
    fn load(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn save(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Ok(())
    }
}

/// In-memory store that lives as long as the process.
#[derive(Default)]
pub struct SessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for SessionStore {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable store: a JSON object of key -> manager id on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.install-command/selection.json`
    pub fn open_default() -> StorageResult<Self> {
        let home = home::home_dir().ok_or(StorageError::NoHome)?;
        Ok(Self::new(home.join(".install-command").join("selection.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StorageResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl SelectionStore for FileStore {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(&values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

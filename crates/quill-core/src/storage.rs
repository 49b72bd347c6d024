//! Key-value persistence for client-held state.
//!
//! Stores hold their state as JSON under a fixed key (`user`, `Article`).
//! `FileStorage` keeps one `<key>.json` file per key in the data directory;
//! `MemoryStorage` keeps everything in-process.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, bail, Context, Result};
use serde::{de::DeserializeOwned, Serialize};

pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Read and parse the JSON stored under `key`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Result<Option<T>> {
    match storage.get(key)? {
        Some(contents) => {
            let value = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse stored value: {}", key))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

pub fn save_json<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> Result<()> {
    let contents = serde_json::to_string(value)?;
    storage.set(key, &contents)
}

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            bail!("Invalid storage key: {:?}", key);
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stored value: {}", key))?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write stored value: {}", key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key)?;
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("Memory storage lock poisoned"))
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quill-storage-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("user").unwrap(), None);

        storage.set("user", "{}").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("{}"));

        storage.remove("user").unwrap();
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = temp_dir("roundtrip");
        let storage = FileStorage::new(dir.clone()).unwrap();

        assert_eq!(storage.get("Article").unwrap(), None);
        storage.set("Article", r#"{"id":5}"#).unwrap();
        assert!(dir.join("Article.json").exists());
        assert_eq!(storage.get("Article").unwrap().as_deref(), Some(r#"{"id":5}"#));

        storage.remove("Article").unwrap();
        assert_eq!(storage.get("Article").unwrap(), None);
        // Removing a missing key is not an error
        storage.remove("Article").unwrap();

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_file_storage_rejects_path_keys() {
        let dir = temp_dir("keys");
        let storage = FileStorage::new(dir.clone()).unwrap();

        assert!(storage.get("../user").is_err());
        assert!(storage.set("a/b", "x").is_err());
        assert!(storage.get("").is_err());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_and_save_json() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Point {
            x: i32,
        }

        let storage = MemoryStorage::new();
        assert_eq!(load_json::<Point>(&storage, "p").unwrap(), None);

        save_json(&storage, "p", &Point { x: 3 }).unwrap();
        assert_eq!(load_json::<Point>(&storage, "p").unwrap(), Some(Point { x: 3 }));

        storage.set("p", "not json").unwrap();
        assert!(load_json::<Point>(&storage, "p").is_err());
    }
}

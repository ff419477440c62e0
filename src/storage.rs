//! Storage layer for trackui
//!
//! Everything lives in one data directory:
//!
//! ```text
//! <data dir>/                   # --data-dir, TRACKUI_DATA_DIR, or platform default
//!   prefs.json                  # Persisted preference flags
//!   prefs.json.lock             # Advisory lock guarding prefs.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};
use crate::lock::{self, FileLock, DEFAULT_LOCK_TIMEOUT_MS};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "TRACKUI_DATA_DIR";

/// Name of the config file looked up in the data directory
pub const CONFIG_FILE: &str = ".trackui.toml";

/// Storage manager rooted at a data directory
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the data directory: explicit path first, then the platform
    /// data dir for this application.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(dir) = explicit {
            return Ok(Self::new(dir.to_path_buf()));
        }

        let dirs = ProjectDirs::from("", "", "trackui").ok_or_else(|| {
            Error::NoDataDir(format!("no home directory; set {DATA_DIR_ENV}"))
        })?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to a file inside the data directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn config_file(&self) -> PathBuf {
        self.file(CONFIG_FILE)
    }

    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Read JSON, or `None` when the file does not exist yet
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Read JSON, falling back to `T::default()` when the file is missing
    /// or does not parse. IO errors still propagate.
    pub fn read_json_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        match self.read_json(path) {
            Ok(doc) => Ok(doc.unwrap_or_default()),
            Err(Error::Json(err)) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable JSON document");
                Ok(T::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Write JSON atomically while holding the file's lock
    pub fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let _lock = FileLock::acquire(lock::lock_path_for(path), DEFAULT_LOCK_TIMEOUT_MS)?;
        let json = serde_json::to_string_pretty(data)?;
        lock::write_atomic(path, json.as_bytes())
    }

    /// Locked read-modify-write of a JSON document. A corrupt document is
    /// replaced by the result of applying `f` to `T::default()`.
    pub fn update_json<T, R, F>(&self, path: &Path, f: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(&mut T) -> R,
    {
        let _lock = FileLock::acquire(lock::lock_path_for(path), DEFAULT_LOCK_TIMEOUT_MS)?;

        let mut doc: T = self.read_json_or_default(path)?;
        let result = f(&mut doc);

        let json = serde_json::to_string_pretty(&doc)?;
        lock::write_atomic(path, json.as_bytes())?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_storage_paths() {
        let storage = Storage::new(PathBuf::from("/data/trackui"));
        assert_eq!(storage.data_dir(), Path::new("/data/trackui"));
        assert_eq!(
            storage.file("prefs.json"),
            PathBuf::from("/data/trackui/prefs.json")
        );
        assert_eq!(
            storage.config_file(),
            PathBuf::from("/data/trackui/.trackui.toml")
        );
    }

    #[test]
    fn resolve_prefers_explicit_dir() {
        let storage = Storage::resolve(Some(Path::new("/explicit"))).unwrap();
        assert_eq!(storage.data_dir(), Path::new("/explicit"));
    }

    #[test]
    fn test_json_roundtrip() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        storage.init().unwrap();
        let path = storage.file("doc.json");

        let missing: Option<BTreeMap<String, String>> = storage.read_json(&path).unwrap();
        assert!(missing.is_none());

        let mut doc = BTreeMap::new();
        doc.insert("hints".to_string(), "true".to_string());
        storage.write_json(&path, &doc).unwrap();

        let loaded: Option<BTreeMap<String, String>> = storage.read_json(&path).unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[test]
    fn test_update_json_starts_from_default() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        let path = storage.file("counts.json");

        for _ in 0..3 {
            storage
                .update_json(&path, |doc: &mut BTreeMap<String, u32>| {
                    *doc.entry("toggles".to_string()).or_default() += 1;
                })
                .unwrap();
        }

        let loaded: BTreeMap<String, u32> = storage.read_json(&path).unwrap().unwrap();
        assert_eq!(loaded.get("toggles"), Some(&3));
    }

    #[test]
    fn corrupt_json_reads_as_default_and_update_rewrites_it() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        storage.init().unwrap();
        let path = storage.file("prefs.json");
        fs::write(&path, "{not json").unwrap();

        assert!(storage.read_json::<BTreeMap<String, u32>>(&path).is_err());
        let doc: BTreeMap<String, u32> = storage.read_json_or_default(&path).unwrap();
        assert!(doc.is_empty());

        storage
            .update_json(&path, |doc: &mut BTreeMap<String, u32>| {
                doc.insert("toggles".to_string(), 1);
            })
            .unwrap();
        let loaded: BTreeMap<String, u32> = storage.read_json(&path).unwrap().unwrap();
        assert_eq!(loaded.get("toggles"), Some(&1));
    }
}

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cookie::SITE_PATH;
use super::store::KeyValueStore;
use crate::error::Result;
use crate::storage::Storage;

/// On-disk shape of the preference file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefsDocument {
    /// Path scope the flags apply to
    #[serde(default = "default_scope")]
    pub path: String,

    #[serde(default)]
    pub flags: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_scope() -> String {
    SITE_PATH.to_string()
}

impl Default for PrefsDocument {
    fn default() -> Self {
        Self {
            path: default_scope(),
            flags: BTreeMap::new(),
            updated_at: None,
        }
    }
}

/// Flag store persisted as JSON in the data directory.
///
/// Each `set` is a locked read-modify-write, so concurrent CLI invocations
/// merge instead of clobbering each other. Write failures are logged and
/// absorbed; the in-memory value still changes.
#[derive(Debug, Clone)]
pub struct FileStore {
    storage: Storage,
    file: PathBuf,
    doc: PrefsDocument,
}

impl FileStore {
    /// Open (or lazily create) `file_name` in the storage directory.
    ///
    /// A file that does not parse opens as an empty document; the next
    /// `set` overwrites it.
    pub fn open(storage: Storage, file_name: &str, scope: &str) -> Result<Self> {
        let file = storage.file(file_name);
        let mut doc: PrefsDocument = storage.read_json_or_default(&file)?;
        doc.path = scope.to_string();
        Ok(Self { storage, file, doc })
    }

    pub fn file_path(&self) -> &Path {
        &self.file
    }

    pub fn document(&self) -> &PrefsDocument {
        &self.doc
    }

    /// Write the current document out, replacing what is on disk.
    pub fn save(&self) -> Result<()> {
        self.storage.write_json(&self.file, &self.doc)
    }

    fn persist(&self, key: &str, value: &str) -> Result<PrefsDocument> {
        let scope = self.doc.path.clone();
        self.storage
            .update_json(&self.file, |doc: &mut PrefsDocument| {
                doc.path = scope;
                doc.flags.insert(key.to_string(), value.to_string());
                doc.updated_at = Some(Utc::now());
                doc.clone()
            })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> String {
        self.doc.flags.get(key).cloned().unwrap_or_default()
    }

    fn set(&mut self, key: &str, value: &str) {
        match self.persist(key, value) {
            Ok(merged) => self.doc = merged,
            Err(err) => {
                tracing::warn!(key, file = %self.file.display(), error = %err, "preference not persisted");
                self.doc.flags.insert(key.to_string(), value.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> Storage {
        Storage::new(dir.path().to_path_buf())
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(storage(&dir), "prefs.json", "/").unwrap();
        assert_eq!(store.get("hints"), "");
        assert_eq!(store.document().path, "/");
        assert!(!store.file_path().exists());
    }

    #[test]
    fn set_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let mut first = FileStore::open(storage(&dir), "prefs.json", "/").unwrap();
        first.set("hints", "true");
        assert!(first.document().updated_at.is_some());

        let second = FileStore::open(storage(&dir), "prefs.json", "/").unwrap();
        assert_eq!(second.get("hints"), "true");
    }

    #[test]
    fn set_merges_concurrent_writers() {
        let dir = TempDir::new().unwrap();
        let mut a = FileStore::open(storage(&dir), "prefs.json", "/").unwrap();
        let mut b = FileStore::open(storage(&dir), "prefs.json", "/").unwrap();

        a.set("hints", "true");
        b.set("theme", "dark");

        assert_eq!(b.get("hints"), "true");
        let reopened = FileStore::open(storage(&dir), "prefs.json", "/").unwrap();
        assert_eq!(reopened.get("hints"), "true");
        assert_eq!(reopened.get("theme"), "dark");
    }

    #[test]
    fn clear_blanks_the_value() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(storage(&dir), "prefs.json", "/").unwrap();
        store.set("hints", "true");
        store.clear("hints");

        let reopened = FileStore::open(storage(&dir), "prefs.json", "/").unwrap();
        assert_eq!(reopened.document().flags.get("hints"), Some(&String::new()));
        assert_eq!(reopened.get("hints"), "");
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        std::fs::write(storage.file("prefs.json"), "[1, 2").unwrap();

        let store = FileStore::open(storage, "prefs.json", "/").unwrap();
        assert_eq!(store.get("hints"), "");
        assert!(store.document().flags.is_empty());
    }

    #[test]
    fn save_writes_document() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(storage(&dir), "prefs.json", "/app").unwrap();
        store.save().unwrap();

        let raw = std::fs::read_to_string(store.file_path()).unwrap();
        assert!(raw.contains("\"path\": \"/app\""));
    }
}

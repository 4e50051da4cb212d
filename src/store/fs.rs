use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::warn;

use crate::error::{Result, ScoutError};
use crate::store::KvStore;

const DATA_FILE: &str = "data.json";

/// File-based key-value store.
///
/// All keys live in a single `data.json` map under the store root. The file
/// is read once at open and rewritten after every mutation, matching the
/// "mutate then persist synchronously" discipline of the rest of the crate.
///
/// A missing or corrupt `data.json` opens as an empty store; corruption is
/// logged and overwritten on the next write, never surfaced as an error.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let entries = read_entries(&root.join(DATA_FILE));
        Ok(Self { root, entries })
    }

    /// Open a store under the OS-appropriate data directory for `app_name`.
    pub fn open_default(app_name: &str) -> Result<Self> {
        let dirs = ProjectDirs::from("", "", app_name).ok_or_else(|| {
            ScoutError::Store("Could not determine a data directory for this platform".to_string())
        })?;
        Self::open(dirs.data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn flush(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.entries)?;
        fs::write(self.root.join(DATA_FILE), serialized)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> HashMap<String, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return HashMap::new(),
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                "event=store_corrupt file={} err={} recovery=empty",
                path.display(),
                err
            );
            HashMap::new()
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("scout:favs", r#"["p3","p1"]"#).unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            store.get("scout:favs").unwrap().as_deref(),
            Some(r#"["p3","p1"]"#)
        );
    }

    #[test]
    fn missing_data_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn corrupt_data_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DATA_FILE), "{not valid json").unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn remove_deletes_key() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}

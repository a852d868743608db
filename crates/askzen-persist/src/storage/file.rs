use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{PersistError, Result};

/// Directory-backed store: each key lives in `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the storage directory
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        tracing::debug!(path = %root.display(), "opened file store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PersistError::Internal(format!("invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // Readers never observe a half-written document
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data")).unwrap();

        assert_eq!(store.get("askzen_notes").unwrap(), None);

        store.set("askzen_notes", "[]").unwrap();
        assert_eq!(store.get("askzen_notes").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("data/askzen_notes.json").exists());

        store.remove("askzen_notes").unwrap();
        store.remove("askzen_notes").unwrap();
        assert_eq!(store.get("askzen_notes").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert!(matches!(store.set("../escape", "x"), Err(PersistError::Internal(_))));
        assert!(store.get("").is_err());
    }
}

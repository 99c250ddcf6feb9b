//! Directory of JSON documents.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rotafin_core::store::{KeyValueStore, StoreError};

/// [`KeyValueStore`] keeping each key in `<dir>/<key>.json`.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so a crash never leaves a half-written collection behind. A
/// failed write removes the temporary file.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Opens `root`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Configuration` if `root` is not a usable
    /// directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        if root.exists() && !root.is_dir() {
            return Err(StoreError::Configuration(format!(
                "'{}' is not a directory",
                root.display()
            )));
        }
        fs::create_dir_all(&root).map_err(|e| {
            StoreError::Configuration(format!("cannot create '{}': {e}", root.display()))
        })?;
        tracing::debug!(root = %root.display(), "data directory opened");
        Ok(Self { root })
    }

    /// Directory holding the documents.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`.
    #[must_use]
    pub fn path_of(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn check_key(key: &str) -> Result<(), StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(())
        } else {
            Err(StoreError::Configuration(format!("invalid storage key '{key}'")))
        }
    }

    fn write_atomic(&self, key: &str, value: &str) -> io::Result<()> {
        let target = self.path_of(key);
        let temp = self.root.join(format!(".{key}.json.tmp"));
        let written = Self::write_file(&temp, value).and_then(|()| fs::rename(&temp, &target));
        if written.is_err()
            && let Err(e) = fs::remove_file(&temp)
            && e.kind() != io::ErrorKind::NotFound
        {
            tracing::warn!(path = %temp.display(), error = %e, "temporary file left behind");
        }
        written
    }

    fn write_file(path: &Path, value: &str) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()
    }
}

impl KeyValueStore for JsonDirStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::check_key(key)?;
        match fs::read_to_string(self.path_of(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read(key, e)),
        }
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        Self::check_key(key)?;
        self.write_atomic(key, &value)
            .map_err(|e| StoreError::write(key, e))?;
        tracing::debug!(key, bytes = value.len(), "collection written");
        Ok(())
    }
}

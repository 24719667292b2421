//! File-system backend
//!
//! Each key maps to `<dir>/<key>`. Writes go to `.<key>.tmp` first and are
//! renamed over the target so a crash never leaves a half-written value.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::StorageBackend;
use crate::error::CartError;

/// Directory-backed store for native builds
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (and create if needed) a storage directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CartError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        log::debug!("File storage at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CartError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(CartError::Backend(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(key))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{}.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

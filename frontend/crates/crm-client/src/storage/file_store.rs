use crate::storage::{KeyValueStore, StorageError, StorageOp, StorageResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

type Items = BTreeMap<String, String>;

/// Key-value storage persisted as one JSON object file.
///
/// Every write rewrites the whole file through a temp file, fsync and
/// rename, so a crash mid-write leaves the previous contents intact. A file
/// that does not parse is treated as empty and replaced on the next write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> StorageResult<Items> {
        if !self.path.exists() {
            return Ok(Items::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::io(StorageOp::Read, &self.path, e))?;

        if contents.trim().is_empty() {
            return Ok(Items::new());
        }

        match serde_json::from_str::<Items>(&contents) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                Ok(Items::new())
            }
        }
    }

    fn write_items(&self, items: &Items) -> StorageResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| StorageError::io(StorageOp::CreateDir, dir, e))?;
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("session.json"));
        let temp_path = self
            .path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(items)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::io(StorageOp::Write, &temp_path, e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::io(StorageOp::Write, &temp_path, e))?;

            file.sync_all()
                .map_err(|e| StorageError::io(StorageOp::Write, &temp_path, e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::io(StorageOp::Replace, &self.path, e)
        })?;

        debug!("Saved session file {:?} ({} keys)", self.path, items.len());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_items()?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.write_items(&items)
    }
}

//! Durable key-value slot holding the serialized recipe collection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::StorageError;

/// Name of the file holding the serialized collection.
const SLOT_FILE: &str = "recipes.json";

/// Trait for the durable collection slot, enabling mockability in tests.
///
/// A slot holds at most one value: the textual encoding of the entire
/// recipe collection. Reading a never-written slot yields `None`, which is
/// a valid first-run state, not an error.
pub trait StorageSlot: Send + Sync {
    /// Read the current value, or `None` if the slot has never been written.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot contents wholesale.
    fn write(&self, value: &str) -> Result<(), StorageError>;
}

/// File-backed slot: one JSON file under a data directory.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot stored under the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join(SLOT_FILE),
        }
    }

    /// Resolve the data directory.
    ///
    /// Environment variables:
    /// - `RECIPEBOOK_DATA_DIR`: overrides the default of `~/.recipebook`
    pub fn default_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("RECIPEBOOK_DATA_DIR") {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .map(|h| h.join(".recipebook"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }
}

/// In-memory slot for tests, with a switchable write-failure mode to
/// exercise the storage-full path.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: RwLock<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot with the given raw contents already present.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RwLock::new(Some(value.to_string())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent writes fail, as a full or disabled store would.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.read().unwrap().clone())
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "storage full",
            )));
        }
        *self.value.write().unwrap() = Some(value.to_string());
        Ok(())
    }
}

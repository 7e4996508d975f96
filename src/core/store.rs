//! Persistence boundary for the program dataset
//!
//! The core logic only depends on the [`ProgramStore`] trait, so aggregation
//! and codec behavior can be exercised against [`MemoryStore`] without
//! touching the filesystem. [`JsonFileStore`] is the production
//! implementation: one JSON file holding the whole dataset, replaced on
//! every committed mutation.

use crate::core::models::Program;
use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised by the persistence boundary.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying file I/O failed
    Io(io::Error),
    /// The dataset could not be serialized
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage I/O error: {err}"),
            Self::Serialize(err) => write!(f, "could not serialize dataset: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

/// Port through which the program dataset is loaded and saved.
///
/// Implementations never retain references into the program; they consume
/// and produce snapshots only.
pub trait ProgramStore {
    /// Load the last-saved dataset.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet. A corrupted
    /// saved blob also comes back as `Ok(None)`: the caller falls back to
    /// the initial state rather than surfacing an error.
    ///
    /// # Errors
    /// Returns an error when the underlying storage cannot be read.
    fn load(&self) -> Result<Option<Program>, StoreError>;

    /// Replace the saved dataset with a snapshot of `program`.
    ///
    /// # Errors
    /// Returns an error when the dataset cannot be written.
    fn save(&self, program: &Program) -> Result<(), StoreError>;

    /// Remove the saved dataset entirely.
    ///
    /// # Errors
    /// Returns an error when the underlying storage cannot be cleared.
    fn clear(&self) -> Result<(), StoreError>;
}

/// File-backed store holding the dataset as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgramStore for JsonFileStore {
    fn load(&self) -> Result<Option<Program>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Program>(&content) {
            Ok(program) => Ok(Some(program)),
            Err(err) => {
                // Corrupted data is recovered locally, never surfaced.
                crate::warn!(
                    "Ignoring unreadable dataset at {}: {err}",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    fn save(&self, program: &Program) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(program)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory store used by tests and anywhere a filesystem is unwanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<Program>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgramStore for MemoryStore {
    fn load(&self) -> Result<Option<Program>, StoreError> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, program: &Program) -> Result<(), StoreError> {
        *self.saved.borrow_mut() = Some(program.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.saved.borrow_mut() = None;
        Ok(())
    }
}

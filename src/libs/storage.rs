//! Task store persistence.
//!
//! Resolves the storage file location, loads and sanitizes existing records,
//! and persists the full collection atomically on every mutation.
//!
//! ## Load Guarantees
//!
//! Loading never signals a fatal error. A missing file is the expected
//! first-run state and yields an empty collection silently; an empty,
//! corrupt, or wrongly-shaped file yields an empty collection with a
//! warning naming the actual path; malformed records inside an otherwise
//! valid file are silently discarded.
//!
//! ## Save Guarantees
//!
//! Saving never writes the target path in place. The full collection is
//! serialized to a temporary sibling in the same directory, synced, then
//! atomically renamed onto the target. An interruption before the rename
//! leaves any pre-existing file untouched.

use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskList};
use crate::{msg_debug, msg_warning};
use serde_json::Value;
use std::collections::HashSet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default store file name, resolved against the working directory.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Suffix appended to the target path for the temporary sibling.
const TMP_SUFFIX: &str = ".tmp";

/// Errors that make a save unrecoverable. Load has no error type: it
/// always degrades to a usable collection instead.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },
    #[error("Failed to write temporary file {path}: {source}")]
    TempWrite { path: PathBuf, source: std::io::Error },
    #[error("Failed to serialize tasks to {path}: {source}")]
    Serialize { path: PathBuf, source: serde_json::Error },
    #[error("Failed to replace {path}: {source}")]
    Replace { path: PathBuf, source: std::io::Error },
}

/// Filters raw JSON array elements into validated tasks.
///
/// Keeps only records that pass [`Task::from_value`] and whose id has not
/// been seen earlier in the file (first occurrence wins). Returns the
/// surviving tasks in file order plus the number of discarded records.
pub fn sanitize(items: &[Value]) -> (Vec<Task>, usize) {
    let mut seen = HashSet::new();
    let mut tasks = Vec::new();
    let mut skipped = 0;
    for item in items {
        match Task::from_value(item) {
            Some(task) if seen.insert(task.id) => tasks.push(task),
            _ => skipped += 1,
        }
    }
    (tasks, skipped)
}

/// The resolved storage location for one session.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Uses a user-supplied path verbatim, or falls back to
    /// [`TASKS_FILE_NAME`] in the working directory.
    pub fn new(path: Option<PathBuf>) -> Self {
        let path = path.unwrap_or_else(|| PathBuf::from(TASKS_FILE_NAME));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.clone().into_os_string();
        os.push(TMP_SUFFIX);
        PathBuf::from(os)
    }

    /// Loads the task collection, degrading to empty on any failure.
    pub fn load(&self) -> TaskList {
        if !self.path.exists() {
            return TaskList::default();
        }

        let display_path = self.path.display().to_string();
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                msg_warning!(Message::StoreReadFailed(display_path, err.to_string()));
                return TaskList::default();
            }
        };
        if content.trim().is_empty() {
            msg_warning!(Message::StoreFileEmpty(display_path));
            return TaskList::default();
        }

        let raw: Value = match serde_json::from_str(&content) {
            Ok(raw) => raw,
            Err(_) => {
                msg_warning!(Message::StoreFileCorrupt(display_path));
                return TaskList::default();
            }
        };
        let Some(items) = raw.as_array() else {
            msg_warning!(Message::StoreFileNotAList(display_path));
            return TaskList::default();
        };

        let (tasks, skipped) = sanitize(items);
        if skipped > 0 {
            msg_debug!(Message::RecordsSkipped(skipped, self.path.display().to_string()));
        }
        TaskList::new(tasks)
    }

    /// Persists the full collection through the temp-file-plus-rename
    /// sequence. Failures here are fatal to the session.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let tmp_path = self.tmp_path();
        let tmp_file = File::create(&tmp_path).map_err(|source| StorageError::TempWrite {
            path: tmp_path.clone(),
            source,
        })?;
        serde_json::to_writer_pretty(&tmp_file, tasks.tasks()).map_err(|source| StorageError::Serialize {
            path: tmp_path.clone(),
            source,
        })?;
        tmp_file.sync_all().map_err(|source| StorageError::TempWrite {
            path: tmp_path.clone(),
            source,
        })?;

        // rename replaces the target atomically on Unix; Windows refuses
        // to rename onto an existing file, so clear it first there
        #[cfg(windows)]
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|source| StorageError::Replace {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::rename(&tmp_path, &self.path).map_err(|source| StorageError::Replace {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

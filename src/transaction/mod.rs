//! Transaction support for atomic provisioning
//!
//! Provisioning either completes or leaves the target directory exactly as
//! it found it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! transaction.backup_file(&existing)?;
//!
//! // Perform operations...
//! transaction.track_file_created(path);
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // rollback happens automatically
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

/// Original contents of a file the transaction overwrote or removed
#[derive(Debug, Clone)]
struct FileBackup {
    /// Original path
    path: PathBuf,
    /// Backed up content
    content: Vec<u8>,
}

/// A transaction for atomic target directory operations
#[derive(Debug, Default)]
pub struct Transaction {
    /// Files created during this transaction
    created_files: HashSet<PathBuf>,

    /// Files overwritten or removed during this transaction
    backups: Vec<FileBackup>,

    /// Directories created during this transaction
    created_dirs: HashSet<PathBuf>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back up a file before overwriting or removing it
    pub fn backup_file(&mut self, path: &Path) -> Result<()> {
        if self.backups.iter().any(|b| b.path == path) {
            return Ok(());
        }

        let content = fs::read(path)
            .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))?;

        self.backups.push(FileBackup {
            path: path.to_path_buf(),
            content,
        });
        Ok(())
    }

    /// Track a file that was created during this transaction
    pub fn track_file_created(&mut self, path: impl Into<PathBuf>) {
        self.created_files.insert(path.into());
    }

    /// Track a directory that was created during this transaction
    pub fn track_dir_created(&mut self, path: impl Into<PathBuf>) {
        self.created_dirs.insert(path.into());
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Undo everything tracked so far
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }

        for path in &self.created_files {
            if path.exists() {
                let _ = fs::remove_file(path);
            }
        }

        for backup in &self.backups {
            if let Err(e) = fs::write(&backup.path, &backup.content) {
                tracing::warn!(
                    path = %backup.path.display(),
                    error = %e,
                    "failed to restore file"
                );
            }
        }

        // Deepest first so nested directories empty out before their parents
        let mut dirs: Vec<_> = self.created_dirs.iter().collect();
        dirs.sort_by_key(|d| std::cmp::Reverse(d.components().count()));
        for path in dirs {
            if fs::read_dir(path)
                .map(|mut d| d.next().is_none())
                .unwrap_or(false)
            {
                let _ = fs::remove_dir(path);
            }
        }

        tracing::debug!(
            created = self.created_files.len(),
            restored = self.backups.len(),
            "rolled back"
        );
        self.committed = true;
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}

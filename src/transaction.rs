//! Transaction support for file generation
//!
//! A [`Transaction`] writes files and creates directories while remembering
//! what it touched. Unless it is committed, dropping it removes the files and
//! directories it created and restores the files it overwrote.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! transaction.ensure_dir(&package_dir)?;
//! transaction.write_file(&package_dir.join("package.json"), &manifest)?;
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

/// Original content of a file that was overwritten
#[derive(Debug, Clone)]
struct FileBackup {
    path: PathBuf,
    content: Vec<u8>,
}

/// A transaction for a group of file writes
#[derive(Debug, Default)]
pub struct Transaction {
    /// Files created during this transaction
    created_files: HashSet<PathBuf>,

    /// Files overwritten during this transaction (with original content)
    modified_files: Vec<FileBackup>,

    /// Directories created during this transaction
    created_dirs: HashSet<PathBuf>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `path` and any missing parents, tracking each new directory
    pub fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        let missing: Vec<PathBuf> = path
            .ancestors()
            .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
            .map(Path::to_path_buf)
            .collect();

        fs::create_dir_all(path).map_err(|e| fs_error::dir_error(path, &e))?;

        for dir in missing {
            tracing::trace!(path = %dir.display(), "created directory");
            self.created_dirs.insert(dir);
        }
        Ok(())
    }

    /// Write `content` to `path`, creating parent directories as needed
    ///
    /// An existing file is overwritten; its previous content is kept for rollback.
    pub fn write_file(&mut self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        // Recorded before writing: a failed write may already have truncated the file
        if path.is_file() {
            let original = fs::read(path).map_err(|e| fs_error::read_error(path, &e))?;
            self.modified_files.push(FileBackup {
                path: path.to_path_buf(),
                content: original,
            });
        } else if !path.exists() {
            self.created_files.insert(path.to_path_buf());
        }

        fs::write(path, content).map_err(|e| fs_error::write_error(path, &e))?;

        tracing::trace!(path = %path.display(), "wrote file");
        Ok(())
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Undo everything recorded so far
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }

        for path in &self.created_files {
            if path.is_file() {
                let _ = fs::remove_file(path);
            }
        }

        for backup in &self.modified_files {
            if let Err(e) = fs::write(&backup.path, &backup.content) {
                tracing::warn!(path = %backup.path.display(), error = %e, "failed to restore file");
            }
        }

        // Deepest first so parents are empty by the time they are visited
        let mut dirs: Vec<_> = self.created_dirs.iter().collect();
        dirs.sort_by_key(|b| std::cmp::Reverse(b.components().count()));
        for path in dirs {
            let is_empty = fs::read_dir(path)
                .map(|mut d| d.next().is_none())
                .unwrap_or(false);
            if is_empty {
                let _ = fs::remove_dir(path);
            }
        }

        self.created_files.clear();
        self.modified_files.clear();
        self.created_dirs.clear();
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            tracing::debug!("rolling back uncommitted file transaction");
            self.rollback();
        }
    }
}

//! Git repository initialization for generated projects

use std::path::Path;

use crate::error::{Result, command as command_error};

/// Initialize a git repository at `path`
///
/// Returns `false` when `path` already is the root of a repository, which is
/// left untouched. A repository further up the tree does not count: the new
/// project always gets its own.
pub fn init_repository(path: &Path) -> Result<bool> {
    if let Ok(repo) = git2::Repository::open(path) {
        if !repo.is_bare() {
            tracing::debug!(path = %path.display(), "git repository already exists");
            return Ok(false);
        }
    }

    git2::Repository::init(path)
        .map_err(|e| command_error::git_init_failed(path.display().to_string(), e.message()))?;
    tracing::info!(path = %path.display(), "initialized git repository");
    Ok(true)
}

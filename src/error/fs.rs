//! File system errors

use std::path::Path;

use super::ScaffoldError;

/// Creates a directory creation error
pub fn dir_create_failed(path: impl Into<String>, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::DirCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a project path occupied by a non-directory
pub fn project_path_is_file(path: impl Into<String>) -> ScaffoldError {
    ScaffoldError::ProjectPathIsFile { path: path.into() }
}

pub(crate) fn dir_error(path: &Path, e: &std::io::Error) -> ScaffoldError {
    dir_create_failed(path.display().to_string(), e.to_string())
}

pub(crate) fn write_error(path: &Path, e: &std::io::Error) -> ScaffoldError {
    write_failed(path.display().to_string(), e.to_string())
}

pub(crate) fn read_error(path: &Path, e: &std::io::Error) -> ScaffoldError {
    read_failed(path.display().to_string(), e.to_string())
}

//! External command errors

use super::ScaffoldError;

/// Creates a git init error
pub fn git_init_failed(path: impl Into<String>, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::GitInitFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a program that could not be started
pub fn spawn_failed(command: impl Into<String>, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::CommandSpawnFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a command that exited unsuccessfully
pub fn failed(command: impl Into<String>, status: impl Into<String>) -> ScaffoldError {
    ScaffoldError::CommandFailed {
        command: command.into(),
        status: status.into(),
    }
}

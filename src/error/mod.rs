//! Error types and handling for npm-workspace
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`template`]: Template rendering errors
//! - [`config`]: Project and package configuration errors
//! - [`fs`]: File system errors
//! - [`command`]: External command errors (git, installer)

pub mod command;
pub mod config;
pub mod fs;
pub mod template;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for npm-workspace operations
#[derive(Error, Diagnostic, Debug)]
pub enum ScaffoldError {
    // Template errors
    #[error("Template '{template}' references '{{{{{key}}}}}' but no value was provided")]
    #[diagnostic(
        code(npm_workspace::template::missing_substitution),
        help("Set every placeholder the template uses before calling create()")
    )]
    MissingSubstitution { template: String, key: String },

    #[error("Unterminated placeholder in template '{template}' ({file})")]
    #[diagnostic(code(npm_workspace::template::unterminated_placeholder))]
    UnterminatedPlaceholder { template: String, file: String },

    #[error("Rendered manifest '{path}' is not valid JSON: {reason}")]
    #[diagnostic(
        code(npm_workspace::template::invalid_manifest),
        help("Project and package names must not contain quotes or control characters")
    )]
    InvalidManifest { path: String, reason: String },

    #[error("Unknown template: {name}")]
    #[diagnostic(
        code(npm_workspace::template::unknown),
        help("Available templates: template1, template2, root")
    )]
    UnknownTemplate { name: String },

    // Configuration errors
    #[error("Missing required setting '{field}' for {target}")]
    #[diagnostic(code(npm_workspace::config::incomplete))]
    IncompleteConfig { target: String, field: String },

    #[error("Invalid project name '{name}': {reason}")]
    #[diagnostic(
        code(npm_workspace::config::invalid_project_name),
        help("Use lowercase letters, digits, '-', '.', '_' or '~' (e.g. my-project)")
    )]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid author name: {reason}")]
    #[diagnostic(code(npm_workspace::config::invalid_author_name))]
    InvalidAuthorName { reason: String },

    // File system errors
    #[error("Failed to create directory: {path}")]
    #[diagnostic(code(npm_workspace::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(npm_workspace::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(npm_workspace::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Project path exists and is not a directory: {path}")]
    #[diagnostic(
        code(npm_workspace::fs::project_path_is_file),
        help("Choose another project name or remove the existing file")
    )]
    ProjectPathIsFile { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(npm_workspace::fs::io_error))]
    IoError { message: String },

    // External command errors
    #[error("Failed to initialize git repository at '{path}': {reason}")]
    #[diagnostic(code(npm_workspace::command::git_init_failed))]
    GitInitFailed { path: String, reason: String },

    #[error("Failed to start '{command}': {reason}")]
    #[diagnostic(
        code(npm_workspace::command::spawn_failed),
        help("Make sure the program is installed and on PATH, or pass --npm <PROGRAM>")
    )]
    CommandSpawnFailed { command: String, reason: String },

    #[error("Command '{command}' failed with {status}")]
    #[diagnostic(code(npm_workspace::command::failed))]
    CommandFailed { command: String, status: String },

    // Prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(
        code(npm_workspace::prompt::failed),
        help("Pass --project and --author when running without a terminal")
    )]
    PromptFailed { message: String },
}

impl From<inquire::InquireError> for ScaffoldError {
    fn from(err: inquire::InquireError) -> Self {
        ScaffoldError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ScaffoldError>;

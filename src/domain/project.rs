//! Project-level inputs and their validation

use std::path::{Path, PathBuf};

use crate::error::{Result, config as config_error};

const MAX_NAME_LENGTH: usize = 214;

/// Name and author of the project being generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    project_name: String,
    author_name: String,
}

impl ProjectSpec {
    /// Validate and build a project spec
    ///
    /// Surrounding whitespace is trimmed from both names.
    pub fn new(project_name: &str, author_name: &str) -> Result<Self> {
        let project_name = project_name.trim();
        let author_name = author_name.trim();
        validate_project_name(project_name)?;
        validate_author_name(author_name)?;

        Ok(Self {
            project_name: project_name.to_string(),
            author_name: author_name.to_string(),
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Directory the project is generated into, below `parent`
    pub fn project_path(&self, parent: &Path) -> PathBuf {
        parent.join(&self.project_name)
    }
}

/// Check a project name against npm package naming rules
///
/// The name doubles as a directory name, so path separators and relative
/// components are rejected too.
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid =
        |reason: &str| -> Result<()> { Err(config_error::invalid_project_name(name, reason)) };

    if name.is_empty() {
        return invalid("name cannot be empty");
    }
    if name.len() > MAX_NAME_LENGTH {
        return invalid("name cannot be longer than 214 characters");
    }
    if name.starts_with('.') || name.starts_with('_') {
        return invalid("name cannot start with '.' or '_'");
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return invalid("name must be lowercase");
    }
    if name.chars().any(char::is_whitespace) {
        return invalid("name cannot contain whitespace");
    }
    if name.contains('/') || name.contains('\\') {
        return invalid("name cannot contain path separators");
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || "-._~".contains(*c)))
    {
        return invalid(&format!("character '{c}' is not allowed"));
    }

    Ok(())
}

/// Check that an author name is usable in the generated manifest and license
pub fn validate_author_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(config_error::invalid_author_name("author cannot be empty"));
    }
    if name.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
        return Err(config_error::invalid_author_name(
            "author cannot contain quotes, backslashes or control characters",
        ));
    }
    Ok(())
}

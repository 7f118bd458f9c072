//! Configuration errors

use super::ScaffoldError;

/// Creates an incomplete builder configuration error
pub fn incomplete(target: impl Into<String>, field: impl Into<String>) -> ScaffoldError {
    ScaffoldError::IncompleteConfig {
        target: target.into(),
        field: field.into(),
    }
}

/// Creates an invalid project name error
pub fn invalid_project_name(name: impl Into<String>, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid author name error
pub fn invalid_author_name(reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::InvalidAuthorName {
        reason: reason.into(),
    }
}

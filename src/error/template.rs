//! Template rendering errors

use super::ScaffoldError;

/// Creates a missing substitution error
pub fn missing_substitution(template: impl Into<String>, key: impl Into<String>) -> ScaffoldError {
    ScaffoldError::MissingSubstitution {
        template: template.into(),
        key: key.into(),
    }
}

/// Creates an unterminated placeholder error
pub fn unterminated_placeholder(
    template: impl Into<String>,
    file: impl Into<String>,
) -> ScaffoldError {
    ScaffoldError::UnterminatedPlaceholder {
        template: template.into(),
        file: file.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid_manifest(path: impl Into<String>, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::InvalidManifest {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown template error
pub fn unknown(name: impl Into<String>) -> ScaffoldError {
    ScaffoldError::UnknownTemplate { name: name.into() }
}

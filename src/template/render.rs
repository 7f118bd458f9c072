//! Placeholder substitution for built-in templates

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{Result, template as template_error};

use super::TemplateId;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const MANIFEST_FILE: &str = "package.json";

/// Placeholder values used to render a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a value, returning `self` for chaining
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// A rendered file, relative to the directory it will be written into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

fn is_key(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Render every file of a template
///
/// Output order follows the template's declaration order. Fails on the first
/// placeholder without a value; nothing is returned for a partially rendered
/// template.
pub fn render(id: TemplateId, substitutions: &Substitutions) -> Result<Vec<RenderedFile>> {
    let template = id.template();
    if let Some(key) = template
        .required_keys()
        .into_iter()
        .find(|key| substitutions.get(key).is_none())
    {
        return Err(template_error::missing_substitution(id.name(), key));
    }

    let mut rendered = Vec::with_capacity(template.files.len());

    for file in template.files {
        let path = render_str(id, file.path, file.path, substitutions)?;
        let content = render_str(id, file.path, file.content, substitutions)?;

        if path.ends_with(MANIFEST_FILE) {
            serde_json::from_str::<serde_json::Value>(&content)
                .map_err(|e| template_error::invalid_manifest(&path, e.to_string()))?;
        }

        rendered.push(RenderedFile {
            path: PathBuf::from(path),
            content,
        });
    }

    tracing::debug!(template = %template.id, files = rendered.len(), "rendered template");
    Ok(rendered)
}

/// Substitute all `{{ key }}` placeholders in `text`
///
/// `file` only labels errors. Brace pairs whose contents are not a plain key
/// (e.g. `{{ a b }}`) are copied through unchanged.
pub fn render_str(
    id: TemplateId,
    file: &str,
    text: &str,
    substitutions: &Substitutions,
) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or_else(|| template_error::unterminated_placeholder(id.name(), file))?;
        let inner = &after_open[..end];
        let key = inner.trim();

        if is_key(key) {
            let value = substitutions
                .get(key)
                .ok_or_else(|| template_error::missing_substitution(id.name(), key))?;
            out.push_str(value);
        } else {
            out.push_str(OPEN);
            out.push_str(inner);
            out.push_str(CLOSE);
        }

        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Iterate over the placeholder keys in `text`, in order of appearance
pub fn placeholders(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        loop {
            let start = rest.find(OPEN)?;
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE)?;
            let key = after_open[..end].trim();
            rest = &after_open[end + CLOSE.len()..];
            if is_key(key) {
                return Some(key);
            }
        }
    })
}

//! Built-in project templates and the renderer that materializes them
//!
//! Templates are compiled into the binary. Each one is a fixed list of
//! `(path pattern, content pattern)` pairs with `{{ key }}` placeholders,
//! rendered by [`render`] into concrete files.

mod render;

pub use render::{RenderedFile, Substitutions, placeholders, render, render_str};

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, template as template_error};

/// Placeholder keys shared by the built-in templates
pub mod keys {
    pub const PROJECT_NAME: &str = "project_name";
    pub const PACKAGE_NAME: &str = "package_name";
    pub const AUTHOR_NAME: &str = "author_name";
    pub const PACKAGE1: &str = "package1";
}

/// Identifier of a built-in template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Standalone package
    Template1,
    /// Package depending on another workspace package
    Template2,
    /// Monorepo root
    Root,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Template1, TemplateId::Template2, TemplateId::Root];

    pub fn name(self) -> &'static str {
        match self {
            TemplateId::Template1 => "template1",
            TemplateId::Template2 => "template2",
            TemplateId::Root => "root",
        }
    }

    /// The static template definition for this id
    pub fn template(self) -> &'static Template {
        match self {
            TemplateId::Template1 => &TEMPLATE1,
            TemplateId::Template2 => &TEMPLATE2,
            TemplateId::Root => &ROOT,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateId {
    type Err = crate::error::ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| template_error::unknown(s))
    }
}

/// One file blueprint inside a template
#[derive(Debug)]
pub struct TemplateFile {
    pub path: &'static str,
    pub content: &'static str,
}

/// A named, read-only set of file blueprints
#[derive(Debug)]
pub struct Template {
    pub id: TemplateId,
    pub files: &'static [TemplateFile],
}

impl Template {
    /// Sorted, de-duplicated placeholder keys used anywhere in this template
    pub fn required_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self
            .files
            .iter()
            .flat_map(|file| placeholders(file.path).chain(placeholders(file.content)))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

static TEMPLATE1: Template = Template {
    id: TemplateId::Template1,
    files: &[
        TemplateFile {
            path: "package.json",
            content: include_str!("files/template1/package.json"),
        },
        TemplateFile {
            path: "index.js",
            content: include_str!("files/template1/index.js"),
        },
        TemplateFile {
            path: "README.md",
            content: include_str!("files/template1/README.md"),
        },
    ],
};

static TEMPLATE2: Template = Template {
    id: TemplateId::Template2,
    files: &[
        TemplateFile {
            path: "package.json",
            content: include_str!("files/template2/package.json"),
        },
        TemplateFile {
            path: "index.js",
            content: include_str!("files/template2/index.js"),
        },
        TemplateFile {
            path: "README.md",
            content: include_str!("files/template2/README.md"),
        },
    ],
};

// `.gitignore` is stored without the dot so packaging tools don't treat it as
// an ignore file for the template directory itself.
static ROOT: Template = Template {
    id: TemplateId::Root,
    files: &[
        TemplateFile {
            path: "package.json",
            content: include_str!("files/root/package.json"),
        },
        TemplateFile {
            path: "README.md",
            content: include_str!("files/root/README.md"),
        },
        TemplateFile {
            path: "LICENSE",
            content: include_str!("files/root/LICENSE"),
        },
        TemplateFile {
            path: ".gitignore",
            content: include_str!("files/root/gitignore"),
        },
    ],
};

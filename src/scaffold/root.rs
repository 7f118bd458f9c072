//! Root assembler

use std::path::PathBuf;

use crate::domain::RootSpec;
use crate::error::{Result, config as config_error};
use crate::template::{self, RenderedFile, TemplateId};

/// Builder for the monorepo root files
///
/// The packages must already exist on disk; the root manifest refers to them
/// through the `packages/*` workspace glob.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct RootTemplate {
    root_path: PathBuf,
    project_name: Option<String>,
    author_name: Option<String>,
    package1: Option<String>,
}

impl RootTemplate {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Self::default()
        }
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    /// Package referenced by the root manifest's scripts
    pub fn package1(mut self, name: impl Into<String>) -> Self {
        self.package1 = Some(name.into());
        self
    }

    pub fn build(self) -> Result<RootSpec> {
        let missing = |field: &str| config_error::incomplete("project root", field);

        Ok(RootSpec {
            project_name: self.project_name.ok_or_else(|| missing("project_name"))?,
            author_name: self.author_name.ok_or_else(|| missing("author_name"))?,
            package1: self.package1.ok_or_else(|| missing("package1"))?,
            root_path: self.root_path,
        })
    }

    /// Render the root files without touching the filesystem
    pub fn render(self) -> Result<(RootSpec, Vec<RenderedFile>)> {
        let spec = self.build()?;
        let files = template::render(TemplateId::Root, &spec.substitutions())?;
        Ok((spec, files))
    }

    /// Render and write the root files, returning the paths written
    pub fn create(self) -> Result<Vec<PathBuf>> {
        let (spec, files) = self.render()?;
        let written = super::write_rendered(&spec.root_path, &files)?;
        tracing::info!(project = %spec.project_name, files = written.len(), "created root files");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn shop_root(path: &Path) -> RootTemplate {
        RootTemplate::new(path)
            .project_name("shop")
            .author_name("Jane")
            .package1("is-even")
    }

    #[test]
    fn test_create_writes_root_files() {
        let temp = TempDir::new().unwrap();
        let written = shop_root(temp.path()).create().unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["package.json", "README.md", "LICENSE", ".gitignore"]);

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("package.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["name"], "shop");
        assert_eq!(manifest["private"], true);
        assert_eq!(manifest["workspaces"], serde_json::json!(["packages/*"]));
        assert!(manifest["scripts"]["test:is-even"].is_string());
    }

    #[test]
    fn test_gitignore_ignores_node_modules() {
        let temp = TempDir::new().unwrap();
        shop_root(temp.path()).create().unwrap();
        let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(gitignore.lines().any(|l| l == "node_modules/"));
    }

    #[test]
    fn test_missing_author() {
        let err = RootTemplate::new("shop")
            .project_name("shop")
            .package1("is-even")
            .build()
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::IncompleteConfig { ref field, .. } if field == "author_name"));
    }

    #[test]
    fn test_create_twice_overwrites() {
        let temp = TempDir::new().unwrap();
        shop_root(temp.path()).create().unwrap();
        fs::write(temp.path().join("LICENSE"), "changed").unwrap();
        shop_root(temp.path()).create().unwrap();
        assert!(
            fs::read_to_string(temp.path().join("LICENSE"))
                .unwrap()
                .starts_with("MIT License")
        );
    }
}

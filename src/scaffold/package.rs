//! Package assembler

use std::path::PathBuf;

use crate::domain::PackageSpec;
use crate::error::{Result, config as config_error};
use crate::template::{self, RenderedFile, TemplateId};

/// Builder for one workspace package directory
///
/// ```ignore
/// PackageTemplate::new(packages_dir.join("is-odd"))
///     .project_name("shop")
///     .package_name("is-odd")
///     .template(TemplateId::Template2)
///     .depends_on("is-even")
///     .create()?;
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct PackageTemplate {
    package_path: PathBuf,
    project_name: Option<String>,
    package_name: Option<String>,
    template_id: Option<TemplateId>,
    depends_on: Option<String>,
}

impl PackageTemplate {
    pub fn new(package_path: impl Into<PathBuf>) -> Self {
        Self {
            package_path: package_path.into(),
            ..Self::default()
        }
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn template(mut self, id: TemplateId) -> Self {
        self.template_id = Some(id);
        self
    }

    /// Name of the workspace package this one depends on
    pub fn depends_on(mut self, package: impl Into<String>) -> Self {
        self.depends_on = Some(package.into());
        self
    }

    /// Validate the configuration and turn it into a [`PackageSpec`]
    pub fn build(self) -> Result<PackageSpec> {
        let target = self.describe();
        let missing = |field: &str| config_error::incomplete(target.clone(), field);

        let project_name = self.project_name.ok_or_else(|| missing("project_name"))?;
        let package_name = self.package_name.ok_or_else(|| missing("package_name"))?;
        let template_id = self.template_id.ok_or_else(|| missing("template"))?;

        if template_id == TemplateId::Template2 && self.depends_on.is_none() {
            return Err(missing("depends_on"));
        }
        if template_id == TemplateId::Root {
            return Err(crate::error::template::unknown(format!(
                "{template_id} (not a package template)"
            )));
        }

        Ok(PackageSpec {
            package_path: self.package_path,
            project_name,
            package_name,
            template_id,
            depends_on: self.depends_on,
        })
    }

    /// Render the package without touching the filesystem
    pub fn render(self) -> Result<(PackageSpec, Vec<RenderedFile>)> {
        let spec = self.build()?;
        let files = template::render(spec.template_id, &spec.substitutions())?;
        Ok((spec, files))
    }

    /// Render and write the package, returning the paths written
    pub fn create(self) -> Result<Vec<PathBuf>> {
        let (spec, files) = self.render()?;
        let written = super::write_rendered(&spec.package_path, &files)?;
        tracing::info!(
            package = %spec.package_name,
            template = %spec.template_id,
            files = written.len(),
            "created package"
        );
        Ok(written)
    }

    fn describe(&self) -> String {
        match &self.package_name {
            Some(name) => format!("package '{name}'"),
            None => format!("package at {}", self.package_path.display()),
        }
    }
}

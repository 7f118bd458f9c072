//! Fully configured inputs for one package or for the project root

use std::path::PathBuf;

use crate::template::{Substitutions, TemplateId, keys};

/// Everything needed to generate one workspace package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub package_path: PathBuf,
    pub project_name: String,
    pub package_name: String,
    pub template_id: TemplateId,
    pub depends_on: Option<String>,
}

impl PackageSpec {
    pub fn substitutions(&self) -> Substitutions {
        let mut subs = Substitutions::new()
            .with(keys::PROJECT_NAME, &self.project_name)
            .with(keys::PACKAGE_NAME, &self.package_name);
        if let Some(upstream) = &self.depends_on {
            subs.insert(keys::PACKAGE1, upstream);
        }
        subs
    }
}

/// Everything needed to generate the monorepo root files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSpec {
    pub root_path: PathBuf,
    pub project_name: String,
    pub author_name: String,
    pub package1: String,
}

impl RootSpec {
    pub fn substitutions(&self) -> Substitutions {
        Substitutions::new()
            .with(keys::PROJECT_NAME, &self.project_name)
            .with(keys::AUTHOR_NAME, &self.author_name)
            .with(keys::PACKAGE1, &self.package1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_substitutions_without_dependency() {
        let spec = PackageSpec {
            package_path: PathBuf::from("shop/packages/is-even"),
            project_name: "shop".to_string(),
            package_name: "is-even".to_string(),
            template_id: TemplateId::Template1,
            depends_on: None,
        };
        let subs = spec.substitutions();
        assert_eq!(subs.get(keys::PROJECT_NAME), Some("shop"));
        assert_eq!(subs.get(keys::PACKAGE_NAME), Some("is-even"));
        assert_eq!(subs.get(keys::PACKAGE1), None);
    }

    #[test]
    fn test_package_substitutions_with_dependency() {
        let spec = PackageSpec {
            package_path: PathBuf::from("shop/packages/is-odd"),
            project_name: "shop".to_string(),
            package_name: "is-odd".to_string(),
            template_id: TemplateId::Template2,
            depends_on: Some("is-even".to_string()),
        };
        assert_eq!(spec.substitutions().get(keys::PACKAGE1), Some("is-even"));
    }

    #[test]
    fn test_root_substitutions() {
        let spec = RootSpec {
            root_path: PathBuf::from("shop"),
            project_name: "shop".to_string(),
            author_name: "Jane".to_string(),
            package1: "is-even".to_string(),
        };
        let subs = spec.substitutions();
        assert_eq!(subs.get(keys::AUTHOR_NAME), Some("Jane"));
        assert_eq!(subs.get(keys::PACKAGE1), Some("is-even"));
    }
}

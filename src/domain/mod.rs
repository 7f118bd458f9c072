//! Domain models for npm-workspace
//!
//! Plain value types describing what gets generated. They hold the naming
//! rules and build the substitution sets the templates are rendered with.

pub mod package;
pub mod project;

pub use package::{PackageSpec, RootSpec};
pub use project::{ProjectSpec, validate_author_name, validate_project_name};

/// Directory holding the workspace member packages
pub const PACKAGES_DIR: &str = "packages";

/// First example package, rendered from `template1`
pub const PACKAGE1_NAME: &str = "is-even";

/// Second example package, rendered from `template2` and depending on [`PACKAGE1_NAME`]
pub const PACKAGE2_NAME: &str = "is-odd";

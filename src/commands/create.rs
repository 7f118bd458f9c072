//! Default command: create a project

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Result, ScaffoldError};
use crate::install::NpmInstaller;
use crate::operations::create::{CreateOptions, InstallOutcome, create_project};
use crate::prompt::InquirePrompt;
use crate::ui::{banner, progress};

/// Resolve the parent directory from an optional argument
///
/// If a directory is provided, use it. Otherwise, resolve to the current
/// directory.
fn resolve_parent_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| ScaffoldError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Run the create command
pub fn run(cli: Cli) -> Result<()> {
    if !cli.no_banner {
        banner::print();
    }

    let options = CreateOptions {
        install: cli.install_choice(),
        parent_dir: resolve_parent_dir(cli.dir)?,
        project: cli.project,
        author: cli.author,
        init_git: !cli.no_git,
        dry_run: cli.dry_run,
    };

    let installer = NpmInstaller::new(cli.npm);
    let mut reporter = progress::reporter_for_terminal();
    let created = create_project(&options, &InquirePrompt, &installer, reporter.as_mut())?;

    if created.install == InstallOutcome::DryRun {
        return Ok(());
    }

    tracing::debug!(
        project = created.spec.project_name(),
        files = created.files.len(),
        git = created.git_initialized,
        "project created"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_parent_dir_explicit() {
        let dir = PathBuf::from("/tmp/somewhere");
        assert_eq!(resolve_parent_dir(Some(dir.clone())).unwrap(), dir);
    }

    #[test]
    fn test_resolve_parent_dir_defaults_to_cwd() {
        assert_eq!(
            resolve_parent_dir(None).unwrap(),
            std::env::current_dir().unwrap()
        );
    }
}

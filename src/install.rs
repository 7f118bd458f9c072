//! Dependency installation in the generated project

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Result, command as command_error};
use crate::ui::ProgressReporter;

/// Default installer program
pub const DEFAULT_NPM: &str = "npm";

/// Arguments passed to the installer program
pub const INSTALL_ARGS: [&str; 2] = ["install", "--legacy-peer-deps"];

/// Installs dependencies for a generated project
pub trait DependencyInstaller {
    /// Command line shown to the user, e.g. in next-step instructions
    fn command_line(&self) -> String;

    /// Run the installation with `project_dir` as working directory
    fn install(&self, project_dir: &Path, progress: &mut dyn ProgressReporter) -> Result<()>;
}

/// Runs `<program> install --legacy-peer-deps`
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
}

impl NpmInstaller {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_NPM)
    }
}

impl DependencyInstaller for NpmInstaller {
    fn command_line(&self) -> String {
        format!("{} {}", self.program, INSTALL_ARGS.join(" "))
    }

    fn install(&self, project_dir: &Path, progress: &mut dyn ProgressReporter) -> Result<()> {
        let command_line = self.command_line();
        tracing::info!(command = %command_line, dir = %project_dir.display(), "installing dependencies");
        progress.start(&format!("Running {command_line}"));

        let output = Command::new(&self.program)
            .args(INSTALL_ARGS)
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                progress.abandon("Could not start installer");
                return Err(command_error::spawn_failed(command_line, e.to_string()));
            }
        };

        if !output.status.success() {
            progress.abandon("Dependency installation failed");
            let stderr = String::from_utf8_lossy(&output.stderr);
            for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
                tracing::warn!("{line}");
            }
            return Err(command_error::failed(command_line, output.status.to_string()));
        }

        progress.finish("Dependencies installed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::ui::SilentProgressReporter;
    use tempfile::TempDir;

    #[test]
    fn test_command_line() {
        assert_eq!(NpmInstaller::default().command_line(), "npm install --legacy-peer-deps");
        assert_eq!(
            NpmInstaller::new("pnpm").command_line(),
            "pnpm install --legacy-peer-deps"
        );
    }

    #[test]
    fn test_missing_program_fails_to_spawn() {
        let temp = TempDir::new().unwrap();
        let installer = NpmInstaller::new("npm-workspace-no-such-program");
        let err = installer
            .install(temp.path(), &mut SilentProgressReporter)
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::CommandSpawnFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_an_error() {
        let temp = TempDir::new().unwrap();
        // `false` ignores its arguments and exits with status 1
        let installer = NpmInstaller::new("false");
        let err = installer
            .install(temp.path(), &mut SilentProgressReporter)
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::CommandFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_succeeds() {
        let temp = TempDir::new().unwrap();
        let installer = NpmInstaller::new("true");
        assert!(installer.install(temp.path(), &mut SilentProgressReporter).is_ok());
    }
}

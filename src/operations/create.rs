//! Project creation: generate files, initialize git, install dependencies
//!
//! The sequence is strictly linear. Both packages are written before the
//! root files, and nothing already written is removed if a later step fails.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::InstallChoice;
use crate::domain::{PACKAGE1_NAME, PACKAGE2_NAME, PACKAGES_DIR, ProjectSpec};
use crate::error::{Result, fs as fs_error};
use crate::git;
use crate::install::DependencyInstaller;
use crate::prompt::Prompt;
use crate::scaffold::{PackageTemplate, RootTemplate};
use crate::template::{RenderedFile, TemplateId};
use crate::ui::{ProgressReporter, style};

/// Inputs for one project creation
#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub project: Option<String>,
    pub author: Option<String>,
    /// Directory the project directory is created in
    pub parent_dir: PathBuf,
    pub install: InstallChoice,
    pub init_git: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    Skipped,
    DryRun,
}

/// What a creation run produced
#[derive(Debug)]
pub struct CreatedProject {
    pub spec: ProjectSpec,
    pub root: PathBuf,
    /// Generated files (or files that would be generated, for a dry run)
    pub files: Vec<PathBuf>,
    pub git_initialized: bool,
    pub install: InstallOutcome,
}

/// Take names from the options, prompting for whatever is missing
pub fn resolve_project(options: &CreateOptions, prompt: &dyn Prompt) -> Result<ProjectSpec> {
    let project = match &options.project {
        Some(project) => project.clone(),
        None => prompt.project_name()?,
    };
    let author = match &options.author {
        Some(author) => author.clone(),
        None => prompt.author_name()?,
    };
    ProjectSpec::new(&project, &author)
}

fn package_templates(spec: &ProjectSpec, root: &Path) -> [PackageTemplate; 2] {
    let packages = root.join(PACKAGES_DIR);
    [
        PackageTemplate::new(packages.join(PACKAGE1_NAME))
            .project_name(spec.project_name())
            .package_name(PACKAGE1_NAME)
            .template(TemplateId::Template1),
        PackageTemplate::new(packages.join(PACKAGE2_NAME))
            .project_name(spec.project_name())
            .package_name(PACKAGE2_NAME)
            .template(TemplateId::Template2)
            .depends_on(PACKAGE1_NAME),
    ]
}

fn root_template(spec: &ProjectSpec, root: &Path) -> RootTemplate {
    RootTemplate::new(root)
        .project_name(spec.project_name())
        .author_name(spec.author_name())
        .package1(PACKAGE1_NAME)
}

/// Render the whole project without writing anything
///
/// Returned paths are joined onto `root`, packages first.
pub fn plan(spec: &ProjectSpec, root: &Path) -> Result<Vec<RenderedFile>> {
    let mut planned = Vec::new();

    for package in package_templates(spec, root) {
        let (package_spec, files) = package.render()?;
        planned.extend(files.into_iter().map(|f| RenderedFile {
            path: package_spec.package_path.join(f.path),
            content: f.content,
        }));
    }

    let (_, files) = root_template(spec, root).render()?;
    planned.extend(files.into_iter().map(|f| RenderedFile {
        path: root.join(f.path),
        content: f.content,
    }));

    Ok(planned)
}

fn ensure_project_dirs(root: &Path) -> Result<()> {
    if root.exists() && !root.is_dir() {
        return Err(fs_error::project_path_is_file(root.display().to_string()));
    }

    for dir in [root.to_path_buf(), root.join(PACKAGES_DIR)] {
        fs::create_dir_all(&dir).map_err(|e| fs_error::dir_error(&dir, &e))?;
    }
    Ok(())
}

fn relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

/// Directory to `cd` into from `cwd` to reach `root`
///
/// Relative roots are already relative to the working directory. Absolute
/// roots are shortened when they lie below `cwd`, and kept as-is otherwise.
pub fn cd_target(root: &Path, cwd: Option<&Path>) -> PathBuf {
    if root.is_relative() {
        return root.to_path_buf();
    }
    cwd.and_then(|cwd| root.strip_prefix(cwd).ok())
        .filter(|rel| !rel.as_os_str().is_empty())
        .map_or_else(|| root.to_path_buf(), Path::to_path_buf)
}

/// Steps printed when dependencies are not installed right away
pub fn next_steps(project_dir: &Path, install_command: &str) -> Vec<String> {
    vec![
        format!("cd {}", project_dir.display()),
        install_command.to_string(),
        "npm test".to_string(),
    ]
}

fn print_summary(spec: &ProjectSpec, root: &Path, file_count: usize) {
    let location = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    println!(
        "{} {} {}",
        style::success("Created"),
        style::heading(spec.project_name()),
        style::muted(format!("({file_count} files) at {}", location.display()))
    );
}

fn print_next_steps(project_dir: &Path, install_command: &str) {
    println!();
    println!("{}", style::muted("Next steps:"));
    println!();
    for (i, step) in next_steps(project_dir, install_command).iter().enumerate() {
        println!("\t{}. {}", i + 1, style::success(step));
    }
    println!();
}

fn dry_run(options: &CreateOptions, spec: ProjectSpec, root: PathBuf) -> Result<CreatedProject> {
    let planned = plan(&spec, &root)?;

    println!("{}", style::heading("[DRY RUN] Would create:"));
    for file in &planned {
        println!("  {}", relative(&file.path, &options.parent_dir).display());
    }
    if options.init_git {
        println!("{}", style::muted("[DRY RUN] Would initialize a git repository"));
    }

    Ok(CreatedProject {
        spec,
        root,
        files: planned.into_iter().map(|f| f.path).collect(),
        git_initialized: false,
        install: InstallOutcome::DryRun,
    })
}

/// Generate a project, initialize git and install or skip dependencies
pub fn create_project(
    options: &CreateOptions,
    prompt: &dyn Prompt,
    installer: &dyn DependencyInstaller,
    progress: &mut dyn ProgressReporter,
) -> Result<CreatedProject> {
    let spec = resolve_project(options, prompt)?;
    let root = spec.project_path(&options.parent_dir);
    tracing::debug!(
        project = spec.project_name(),
        author = spec.author_name(),
        root = %root.display(),
        "resolved project"
    );

    if options.dry_run {
        return dry_run(options, spec, root);
    }

    ensure_project_dirs(&root)?;

    let mut files = Vec::new();
    for package in package_templates(&spec, &root) {
        files.extend(package.create()?);
    }
    files.extend(root_template(&spec, &root).create()?);

    for file in &files {
        println!(
            "  {} {}",
            style::success("created"),
            relative(file, &options.parent_dir).display()
        );
    }
    println!();

    let git_initialized = options.init_git && git::init_repository(&root)?;
    if git_initialized {
        println!("{}", style::muted("Initialized empty git repository"));
        println!();
    }

    print_summary(&spec, &root, files.len());

    let install = match options.install {
        InstallChoice::Yes => true,
        InstallChoice::No => false,
        InstallChoice::Ask => prompt.confirm_install()?,
    };

    let install = if install {
        installer.install(&root, progress)?;
        InstallOutcome::Installed
    } else {
        tracing::debug!("dependency installation skipped");
        let cwd = std::env::current_dir().ok();
        print_next_steps(&cd_target(&root, cwd.as_deref()), &installer.command_line());
        InstallOutcome::Skipped
    };

    Ok(CreatedProject {
        spec,
        root,
        files,
        git_initialized,
        install,
    })
}

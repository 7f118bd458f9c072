//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::Parser;
use std::path::PathBuf;

/// npm-workspace - npm monorepo generator
///
/// Generates an npm workspaces monorepo with two example packages.
#[derive(Parser, Debug)]
#[command(
    name = "npm-workspace",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate an npm workspaces monorepo with two example packages",
    long_about = "npm-workspace creates <project>/ with a root package.json declaring \
                  packages/* as workspaces, plus packages/is-even and packages/is-odd \
                  (which depends on is-even). It then initializes git and optionally \
                  runs npm install.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  npm-workspace                              \x1b[90m# Prompt for everything\x1b[0m\n   \
                  npm-workspace -p shop -a Jane              \x1b[90m# Prompt only for install\x1b[0m\n   \
                  npm-workspace -p shop -a Jane --skip-install\n   \
                  npm-workspace -p shop -a Jane --dry-run    \x1b[90m# Show what would be created\x1b[0m"
)]
pub struct Cli {
    /// Name of the project (prompted if omitted)
    #[arg(long, short = 'p', value_name = "NAME")]
    pub project: Option<String>,

    /// Author of the project (prompted if omitted)
    #[arg(long, short = 'a', value_name = "NAME", env = "NPM_WORKSPACE_AUTHOR")]
    pub author: Option<String>,

    /// Directory to create the project in (defaults to current directory)
    #[arg(long, short = 'C', value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Install dependencies without asking
    #[arg(long, conflicts_with = "skip_install")]
    pub install: bool,

    /// Skip dependency installation without asking
    #[arg(long)]
    pub skip_install: bool,

    /// Do not initialize a git repository
    #[arg(long)]
    pub no_git: bool,

    /// Program used to install dependencies
    #[arg(long, value_name = "PROGRAM", env = "NPM_WORKSPACE_NPM", default_value = crate::install::DEFAULT_NPM)]
    pub npm: String,

    /// Show the files that would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum, ignore_case = true)]
    pub completions: Option<clap_complete::Shell>,
}

/// Answer to "install dependencies now?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallChoice {
    Ask,
    Yes,
    No,
}

impl Cli {
    pub fn install_choice(&self) -> InstallChoice {
        match (self.install, self.skip_install) {
            (true, _) => InstallChoice::Yes,
            (_, true) => InstallChoice::No,
            _ => InstallChoice::Ask,
        }
    }
}

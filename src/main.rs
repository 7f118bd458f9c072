//! npm-workspace - npm monorepo generator
//!
//! Generates an npm workspaces monorepo with a root package and two example
//! packages (`is-even` and `is-odd`, the latter depending on the former),
//! initializes git and optionally installs dependencies.

use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod git;
mod install;
mod logging;
mod operations;
mod prompt;
mod scaffold;
mod template;
mod transaction;
mod ui;

use cli::Cli;
use error::Result;

fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return commands::completions::run(shell);
    }
    commands::create::run(cli)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "project creation failed");
        eprintln!("{} {}", ui::style::error("Error:"), e);
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("  {} {}", ui::style::muted("help:"), help);
        }
        std::process::exit(1);
    }
}

//! Shell completions

use clap::CommandFactory;
use clap_complete::Shell;

use crate::error::Result;

/// Generate shell completions to stdout
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "npm-workspace", &mut std::io::stdout().lock());

    Ok(())
}

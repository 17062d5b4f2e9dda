//! Completions command.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::Result;

/// Write a completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    write(shell, &mut std::io::stdout());
    Ok(())
}

fn write(shell: Shell, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin, out);
}

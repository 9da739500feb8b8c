//! `mapi completions <shell>` – emit a shell completion script.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn run_completions(shell: Shell) {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

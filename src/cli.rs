use std::io::Write;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::config::ConfigCommands;
use crate::commands::projects::ProjectsArgs;
use crate::commands::theme::ThemeCommands;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show a user's most recently pushed GitHub projects
    Projects(ProjectsArgs),

    /// Portfolio theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn completion_script(shell: Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let mut out = Vec::new();
    clap_complete::generate(shell, &mut cmd, "folio", &mut out);
    out
}

pub fn print_completions(shell: Shell) -> std::io::Result<()> {
    std::io::stdout().write_all(&completion_script(shell))
}

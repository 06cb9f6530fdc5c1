//! Shell completion generation command.
//!
//! Generates completion scripts for bash, zsh, fish, and PowerShell on
//! stdout, with setup hints on stderr.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pathsight";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!(
                        "#   pathsight completions bash > ~/.local/share/bash-completion/completions/pathsight"
                    );
                    eprintln!("# Or in ~/.bashrc:");
                    eprintln!("#   eval \"$(pathsight completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("#   pathsight completions zsh > ~/.zsh/completions/_pathsight");
                    eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                }
                Shell::Fish => {
                    eprintln!(
                        "#   pathsight completions fish > ~/.config/fish/completions/pathsight.fish"
                    );
                }
                Shell::PowerShell => {
                    eprintln!(
                        "#   pathsight completions powershell | Out-String | Invoke-Expression"
                    );
                }
                _ => {}
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

//! Main entry point for the pathsight CLI.
//!
//! This is the command-line interface for the pathsight path toolkit.
//! It provides commands for working with path lists:
//! - `split`: Decompose paths into drive, root, segments, stem and suffix
//! - `tokenize`: Tokenize the pieces of each path
//! - `tag`: Tag paths with a positional, folder or extension tagger
//! - `transform`: Apply a string method to a scope of each path
//! - `validate`: Check a tagger configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity and route library diagnostics to it
    pathsight::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        flavour: cli.flavour,
        input: cli.input,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Tokenize(cmd) => cmd.execute(&global),
        cli::Command::Tag(cmd) => cmd.execute(&global),
        cli::Command::Transform(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

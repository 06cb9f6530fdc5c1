//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, SplitCommand, TagCommand, TokenizeCommand, TransformCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use pathsight::Flavour;
use std::path::PathBuf;

/// Command-line tool for decomposing, tokenizing and tagging file paths.
#[derive(Parser)]
#[command(name = "pathsight")]
#[command(version, about = "Decompose, tokenize and tag file paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path flavour used to decompose input (windows or posix) [default: posix]
    #[arg(long, value_name = "FLAVOUR", global = true, env = "PATHSIGHT_FLAVOUR")]
    pub flavour: Option<Flavour>,

    /// Read paths from a file, one per line ('-' for stdin)
    #[arg(long, value_name = "FILE", global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Decompose paths into their structural pieces
    Split(SplitCommand),

    /// Tokenize the pieces of each path
    Tokenize(TokenizeCommand),

    /// Tag paths or their pieces
    Tag(TagCommand),

    /// Apply a string method to part of each path
    Transform(TransformCommand),

    /// Validate a tagger configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

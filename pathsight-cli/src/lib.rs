//! Library exports for pathsight-cli.
//!
//! This module exports the CLI structure so documentation and man pages
//! can be generated from it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for documentation tooling
pub use cli::Cli;

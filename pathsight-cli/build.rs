//! Build script for pathsight-cli.
//!
//! Renders a man page with clap_mangen into OUT_DIR/man. Build scripts
//! cannot depend on the crate being built, so the command tree is
//! restated here and must follow src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("pathsight")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decompose, tokenize and tag file paths")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flavour")
                .long("flavour")
                .help("Path flavour used to decompose input (windows or posix)")
                .value_name("FLAVOUR")
                .global(true)
                .env("PATHSIGHT_FLAVOUR"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .help("Read paths from a file, one per line ('-' for stdin)")
                .value_name("FILE")
                .global(true),
        )
        .subcommands([
            Command::new("split").about("Decompose paths into their structural pieces"),
            Command::new("tokenize").about("Tokenize the pieces of each path"),
            Command::new("tag").about("Tag paths or their pieces"),
            Command::new("transform").about("Apply a string method to part of each path"),
            Command::new("validate").about("Validate a tagger configuration file"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("pathsight.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}

//! Split command implementation.
//!
//! Prints the structural pieces of each input path.

use crate::error::CliError;
use crate::utils::{
    decompose_all, read_paths, write_csv, write_json, write_table, GlobalOptions, OutputFormat,
};
use clap::Args;
use pathsight::StructuredPath;
use serde::Serialize;
use std::io;

const HEADERS: [&str; 7] = ["path", "drive", "root", "segments", "name", "stem", "suffix"];

/// Decompose paths into drive, root, segments, name, stem and suffix.
#[derive(Args)]
pub struct SplitCommand {
    /// Paths to decompose (read from --input or stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct SplitRow<'a> {
    path: String,
    drive: &'a str,
    root: &'a str,
    segments: &'a [String],
    name: &'a str,
    stem: &'a str,
    suffix: &'a str,
}

impl<'a> SplitRow<'a> {
    fn new(path: &'a StructuredPath) -> Self {
        Self {
            path: path.to_string(),
            drive: path.drive(),
            root: path.root(),
            segments: path.segments(),
            name: path.name(),
            stem: path.stem(),
            suffix: path.suffix(),
        }
    }

    fn cells(&self, separator: char) -> Vec<String> {
        vec![
            self.path.clone(),
            self.drive.to_string(),
            self.root.to_string(),
            self.segments.join(&separator.to_string()),
            self.name.to_string(),
            self.stem.to_string(),
            self.suffix.to_string(),
        ]
    }
}

impl SplitCommand {
    /// Execute the split command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavour = global.flavour_or(None);
        let raw = read_paths(&self.paths, global)?;
        let paths = decompose_all(&raw, flavour)?;
        let rows: Vec<SplitRow<'_>> = paths.iter().map(SplitRow::new).collect();

        let stdout = io::stdout();
        match self.format {
            OutputFormat::Json => write_json(stdout.lock(), &rows),
            OutputFormat::Table | OutputFormat::Csv => {
                let cells: Vec<Vec<String>> =
                    rows.iter().map(|r| r.cells(flavour.separator())).collect();
                if self.format == OutputFormat::Csv {
                    write_csv(stdout.lock(), &HEADERS, &cells)
                } else {
                    write_table(&mut stdout.lock(), &HEADERS, &cells, global.quiet)
                }
            }
        }
    }
}

//! Utility functions and types for the CLI.

use crate::error::CliError;
use clap::ValueEnum;
use pathsight::{Flavour, StructuredPath};
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

/// Global options that apply to all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Path flavour given on the command line or through the environment.
    pub flavour: Option<Flavour>,
    /// File to read paths from (`-` for stdin).
    pub input: Option<PathBuf>,
}

impl GlobalOptions {
    /// The flavour to decompose with.
    ///
    /// An explicit flag or environment value wins over `configured`, which
    /// wins over the POSIX default.
    pub fn flavour_or(&self, configured: Option<Flavour>) -> Flavour {
        self.flavour.or(configured).unwrap_or(Flavour::Posix)
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table with a header row.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
    /// CSV with a header row.
    Csv,
}

/// Collect input paths.
///
/// Positional arguments win. Otherwise lines are read from the `--input`
/// file (`-` meaning stdin) or, failing that, from stdin. Blank lines are
/// skipped and a trailing `\r` is dropped.
pub fn read_paths(args: &[String], global: &GlobalOptions) -> Result<Vec<String>, CliError> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    let contents = match global.input.as_deref() {
        Some(path) if path != Path::new("-") => fs::read_to_string(path).map_err(|e| {
            CliError::Io(io::Error::new(
                e.kind(),
                format!("cannot read {}: {e}", path.display()),
            ))
        })?,
        _ => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    split_lines(contents.as_bytes()).map_err(CliError::from)
}

fn split_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Decompose every raw path with `flavour`.
///
/// The first path that cannot be decomposed aborts the batch; its position
/// is included in the error.
pub fn decompose_all(raw: &[String], flavour: Flavour) -> Result<Vec<StructuredPath>, CliError> {
    raw.iter()
        .enumerate()
        .map(|(i, line)| {
            StructuredPath::parse(flavour, line).map_err(|e| {
                CliError::SemanticFailure(format!("path {} ({line:?}): {e}", i + 1))
            })
        })
        .collect()
}

/// Write rows as a tab-separated table with an uppercase header.
pub fn write_table<W: Write>(
    out: &mut W,
    headers: &[&str],
    rows: &[Vec<String>],
    quiet: bool,
) -> Result<(), CliError> {
    if !quiet {
        let header: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();
        writeln!(out, "{}", header.join("\t"))?;
    }
    for row in rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

/// Write rows as CSV with a header.
pub fn write_csv<W: Write>(
    out: W,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<(), CliError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(out);
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

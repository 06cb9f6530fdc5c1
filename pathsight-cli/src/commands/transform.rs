//! Transform command implementation.
//!
//! Applies a named string method to one scope of every input path.
//! Transforming methods print the resulting path; predicates print
//! `true`/`false` and searches print a character index or `-1`.

use crate::error::CliError;
use crate::utils::{
    decompose_all, read_paths, write_csv, write_json, write_table, GlobalOptions, OutputFormat,
};
use clap::Args;
use pathsight::{apply_method, Applied, Scope, StrMethod};
use serde::Serialize;
use serde_json::Value;
use std::io;

/// Apply a string method to the whole path, its name, or its stem.
#[derive(Args)]
pub struct TransformCommand {
    /// Paths to transform (read from --input or stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// String method, e.g. lower, upper, replace, startswith, find
    #[arg(long, short = 'm', value_name = "METHOD")]
    pub method: String,

    /// Argument for the method (repeat for methods taking several)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Part of the path the method applies to (path, name or stem)
    #[arg(long, value_name = "SCOPE", default_value = "name")]
    pub scope: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct TransformRow {
    path: String,
    result: Value,
}

fn to_json(applied: &Applied) -> Value {
    match applied {
        Applied::Path(path) => Value::String(path.to_string()),
        Applied::Bool(value) => Value::Bool(*value),
        Applied::Index(Some(i)) => Value::from(*i),
        Applied::Index(None) => Value::from(-1),
    }
}

impl TransformCommand {
    /// Execute the transform command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let scope: Scope = self
            .scope
            .parse()
            .map_err(|e: pathsight::Error| CliError::InvalidArguments(e.to_string()))?;
        let method = StrMethod::with_args(&self.method, self.args.as_slice())
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let raw = read_paths(&self.paths, global)?;
        let paths = decompose_all(&raw, global.flavour_or(None))?;

        let mut rows = Vec::with_capacity(paths.len());
        let mut cells = Vec::with_capacity(paths.len());
        for path in &paths {
            let applied = apply_method(path, &method, scope)?;
            cells.push(vec![path.to_string(), applied.to_string()]);
            rows.push(TransformRow {
                path: path.to_string(),
                result: to_json(&applied),
            });
        }

        if global.verbose {
            eprintln!("Applied {method} to the {scope} of {} path(s)", paths.len());
        }

        let stdout = io::stdout();
        let headers = ["path", "result"];
        match self.format {
            OutputFormat::Json => write_json(stdout.lock(), &rows),
            OutputFormat::Csv => write_csv(stdout.lock(), &headers, &cells),
            OutputFormat::Table => {
                write_table(&mut stdout.lock(), &headers, &cells, global.quiet)
            }
        }
    }
}

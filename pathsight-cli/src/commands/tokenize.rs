//! Tokenize command implementation.

use crate::error::CliError;
use crate::utils::{
    decompose_all, read_paths, write_csv, write_json, write_table, GlobalOptions, OutputFormat,
};
use clap::Args;
use pathsight::Tokenizer;
use serde::Serialize;
use std::io;

/// Tokenize the segments and final name of each path.
#[derive(Args)]
pub struct TokenizeCommand {
    /// Paths to tokenize (read from --input or stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Regex whose matches are the tokens
    #[arg(long, value_name = "REGEX", conflicts_with = "split")]
    pub pattern: Option<String>,

    /// Regex matching the delimiters between tokens
    #[arg(long, value_name = "REGEX")]
    pub split: Option<String>,

    /// Tokenize the whole final name instead of only its stem
    #[arg(long)]
    pub include_extension: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct TokenRow {
    path: String,
    tokens: Vec<String>,
}

impl TokenizeCommand {
    fn tokenizer(&self) -> Result<Tokenizer, CliError> {
        let tokenizer = match (&self.pattern, &self.split) {
            (Some(pattern), _) => Tokenizer::new(pattern)?,
            (None, Some(split)) => Tokenizer::split(split)?,
            (None, None) => Tokenizer::default(),
        };
        Ok(tokenizer)
    }

    /// Execute the tokenize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tokenizer = self.tokenizer()?;
        let raw = read_paths(&self.paths, global)?;
        let paths = decompose_all(&raw, global.flavour_or(None))?;

        let rows: Vec<TokenRow> = paths
            .iter()
            .map(|path| TokenRow {
                path: path.to_string(),
                tokens: tokenizer.tokenize_path(path, !self.include_extension),
            })
            .collect();

        let stdout = io::stdout();
        let headers = ["path", "tokens"];
        let cells = || -> Vec<Vec<String>> {
            rows.iter()
                .map(|r| vec![r.path.clone(), r.tokens.join(" ")])
                .collect()
        };
        match self.format {
            OutputFormat::Json => write_json(stdout.lock(), &rows),
            OutputFormat::Csv => write_csv(stdout.lock(), &headers, &cells()),
            OutputFormat::Table => {
                write_table(&mut stdout.lock(), &headers, &cells(), global.quiet)
            }
        }
    }
}

//! Tag command implementation.
//!
//! The tagger is described either by `--kind` plus flags or by a YAML
//! configuration file. Flags given alongside a configuration file override
//! its values; every combination goes through the same validation.

use crate::error::CliError;
use crate::utils::{
    decompose_all, read_paths, write_csv, write_json, write_table, GlobalOptions, OutputFormat,
};
use clap::Args;
use pathsight::{ConfigLoader, TagOutput, Tagger, TaggerConfig, TaggerKind};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

/// Tag paths with a positional, folder or extension tagger.
#[derive(Args)]
pub struct TagCommand {
    /// Paths to tag (read from --input or stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Tagger kind (type, token-type, folder, extension, compression, document)
    #[arg(long, value_name = "KIND", conflicts_with = "config")]
    pub kind: Option<TaggerKind>,

    /// YAML tagger configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Four comma-separated labels: drive, folder, stem, extension
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub tag_names: Option<Vec<String>>,

    /// Match extensions case-insensitively (with the compression preset,
    /// batches containing .lzh, .lzx or .sqx are rejected as ambiguous)
    #[arg(long)]
    pub ignore_case: bool,

    /// Tag for extensions no rule matches
    #[arg(long, value_name = "TAG")]
    pub na_tag: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct TagRow {
    path: String,
    tag: TagOutput,
}

impl TagCommand {
    /// The tagger configuration described by the arguments.
    fn tagger_config(&self) -> Result<TaggerConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_file(path)?,
            None => TaggerConfig::for_kind(self.kind.unwrap_or_default()),
        };

        if let Some(names) = &self.tag_names {
            config.tag_names = Some(names.clone());
        }
        if self.ignore_case {
            config.ignore_case = Some(true);
        }
        if let Some(na_tag) = &self.na_tag {
            config.na_tag = Some(na_tag.clone());
        }
        Ok(config)
    }

    /// Execute the tag command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = self.tagger_config()?;
        let tagger = config.build()?;

        let raw = read_paths(&self.paths, global)?;
        let flavour = global.flavour_or(config.flavour);
        let paths = decompose_all(&raw, flavour)?;
        let tags = tagger.tag(&paths)?;

        if global.verbose {
            eprintln!(
                "Tagged {} {flavour} path(s) with the {} tagger",
                paths.len(),
                config.kind
            );
        }

        let rows: Vec<TagRow> = paths
            .iter()
            .zip(tags)
            .map(|(path, tag)| TagRow {
                path: path.to_string(),
                tag,
            })
            .collect();

        let stdout = io::stdout();
        let headers = ["path", "tag"];
        let cells = || -> Vec<Vec<String>> {
            rows.iter()
                .map(|r| vec![r.path.clone(), r.tag.to_string()])
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

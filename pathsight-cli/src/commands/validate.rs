//! Validate command implementation.
//!
//! This module implements validation of tagger configuration files.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathsight::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a tagger configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Path to configuration file to validate
    #[arg(value_name = "CONFIG_FILE")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                self.config_path.display()
            )));
        }

        let config = ConfigLoader::load_file(&self.config_path)
            .map_err(|e| CliError::Config(e.to_string()))?;
        ConfigValidator::validate(&config).map_err(|e| CliError::Config(e.to_string()))?;

        if !global.quiet {
            println!("Configuration is valid ({} tagger)", config.kind);
        }
        Ok(())
    }
}

//! Loading tagger configuration files.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::schema::TaggerConfig;
use crate::error::Result;

/// Reads tagger configurations from YAML.
///
/// # Examples
///
/// ```
/// use pathsight::config::{ConfigLoader, TaggerKind};
///
/// let config = ConfigLoader::from_yaml("kind: compression\nignore_case: true\n").unwrap();
/// assert_eq!(config.kind, TaggerKind::Compression);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<TaggerConfig> {
        debug!("loading tagger configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a YAML configuration document.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`](crate::Error::ConfigParse) if the YAML
    /// is invalid or names unknown fields.
    pub fn from_yaml(contents: &str) -> Result<TaggerConfig> {
        if contents.trim().is_empty() {
            return Ok(TaggerConfig::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}

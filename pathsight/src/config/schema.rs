//! Tagger configuration schema.
//!
//! A tagger configuration is a small YAML document selecting a tagger kind
//! and its options:
//!
//! ```yaml
//! kind: extension
//! ignore_case: true
//! na_tag: OTHER
//! tags:
//!   DOCUMENT: [".doc*", ".pdf"]
//!   ARCHIVE: .tar
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::Flavour;
use crate::tagger::ExtensionRules;

/// Which tagger a configuration builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaggerKind {
    /// Positional tagging of whole parts.
    #[default]
    Type,
    /// Positional tagging of tokens.
    TokenType,
    /// FILE/FOLDER tagging.
    Folder,
    /// Extension tagging with user rules.
    Extension,
    /// Extension tagging with the compression preset.
    Compression,
    /// Extension tagging with the document preset.
    Document,
}

impl TaggerKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Type,
        Self::TokenType,
        Self::Folder,
        Self::Extension,
        Self::Compression,
        Self::Document,
    ];

    /// Whether this is one of the positional kinds.
    #[must_use]
    pub const fn is_positional(self) -> bool {
        matches!(self, Self::Type | Self::TokenType)
    }

    /// Whether this is one of the extension kinds.
    #[must_use]
    pub const fn is_extension(self) -> bool {
        matches!(self, Self::Extension | Self::Compression | Self::Document)
    }
}

impl fmt::Display for TaggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Type => "type",
            Self::TokenType => "token-type",
            Self::Folder => "folder",
            Self::Extension => "extension",
            Self::Compression => "compression",
            Self::Document => "document",
        };
        f.write_str(name)
    }
}

impl FromStr for TaggerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string() == normalized)
            .ok_or_else(|| Error::configuration(format!("unknown tagger kind '{s}'")))
    }
}

/// Configuration for building one tagger.
///
/// # Examples
///
/// ```
/// use pathsight::config::{TaggerConfig, TaggerKind};
///
/// let config = TaggerConfig {
///     kind: TaggerKind::TokenType,
///     split_pattern: Some(r"\s+".to_string()),
///     ..Default::default()
/// };
/// assert!(config.build().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaggerConfig {
    /// The tagger kind. Defaults to `type`.
    #[serde(default)]
    pub kind: TaggerKind,

    /// Four positional labels: drive, folder, stem, extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_names: Option<Vec<String>>,

    /// Extension rules for the `extension` kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<ExtensionRules>,

    /// Tag for extensions no rule matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub na_tag: Option<String>,

    /// Case-insensitive extension matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,

    /// Treat `*` and `?` in extension patterns as wildcards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_wildcards: Option<bool>,

    /// Regex whose matches are tokens (`token-type` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_pattern: Option<String>,

    /// Regex matching delimiters between tokens (`token-type` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_pattern: Option<String>,

    /// Flavour for decomposing input paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavour: Option<Flavour>,
}

impl TaggerConfig {
    /// A configuration for `kind` with every option unset.
    #[must_use]
    pub fn for_kind(kind: TaggerKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("token-type".parse::<TaggerKind>().unwrap(), TaggerKind::TokenType);
        assert_eq!("TOKEN_TYPE".parse::<TaggerKind>().unwrap(), TaggerKind::TokenType);
        assert_eq!("document".parse::<TaggerKind>().unwrap(), TaggerKind::Document);
        assert!("pos".parse::<TaggerKind>().unwrap_err().is_configuration());
    }

    #[test]
    fn test_kind_display_roundtrip() {
        for kind in TaggerKind::ALL {
            assert_eq!(kind.to_string().parse::<TaggerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_groups() {
        assert!(TaggerKind::Type.is_positional());
        assert!(!TaggerKind::Folder.is_positional());
        assert!(TaggerKind::Compression.is_extension());
        assert!(!TaggerKind::TokenType.is_extension());
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: TaggerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, TaggerConfig::default());
        assert_eq!(config.kind, TaggerKind::Type);
    }

    #[test]
    fn test_deserialize_full() {
        let yaml = "kind: extension\nflavour: windows\nignore_case: true\nna_tag: n/a\ntags:\n  DOC: ['.doc', '.pdf']\n";
        let config: TaggerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.kind, TaggerKind::Extension);
        assert_eq!(config.flavour, Some(Flavour::Windows));
        assert_eq!(config.ignore_case, Some(true));
        assert_eq!(config.na_tag.as_deref(), Some("n/a"));
        assert_eq!(config.tags.unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<TaggerConfig, _> = serde_yaml::from_str("kind: type\nlabels: []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_unset() {
        let yaml = serde_yaml::to_string(&TaggerConfig::for_kind(TaggerKind::Folder)).unwrap();
        assert_eq!(yaml.trim(), "kind: folder");
    }
}

//! Tagger configuration validation.
//!
//! Validation catches options that do not apply to the selected kind, so a
//! misplaced option is reported instead of silently ignored.

use crate::config::schema::{TaggerConfig, TaggerKind};
use crate::error::{Error, Result};
use crate::tagger::{ExtensionTagger, TagNames};
use crate::tokenize::Tokenizer;

/// Validates tagger configurations.
///
/// # Examples
///
/// ```
/// use pathsight::config::{ConfigValidator, TaggerConfig};
///
/// ConfigValidator::validate(&TaggerConfig::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] or [`Error::InvalidPattern`] for
    /// invalid configurations.
    pub fn validate(config: &TaggerConfig) -> Result<()> {
        let kind = config.kind;

        if let Some(ref names) = config.tag_names {
            Self::require(kind.is_positional(), "tag_names", kind)?;
            TagNames::from_slice(names.as_slice())?;
        }

        Self::require(
            config.token_pattern.is_none() || kind == TaggerKind::TokenType,
            "token_pattern",
            kind,
        )?;
        Self::require(
            config.split_pattern.is_none() || kind == TaggerKind::TokenType,
            "split_pattern",
            kind,
        )?;
        Self::validate_tokenizer(config)?;

        for (field, set) in [
            ("na_tag", config.na_tag.is_some()),
            ("ignore_case", config.ignore_case.is_some()),
            ("use_wildcards", config.use_wildcards.is_some()),
        ] {
            Self::require(!set || kind.is_extension(), field, kind)?;
        }

        match (kind, &config.tags) {
            (TaggerKind::Extension, None) => {
                return Err(Error::configuration(
                    "tags: required for the extension tagger",
                ))
            }
            (TaggerKind::Extension, Some(_)) => {}
            (_, Some(_)) => Self::require(false, "tags", kind)?,
            (_, None) => {}
        }

        if kind.is_extension() {
            Self::extension_tagger(config)?;
        }

        Ok(())
    }

    fn require(allowed: bool, field: &str, kind: TaggerKind) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(Error::configuration(format!(
                "{field}: not valid for the {kind} tagger"
            )))
        }
    }

    fn validate_tokenizer(config: &TaggerConfig) -> Result<()> {
        if config.token_pattern.is_some() && config.split_pattern.is_some() {
            return Err(Error::configuration(
                "token_pattern and split_pattern are mutually exclusive",
            ));
        }
        Self::tokenizer(config).map(|_| ())
    }

    /// The tokenizer a configuration asks for, if any.
    pub(crate) fn tokenizer(config: &TaggerConfig) -> Result<Option<Tokenizer>> {
        match (&config.token_pattern, &config.split_pattern) {
            (Some(pattern), _) => Tokenizer::new(pattern).map(Some),
            (None, Some(pattern)) => Tokenizer::split(pattern).map(Some),
            (None, None) => Ok(None),
        }
    }

    /// The extension tagger a configuration describes.
    pub(crate) fn extension_tagger(config: &TaggerConfig) -> Result<ExtensionTagger> {
        let builder = match config.kind {
            TaggerKind::Compression => ExtensionTagger::compression(),
            TaggerKind::Document => ExtensionTagger::document(),
            _ => ExtensionTagger::builder(config.tags.clone().unwrap_or_default()),
        };
        builder
            .na_tag(config.na_tag.clone().unwrap_or_default())
            .ignore_case(config.ignore_case.unwrap_or(false))
            .use_wildcards(config.use_wildcards.unwrap_or(true))
            .build()
    }
}

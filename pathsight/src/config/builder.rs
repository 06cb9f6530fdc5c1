//! Building taggers from configuration.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::config::schema::{TaggerConfig, TaggerKind};
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::path::StructuredPath;
use crate::tagger::{ExtensionTagger, FolderTagger, TagNames, TaggedToken, Tagger, TypeTagger};

/// Any tagger a configuration can describe.
#[derive(Debug, Clone)]
pub enum AnyTagger {
    /// A positional tagger, plain or token level.
    Type(TypeTagger),
    /// A FILE/FOLDER tagger.
    Folder(FolderTagger),
    /// An extension tagger, generic or preset.
    Extension(ExtensionTagger),
}

/// What an [`AnyTagger`] produces for one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TagOutput {
    /// Tagged parts or tokens from a positional tagger.
    Tokens(Vec<TaggedToken>),
    /// A single label.
    Label(String),
}

impl fmt::Display for TagOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokens(tokens) => {
                let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
                f.write_str(&rendered.join(" "))
            }
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl Tagger for AnyTagger {
    type Output = TagOutput;

    fn tag(&self, paths: &[StructuredPath]) -> Result<Vec<TagOutput>> {
        Ok(match self {
            Self::Type(tagger) => tagger
                .tag(paths)?
                .into_iter()
                .map(TagOutput::Tokens)
                .collect(),
            Self::Folder(tagger) => tagger
                .tag(paths)?
                .into_iter()
                .map(TagOutput::Label)
                .collect(),
            Self::Extension(tagger) => tagger
                .tag(paths)?
                .into_iter()
                .map(TagOutput::Label)
                .collect(),
        })
    }
}

impl TaggerConfig {
    /// Validate the configuration and build its tagger.
    ///
    /// # Errors
    ///
    /// Returns the first validation error; see
    /// [`ConfigValidator::validate`].
    pub fn build(&self) -> Result<AnyTagger> {
        ConfigValidator::validate(self)?;
        debug!("building {} tagger", self.kind);

        let tagger = match self.kind {
            TaggerKind::Type | TaggerKind::TokenType => {
                let mut tagger = TypeTagger::new();
                if let Some(ref names) = self.tag_names {
                    tagger = tagger.with_tag_names(TagNames::from_slice(names.as_slice())?);
                }
                if self.kind == TaggerKind::TokenType {
                    let tokenizer = ConfigValidator::tokenizer(self)?.unwrap_or_default();
                    tagger = tagger.with_tokenizer(tokenizer);
                }
                AnyTagger::Type(tagger)
            }
            TaggerKind::Folder => AnyTagger::Folder(FolderTagger::new()),
            TaggerKind::Extension | TaggerKind::Compression | TaggerKind::Document => {
                AnyTagger::Extension(ConfigValidator::extension_tagger(self)?)
            }
        };
        Ok(tagger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn batch() -> Vec<StructuredPath> {
        ["D:/data/armel/", "D:/data/armel_jonathan/file3 test.xyz", "D:/x/y.pdf"]
            .iter()
            .map(|s| StructuredPath::windows(s).unwrap())
            .collect()
    }

    #[test]
    fn test_build_type() {
        let tagger = TaggerConfig::default().build().unwrap();
        let out = tagger.tag(&batch()).unwrap();
        assert_eq!(out[0].to_string(), "D:\\/DRV data/FLD armel/FLD");
    }

    #[test]
    fn test_build_token_type_with_split_pattern() {
        let config = ConfigLoader::from_yaml(
            "kind: token-type\nsplit_pattern: '\\s+'\ntag_names: [D, F, S, E]\n",
        )
        .unwrap();
        let out = config.build().unwrap().tag(&batch()).unwrap();
        assert_eq!(
            out[1].to_string(),
            "D:\\/D data/F armel_jonathan/F file3/S test/S .xyz/E"
        );
    }

    #[test]
    fn test_build_token_type_default_tokenizer() {
        let out = TaggerConfig::for_kind(TaggerKind::TokenType)
            .build()
            .unwrap()
            .tag(&batch())
            .unwrap();
        assert_eq!(out[0].to_string(), "D:/DRV data/FLD armel/FLD");
    }

    #[test]
    fn test_build_folder() {
        let out = TaggerConfig::for_kind(TaggerKind::Folder)
            .build()
            .unwrap()
            .tag(&batch())
            .unwrap();
        assert_eq!(
            out,
            [
                TagOutput::Label("FOLDER".into()),
                TagOutput::Label("FILE".into()),
                TagOutput::Label("FILE".into())
            ]
        );
    }

    #[test]
    fn test_build_document_preset() {
        let config = ConfigLoader::from_yaml("kind: document\nna_tag: '-'\n").unwrap();
        let out = config.build().unwrap().tag(&batch()).unwrap();
        let labels: Vec<String> = out.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["-", "-", "DOCUMENT"]);
    }

    #[test]
    fn test_build_extension() {
        let config =
            ConfigLoader::from_yaml("kind: extension\ntags:\n  XYZ: '.x?z'\n").unwrap();
        let out = config.build().unwrap().tag(&batch()).unwrap();
        let labels: Vec<String> = out.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["", "XYZ", ""]);
    }

    #[test]
    fn test_build_rejects_invalid() {
        assert!(TaggerConfig::for_kind(TaggerKind::Extension).build().is_err());
    }

    #[test]
    fn test_tag_output_json() {
        let tokens = TagOutput::Tokens(vec![TaggedToken::new("a", "FLD")]);
        assert_eq!(
            serde_json::to_string(&tokens).unwrap(),
            r#"[{"text":"a","tag":"FLD"}]"#
        );
        assert_eq!(
            serde_json::to_string(&TagOutput::Label("FILE".into())).unwrap(),
            r#""FILE""#
        );
    }
}

//! Labeling the structural pieces of paths.
//!
//! Three families of taggers share the [`Tagger`] trait:
//!
//! - [`TypeTagger`]: positional DRV/FLD/STM/EXT labels per part, or per
//!   token when built with a tokenizer
//! - [`FolderTagger`]: FILE or FOLDER per path
//! - [`ExtensionTagger`]: a tag per path from extension patterns, with
//!   shell-style wildcards expanded against the extensions actually seen
//!
//! Taggers are immutable once built and hold no shared mutable state, so a
//! single instance can tag batches from several threads.
//!
//! # Examples
//!
//! ```
//! use pathsight::tagger::{Tagger, TypeTagger};
//! use pathsight::StructuredPath;
//!
//! let paths = vec![StructuredPath::windows("D:/data/armel/file2.xyz").unwrap()];
//! let tagged = TypeTagger::new().tag(&paths).unwrap();
//!
//! let pairs: Vec<(&str, &str)> = tagged[0]
//!     .iter()
//!     .map(|t| (t.text.as_str(), t.tag.as_str()))
//!     .collect();
//! assert_eq!(
//!     pairs,
//!     [("D:\\", "DRV"), ("data", "FLD"), ("armel", "FLD"), ("file2", "STM"), (".xyz", "EXT")]
//! );
//! ```

mod data;
mod extension;
mod folder;
mod positional;

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::StructuredPath;

pub use data::{
    ARCHIVE, ARCHIVE_AND_COMPRESSION, COMPRESSION, DOCUMENT, IMAGE, PRESENTATION,
};
pub use extension::{ExtensionRules, ExtensionTagger, ExtensionTaggerBuilder};
pub use folder::FolderTagger;
pub use positional::TypeTagger;

/// Something that assigns labels to a batch of paths.
///
/// The output has one entry per input path, in input order.
pub trait Tagger {
    /// What a single path is labeled with.
    type Output;

    /// Tag every path in `paths`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the tagger's rules turn out to
    /// be inconsistent for this batch.
    fn tag(&self, paths: &[StructuredPath]) -> Result<Vec<Self::Output>>;
}

/// A piece of text and its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaggedToken {
    /// The part or token text.
    pub text: String,
    /// The label assigned to it.
    pub tag: String,
}

impl TaggedToken {
    /// Pair `text` with `tag`.
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text, self.tag)
    }
}

/// The four labels of the positional tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagNames {
    /// Label for the drive and root.
    pub drive: String,
    /// Label for folders.
    pub folder: String,
    /// Label for the stem of the final component.
    pub stem: String,
    /// Label for the extension.
    pub extension: String,
}

impl TagNames {
    /// Build from exactly four labels in drive, folder, stem, extension order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] unless exactly four labels are given.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsight::tagger::TagNames;
    ///
    /// let names = TagNames::from_slice(&["D", "F", "S", "E"]).unwrap();
    /// assert_eq!(names.stem, "S");
    /// assert!(TagNames::from_slice(&["D", "F", "S"]).is_err());
    /// ```
    pub fn from_slice<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        match labels {
            [drive, folder, stem, extension] => Ok(Self {
                drive: drive.as_ref().to_string(),
                folder: folder.as_ref().to_string(),
                stem: stem.as_ref().to_string(),
                extension: extension.as_ref().to_string(),
            }),
            _ => Err(Error::configuration(format!(
                "expected 4 tag names (drive, folder, stem, extension), got {}",
                labels.len()
            ))),
        }
    }
}

impl Default for TagNames {
    fn default() -> Self {
        Self {
            drive: "DRV".to_string(),
            folder: "FLD".to_string(),
            stem: "STM".to_string(),
            extension: "EXT".to_string(),
        }
    }
}

impl TryFrom<Vec<String>> for TagNames {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::from_slice(labels.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tag_names() {
        let names = TagNames::default();
        assert_eq!(
            [names.drive, names.folder, names.stem, names.extension],
            ["DRV", "FLD", "STM", "EXT"]
        );
    }

    #[test]
    fn test_tag_names_arity() {
        for n in [0, 3, 5] {
            let labels: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
            let err = TagNames::try_from(labels).unwrap_err();
            assert!(err.is_configuration());
            assert!(err.to_string().contains(&n.to_string()));
        }
    }

    #[test]
    fn test_tagged_token_display() {
        assert_eq!(TaggedToken::new("data", "FLD").to_string(), "data/FLD");
    }

    #[test]
    fn test_tagged_token_serializes() {
        let json = serde_json::to_string(&TaggedToken::new(".xyz", "EXT")).unwrap();
        assert_eq!(json, r#"{"text":".xyz","tag":"EXT"}"#);
    }
}

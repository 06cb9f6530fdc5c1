//! FILE/FOLDER tagging.

use super::Tagger;
use crate::error::Result;
use crate::path::StructuredPath;

/// Tags a path `FILE` when its name has an extension and `FOLDER` otherwise.
///
/// This is a lexical guess: the filesystem is never consulted, so an
/// extensionless file is reported as a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderTagger {
    file: String,
    folder: String,
}

impl FolderTagger {
    /// A tagger using the `FILE` and `FOLDER` labels.
    #[must_use]
    pub fn new() -> Self {
        Self::with_labels("FILE", "FOLDER")
    }

    /// A tagger using custom labels.
    pub fn with_labels(file: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            folder: folder.into(),
        }
    }

    /// The label for a single path.
    #[must_use]
    pub fn label(&self, path: &StructuredPath) -> &str {
        if path.has_suffix() {
            &self.file
        } else {
            &self.folder
        }
    }
}

impl Default for FolderTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for FolderTagger {
    type Output = String;

    fn tag(&self, paths: &[StructuredPath]) -> Result<Vec<String>> {
        Ok(paths.iter().map(|path| self.label(path).to_string()).collect())
    }
}

//! The decomposed path representation.

use std::fmt;

use serde::Serialize;

use super::flavour::Flavour;
use super::parse::decompose;
use crate::error::Result;

/// Byte offset of the extension dot in `name`, if there is one.
///
/// The last dot counts unless it is the first or last character, so
/// hidden files like `.gitignore` and names like `notes.` have no suffix.
pub(crate) fn suffix_start(name: &str) -> Option<usize> {
    let i = name.rfind('.')?;
    (0 < i && i < name.len() - 1).then_some(i)
}

/// A path decomposed into drive, root, parent segments and final name.
///
/// A `StructuredPath` is immutable: every transformation returns a new
/// value. The stem and suffix are derived from the name on demand and
/// always satisfy `stem + suffix == name`.
///
/// # Examples
///
/// ```
/// use pathsight::StructuredPath;
///
/// let p = StructuredPath::windows("C:/Program Files/unittest/DOCS.pdf").unwrap();
/// assert_eq!(p.anchor(), "C:\\");
/// assert_eq!(p.stem(), "DOCS");
/// assert_eq!(p.suffix(), ".pdf");
/// assert_eq!(p.depth(), 3);
///
/// let archive = StructuredPath::posix("backup/a.tar.gz").unwrap();
/// assert_eq!(archive.suffix(), ".gz");
/// assert_eq!(archive.suffixes(), vec![".tar", ".gz"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StructuredPath {
    flavour: Flavour,
    drive: String,
    root: String,
    segments: Vec<String>,
    name: String,
}

impl StructuredPath {
    pub(crate) fn from_parsed(
        flavour: Flavour,
        drive: String,
        root: String,
        segments: Vec<String>,
        name: String,
    ) -> Self {
        Self {
            flavour,
            drive,
            root,
            segments,
            name,
        }
    }

    /// Decompose one or more components; see [`decompose`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedPath`] for an empty component list.
    pub fn new<S: AsRef<str>>(flavour: Flavour, components: &[S]) -> Result<Self> {
        decompose(flavour, components)
    }

    /// Decompose a single raw path string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedPath`] if the string contains a NUL.
    pub fn parse(flavour: Flavour, raw: &str) -> Result<Self> {
        decompose(flavour, [raw])
    }

    /// Decompose a Windows-flavoured path string.
    ///
    /// # Errors
    ///
    /// See [`StructuredPath::parse`].
    pub fn windows(raw: &str) -> Result<Self> {
        Self::parse(Flavour::Windows, raw)
    }

    /// Decompose a POSIX-flavoured path string.
    ///
    /// # Errors
    ///
    /// See [`StructuredPath::parse`].
    pub fn posix(raw: &str) -> Result<Self> {
        Self::parse(Flavour::Posix, raw)
    }

    /// The flavour this path was decomposed with.
    #[must_use]
    pub const fn flavour(&self) -> Flavour {
        self.flavour
    }

    /// The drive (`"C:"`), empty for POSIX paths and driveless Windows paths.
    #[must_use]
    pub fn drive(&self) -> &str {
        &self.drive
    }

    /// The root separator(s), empty for relative paths.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Drive and root concatenated.
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("{}{}", self.drive, self.root)
    }

    /// The parent directory names between the anchor and the name.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final component; empty for a bare anchor or a trailing separator.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn suffix_start(&self) -> Option<usize> {
        suffix_start(&self.name)
    }

    /// The name without its final suffix.
    #[must_use]
    pub fn stem(&self) -> &str {
        match self.suffix_start() {
            Some(i) => &self.name[..i],
            None => &self.name,
        }
    }

    /// The final extension including its dot, or an empty string.
    #[must_use]
    pub fn suffix(&self) -> &str {
        match self.suffix_start() {
            Some(i) => &self.name[i..],
            None => "",
        }
    }

    /// Every trailing extension of the name, in order.
    #[must_use]
    pub fn suffixes(&self) -> Vec<String> {
        if self.name.ends_with('.') {
            return Vec::new();
        }
        self.name
            .trim_start_matches('.')
            .split('.')
            .skip(1)
            .map(|ext| format!(".{ext}"))
            .collect()
    }

    /// Whether the path has a suffix.
    #[must_use]
    pub fn has_suffix(&self) -> bool {
        self.suffix_start().is_some()
    }

    /// The anchor (if any), the segments and the name (if any), in order.
    #[must_use]
    pub fn parts(&self) -> Vec<String> {
        let anchor = self.anchor();
        let mut parts = Vec::with_capacity(self.segments.len() + 2);
        if !anchor.is_empty() {
            parts.push(anchor);
        }
        parts.extend(self.segments.iter().cloned());
        if !self.name.is_empty() {
            parts.push(self.name.clone());
        }
        parts
    }

    /// Number of parts below the first one; zero for single-part paths.
    ///
    /// `C:\Program Files\unittest\DOCS.pdf` has depth 3.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.parts().len().saturating_sub(1)
    }

    /// Whether the path has a root (and a drive, for Windows).
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        match self.flavour {
            Flavour::Windows => {
                (!self.root.is_empty() && !self.drive.is_empty()) || self.root.chars().count() > 1
            }
            Flavour::Posix => !self.root.is_empty(),
        }
    }

    /// The logical parent: this path without its last non-anchor part.
    ///
    /// The parent of a bare anchor (or an empty path) is the path itself.
    #[must_use]
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        if self.name.is_empty() {
            segments.pop();
        }
        let name = segments.pop().unwrap_or_default();
        Self {
            flavour: self.flavour,
            drive: self.drive.clone(),
            root: self.root.clone(),
            segments,
            name,
        }
    }

    /// Successive parents, nearest first, down to the anchor.
    ///
    /// For relative paths the sequence stops at the first segment; the
    /// empty path is never yielded.
    #[must_use]
    pub fn parents(&self) -> Vec<Self> {
        let mut parents = Vec::new();
        let mut current = self.clone();
        loop {
            let parent = current.parent();
            if parent == current || parent.parts().is_empty() {
                break;
            }
            parents.push(parent.clone());
            current = parent;
        }
        parents
    }

    /// Compare two paths the way their flavour compares names.
    ///
    /// Windows paths compare case-insensitively; POSIX paths exactly.
    /// Paths of different flavours never match.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        if self.flavour != other.flavour {
            return false;
        }
        if self.flavour.is_case_sensitive() {
            return self == other;
        }
        self.to_string().to_lowercase() == other.to_string().to_lowercase()
    }

    /// Rebuild a path of the same flavour from transformed pieces.
    pub(crate) fn with_pieces(
        &self,
        drive: String,
        root: String,
        segments: Vec<String>,
        name: String,
    ) -> Self {
        Self::from_parsed(self.flavour, drive, root, segments, name)
    }
}

impl fmt::Display for StructuredPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.flavour.separator();
        write!(f, "{}{}", self.drive, self.root)?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{sep}")?;
            }
            write!(f, "{segment}")?;
        }
        if !self.segments.is_empty() {
            write!(f, "{sep}")?;
        }
        write!(f, "{}", self.name)
    }
}

//! Applying string operations to decomposed paths.
//!
//! An operation is applied at one of three [`Scope`]s:
//!
//! - [`Scope::WholePath`]: drive, root, every segment and the name
//! - [`Scope::NameOnly`]: the final name
//! - [`Scope::StemOnly`]: the stem, with the suffix re-attached untouched
//!
//! Transformations ([`apply`]) always yield a new [`StructuredPath`] of the
//! same flavour. Scalar operations ([`query`]) yield their value directly
//! and are only meaningful for a single piece, so they reject
//! `WholePath`. [`apply_method`] dispatches a named [`StrMethod`] to the
//! right one of the two based on what the method returns.
//!
//! # Examples
//!
//! ```
//! use pathsight::transform::{apply, query, Scope};
//! use pathsight::StructuredPath;
//!
//! let p = StructuredPath::windows("C:/Program Files/unittest/DOCS.pdf").unwrap();
//!
//! let lower = apply(&p, Scope::NameOnly, str::to_lowercase).unwrap();
//! assert_eq!(lower.to_string(), "C:\\Program Files\\unittest\\docs.pdf");
//!
//! let upper_stem = query(&p, Scope::StemOnly, |s| s.chars().all(char::is_uppercase)).unwrap();
//! assert!(upper_stem);
//! ```

mod methods;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path::{decompose, StructuredPath};

pub use methods::{Outcome, StrMethod};

/// Which structural pieces of a path an operation is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Drive, root, every segment and the name.
    WholePath,
    /// The final name only.
    NameOnly,
    /// The stem only; the suffix is preserved.
    StemOnly,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WholePath => write!(f, "path"),
            Self::NameOnly => write!(f, "name"),
            Self::StemOnly => write!(f, "stem"),
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "path" | "whole" | "wholepath" => Ok(Self::WholePath),
            "name" => Ok(Self::NameOnly),
            "stem" => Ok(Self::StemOnly),
            _ => Err(Error::UnsupportedScope {
                details: format!("unknown scope '{s}' (expected path, name or stem)"),
            }),
        }
    }
}

/// Result of [`apply_method`]: a new path or a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A transformation produced a new path.
    Path(StructuredPath),
    /// A predicate produced a boolean.
    Bool(bool),
    /// A search produced a character index, if found.
    Index(Option<usize>),
}

impl Applied {
    /// The path, if this is a transformation result.
    #[must_use]
    pub fn into_path(self) -> Option<StructuredPath> {
        match self {
            Self::Path(path) => Some(path),
            Self::Bool(_) | Self::Index(_) => None,
        }
    }
}

impl fmt::Display for Applied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{path}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Index(Some(i)) => write!(f, "{i}"),
            Self::Index(None) => write!(f, "-1"),
        }
    }
}

/// Reassemble transformed pieces into a path.
///
/// The pieces are rendered and decomposed again, so a separator introduced
/// by the operation becomes a real component boundary and the result obeys
/// the same invariants as any freshly decomposed path.
fn reassemble(
    base: &StructuredPath,
    drive: String,
    root: String,
    segments: Vec<String>,
    name: String,
) -> Result<StructuredPath> {
    let candidate = base.with_pieces(drive, root, segments, name);
    decompose(base.flavour(), [candidate.to_string()])
}

/// Apply a string transformation to the pieces of `path` selected by `scope`.
///
/// # Errors
///
/// Fails only if the operation produces text that cannot be decomposed
/// (a NUL character).
pub fn apply<F>(path: &StructuredPath, scope: Scope, mut op: F) -> Result<StructuredPath>
where
    F: FnMut(&str) -> String,
{
    let segments = path.segments().to_vec();
    match scope {
        Scope::WholePath => reassemble(
            path,
            op(path.drive()),
            op(path.root()),
            segments.iter().map(|segment| op(segment)).collect(),
            op(path.name()),
        ),
        Scope::NameOnly => reassemble(
            path,
            path.drive().to_string(),
            path.root().to_string(),
            segments,
            op(path.name()),
        ),
        Scope::StemOnly => {
            let name = format!("{}{}", op(path.stem()), path.suffix());
            reassemble(
                path,
                path.drive().to_string(),
                path.root().to_string(),
                segments,
                name,
            )
        }
    }
}

/// Evaluate a scalar operation on the name or the stem of `path`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedScope`] for [`Scope::WholePath`]: a scalar
/// cannot be reassembled into a path.
pub fn query<T, F>(path: &StructuredPath, scope: Scope, op: F) -> Result<T>
where
    F: FnOnce(&str) -> T,
{
    match scope {
        Scope::NameOnly => Ok(op(path.name())),
        Scope::StemOnly => Ok(op(path.stem())),
        Scope::WholePath => Err(Error::UnsupportedScope {
            details: "scalar operations apply to the name or stem, not the whole path"
                .to_string(),
        }),
    }
}

/// Apply a named string method, returning a path for transformations and
/// the raw scalar for predicates and searches.
///
/// # Errors
///
/// Returns [`Error::UnsupportedScope`] when a scalar method is applied to
/// the whole path.
///
/// # Examples
///
/// ```
/// use pathsight::transform::{apply_method, Applied, Scope, StrMethod};
/// use pathsight::StructuredPath;
///
/// let p = StructuredPath::windows("C:/Program Files/unittest/DOCS.pdf").unwrap();
///
/// let titled = apply_method(&p, &StrMethod::Title, Scope::StemOnly).unwrap();
/// assert_eq!(titled.to_string(), "C:\\Program Files\\unittest\\Docs.pdf");
///
/// let is_lower = apply_method(&p, &StrMethod::IsLower, Scope::NameOnly).unwrap();
/// assert_eq!(is_lower, Applied::Bool(false));
///
/// assert!(apply_method(&p, &StrMethod::IsLower, Scope::WholePath).is_err());
/// ```
pub fn apply_method(path: &StructuredPath, method: &StrMethod, scope: Scope) -> Result<Applied> {
    if !method.is_transform() {
        let outcome = query(path, scope, |piece| method.call(piece)).map_err(|_| {
            Error::UnsupportedScope {
                details: format!("'{}' returns a scalar and cannot apply to the whole path", method.name()),
            }
        })?;
        return Ok(match outcome {
            Outcome::Bool(value) => Applied::Bool(value),
            Outcome::Index(index) => Applied::Index(index),
            Outcome::Text(_) => unreachable!("scalar methods never produce text"),
        });
    }

    apply(path, scope, |piece| match method.call(piece) {
        Outcome::Text(text) => text,
        Outcome::Bool(_) | Outcome::Index(_) => piece.to_string(),
    })
    .map(Applied::Path)
}

impl StructuredPath {
    /// Transform every piece of the path; see [`apply`].
    ///
    /// # Errors
    ///
    /// See [`apply`].
    pub fn map_path<F: FnMut(&str) -> String>(&self, op: F) -> Result<Self> {
        apply(self, Scope::WholePath, op)
    }

    /// Transform the name; see [`apply`].
    ///
    /// # Errors
    ///
    /// See [`apply`].
    pub fn map_name<F: FnMut(&str) -> String>(&self, op: F) -> Result<Self> {
        apply(self, Scope::NameOnly, op)
    }

    /// Transform the stem, keeping the suffix; see [`apply`].
    ///
    /// # Errors
    ///
    /// See [`apply`].
    pub fn map_stem<F: FnMut(&str) -> String>(&self, op: F) -> Result<Self> {
        apply(self, Scope::StemOnly, op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCS: &str = "C:/Program Files/unittest/DOCS.pdf";

    fn win(s: &str) -> StructuredPath {
        StructuredPath::windows(s).unwrap()
    }

    #[test]
    fn test_whole_path_lower() {
        let lowered = apply(&win(DOCS), Scope::WholePath, str::to_lowercase).unwrap();
        assert_eq!(lowered, win("c://program files/unittest/docs.pdf"));
        assert_eq!(lowered.drive(), "c:");
    }

    #[test]
    fn test_whole_path_title() {
        let titled = apply_method(&win(DOCS), &StrMethod::Title, Scope::WholePath).unwrap();
        assert_eq!(
            titled,
            Applied::Path(win("C:/Program Files/Unittest/Docs.Pdf"))
        );
    }

    #[test]
    fn test_whole_path_upper_is_idempotent() {
        let once = win(DOCS).map_path(str::to_uppercase).unwrap();
        let twice = once.map_path(str::to_uppercase).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_name_only() {
        let p = win(DOCS);
        assert_eq!(
            p.map_name(str::to_lowercase).unwrap(),
            win("C:/Program Files/unittest/docs.pdf")
        );
        let titled = apply_method(&p, &StrMethod::Title, Scope::NameOnly).unwrap();
        assert_eq!(titled, Applied::Path(win("C:/Program Files/unittest/Docs.Pdf")));
    }

    #[test]
    fn test_stem_only_keeps_suffix() {
        let p = win(DOCS);
        assert_eq!(
            p.map_stem(str::to_lowercase).unwrap(),
            win("C:/Program Files/unittest/docs.pdf")
        );
        let upper = apply_method(&p, &StrMethod::Upper, Scope::StemOnly).unwrap();
        assert_eq!(upper, Applied::Path(p.clone()));
        let suffixed = p.map_stem(|s| format!("{s}.PDF")).unwrap();
        assert_eq!(suffixed.suffix(), ".pdf");
        assert_eq!(suffixed.name(), "DOCS.PDF.pdf");
    }

    #[test]
    fn test_predicates_return_scalars() {
        let p = win(DOCS);
        assert_eq!(
            apply_method(&p, &StrMethod::IsLower, Scope::NameOnly).unwrap(),
            Applied::Bool(false)
        );
        assert_eq!(
            apply_method(&p, &StrMethod::IsUpper, Scope::NameOnly).unwrap(),
            Applied::Bool(false)
        );
        assert_eq!(
            apply_method(&p, &StrMethod::IsUpper, Scope::StemOnly).unwrap(),
            Applied::Bool(true)
        );
    }

    #[test]
    fn test_find_returns_index() {
        let p = win(DOCS);
        let found = apply_method(&p, &StrMethod::Find("O".to_string()), Scope::NameOnly).unwrap();
        assert_eq!(found, Applied::Index(Some(1)));
        let missing = apply_method(&p, &StrMethod::Find("z".to_string()), Scope::StemOnly).unwrap();
        assert_eq!(missing, Applied::Index(None));
        assert_eq!(missing.to_string(), "-1");
    }

    #[test]
    fn test_scalar_on_whole_path_is_unsupported() {
        let err = apply_method(&win(DOCS), &StrMethod::IsLower, Scope::WholePath).unwrap_err();
        assert!(matches!(err, Error::UnsupportedScope { .. }));
        assert!(err.to_string().contains("islower"));
        let err = query(&win(DOCS), Scope::WholePath, str::len).unwrap_err();
        assert!(matches!(err, Error::UnsupportedScope { .. }));
    }

    #[test]
    fn test_query_name_and_stem() {
        let p = win(DOCS);
        assert_eq!(query(&p, Scope::NameOnly, str::len).unwrap(), 8);
        assert_eq!(query(&p, Scope::StemOnly, str::len).unwrap(), 4);
    }

    #[test]
    fn test_separator_in_result_becomes_boundary() {
        let p = StructuredPath::posix("a/b_c").unwrap();
        let split = p.map_name(|s| s.replace('_', "/")).unwrap();
        assert_eq!(split.segments(), ["a", "b"]);
        assert_eq!(split.name(), "c");
    }

    #[test]
    fn test_trailing_separator_survives() {
        let p = StructuredPath::posix("/Data/Armel/").unwrap();
        let lowered = p.map_path(str::to_lowercase).unwrap();
        assert_eq!(lowered.to_string(), "/data/armel/");
        assert_eq!(lowered.name(), "");
    }

    #[test]
    fn test_nul_from_operation_is_malformed() {
        let p = StructuredPath::posix("a").unwrap();
        assert!(p.map_name(|_| "x\0".to_string()).unwrap_err().is_malformed_path());
    }

    #[test]
    fn test_flavour_preserved() {
        let p = StructuredPath::posix("/x/Y.txt").unwrap();
        let out = p.map_path(str::to_lowercase).unwrap();
        assert_eq!(out.flavour(), p.flavour());
    }

    #[test]
    fn test_scope_parse() {
        assert_eq!("path".parse::<Scope>().unwrap(), Scope::WholePath);
        assert_eq!("NAME".parse::<Scope>().unwrap(), Scope::NameOnly);
        assert_eq!("stem".parse::<Scope>().unwrap(), Scope::StemOnly);
        assert!("suffix".parse::<Scope>().is_err());
        assert_eq!(Scope::StemOnly.to_string(), "stem");
    }

    #[test]
    fn test_applied_into_path() {
        assert!(Applied::Bool(true).into_path().is_none());
        let p = win(DOCS);
        assert_eq!(Applied::Path(p.clone()).into_path(), Some(p));
    }
}

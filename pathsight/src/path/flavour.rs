//! Path syntax dialects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The syntax dialect a path was written in.
///
/// The flavour is fixed when a path is decomposed and governs which
/// characters separate components, whether drive letters are recognized,
/// and how paths compare under [`Flavour::is_case_sensitive`].
///
/// # Examples
///
/// ```
/// use pathsight::path::Flavour;
///
/// let windows: Flavour = "nt".parse().unwrap();
/// assert_eq!(windows, Flavour::Windows);
/// assert_eq!(windows.separator(), '\\');
/// assert!(windows.is_separator('/'));
/// assert!(!Flavour::Posix.is_separator('\\'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavour {
    /// Windows paths: `\` and `/` separators, `C:` drives.
    Windows,
    /// POSIX paths: `/` separator, no drives.
    Posix,
}

impl Flavour {
    /// The separator used when rendering a path.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Posix => '/',
        }
    }

    /// Whether `c` separates components on input.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Windows => c == '\\' || c == '/',
            Self::Posix => c == '/',
        }
    }

    /// Whether this flavour supports `<letter>:` drives.
    #[must_use]
    pub const fn has_drives(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Whether component names compare case-sensitively in this flavour.
    #[must_use]
    pub const fn is_case_sensitive(self) -> bool {
        matches!(self, Self::Posix)
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
        }
    }
}

impl FromStr for Flavour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "windows" | "nt" | "win" => Ok(Self::Windows),
            "posix" | "linux" | "unix" => Ok(Self::Posix),
            _ => Err(Error::configuration(format!(
                "unknown path flavour '{s}' (expected windows or posix)"
            ))),
        }
    }
}

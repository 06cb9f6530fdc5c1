//! Flavour-aware path decomposition.
//!
//! This module turns raw path strings into [`StructuredPath`] values without
//! touching the filesystem.
//!
//! # Key Concepts
//!
//! ## Flavour
//!
//! Every path is decomposed under a [`Flavour`]:
//!
//! - **Windows**: `/` and `\` both separate components, a leading
//!   `<letter>:` is a drive, output uses `\`.
//! - **POSIX**: only `/` separates components and there are no drives.
//!
//! ## Structure
//!
//! A decomposed path is its drive, root, parent segments and final name.
//! The stem and suffix are derived from the name by the last-dot rule: the
//! last `.` that is neither the first nor the last character of the name
//! starts the suffix.
//!
//! No semantic normalization happens: `.` and `..` stay literal segments
//! and symlinks are never resolved.
//!
//! # Examples
//!
//! ```
//! use pathsight::path::{decompose, Flavour};
//!
//! let p = decompose(Flavour::Windows, ["D:/data/armel/file2.xyz"]).unwrap();
//! assert_eq!(p.parts(), vec!["D:\\", "data", "armel", "file2.xyz"]);
//! assert_eq!(p.stem(), "file2");
//! assert_eq!(p.suffix(), ".xyz");
//!
//! // Round-trips through its canonical string form
//! assert_eq!(decompose(Flavour::Windows, [p.to_string()]).unwrap(), p);
//! ```

mod flavour;
mod parse;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use flavour::Flavour;
pub use parse::{decompose, parse_many};
pub use types::StructuredPath;
pub(crate) use types::suffix_start;

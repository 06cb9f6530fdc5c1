#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathsight
//!
//! A library for decomposing, transforming and tagging file paths.
//!
//! Paths are decomposed lexically, without touching the filesystem, into a
//! drive, root, parent segments and a final name whose stem and suffix are
//! derived on demand. On top of that structure the library offers string
//! transformations that keep the structure intact, tokenizing, and
//! positional or extension-based tagging.
//!
//! ## Core Types
//!
//! - [`StructuredPath`] and [`Flavour`]: The decomposed path model
//! - [`transform::Scope`] and [`transform::apply`]: Structure-preserving transformations
//! - [`tokenize::Tokenizer`]: Regex tokenizing of path pieces
//! - [`tagger::TypeTagger`], [`tagger::ExtensionTagger`]: Tagging engines
//! - [`config::TaggerConfig`]: YAML tagger configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathsight::tagger::{ExtensionTagger, Tagger};
//! use pathsight::transform::Scope;
//! use pathsight::StructuredPath;
//!
//! let p = StructuredPath::windows("C:/Program Files/unittest/DOCS.pdf").unwrap();
//! assert_eq!(p.drive(), "C:");
//! assert_eq!(p.segments(), ["Program Files", "unittest"]);
//! assert_eq!(p.stem(), "DOCS");
//!
//! let lowered = pathsight::transform::apply(&p, Scope::StemOnly, str::to_lowercase).unwrap();
//! assert_eq!(lowered.name(), "docs.pdf");
//!
//! let tagger = ExtensionTagger::document().build().unwrap();
//! assert_eq!(tagger.tag(&[p]).unwrap(), ["DOCUMENT"]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod tagger;
pub mod tokenize;
pub mod transform;

// Re-export key types at crate root for convenience
pub use config::{AnyTagger, ConfigLoader, ConfigValidator, TagOutput, TaggerConfig, TaggerKind};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{decompose, parse_many, Flavour, StructuredPath};
pub use tagger::{ExtensionRules, ExtensionTagger, FolderTagger, TaggedToken, Tagger, TypeTagger};
pub use tokenize::{Tokenize, Tokenizer};
pub use transform::{apply, apply_method, query, Applied, Scope, StrMethod};

//! Tagger configuration.
//!
//! This module provides file-based tagger configuration:
//! - A YAML schema selecting a tagger kind and its options
//! - A loader for files and in-memory documents
//! - Validation that rejects options the selected kind does not use
//! - Building the configured tagger as an [`AnyTagger`]
//!
//! # Examples
//!
//! ```
//! use pathsight::config::ConfigLoader;
//! use pathsight::tagger::Tagger;
//! use pathsight::StructuredPath;
//!
//! let config = ConfigLoader::from_yaml(
//!     "kind: extension\ntags:\n  DOCUMENT: ['.doc*']\n  IMAGE: .png\n",
//! )
//! .unwrap();
//! let tagger = config.build().unwrap();
//!
//! let paths = vec![
//!     StructuredPath::posix("a/b.docx").unwrap(),
//!     StructuredPath::posix("c.png").unwrap(),
//! ];
//! let labels: Vec<String> = tagger
//!     .tag(&paths)
//!     .unwrap()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(labels, ["DOCUMENT", "IMAGE"]);
//! ```

pub mod builder;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::{AnyTagger, TagOutput};
pub use loader::ConfigLoader;
pub use schema::{TaggerConfig, TaggerKind};
pub use validator::ConfigValidator;

//! Common test utilities for integration tests.
//!
//! This module provides path fixtures shared by the integration tests of
//! the pathsight library.

use pathsight::{Flavour, StructuredPath};

/// The Windows paths used throughout the tagger tests.
#[allow(dead_code)]
pub const ARMEL: &[&str] = &[
    "D:/data/armel/",
    "D:/data/armel_jonathan/file1.xyz",
    "D:/data/armel/file2.xyz",
    "D:/data/armel_jonathan/file3 test.xyz",
    "D:/data/armel/file4.xyz",
];

/// Decomposes every raw string under `flavour`.
///
/// Panics if any string is malformed.
#[allow(dead_code)]
pub fn paths(flavour: Flavour, raw: &[&str]) -> Vec<StructuredPath> {
    raw.iter()
        .map(|s| StructuredPath::parse(flavour, s).unwrap())
        .collect()
}

/// Decomposes every raw string as a Windows path.
#[allow(dead_code)]
pub fn windows(raw: &[&str]) -> Vec<StructuredPath> {
    paths(Flavour::Windows, raw)
}

/// Renders tagged tokens as `text/tag` strings for compact assertions.
#[allow(dead_code)]
pub fn render(tokens: &[pathsight::TaggedToken]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

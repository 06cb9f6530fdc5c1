//! Error types for the pathsight library.
//!
//! This module provides the error hierarchy for path decomposition,
//! transformation, tokenizing and tagging, using `thiserror` for ergonomic
//! error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathsight error.
///
/// # Examples
///
/// ```
/// use pathsight::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathsight library.
///
/// None of these errors are transient: the library performs no I/O outside
/// of configuration loading, so every error is raised eagerly where it is
/// detected and never retried.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be decomposed.
    #[error("malformed path: {reason}")]
    MalformedPath {
        /// The reason the path is malformed.
        reason: String,
    },

    /// A tagger or tokenizer was configured inconsistently.
    #[error("configuration error: {message}")]
    Configuration {
        /// A description of the configuration problem.
        message: String,
    },

    /// A transformation was requested for a scope it cannot be applied to.
    #[error("unsupported scope: {details}")]
    UnsupportedScope {
        /// Details about the unsupported combination.
        details: String,
    },

    /// A token or wildcard pattern failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The reason the pattern is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a configuration error from any displayable message.
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Build a malformed path error from any displayable reason.
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPath {
            reason: reason.into(),
        }
    }

    /// Check if the error was caused by tagger or tokenizer configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsight::Error;
    ///
    /// let err = Error::Configuration { message: "bad tags".to_string() };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::InvalidPattern { .. } | Self::ConfigParse(_)
        )
    }

    /// Check if the error was raised while decomposing a path.
    #[must_use]
    pub fn is_malformed_path(&self) -> bool {
        matches!(self, Self::MalformedPath { .. })
    }
}

//! Regex-driven tokenizing of strings and paths.
//!
//! A [`Tokenizer`] works in one of two modes:
//!
//! - **Find**: every match of the pattern is a token (when the pattern has
//!   a capture group, the first group is the token)
//! - **Split**: the pattern marks the delimiters and the text between them
//!   are the tokens
//!
//! The default tokenizer finds runs of ASCII letters, digits and colons, so
//! drive tokens such as `C:` stay intact. Tokenizers never change case or
//! trim whitespace; callers lowercase beforehand if they need to.
//!
//! # Examples
//!
//! ```
//! use pathsight::tokenize::{tokenize, Tokenizer};
//! use pathsight::StructuredPath;
//!
//! assert_eq!(
//!     tokenize("DOCS_11Mar2020-Armel final"),
//!     vec!["DOCS", "11Mar2020", "Armel", "final"]
//! );
//!
//! let p = StructuredPath::windows("C:/Program Files/unittest/DOCS_v2.pdf").unwrap();
//! let tokenizer = Tokenizer::default();
//! assert_eq!(
//!     tokenizer.tokenize_path(&p, true),
//!     vec!["Program", "Files", "unittest", "DOCS", "v2"]
//! );
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::path::StructuredPath;

/// Default pattern: greedy runs of ASCII alphanumerics and `:`.
pub const DEFAULT_TOKEN_PATTERN: &str = "[a-zA-Z0-9:]+";

/// Pattern matching runs of path separators of either flavour.
pub const DEFAULT_SPLIT_PATTERN: &str = r"[\\/]+";

static DEFAULT_TOKENIZER: Lazy<Tokenizer> = Lazy::new(|| Tokenizer {
    pattern: Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern is valid"),
    mode: TokenMode::Find,
});

/// How a [`Tokenizer`] interprets its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    /// Matches of the pattern are the tokens.
    Find,
    /// The pattern matches delimiters between tokens.
    Split,
}

/// A compiled tokenizing rule.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    mode: TokenMode,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

impl Tokenizer {
    /// A tokenizer whose pattern matches the tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the regex does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: compile(pattern)?,
            mode: TokenMode::Find,
        })
    }

    /// A tokenizer whose pattern matches the delimiters between tokens.
    ///
    /// Like a regex split, a leading or trailing delimiter yields an empty
    /// token. Unlike a regex split, empty delimiter matches are skipped, so
    /// a pattern such as `\s*` splits only where it consumes at least one
    /// character (`"ab cd"` gives `["ab", "cd"]`, not single characters).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the regex does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsight::tokenize::Tokenizer;
    ///
    /// let words = Tokenizer::split(r"\s+").unwrap();
    /// assert_eq!(words.tokenize("file3 test"), vec!["file3", "test"]);
    /// assert_eq!(words.tokenize("armel_jonathan"), vec!["armel_jonathan"]);
    /// ```
    pub fn split(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: compile(pattern)?,
            mode: TokenMode::Split,
        })
    }

    /// A split tokenizer on runs of `/` and `\`.
    #[must_use]
    pub fn path_splitter() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_SPLIT_PATTERN).expect("default split pattern is valid"),
            mode: TokenMode::Split,
        }
    }

    /// The source text of the pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The mode the pattern is applied in.
    #[must_use]
    pub const fn mode(&self) -> TokenMode {
        self.mode
    }

    /// Lazily iterate the tokens of `text`.
    ///
    /// The iterator is `Clone`, so the same sequence can be replayed.
    #[must_use]
    pub fn tokens<'t>(&'t self, text: &'t str) -> Tokens<'t> {
        Tokens {
            pattern: &self.pattern,
            mode: self.mode,
            text,
            start: 0,
            search: 0,
            finished: false,
        }
    }

    /// Collect the tokens of `text`.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokens(text).map(str::to_string).collect()
    }

    /// Tokens of every segment followed by those of the stem (or the whole
    /// name when `exclude_extension` is false).
    ///
    /// The drive and root are never tokenized. A name without an extension
    /// is tokenized whole either way.
    #[must_use]
    pub fn tokenize_path(&self, path: &StructuredPath, exclude_extension: bool) -> Vec<String> {
        let last = if exclude_extension {
            path.stem()
        } else {
            path.name()
        };
        path.segments()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(last))
            .flat_map(|part| self.tokens(part))
            .map(str::to_string)
            .collect()
    }

    /// Tokens of the path's stem.
    #[must_use]
    pub fn tokenize_stem(&self, path: &StructuredPath) -> Vec<String> {
        self.tokenize(path.stem())
    }

    /// Tokens of the path's full name.
    #[must_use]
    pub fn tokenize_name(&self, path: &StructuredPath) -> Vec<String> {
        self.tokenize(path.name())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        DEFAULT_TOKENIZER.clone()
    }
}

/// Something that turns a piece of text into tokens.
///
/// [`Tokenizer`] implements it, and so does any
/// `Fn(&str) -> Vec<String> + Send + Sync` closure, which lets callers plug
/// in splitting rules that a single regex cannot express.
///
/// # Examples
///
/// ```
/// use pathsight::tokenize::Tokenize;
///
/// let by_dash = |text: &str| text.split('-').map(str::to_string).collect::<Vec<_>>();
/// assert_eq!(Tokenize::tokenize(&by_dash, "a-b"), vec!["a", "b"]);
/// ```
pub trait Tokenize: Send + Sync {
    /// The tokens of `text`, in order.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl Tokenize for Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        Tokenizer::tokenize(self, text)
    }
}

impl<F> Tokenize for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// The shared default tokenizer.
#[must_use]
pub fn default_tokenizer() -> &'static Tokenizer {
    &DEFAULT_TOKENIZER
}

/// Tokenize `text` with the default pattern.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text)
}

/// Lazy token iterator returned by [`Tokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    pattern: &'t Regex,
    mode: TokenMode,
    text: &'t str,
    start: usize,
    search: usize,
    finished: bool,
}

impl Tokens<'_> {
    /// Byte offset just past the character at `at`.
    fn step_past(&self, at: usize) -> usize {
        self.text[at..]
            .chars()
            .next()
            .map_or(self.text.len() + 1, |c| at + c.len_utf8())
    }
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.finished {
            return None;
        }
        loop {
            if self.search > self.text.len() {
                self.finished = true;
                return match self.mode {
                    TokenMode::Find => None,
                    TokenMode::Split => Some(&self.text[self.start..]),
                };
            }

            let Some(caps) = self.pattern.captures_at(self.text, self.search) else {
                self.finished = true;
                return match self.mode {
                    TokenMode::Find => None,
                    TokenMode::Split => Some(&self.text[self.start..]),
                };
            };
            let Some(whole) = caps.get(0) else {
                self.finished = true;
                return None;
            };

            if whole.start() == whole.end() {
                self.search = self.step_past(whole.end());
                if self.mode == TokenMode::Split {
                    continue;
                }
                return Some(caps.get(1).map_or("", |g| g.as_str()));
            }

            self.search = whole.end();
            match self.mode {
                TokenMode::Find => {
                    if caps.len() > 1 {
                        return Some(caps.get(1).map_or("", |g| g.as_str()));
                    }
                    return Some(whole.as_str());
                }
                TokenMode::Split => {
                    let piece = &self.text[self.start..whole.start()];
                    self.start = whole.end();
                    return Some(piece);
                }
            }
        }
    }
}

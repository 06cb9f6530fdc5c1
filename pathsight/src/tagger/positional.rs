//! Positional drive/folder/stem/extension tagging.

use std::fmt;
use std::sync::Arc;

use log::debug;

use super::{TagNames, TaggedToken, Tagger};
use crate::error::Result;
use crate::path::{suffix_start, StructuredPath};
use crate::tokenize::{Tokenize, Tokenizer};

/// Tags each part of a path by its position.
///
/// The anchor (drive plus root) is tagged as drive, every inner part as
/// folder, and the last part is split into stem and extension when it has
/// one; otherwise it is tagged as a folder too.
///
/// With a tokenizer ([`TypeTagger::token_level`] or
/// [`TypeTagger::with_tokenizer`]) the drive, folder and stem pieces are
/// tokenized and every token is tagged separately. The extension is never
/// tokenized. Any [`Tokenize`] implementation works, including a plain
/// closure.
///
/// # Examples
///
/// ```
/// use pathsight::tagger::TypeTagger;
/// use pathsight::StructuredPath;
///
/// let p = StructuredPath::windows("D:/data/armel_jonathan/file3 test.xyz").unwrap();
/// let tokens: Vec<String> = TypeTagger::token_level()
///     .tag_path(&p)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(
///     tokens,
///     ["D:/DRV", "data/FLD", "armel/FLD", "jonathan/FLD", "file3/STM", "test/STM", ".xyz/EXT"]
/// );
/// ```
#[derive(Clone, Default)]
pub struct TypeTagger {
    tag_names: TagNames,
    tokenizer: Option<Arc<dyn Tokenize>>,
}

impl fmt::Debug for TypeTagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeTagger")
            .field("tag_names", &self.tag_names)
            .field("token_level", &self.is_token_level())
            .finish()
    }
}

impl TypeTagger {
    /// A tagger labeling whole parts with the default tag names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A tagger labeling tokens from the default tokenizer.
    #[must_use]
    pub fn token_level() -> Self {
        Self::new().with_tokenizer(Tokenizer::default())
    }

    /// Replace the four tag names.
    #[must_use]
    pub fn with_tag_names(mut self, tag_names: TagNames) -> Self {
        self.tag_names = tag_names;
        self
    }

    /// Tokenize pieces with `tokenizer` before tagging.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsight::tagger::TypeTagger;
    /// use pathsight::StructuredPath;
    ///
    /// let by_dash = |text: &str| text.split('-').map(str::to_string).collect::<Vec<_>>();
    /// let tagger = TypeTagger::new().with_tokenizer(by_dash);
    ///
    /// let p = StructuredPath::posix("my-docs/a-b.txt").unwrap();
    /// let tags: Vec<String> = tagger.tag_path(&p).iter().map(ToString::to_string).collect();
    /// assert_eq!(tags, ["my/FLD", "docs/FLD", "a/STM", "b/STM", ".txt/EXT"]);
    /// ```
    #[must_use]
    pub fn with_tokenizer<T: Tokenize + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    /// The tag names in use.
    #[must_use]
    pub const fn tag_names(&self) -> &TagNames {
        &self.tag_names
    }

    /// Whether pieces are tokenized before tagging.
    #[must_use]
    pub const fn is_token_level(&self) -> bool {
        self.tokenizer.is_some()
    }

    fn emit(&self, out: &mut Vec<TaggedToken>, piece: &str, tag: &str) {
        match &self.tokenizer {
            Some(tokenizer) => out.extend(
                tokenizer
                    .tokenize(piece)
                    .into_iter()
                    .map(|token| TaggedToken::new(token, tag)),
            ),
            None => out.push(TaggedToken::new(piece, tag)),
        }
    }

    /// Tag a single path. A path with no parts yields no tags.
    #[must_use]
    pub fn tag_path(&self, path: &StructuredPath) -> Vec<TaggedToken> {
        let parts = path.parts();
        let mut out = Vec::with_capacity(parts.len() + 1);

        let Some((last, rest)) = parts.split_last() else {
            return out;
        };

        let has_anchor = !path.anchor().is_empty();
        if has_anchor && rest.is_empty() {
            // A bare anchor is the whole path.
            self.emit(&mut out, last, &self.tag_names.drive);
            return out;
        }

        let mut middle = rest;
        if has_anchor {
            self.emit(&mut out, &rest[0], &self.tag_names.drive);
            middle = &rest[1..];
        }
        for folder in middle {
            self.emit(&mut out, folder, &self.tag_names.folder);
        }

        match suffix_start(last) {
            Some(i) => {
                self.emit(&mut out, &last[..i], &self.tag_names.stem);
                out.push(TaggedToken::new(&last[i..], &self.tag_names.extension));
            }
            None => self.emit(&mut out, last, &self.tag_names.folder),
        }
        out
    }
}

impl Tagger for TypeTagger {
    type Output = Vec<TaggedToken>;

    fn tag(&self, paths: &[StructuredPath]) -> Result<Vec<Self::Output>> {
        debug!(
            "type-tagging {} path(s) (token level: {})",
            paths.len(),
            self.is_token_level()
        );
        Ok(paths.iter().map(|path| self.tag_path(path)).collect())
    }
}

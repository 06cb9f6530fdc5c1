//! Extension-pattern tagging.

use std::collections::{HashMap, HashSet};
use std::fmt;

use glob::Pattern;
use log::debug;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::data;
use super::Tagger;
use crate::error::{Error, Result};
use crate::path::StructuredPath;

/// An ordered mapping from tag to extension patterns.
///
/// Tags keep their insertion order, which is also the order of the
/// concrete mapping an [`ExtensionTagger`] reports. Patterns may contain
/// the shell wildcards `*` and `?`.
///
/// Deserializes from a map whose values are a single pattern or a list:
///
/// ```
/// use pathsight::tagger::ExtensionRules;
///
/// let rules: ExtensionRules = serde_yaml::from_str(
///     "DOCUMENT: ['.doc*', '.pdf']\nARCHIVE: .tar\n",
/// ).unwrap();
/// let tags: Vec<&str> = rules.iter().map(|(tag, _)| tag).collect();
/// assert_eq!(tags, ["DOCUMENT", "ARCHIVE"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionRules {
    rules: Vec<(String, Vec<String>)>,
}

impl ExtensionRules {
    /// An empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add patterns for `tag`, appending to any already declared for it.
    #[must_use]
    pub fn with<I, S>(mut self, tag: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(tag, patterns);
        self
    }

    /// Add patterns for `tag` in place.
    pub fn insert<I, S>(&mut self, tag: impl Into<String>, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tag = tag.into();
        let patterns = patterns.into_iter().map(|p| p.as_ref().to_string());
        match self.rules.iter_mut().find(|(existing, _)| *existing == tag) {
            Some((_, existing)) => existing.extend(patterns),
            None => self.rules.push((tag, patterns.collect())),
        }
    }

    /// Tags and their patterns, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rules
            .iter()
            .map(|(tag, patterns)| (tag.as_str(), patterns.as_slice()))
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no tag is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compression, archive, and combined archive/compression extensions.
    #[must_use]
    pub fn compression() -> Self {
        Self::new()
            .with("COMPRESSION", data::COMPRESSION)
            .with("ARCHIVE", data::ARCHIVE)
            .with("ARCHIVE_AND_COMPRESSION", data::ARCHIVE_AND_COMPRESSION)
    }

    /// Document, presentation and image extensions.
    #[must_use]
    pub fn document() -> Self {
        Self::new()
            .with("DOCUMENT", data::DOCUMENT)
            .with("PRESENTATION", data::PRESENTATION)
            .with("IMAGE", data::IMAGE)
    }
}

impl<T: Into<String>> FromIterator<(T, Vec<String>)> for ExtensionRules {
    fn from_iter<I: IntoIterator<Item = (T, Vec<String>)>>(iter: I) -> Self {
        let mut rules = Self::new();
        for (tag, patterns) in iter {
            rules.insert(tag, patterns);
        }
        rules
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(pattern) => vec![pattern],
            Self::Many(patterns) => patterns,
        }
    }
}

impl<'de> Deserialize<'de> for ExtensionRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RulesVisitor;

        impl<'de> Visitor<'de> for RulesVisitor {
            type Value = ExtensionRules;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from tag to one or more extension patterns")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut rules = ExtensionRules::new();
                while let Some((tag, patterns)) = map.next_entry::<String, OneOrMany>()? {
                    rules.insert(tag, patterns.into_vec());
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(RulesVisitor)
    }
}

impl Serialize for ExtensionRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for (tag, patterns) in &self.rules {
            map.serialize_entry(tag, patterns)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Literal(String),
    Wildcard(Pattern),
}

#[derive(Debug, Clone)]
struct CompiledRule {
    matcher: Matcher,
    tag: String,
}

/// Concrete extension-to-tag pairs with conflict detection.
#[derive(Default)]
struct ConcreteMapping {
    pairs: Vec<(String, String)>,
    seen: HashMap<String, usize>,
}

impl ConcreteMapping {
    fn insert(&mut self, extension: &str, tag: &str) -> Result<()> {
        if let Some(&i) = self.seen.get(extension) {
            let existing = &self.pairs[i].1;
            if existing == tag {
                return Ok(());
            }
            debug!("extension '{extension}' claimed by '{existing}' and '{tag}'");
            return Err(Error::configuration(format!(
                "multiple tags point to extension '{extension}': '{existing}' and '{tag}'"
            )));
        }
        self.seen.insert(extension.to_string(), self.pairs.len());
        self.pairs.push((extension.to_string(), tag.to_string()));
        Ok(())
    }
}

/// Tags each path with the tag whose pattern matches its extension.
///
/// Literal patterns are checked for conflicts when the tagger is built.
/// Wildcard patterns are expanded against the distinct extensions of each
/// batch passed to [`Tagger::tag`], and the expanded mapping is checked
/// before any path is tagged. Two different tags resolving to the same
/// extension is a configuration error; the same tag declared twice is not.
///
/// # Examples
///
/// ```
/// use pathsight::tagger::{ExtensionRules, ExtensionTagger, Tagger};
/// use pathsight::StructuredPath;
///
/// let rules = ExtensionRules::new()
///     .with("DOCUMENT", [".doc*", ".pdf"])
///     .with("IMAGE", [".png"]);
/// let tagger = ExtensionTagger::builder(rules).ignore_case(true).build().unwrap();
///
/// let paths: Vec<StructuredPath> = ["a.DOCX", "b.png", "c.raw"]
///     .iter()
///     .map(|s| StructuredPath::posix(s).unwrap())
///     .collect();
/// assert_eq!(tagger.tag(&paths).unwrap(), ["DOCUMENT", "IMAGE", ""]);
/// ```
#[derive(Debug, Clone)]
pub struct ExtensionTagger {
    rules: Vec<CompiledRule>,
    na_tag: String,
    ignore_case: bool,
}

impl ExtensionTagger {
    /// Start building a tagger over `rules`.
    #[must_use]
    pub fn builder(rules: ExtensionRules) -> ExtensionTaggerBuilder {
        ExtensionTaggerBuilder {
            rules,
            na_tag: String::new(),
            ignore_case: false,
            use_wildcards: true,
        }
    }

    /// A tagger over `rules` with default options.
    ///
    /// # Errors
    ///
    /// See [`ExtensionTaggerBuilder::build`].
    pub fn new(rules: ExtensionRules) -> Result<Self> {
        Self::builder(rules).build()
    }

    /// Start building the compression preset.
    #[must_use]
    pub fn compression() -> ExtensionTaggerBuilder {
        Self::builder(ExtensionRules::compression())
    }

    /// Start building the document preset.
    #[must_use]
    pub fn document() -> ExtensionTaggerBuilder {
        Self::builder(ExtensionRules::document())
    }

    /// The tag emitted for unmatched extensions.
    #[must_use]
    pub fn na_tag(&self) -> &str {
        &self.na_tag
    }

    /// Whether extensions are compared case-insensitively.
    #[must_use]
    pub const fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    fn fold(&self, extension: &str) -> String {
        if self.ignore_case {
            extension.to_lowercase()
        } else {
            extension.to_string()
        }
    }

    fn expand<S: AsRef<str>>(&self, observed: &[S]) -> Result<Vec<(String, String)>> {
        let mut mapping = ConcreteMapping::default();
        for rule in &self.rules {
            match &rule.matcher {
                Matcher::Literal(extension) => mapping.insert(extension, &rule.tag)?,
                Matcher::Wildcard(pattern) => {
                    let mut matched = 0usize;
                    for extension in observed.iter().map(AsRef::as_ref) {
                        if pattern.matches(extension) {
                            mapping.insert(extension, &rule.tag)?;
                            matched += 1;
                        }
                    }
                    debug!(
                        "wildcard '{}' for '{}' matched {matched} extension(s)",
                        pattern.as_str(),
                        rule.tag
                    );
                }
            }
        }
        Ok(mapping.pairs)
    }

    /// The concrete extension-to-tag mapping used for `paths`.
    ///
    /// Extensions are case-folded when the tagger ignores case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when two different tags resolve to
    /// the same extension after wildcard expansion.
    pub fn mapping(&self, paths: &[StructuredPath]) -> Result<Vec<(String, String)>> {
        let mut seen = HashSet::new();
        let observed: Vec<String> = paths
            .iter()
            .map(|path| self.fold(path.suffix()))
            .filter(|extension| seen.insert(extension.clone()))
            .collect();
        self.expand(&observed)
    }
}

impl Tagger for ExtensionTagger {
    type Output = String;

    fn tag(&self, paths: &[StructuredPath]) -> Result<Vec<String>> {
        let mapping = self.mapping(paths)?;
        debug!(
            "tagging {} path(s) against {} concrete extension(s)",
            paths.len(),
            mapping.len()
        );

        let lookup: HashMap<&str, &str> = mapping
            .iter()
            .map(|(extension, tag)| (extension.as_str(), tag.as_str()))
            .collect();

        Ok(paths
            .iter()
            .map(|path| {
                let extension = self.fold(path.suffix());
                lookup
                    .get(extension.as_str())
                    .map_or_else(|| self.na_tag.clone(), |tag| (*tag).to_string())
            })
            .collect())
    }
}

/// Builder for [`ExtensionTagger`].
#[derive(Debug, Clone)]
pub struct ExtensionTaggerBuilder {
    rules: ExtensionRules,
    na_tag: String,
    ignore_case: bool,
    use_wildcards: bool,
}

impl ExtensionTaggerBuilder {
    /// Sets the tag for extensions no pattern matches. Defaults to empty.
    #[must_use]
    pub fn na_tag(mut self, na_tag: impl Into<String>) -> Self {
        self.na_tag = na_tag.into();
        self
    }

    /// Sets case-insensitive matching. Defaults to off.
    #[must_use]
    pub const fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Sets whether `*` and `?` are wildcards. Defaults to on.
    #[must_use]
    pub const fn use_wildcards(mut self, use_wildcards: bool) -> Self {
        self.use_wildcards = use_wildcards;
        self
    }

    /// Builds the tagger.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two different tags declare the same literal extension (after
    ///   lowercasing, when ignoring case)
    /// - A wildcard pattern does not compile
    pub fn build(self) -> Result<ExtensionTagger> {
        let mut rules = Vec::new();
        for (tag, patterns) in self.rules.iter() {
            for pattern in patterns {
                let pattern = if self.ignore_case {
                    pattern.to_lowercase()
                } else {
                    pattern.clone()
                };
                let matcher = if self.use_wildcards && pattern.contains(['*', '?']) {
                    Matcher::Wildcard(Pattern::new(&collapse_stars(&pattern)).map_err(|e| {
                        Error::InvalidPattern {
                            pattern: pattern.clone(),
                            reason: e.to_string(),
                        }
                    })?)
                } else {
                    Matcher::Literal(pattern)
                };
                rules.push(CompiledRule {
                    matcher,
                    tag: tag.to_string(),
                });
            }
        }

        let tagger = ExtensionTagger {
            rules,
            na_tag: self.na_tag,
            ignore_case: self.ignore_case,
        };
        // No observed extensions: only the literal patterns are checked here.
        let literals = tagger.expand::<&str>(&[])?;
        debug!(
            "built extension tagger with {} pattern(s), {} literal",
            tagger.rules.len(),
            literals.len()
        );
        Ok(tagger)
    }
}

/// Reduce every run of `*` to one. A run means the same as a single star
/// in shell matching, but `glob` reads `**` as a recursive wildcard.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c != '*' || !out.ends_with('*') {
            out.push(c);
        }
    }
    out
}

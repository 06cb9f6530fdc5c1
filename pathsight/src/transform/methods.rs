//! Named string methods usable with [`apply_method`](super::apply_method).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The value a [`StrMethod`] produces for one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Transformed text.
    Text(String),
    /// A predicate result.
    Bool(bool),
    /// A character index, `None` when not found.
    Index(Option<usize>),
}

/// A string method selectable by name.
///
/// Zero-argument methods parse from their name alone; methods taking
/// arguments are built with [`StrMethod::with_args`].
///
/// # Examples
///
/// ```
/// use pathsight::transform::{Outcome, StrMethod};
///
/// let title: StrMethod = "title".parse().unwrap();
/// assert_eq!(title.call("DOCS.pdf"), Outcome::Text("Docs.Pdf".to_string()));
///
/// let replace = StrMethod::with_args("replace", &["DOCS", "notes"]).unwrap();
/// assert_eq!(replace.call("DOCS.pdf"), Outcome::Text("notes.pdf".to_string()));
///
/// assert!(StrMethod::with_args("replace", &["only-one"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrMethod {
    /// Lowercase every character.
    Lower,
    /// Uppercase every character.
    Upper,
    /// Uppercase the first letter of every word, lowercase the rest.
    Title,
    /// Uppercase the first character, lowercase the rest.
    Capitalize,
    /// Swap the case of every character.
    SwapCase,
    /// Lowercase for caseless comparison.
    CaseFold,
    /// Trim whitespace on both sides.
    Strip,
    /// Trim leading whitespace.
    LStrip,
    /// Trim trailing whitespace.
    RStrip,
    /// Replace every occurrence of `from` with `to`.
    Replace {
        /// Text to look for.
        from: String,
        /// Replacement text.
        to: String,
    },
    /// At least one cased character and all cased characters lowercase.
    IsLower,
    /// At least one cased character and all cased characters uppercase.
    IsUpper,
    /// Title-cased: uppercase only after uncased characters, lowercase only after cased ones.
    IsTitle,
    /// Non-empty and alphabetic.
    IsAlpha,
    /// Non-empty and numeric.
    IsDigit,
    /// Non-empty and alphanumeric.
    IsAlnum,
    /// Non-empty and whitespace.
    IsSpace,
    /// Starts with the given prefix.
    StartsWith(String),
    /// Ends with the given suffix.
    EndsWith(String),
    /// Character index of the first occurrence of the needle.
    Find(String),
}

impl StrMethod {
    /// Build a method from its name and arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedScope`] when the name is unknown or the
    /// argument count does not match what the method expects.
    pub fn with_args<S: AsRef<str>>(name: &str, args: &[S]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let method = match (name.to_lowercase().as_str(), args.as_slice()) {
            ("replace", [from, to]) => Self::Replace {
                from: (*from).to_string(),
                to: (*to).to_string(),
            },
            ("startswith", [prefix]) => Self::StartsWith((*prefix).to_string()),
            ("endswith", [suffix]) => Self::EndsWith((*suffix).to_string()),
            ("find", [needle]) => Self::Find((*needle).to_string()),
            (other, []) => return other.parse(),
            (other, _) => {
                return Err(Error::UnsupportedScope {
                    details: format!(
                        "method '{other}' does not take {} argument(s)",
                        args.len()
                    ),
                })
            }
        };
        Ok(method)
    }

    /// The method's name as accepted by [`StrMethod::with_args`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Title => "title",
            Self::Capitalize => "capitalize",
            Self::SwapCase => "swapcase",
            Self::CaseFold => "casefold",
            Self::Strip => "strip",
            Self::LStrip => "lstrip",
            Self::RStrip => "rstrip",
            Self::Replace { .. } => "replace",
            Self::IsLower => "islower",
            Self::IsUpper => "isupper",
            Self::IsTitle => "istitle",
            Self::IsAlpha => "isalpha",
            Self::IsDigit => "isdigit",
            Self::IsAlnum => "isalnum",
            Self::IsSpace => "isspace",
            Self::StartsWith(_) => "startswith",
            Self::EndsWith(_) => "endswith",
            Self::Find(_) => "find",
        }
    }

    /// Whether the method produces text (and so a new path).
    #[must_use]
    pub const fn is_transform(&self) -> bool {
        matches!(
            self,
            Self::Lower
                | Self::Upper
                | Self::Title
                | Self::Capitalize
                | Self::SwapCase
                | Self::CaseFold
                | Self::Strip
                | Self::LStrip
                | Self::RStrip
                | Self::Replace { .. }
        )
    }

    /// Run the method on one piece of text.
    #[must_use]
    pub fn call(&self, s: &str) -> Outcome {
        match self {
            Self::Lower | Self::CaseFold => Outcome::Text(s.to_lowercase()),
            Self::Upper => Outcome::Text(s.to_uppercase()),
            Self::Title => Outcome::Text(title(s)),
            Self::Capitalize => Outcome::Text(capitalize(s)),
            Self::SwapCase => Outcome::Text(swapcase(s)),
            Self::Strip => Outcome::Text(s.trim().to_string()),
            Self::LStrip => Outcome::Text(s.trim_start().to_string()),
            Self::RStrip => Outcome::Text(s.trim_end().to_string()),
            Self::Replace { from, to } => Outcome::Text(s.replace(from.as_str(), to)),
            Self::IsLower => Outcome::Bool(all_cased(s, char::is_lowercase)),
            Self::IsUpper => Outcome::Bool(all_cased(s, char::is_uppercase)),
            Self::IsTitle => Outcome::Bool(is_title(s)),
            Self::IsAlpha => Outcome::Bool(non_empty_all(s, char::is_alphabetic)),
            Self::IsDigit => Outcome::Bool(non_empty_all(s, char::is_numeric)),
            Self::IsAlnum => Outcome::Bool(non_empty_all(s, char::is_alphanumeric)),
            Self::IsSpace => Outcome::Bool(non_empty_all(s, char::is_whitespace)),
            Self::StartsWith(prefix) => Outcome::Bool(s.starts_with(prefix.as_str())),
            Self::EndsWith(suffix) => Outcome::Bool(s.ends_with(suffix.as_str())),
            Self::Find(needle) => {
                Outcome::Index(s.find(needle.as_str()).map(|byte| s[..byte].chars().count()))
            }
        }
    }
}

impl fmt::Display for StrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let method = match s.to_lowercase().as_str() {
            "lower" => Self::Lower,
            "upper" => Self::Upper,
            "title" => Self::Title,
            "capitalize" => Self::Capitalize,
            "swapcase" => Self::SwapCase,
            "casefold" => Self::CaseFold,
            "strip" => Self::Strip,
            "lstrip" => Self::LStrip,
            "rstrip" => Self::RStrip,
            "islower" => Self::IsLower,
            "isupper" => Self::IsUpper,
            "istitle" => Self::IsTitle,
            "isalpha" => Self::IsAlpha,
            "isdigit" => Self::IsDigit,
            "isalnum" => Self::IsAlnum,
            "isspace" => Self::IsSpace,
            "replace" | "startswith" | "endswith" | "find" => {
                return Err(Error::UnsupportedScope {
                    details: format!("method '{s}' requires arguments"),
                })
            }
            _ => {
                return Err(Error::UnsupportedScope {
                    details: format!("unknown string method '{s}'"),
                })
            }
        };
        Ok(method)
    }
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

fn all_cased(s: &str, pred: fn(char) -> bool) -> bool {
    let mut seen = false;
    for c in s.chars().filter(|&c| is_cased(c)) {
        if !pred(c) {
            return false;
        }
        seen = true;
    }
    seen
}

fn non_empty_all(s: &str, pred: fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}

fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = is_cased(c);
    }
    out
}

fn is_title(s: &str) -> bool {
    let mut prev_cased = false;
    let mut seen = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            seen = true;
        } else if c.is_lowercase() && !prev_cased {
            return false;
        }
        prev_cased = is_cased(c);
    }
    seen
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn swapcase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(method: &StrMethod, s: &str) -> String {
        match method.call(s) {
            Outcome::Text(t) => t,
            other => panic!("expected text, got {other:?}"),
        }
    }

    fn check(method: &StrMethod, s: &str) -> bool {
        match method.call(s) {
            Outcome::Bool(b) => b,
            other => panic!("expected bool, got {other:?}"),
        }
    }

    #[test]
    fn test_title() {
        assert_eq!(text(&StrMethod::Title, "DOCS.pdf"), "Docs.Pdf");
        assert_eq!(text(&StrMethod::Title, "demo code.py"), "Demo Code.Py");
        assert_eq!(text(&StrMethod::Title, "file_2x"), "File_2X");
    }

    #[test]
    fn test_capitalize_and_swapcase() {
        assert_eq!(text(&StrMethod::Capitalize, "dEMO Code"), "Demo code");
        assert_eq!(text(&StrMethod::Capitalize, ""), "");
        assert_eq!(text(&StrMethod::SwapCase, "DOCS.pdf"), "docs.PDF");
    }

    #[test]
    fn test_strip_variants() {
        assert_eq!(text(&StrMethod::Strip, "  a b "), "a b");
        assert_eq!(text(&StrMethod::LStrip, "  a "), "a ");
        assert_eq!(text(&StrMethod::RStrip, "  a "), "  a");
    }

    #[test]
    fn test_case_predicates() {
        assert!(check(&StrMethod::IsUpper, "DOCS"));
        assert!(!check(&StrMethod::IsUpper, "DOCS.pdf"));
        assert!(check(&StrMethod::IsLower, "file1.txt"));
        assert!(!check(&StrMethod::IsLower, "1234"));
        assert!(check(&StrMethod::IsTitle, "Demo Code.Py"));
        assert!(!check(&StrMethod::IsTitle, "DOCS"));
        assert!(!check(&StrMethod::IsTitle, ""));
    }

    #[test]
    fn test_class_predicates() {
        assert!(check(&StrMethod::IsAlpha, "abc"));
        assert!(!check(&StrMethod::IsAlpha, "ab1"));
        assert!(!check(&StrMethod::IsAlpha, ""));
        assert!(check(&StrMethod::IsDigit, "2024"));
        assert!(check(&StrMethod::IsAlnum, "file2"));
        assert!(check(&StrMethod::IsSpace, " \t"));
        assert!(!check(&StrMethod::IsSpace, ""));
    }

    #[test]
    fn test_find_counts_chars() {
        let find = StrMethod::Find("b".to_string());
        assert_eq!(find.call("äb"), Outcome::Index(Some(1)));
        assert_eq!(find.call("xyz"), Outcome::Index(None));
    }

    #[test]
    fn test_with_args() {
        assert_eq!(
            StrMethod::with_args("ENDSWITH", &["pdf"]).unwrap(),
            StrMethod::EndsWith("pdf".to_string())
        );
        assert_eq!(
            StrMethod::with_args::<&str>("upper", &[]).unwrap(),
            StrMethod::Upper
        );
        let err = StrMethod::with_args("upper", &["x"]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedScope { .. }));
        let err = StrMethod::with_args("replace", &["a"]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedScope { .. }));
    }

    #[test]
    fn test_parse_requires_arguments() {
        assert!("find".parse::<StrMethod>().is_err());
        assert!("zfill".parse::<StrMethod>().is_err());
        assert_eq!("isLower".parse::<StrMethod>().unwrap(), StrMethod::IsLower);
    }

    #[test]
    fn test_name_roundtrip() {
        for method in [StrMethod::Lower, StrMethod::Title, StrMethod::IsDigit] {
            assert_eq!(method.name().parse::<StrMethod>().unwrap(), method);
        }
        assert_eq!(StrMethod::Find("x".into()).to_string(), "find");
    }

    #[test]
    fn test_transform_classification() {
        assert!(StrMethod::Lower.is_transform());
        assert!(StrMethod::Replace { from: "a".into(), to: "b".into() }.is_transform());
        assert!(!StrMethod::IsLower.is_transform());
        assert!(!StrMethod::Find("a".into()).is_transform());
    }
}

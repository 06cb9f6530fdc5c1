//! Decomposition of raw path strings into [`StructuredPath`] values.
//!
//! Decomposition is purely lexical:
//! - Both `/` and `\` separate components for Windows paths, only `/` for POSIX
//! - Runs of separators collapse into one
//! - A leading `<letter>:` is a drive (Windows only)
//! - One leading separator is a root, exactly two a UNC-style double root
//! - `.` and `..` are kept as literal components
//! - A trailing separator leaves the name empty

use log::trace;

use super::flavour::Flavour;
use super::types::StructuredPath;
use crate::error::{Error, Result};

/// One raw component split into its lexical pieces.
#[derive(Debug)]
struct RawComponent<'a> {
    drive: &'a str,
    root: String,
    pieces: Vec<&'a str>,
    trailing: bool,
}

impl RawComponent<'_> {
    fn is_empty(&self) -> bool {
        self.drive.is_empty() && self.root.is_empty() && self.pieces.is_empty()
    }
}

fn split_drive(flavour: Flavour, raw: &str) -> (&str, &str) {
    if !flavour.has_drives() {
        return ("", raw);
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => raw.split_at(2),
        _ => ("", raw),
    }
}

fn root_for(flavour: Flavour, leading: usize, has_drive: bool) -> String {
    let sep = flavour.separator();
    match leading {
        0 => String::new(),
        2 if !has_drive => [sep, sep].iter().collect(),
        _ => sep.to_string(),
    }
}

fn split_component(flavour: Flavour, raw: &str) -> Result<RawComponent<'_>> {
    if raw.contains('\0') {
        return Err(Error::malformed(format!(
            "component {raw:?} contains a NUL character"
        )));
    }

    let (drive, rest) = split_drive(flavour, raw);
    let body = rest.trim_start_matches(|c: char| flavour.is_separator(c));
    let leading = rest.chars().take_while(|&c| flavour.is_separator(c)).count();

    let pieces: Vec<&str> = body
        .split(|c: char| flavour.is_separator(c))
        .filter(|piece| !piece.is_empty())
        .collect();
    let trailing = !pieces.is_empty() && body.ends_with(|c: char| flavour.is_separator(c));

    Ok(RawComponent {
        drive,
        root: root_for(flavour, leading, !drive.is_empty()),
        pieces,
        trailing,
    })
}

/// Decompose one or more raw components into a [`StructuredPath`].
///
/// Several components are joined the way a pure-path `join` does: a
/// component with its own root discards everything accumulated so far
/// (keeping the drive unless it names one), and a component naming a
/// different drive starts over entirely.
///
/// # Errors
///
/// Returns [`Error::MalformedPath`] if `components` is empty or any
/// component contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathsight::path::{decompose, Flavour};
///
/// let p = decompose(Flavour::Windows, ["D:/data", "armel/file2.xyz"]).unwrap();
/// assert_eq!(p.drive(), "D:");
/// assert_eq!(p.root(), "\\");
/// assert_eq!(p.segments(), ["data", "armel"]);
/// assert_eq!(p.name(), "file2.xyz");
/// assert_eq!(p.to_string(), "D:\\data\\armel\\file2.xyz");
///
/// assert!(decompose::<[&str; 0], &str>(Flavour::Posix, []).is_err());
/// ```
pub fn decompose<I, S>(flavour: Flavour, components: I) -> Result<StructuredPath>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let components: Vec<S> = components.into_iter().collect();
    if components.is_empty() {
        return Err(Error::malformed("no path components given"));
    }

    let mut drive = String::new();
    let mut root = String::new();
    let mut pieces: Vec<String> = Vec::new();
    let mut trailing = false;

    for component in &components {
        let raw = split_component(flavour, component.as_ref())?;
        if raw.is_empty() {
            continue;
        }

        if !raw.root.is_empty() {
            if !raw.drive.is_empty() {
                drive = raw.drive.to_string();
            }
            root = raw.root;
            pieces.clear();
        } else if !raw.drive.is_empty() && !raw.drive.eq_ignore_ascii_case(&drive) {
            drive = raw.drive.to_string();
            root.clear();
            pieces.clear();
        }

        pieces.extend(raw.pieces.iter().map(|piece| (*piece).to_string()));
        trailing = raw.trailing;
    }

    // A double root only makes sense without a drive.
    if !drive.is_empty() && root.chars().count() > 1 {
        root = flavour.separator().to_string();
    }

    let name = if trailing {
        String::new()
    } else {
        pieces.pop().unwrap_or_default()
    };

    trace!(
        "decomposed {} component(s) into drive={drive:?} root={root:?} segments={pieces:?} name={name:?}",
        components.len()
    );

    Ok(StructuredPath::from_parsed(flavour, drive, root, pieces, name))
}

/// Decompose a batch of rows, each row holding one or more components.
///
/// This is the ingestion boundary for tabular data: every row becomes one
/// path, its columns joined as components.
///
/// # Errors
///
/// Returns the first decomposition error encountered; an empty row is a
/// [`Error::MalformedPath`].
///
/// # Examples
///
/// ```
/// use pathsight::path::{parse_many, Flavour};
///
/// let rows = vec![vec!["data", "file1.txt"], vec!["file1.xml"]];
/// let paths = parse_many(Flavour::Windows, rows).unwrap();
/// assert_eq!(paths[0].to_string(), "data\\file1.txt");
/// assert_eq!(paths[1].name(), "file1.xml");
/// ```
pub fn parse_many<I, R, S>(flavour: Flavour, rows: I) -> Result<Vec<StructuredPath>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter().map(|row| decompose(flavour, row)).collect()
}

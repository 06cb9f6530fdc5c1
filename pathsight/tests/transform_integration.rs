//! Transformations composed with decomposition and tagging.

mod common;

use common::windows;
use pathsight::tagger::{Tagger, TypeTagger};
use pathsight::transform::{apply, apply_method, Applied, Scope, StrMethod};
use pathsight::{Error, StructuredPath};

const DOCS: &str = "C:/Program Files/unittest/DOCS.pdf";

#[test]
fn test_lower_at_every_scope() {
    let p = StructuredPath::windows(DOCS).unwrap();
    let cases = [
        (Scope::WholePath, "c:\\program files\\unittest\\docs.pdf"),
        (Scope::NameOnly, "C:\\Program Files\\unittest\\docs.pdf"),
        (Scope::StemOnly, "C:\\Program Files\\unittest\\docs.pdf"),
    ];
    for (scope, expected) in cases {
        assert_eq!(apply(&p, scope, str::to_lowercase).unwrap().to_string(), expected);
    }
}

#[test]
fn test_transformed_paths_reparse_identically() {
    for raw in ["D:/data/armel/", "//host/share/x.y", "C:rel/a.b.c", "/"] {
        let p = StructuredPath::windows(raw).unwrap();
        let upper = p.map_path(str::to_uppercase).unwrap();
        assert_eq!(StructuredPath::windows(&upper.to_string()).unwrap(), upper);
        assert_eq!(upper.depth(), p.depth());
    }
}

#[test]
fn test_named_methods_by_string() {
    let p = StructuredPath::windows(DOCS).unwrap();
    let method: StrMethod = "swapcase".parse().unwrap();
    let swapped = apply_method(&p, &method, Scope::NameOnly).unwrap();
    assert_eq!(swapped.to_string(), "C:\\Program Files\\unittest\\docs.PDF");

    let ends = StrMethod::with_args("endswith", &["pdf"]).unwrap();
    assert_eq!(apply_method(&p, &ends, Scope::NameOnly).unwrap(), Applied::Bool(true));
    assert_eq!(apply_method(&p, &ends, Scope::StemOnly).unwrap(), Applied::Bool(false));
}

#[test]
fn test_scalar_whole_path_is_unsupported() {
    let p = StructuredPath::windows(DOCS).unwrap();
    let err = apply_method(&p, &StrMethod::IsDigit, Scope::WholePath).unwrap_err();
    assert!(matches!(err, Error::UnsupportedScope { .. }));
}

#[test]
fn test_tagging_after_transform() {
    let lowered: Vec<StructuredPath> = windows(&["D:/Data/Armel/File2.XYZ"])
        .iter()
        .map(|p| p.map_path(str::to_lowercase).unwrap())
        .collect();
    let tagged = TypeTagger::new().tag(&lowered).unwrap();
    let texts: Vec<&str> = tagged[0].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["d:\\", "data", "armel", "file2", ".xyz"]);
}

//! Loading tagger configurations from disk and tagging with them.

mod common;

use std::fs;

use common::{windows, ARMEL};
use pathsight::config::{ConfigLoader, TaggerKind};
use pathsight::tagger::Tagger;
use pathsight::Flavour;
use tempfile::TempDir;

#[test]
fn test_extension_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tagger.yaml");
    fs::write(
        &config_path,
        "kind: extension\nna_tag: OTHER\nignore_case: true\ntags:\n  XYZ: .XYZ\n  DOC: ['.doc*', '.pdf']\n",
    )
    .unwrap();

    let config = ConfigLoader::load_file(&config_path).unwrap();
    assert_eq!(config.kind, TaggerKind::Extension);

    let tagger = config.build().unwrap();
    let labels: Vec<String> = tagger
        .tag(&windows(ARMEL))
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, ["OTHER", "XYZ", "XYZ", "XYZ", "XYZ"]);
}

#[test]
fn test_token_config_with_flavour() {
    let config = ConfigLoader::from_yaml(
        "kind: token-type\nflavour: posix\ntoken_pattern: '[a-z]+'\n",
    )
    .unwrap();
    assert_eq!(config.flavour, Some(Flavour::Posix));

    // The root has no letters, so it yields no drive token.
    let paths = common::paths(Flavour::Posix, &["/srv/web_root/index2.html"]);
    let out = config.build().unwrap().tag(&paths).unwrap();
    assert_eq!(
        out[0].to_string(),
        "srv/FLD web/FLD root/FLD index/STM .html/EXT"
    );
}

#[test]
fn test_invalid_config_file_reports_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tagger.yaml");
    fs::write(&config_path, "kind: type\ntag_names: [A, B]\n").unwrap();

    let err = ConfigLoader::load_file(&config_path)
        .unwrap()
        .build()
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_unknown_field_is_parse_error() {
    let err = ConfigLoader::from_yaml("kind: folder\ncolour: blue\n").unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("colour"));
}

//! End-to-end tagging over decomposed batches.

mod common;

use common::{render, windows, ARMEL};
use pathsight::tagger::{ExtensionRules, ExtensionTagger, FolderTagger, Tagger, TypeTagger};
use pathsight::tokenize::Tokenizer;
use pathsight::{parse_many, Flavour};

#[test]
fn test_positional_tagging_of_whole_batch() {
    let result = TypeTagger::new().tag(&windows(ARMEL)).unwrap();
    assert_eq!(result.len(), ARMEL.len());
    assert_eq!(render(&result[0]), ["D:\\/DRV", "data/FLD", "armel/FLD"]);
    assert_eq!(
        render(&result[4]),
        ["D:\\/DRV", "data/FLD", "armel/FLD", "file4/STM", ".xyz/EXT"]
    );
}

#[test]
fn test_token_level_tagging_of_whole_batch() {
    let result = TypeTagger::token_level().tag(&windows(ARMEL)).unwrap();
    assert_eq!(
        render(&result[3]),
        [
            "D:/DRV",
            "data/FLD",
            "armel/FLD",
            "jonathan/FLD",
            "file3/STM",
            "test/STM",
            ".xyz/EXT"
        ]
    );
}

#[test]
fn test_token_level_with_whitespace_splitter() {
    let tagger = TypeTagger::new().with_tokenizer(Tokenizer::split(r"\s+").unwrap());
    let result = tagger.tag(&windows(ARMEL)).unwrap();
    assert_eq!(
        render(&result[1]),
        ["D:\\/DRV", "data/FLD", "armel_jonathan/FLD", "file1/STM", ".xyz/EXT"]
    );
}

#[test]
fn test_folder_tagging() {
    let result = FolderTagger::new().tag(&windows(ARMEL)).unwrap();
    assert_eq!(result, ["FOLDER", "FILE", "FILE", "FILE", "FILE"]);
}

#[test]
fn test_extension_tagging_with_na_default() {
    let rules = ExtensionRules::new()
        .with("ARCHIVE_AND_COMPRESSION", [".zip", ".gz"])
        .with("ARCHIVE", [".tar"])
        .with("COMPRESSION", [".bz2"]);
    let tagger = ExtensionTagger::new(rules).unwrap();
    let batch = windows(&["a.zip", "b.gz", "c.tar", "d.bz2", "README"]);
    assert_eq!(
        tagger.tag(&batch).unwrap(),
        [
            "ARCHIVE_AND_COMPRESSION",
            "ARCHIVE_AND_COMPRESSION",
            "ARCHIVE",
            "COMPRESSION",
            ""
        ]
    );
}

#[test]
fn test_case_insensitive_conflict_is_raised_before_tagging() {
    let rules = ExtensionRules::new()
        .with("DOCUMENT", [".doc"])
        .with("LEGACY", [".Doc"]);
    let err = ExtensionTagger::builder(rules)
        .ignore_case(true)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_mapping_is_reusable_across_shards() {
    let tagger = ExtensionTagger::document().build().unwrap();
    let batch = windows(&["a.doc", "b.docx", "c.pptx", "d.png", "e.raw"]);

    let whole = tagger.tag(&batch).unwrap();
    let sharded: Vec<String> = batch
        .chunks(2)
        .flat_map(|shard| tagger.tag(shard).unwrap())
        .collect();
    assert_eq!(whole, sharded);
    assert_eq!(whole, ["DOCUMENT", "DOCUMENT", "PRESENTATION", "IMAGE", ""]);
}

#[test]
fn test_tagging_from_tabular_rows() {
    let rows = vec![
        vec!["F:/exports", "2024", "report.pdf"],
        vec!["F:/exports", "scans/"],
    ];
    let paths = parse_many(Flavour::Windows, rows).unwrap();
    let result = TypeTagger::new().tag(&paths).unwrap();
    assert_eq!(
        render(&result[0]),
        ["F:\\/DRV", "exports/FLD", "2024/FLD", "report/STM", ".pdf/EXT"]
    );
    assert_eq!(render(&result[1]), ["F:\\/DRV", "exports/FLD", "scans/FLD"]);
}

#[test]
fn test_taggers_share_across_threads() {
    let tagger = ExtensionTagger::compression().build().unwrap();
    let tagger = &tagger;
    let batch = windows(&["x.zip", "y.tar", "z.bz2", "w.txt"]);

    std::thread::scope(|scope| {
        let handles: Vec<_> = batch
            .chunks(1)
            .map(|shard| scope.spawn(move || tagger.tag(shard).unwrap()))
            .collect();
        let labels: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(
            labels,
            ["ARCHIVE_AND_COMPRESSION", "ARCHIVE", "COMPRESSION", ""]
        );
    });
}

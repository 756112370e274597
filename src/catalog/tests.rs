use super::*;
use crate::error::RecomendarError;
use std::io::Write;

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should create");
    file.write_all(contents.as_bytes())
        .expect("temp file should write");
    file
}

#[test]
fn test_from_csv_basic() {
    let file = write_csv(
        "title,category,overview,score\n\
         Nightshift,Horror,A lone guard hears footsteps,8.0\n\
         Sunrise,Comedy,Two strangers share a taxi,7.8\n",
    );

    let catalog = Catalog::from_csv(file.path()).expect("load should succeed");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.items()[0].title, "Nightshift");
    assert_eq!(catalog.items()[1].category, "Comedy");
    assert!((catalog.items()[1].score - 7.8).abs() < 1e-12);
}

#[test]
fn test_from_csv_missing_optional_columns_are_empty() {
    let file = write_csv(
        "title,category,overview,score\n\
         Untagged,,,6.1\n",
    );

    let catalog = Catalog::from_csv(file.path()).expect("load should succeed");
    let item = &catalog.items()[0];
    assert_eq!(item.category, "");
    assert_eq!(item.overview, "");
    assert_eq!(item.combined_text, " ");
}

#[test]
fn test_from_csv_missing_file_is_load_error() {
    let err = Catalog::from_csv("/nonexistent/path/movies.csv")
        .expect_err("missing file should fail");
    assert!(matches!(err, RecomendarError::CatalogLoad { .. }));
    assert!(err.to_string().contains("movies.csv"));
}

#[test]
fn test_from_csv_malformed_score_is_load_error() {
    let file = write_csv(
        "title,category,overview,score\n\
         Broken,Horror,text,not-a-number\n",
    );

    let err = Catalog::from_csv(file.path()).expect_err("bad score should fail");
    assert!(matches!(err, RecomendarError::CatalogLoad { .. }));
}

#[test]
fn test_from_csv_zero_rows_is_load_error() {
    let file = write_csv("title,category,overview,score\n");

    let err = Catalog::from_csv(file.path()).expect_err("empty catalog should fail");
    assert!(err.to_string().contains("no data rows"));
}

#[test]
fn test_from_items_rejects_empty() {
    let err = Catalog::from_items(vec![]).expect_err("empty items should fail");
    assert!(err.to_string().contains("empty input"));
}

#[test]
fn test_combined_text_concatenation() {
    let item = Item::new("Duel", "Horror", "A road trip turns hostile", 8.5);
    assert_eq!(item.combined_text, "Horror A road trip turns hostile");

    // Missing metadata degrades to whitespace, not a panic.
    let bare = Item::new("Bare", "", "", 7.0);
    assert_eq!(bare.combined_text, " ");
}

#[test]
fn test_duplicate_titles_are_independent() {
    let catalog = Catalog::from_items(vec![
        Item::new("Twin", "Drama", "first", 8.0),
        Item::new("Twin", "Drama", "second", 9.0),
    ])
    .expect("catalog should build");

    assert_eq!(catalog.len(), 2);
    assert!((catalog.items()[0].score - 8.0).abs() < 1e-12);
    assert!((catalog.items()[1].score - 9.0).abs() < 1e-12);
}

#[test]
fn test_combined_texts_order_matches_items() {
    let catalog = Catalog::from_items(vec![
        Item::new("A", "Horror", "one", 8.0),
        Item::new("B", "Comedy", "two", 7.8),
    ])
    .expect("catalog should build");

    let texts = catalog.combined_texts();
    assert_eq!(texts, vec!["Horror one", "Comedy two"]);
}

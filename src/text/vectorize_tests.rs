use super::*;

#[test]
fn test_fit_builds_lexicographic_vocabulary() {
    let docs = vec!["zebra apple", "mango apple"];

    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    assert_eq!(vectorizer.terms(), &["apple", "mango", "zebra"]);
    assert_eq!(vectorizer.vocabulary()["apple"], 0);
    assert_eq!(vectorizer.vocabulary()["zebra"], 2);
}

#[test]
fn test_stop_words_excluded_from_vocabulary() {
    let docs = vec!["the lone guard", "the empty hall"];

    let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    vectorizer.fit(&docs).expect("fit should succeed");

    assert!(!vectorizer.vocabulary().contains_key("the"));
    assert!(vectorizer.vocabulary().contains_key("guard"));
    assert_eq!(vectorizer.vocabulary_size(), 4);
}

#[test]
fn test_transform_rows_are_l2_normalized() {
    let docs = vec!["horror ghost midnight", "comedy wedding", "ghost wedding"];

    let mut vectorizer = TfidfVectorizer::new();
    let rows = vectorizer
        .fit_transform(&docs)
        .expect("fit_transform should succeed");

    for row in &rows {
        let norm: f64 = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9, "row norm was {norm}");
    }
}

#[test]
fn test_transform_unknown_terms_ignored() {
    let train = vec!["horror ghost"];
    let query = vec!["spaceship laser"];

    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&train).expect("fit should succeed");
    let rows = vectorizer.transform(&query).expect("transform should succeed");

    assert!(rows[0].iter().all(|&v| v == 0.0));
}

#[test]
fn test_idf_downweights_common_terms() {
    // "ghost" appears in every document, "wedding" in one.
    let docs = vec!["ghost horror", "ghost wedding", "ghost chase"];

    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    let vocab = vectorizer.vocabulary();
    let idf = vectorizer.idf();
    assert!(idf[vocab["ghost"]] < idf[vocab["wedding"]]);
}

#[test]
fn test_fit_is_deterministic() {
    let docs = vec!["horror midnight ghost", "comedy wedding ghost"];

    let mut first = TfidfVectorizer::new().with_stop_words_english();
    let mut second = TfidfVectorizer::new().with_stop_words_english();

    let rows_a = first.fit_transform(&docs).expect("fit_transform should succeed");
    let rows_b = second.fit_transform(&docs).expect("fit_transform should succeed");

    assert_eq!(first.terms(), second.terms());
    assert_eq!(rows_a, rows_b);
}

#[test]
fn test_fit_empty_documents_fails() {
    let docs: Vec<&str> = vec![];
    let mut vectorizer = TfidfVectorizer::new();
    assert!(vectorizer.fit(&docs).is_err());
}

#[test]
fn test_fit_all_stop_words_fails() {
    let docs = vec!["the and of", "is at on"];
    let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    let err = vectorizer.fit(&docs).expect_err("degenerate vocabulary should fail");
    assert!(err.to_string().contains("vocabulary is empty"));
}

#[test]
fn test_transform_before_fit_fails() {
    let vectorizer = TfidfVectorizer::new();
    let err = vectorizer
        .transform(&["some text"])
        .expect_err("transform before fit should fail");
    assert!(err.to_string().contains("call fit()"));
}

#[test]
fn test_lowercase_folding() {
    let docs = vec!["Horror HORROR horror"];

    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    assert_eq!(vectorizer.vocabulary_size(), 1);
    assert!(vectorizer.vocabulary().contains_key("horror"));
}

#[test]
fn test_custom_stop_words() {
    let docs = vec!["movie about a haunted movie set"];

    let mut vectorizer = TfidfVectorizer::new().with_stop_words(&["movie", "about"]);
    vectorizer.fit(&docs).expect("fit should succeed");

    assert!(!vectorizer.vocabulary().contains_key("movie"));
    assert!(vectorizer.vocabulary().contains_key("haunted"));
}

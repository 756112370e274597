//! End-to-end flows: CSV catalog → engine → ranked picks.

use recomendar::prelude::*;
use std::io::Write;

const FIXTURE_CSV: &str = "\
title,category,overview,score
Nightshift,Horror,A lone guard hears footsteps in an empty museum,8.0
Sunrise,Comedy,Two strangers share a taxi across the city,7.8
Duel,Horror,A road trip turns hostile on a desert highway,8.5
Stagefright,\"Horror, Comedy\",A haunted theater troupe rehearses one last show,7.9
Orbit,Documentary,Astronauts film a year aboard the station,8.2
";

fn fixture_engine() -> Recommender {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should create");
    file.write_all(FIXTURE_CSV.as_bytes())
        .expect("temp file should write");

    let catalog = Catalog::from_csv(file.path()).expect("catalog should load");
    Recommender::new(catalog).expect("engine should build")
}

#[test]
fn csv_to_ranked_recommendations() {
    let engine = fixture_engine();

    let request = RecommendRequest::new()
        .with_category("Horror")
        .with_min_score(8.0)
        .with_mood("I feel great");

    let picks = engine.recommend(&request);
    let titles: Vec<&str> = picks.ranked().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Duel", "Nightshift"]);
}

#[test]
fn unknown_category_yields_no_match_not_error() {
    let engine = fixture_engine();

    match engine.recommend(&RecommendRequest::new().with_category("SciFi")) {
        Recommendations::NoMatch { category, min_score } => {
            assert_eq!(category.as_deref(), Some("SciFi"));
            assert_eq!(min_score, None);
        }
        Recommendations::Ranked(_) => panic!("expected no matches"),
    }
}

#[test]
fn empty_mood_preserves_catalog_order() {
    let engine = fixture_engine();

    let picks = engine.recommend(&RecommendRequest::new().with_mood(""));
    let titles: Vec<&str> = picks.ranked().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Nightshift", "Sunrise", "Duel", "Stagefright", "Orbit"]
    );
}

#[test]
fn gloomy_mood_serves_lowest_scores_first() {
    let engine = fixture_engine();

    let picks = engine.recommend(&RecommendRequest::new().with_mood("gloomy and exhausted"));
    let scores: Vec<f64> = picks.ranked().iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![7.8, 7.9, 8.0, 8.2, 8.5]);
}

#[test]
fn missing_catalog_file_is_fatal_load_error() {
    let err = Catalog::from_csv("/no/such/dir/top_1000.csv")
        .expect_err("missing catalog should fail");
    assert!(matches!(err, RecomendarError::CatalogLoad { .. }));
}

#[test]
fn similarity_lookup_is_independent_of_ranking() {
    let engine = fixture_engine();

    // Nightshift's closest neighbor shares horror-flavored text.
    let neighbors = engine.similar_titles(0, 2).expect("neighbors should succeed");
    assert_eq!(neighbors.len(), 2);
    assert!(neighbors.iter().all(|&(idx, _)| idx != 0));

    // The ranking path ignores the matrix entirely: identical filters
    // give identical output before and after a neighbor query.
    let request = RecommendRequest::new().with_category("Horror");
    let before = engine.recommend(&request);
    let _ = engine.similar_titles(2, 4).expect("neighbors should succeed");
    let after = engine.recommend(&request);
    assert_eq!(before, after);
}

#[test]
fn repeated_requests_are_idempotent() {
    let engine = fixture_engine();
    let request = RecommendRequest::new()
        .with_category("Horror")
        .with_mood("pretty happy tonight")
        .with_min_score(7.9)
        .with_limit(2);

    assert_eq!(engine.recommend(&request), engine.recommend(&request));
}

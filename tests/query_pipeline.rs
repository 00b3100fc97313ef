/// Integration tests for the seed → store → query pipeline
///
/// Exercises the service's two-phase lifecycle without HTTP: parse the
/// seed payload, populate the record store, then run queries through the
/// QueryHandler exactly as the endpoint does. Covers:
/// 1. Seed file loading from disk
/// 2. Store population in document order
/// 3. Reload idempotence (first duplicate aborts the batch)
/// 4. Query behavior over a realistically sized dataset
///
/// Run with: cargo test --test query_pipeline

use std::fs;
use std::sync::Arc;

use hindex_service::ingest::seed::{load_seed_file, parse_seed, SeedError};
use hindex_service::model::QueryError;
use hindex_service::query::QueryHandler;
use hindex_service::store::RecordStore;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// A seed in the production shape. Values picked so every statistic has a
/// hand-checkable answer.
const SEED_JSON: &str = r#"{
  "90210": 8.5,
  "10001": 6.2,
  "60601": 7.0,
  "33101": 7.8,
  "98101": 7.2
}"#;

fn seeded_handler() -> QueryHandler {
    let entries = parse_seed(SEED_JSON).expect("test seed should parse");
    let mut store = RecordStore::new();
    let outcome = store.load(&entries);
    assert_eq!(outcome.inserted, 5, "every entry of a fresh seed loads");
    QueryHandler::new(Arc::new(store))
}

fn params(zips: &[&str]) -> Vec<(String, String)> {
    zips.iter()
        .enumerate()
        .map(|(i, zip)| (format!("p{}", i), zip.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Seed File Loading
// ---------------------------------------------------------------------------

#[test]
fn test_seed_file_round_trips_through_disk() {
    let path = std::env::temp_dir().join(format!(
        "hindex_pipeline_seed_{}.json",
        std::process::id()
    ));
    fs::write(&path, SEED_JSON).expect("temp seed should be writable");

    let entries = load_seed_file(&path).expect("seed written to disk should load");
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0], ("90210".to_string(), 8.5));
    assert_eq!(entries[4], ("98101".to_string(), 7.2));

    let _ = fs::remove_file(path);
}

#[test]
fn test_shipped_seed_file_loads() {
    // cargo test runs from the project root, where the checked-in seed
    // lives. Startup must be able to load it as-is.
    let entries = load_seed_file(std::path::Path::new("happiness-index-seed-data.json"))
        .expect("shipped seed file should parse");
    assert!(
        entries.len() >= 2,
        "shipped seed must hold enough counties for an aggregate"
    );
}

#[test]
fn test_missing_seed_file_is_a_read_error() {
    let result = load_seed_file(std::path::Path::new("/nonexistent/seed.json"));
    assert!(matches!(result, Err(SeedError::ReadFailed(_, _))));
}

// ---------------------------------------------------------------------------
// 2. Store Population
// ---------------------------------------------------------------------------

#[test]
fn test_entries_load_in_document_order() {
    let entries = parse_seed(SEED_JSON).expect("test seed should parse");
    let zips: Vec<&str> = entries.iter().map(|(zip, _)| zip.as_str()).collect();

    assert_eq!(zips, vec!["90210", "10001", "60601", "33101", "98101"]);
}

#[test]
fn test_loaded_store_answers_every_seeded_zip() {
    let handler = seeded_handler();

    assert_eq!(handler.count_all(), 5);
    for (zip, index) in [
        ("90210", 8.5),
        ("10001", 6.2),
        ("60601", 7.0),
        ("33101", 7.8),
        ("98101", 7.2),
    ] {
        let record = handler
            .get_by_zip(zip)
            .unwrap_or_else(|_| panic!("{} was seeded and must resolve", zip));
        assert_eq!(record.h_index, index);
    }
}

// ---------------------------------------------------------------------------
// 3. Reload Idempotence
// ---------------------------------------------------------------------------

#[test]
fn test_loading_the_same_seed_twice_changes_nothing() {
    let entries = parse_seed(SEED_JSON).expect("test seed should parse");
    let mut store = RecordStore::new();
    store.load(&entries);

    let second = store.load(&entries);

    assert_eq!(second.inserted, 0, "a reload inserts nothing");
    assert_eq!(
        second.aborted_on,
        Some("90210".to_string()),
        "the very first key aborts the second pass"
    );
    assert_eq!(store.count(), 5);
    assert_eq!(
        store.get("90210").map(|r| r.h_index),
        Some(8.5),
        "existing records keep their original values"
    );
}

#[test]
fn test_partial_overlap_loads_only_up_to_the_first_duplicate() {
    let mut store = RecordStore::new();
    store.load(&parse_seed(SEED_JSON).expect("test seed should parse"));

    // One new county, then a collision, then another new county.
    let update = parse_seed(r#"{ "78701": 7.65, "60601": 9.9, "19103": 6.3 }"#)
        .expect("update seed should parse");
    let outcome = store.load(&update);

    assert_eq!(outcome.inserted, 1);
    assert_eq!(outcome.aborted_on, Some("60601".to_string()));
    assert_eq!(store.count(), 6);
    assert_eq!(store.get("78701").map(|r| r.h_index), Some(7.65));
    assert_eq!(
        store.get("60601").map(|r| r.h_index),
        Some(7.0),
        "the collision does not overwrite"
    );
    assert_eq!(store.get("19103"), None, "entries after the collision are dropped");
}

// ---------------------------------------------------------------------------
// 4. Query Behavior
// ---------------------------------------------------------------------------

#[test]
fn test_statistics_over_the_full_dataset() {
    let handler = seeded_handler();
    let selection = params(&["90210", "10001", "60601", "33101", "98101"]);

    // Median of [6.2, 7.0, 7.2, 7.8, 8.5] sorted is 7.2.
    let median = handler
        .compute_statistic("median", &selection)
        .expect("five known zips");
    assert_eq!(median.value, 7.2);

    // Range is 8.5 - 6.2.
    let range = handler
        .compute_statistic("range", &selection)
        .expect("five known zips");
    assert_eq!(range.value, 2.3);
}

#[test]
fn test_subset_selections_use_only_the_named_counties() {
    let handler = seeded_handler();

    let mean = handler
        .compute_statistic("mean", &params(&["33101", "98101"]))
        .expect("both zips exist");
    assert_eq!(mean.value, 7.5);
}

#[test]
fn test_selection_errors_surface_through_the_handler() {
    let handler = seeded_handler();

    assert_eq!(
        handler.compute_statistic("mode", &params(&["90210", "10001"])),
        Err(QueryError::InvalidStatistic)
    );
    assert_eq!(
        handler.compute_statistic("mean", &params(&["90210"])),
        Err(QueryError::InsufficientCounties)
    );
    assert_eq!(
        handler.compute_statistic("mean", &params(&["90210", "00000"])),
        Err(QueryError::UnknownZip("00000".to_string()))
    );
}

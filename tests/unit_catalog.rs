// tests/unit_catalog.rs
//! Tests for catalog and event-log loading.

use std::fs;

use fypgraph_core::catalog::{self, EventRecord};
use fypgraph_core::{Config, FeedEngine, FeedError, Interaction, Watch};

const CATALOG: &str = r#"[
  {"id": 1, "genre": "comedy", "viewers": 100, "likes": 50, "comments": 0, "shares": 0, "saves": 0, "title": "Cat falls off couch"},
  {"id": "v2", "genre": "news", "viewers": 10, "likes": 1, "creator": "daily"}
]"#;

#[test]
fn test_parse_catalog() {
    let records = catalog::parse_catalog(CATALOG).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].counters.viewers, 100);
    assert_eq!(records[0].title(), Some("Cat falls off couch"));
    assert!(!records[0].extra.contains_key("viewers"));

    assert_eq!(records[1].id, "v2");
    assert_eq!(records[1].counters.saves, 0);
    assert_eq!(records[1].extra["creator"], "daily");
}

#[test]
fn test_negative_counter_rejected() {
    let json = r#"[{"id": 1, "genre": "comedy", "likes": -3}]"#;
    let err = catalog::parse_catalog(json).unwrap_err();
    assert!(matches!(err, FeedError::InvalidInput(_)));
}

#[test]
fn test_malformed_catalog() {
    let err = catalog::parse_catalog("{not json").unwrap_err();
    assert!(matches!(err, FeedError::Json(_)));
}

#[test]
fn test_load_catalog_into_engine() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("videos.json");
    fs::write(&path, CATALOG).unwrap();

    let mut engine = FeedEngine::new(Config::default()).unwrap();
    assert_eq!(engine.ingest(catalog::load_catalog(&path).unwrap()), 2);
    assert!((engine.graph().video("1").unwrap().initial_score() - 37.5).abs() < 1e-9);
}

#[test]
fn test_parse_events() {
    let json = r#"[
      {"user": "user_1", "video": 1, "like": 1, "comment": 1, "full_watch": 0.5},
      {"user": "user_1", "video": "v2"}
    ]"#;
    let events = catalog::parse_events(json).unwrap();
    assert_eq!(
        events[0],
        EventRecord {
            user: "user_1".to_string(),
            video: "1".to_string(),
            interaction: Interaction::watched(Watch::Partial).liked().commented(),
        }
    );
    assert_eq!(events[1].interaction, Interaction::default());
}

#[test]
fn test_out_of_range_flag_rejected() {
    let json = r#"[{"user": "u", "video": 1, "share": 2}]"#;
    assert!(matches!(
        catalog::parse_events(json).unwrap_err(),
        FeedError::InvalidInput(_)
    ));

    let json = r#"[{"user": "u", "video": 1, "full_watch": 0.7}]"#;
    assert!(matches!(
        catalog::parse_events(json).unwrap_err(),
        FeedError::InvalidInput(_)
    ));
}

#[test]
fn test_from_raw_flags() {
    let event = Interaction::from_raw(1, 0, 1, 0, 1.0).unwrap();
    assert!(event.like && event.share && !event.comment && !event.save);
    assert_eq!(event.watch, Watch::Full);
    assert!(Interaction::from_raw(-1, 0, 0, 0, 0.0).is_err());
}

// tests/unit_config.rs
use std::fs;

use fypgraph_core::config::{Config, InteractionWeights, RankConfig, RankerConfig, WeightProfile};
use fypgraph_core::{FeedEngine, FeedError};

#[test]
fn test_defaults() {
    let c = Config::default();
    assert!((c.scoring.viewers - 0.125).abs() < f64::EPSILON);
    assert!((c.scoring.likes - 0.5).abs() < f64::EPSILON);
    assert_eq!(c.interaction.profile, WeightProfile::GenreAware);
    assert_eq!(c.interaction.weights(), InteractionWeights::GENRE_AWARE);

    let r = RankConfig::default();
    assert!((r.damping - 0.85).abs() < f64::EPSILON);
    assert_eq!(r.max_iterations, 100);

    let k = RankerConfig::default();
    assert!((k.genre_boost_divisor - 10.0).abs() < f64::EPSILON);
    assert_eq!(k.default_top_k, 5);
    assert!(k.genre_boost);
    assert!(c.validate().is_ok());
}

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("fypgraph.toml");
    fs::write(&path, "[rank]\ndamping = 0.9\n\n[ranker]\ndefault_top_k = 12").unwrap();

    let c = Config::load_from(&path).unwrap();
    assert!((c.rank.damping - 0.9).abs() < f64::EPSILON);
    assert_eq!(c.ranker.default_top_k, 12);
    assert_eq!(c.rank.max_iterations, 100);
}

#[test]
fn test_simple_profile() {
    let c = Config::parse_toml("[interaction]\nprofile = \"simple\"").unwrap();
    assert_eq!(c.interaction.weights(), InteractionWeights::SIMPLE);
    // the preset also disables the boost; a bare profile switch does not
    assert!(c.ranker.genre_boost);
    assert!(!Config::simple().ranker.genre_boost);
}

#[test]
fn test_custom_profile() {
    let c = Config::parse_toml(
        "[interaction]\nprofile = \"custom\"\n\n[interaction.custom]\nlike = 4.0\nshare = 0.0",
    )
    .unwrap();
    let w = c.interaction.weights();
    assert!((w.like - 4.0).abs() < f64::EPSILON);
    assert!(w.share.abs() < f64::EPSILON);
    assert!((w.comment - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_custom_table_ignored_without_custom_profile() {
    let c = Config::parse_toml("[interaction.custom]\nlike = 9.0").unwrap();
    assert_eq!(c.interaction.weights(), InteractionWeights::GENRE_AWARE);
}

#[test]
fn test_rejects_bad_damping() {
    let err = Config::parse_toml("[rank]\ndamping = 1.5").unwrap_err();
    assert!(matches!(err, FeedError::InvalidInput(_)));
}

#[test]
fn test_rejects_negative_coefficient() {
    let err = Config::parse_toml("[scoring]\nlikes = -1.0").unwrap_err();
    assert!(matches!(err, FeedError::InvalidInput(_)));
}

#[test]
fn test_rejects_zero_iterations() {
    assert!(Config::parse_toml("[rank]\nmax_iterations = 0").is_err());
}

#[test]
fn test_rejects_malformed_toml() {
    let err = Config::parse_toml("[rank\ndamping = ").unwrap_err();
    assert!(matches!(err, FeedError::Toml(_)));
}

#[test]
fn test_engine_rejects_invalid_config() {
    let mut c = Config::default();
    c.ranker.genre_boost_divisor = 0.0;
    assert!(FeedEngine::new(c).is_err());
}

#[test]
fn test_save_round_trip() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("fypgraph.toml");
    let c = Config::simple();
    c.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), c);
}

#[test]
fn test_missing_file_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::load_from(&d.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, FeedError::Io { .. }));
}

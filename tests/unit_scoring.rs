// tests/unit_scoring.rs
//! Tests for the initial score and interaction weight formulas.

use fypgraph_core::config::{InteractionWeights, ScoringConfig};
use fypgraph_core::scoring::{initial_score, interaction_weight};
use fypgraph_core::{Config, Counters, FeedEngine, Interaction, VideoRecord, Watch};

const EPS: f64 = 1e-9;

fn counters(viewers: u64, likes: u64, comments: u64, shares: u64, saves: u64) -> Counters {
    Counters {
        viewers,
        likes,
        comments,
        shares,
        saves,
    }
}

#[test]
fn test_initial_score_formula() {
    let c = counters(100, 50, 0, 0, 0);
    assert!((initial_score(&c, &ScoringConfig::default()) - 37.5).abs() < EPS);

    let c = counters(10, 1, 0, 0, 0);
    assert!((initial_score(&c, &ScoringConfig::default()) - 1.75).abs() < EPS);

    let c = counters(8, 2, 4, 2, 4);
    // 1 + 1 + 1 + 1 + 1
    assert!((initial_score(&c, &ScoringConfig::default()) - 5.0).abs() < EPS);
}

#[test]
fn test_initial_score_zero_counters() {
    let c = Counters::default();
    assert!(initial_score(&c, &ScoringConfig::default()).abs() < EPS);
}

#[test]
fn test_genre_aware_weight() {
    let w = InteractionWeights::GENRE_AWARE;
    let like_comment = Interaction::default().liked().commented();
    assert!((interaction_weight(&like_comment, &w) - 2.5).abs() < EPS);

    let everything = Interaction::watched(Watch::Full).liked().commented().shared().saved();
    assert!((interaction_weight(&everything, &w) - 6.25).abs() < EPS);

    let half = Interaction::watched(Watch::Partial);
    assert!((interaction_weight(&half, &w) - 0.5).abs() < EPS);
}

#[test]
fn test_simple_weight() {
    let w = InteractionWeights::SIMPLE;
    let everything = Interaction::watched(Watch::Full).liked().commented().shared().saved();
    // 1.5 + 2.0 + 3.0 + 2.5 + 1.25
    assert!((interaction_weight(&everything, &w) - 10.25).abs() < EPS);
}

#[test]
fn test_skip_without_flags_weighs_nothing() {
    let w = InteractionWeights::GENRE_AWARE;
    assert!(interaction_weight(&Interaction::default(), &w).abs() < EPS);
}

#[test]
fn test_initial_score_survives_recalculation() {
    let mut engine = FeedEngine::new(Config::default()).unwrap();
    engine.add_video(VideoRecord::new("a", "comedy", counters(100, 50, 0, 0, 0)));
    engine.add_video(VideoRecord::new("b", "news", counters(10, 1, 0, 0, 0)));
    engine
        .record_interaction("u", "a", &Interaction::watched(Watch::Full).liked())
        .unwrap();

    for _ in 0..3 {
        engine.recalculate_scores();
    }

    let a = engine.graph().video("a").unwrap();
    let b = engine.graph().video("b").unwrap();
    assert!((a.initial_score() - 37.5).abs() < EPS);
    assert!((b.initial_score() - 1.75).abs() < EPS);
}

#[test]
fn test_custom_coefficients_apply() {
    let mut config = Config::default();
    config.scoring.viewers = 1.0;
    let mut engine = FeedEngine::new(config).unwrap();
    engine.add_video(VideoRecord::new("a", "comedy", counters(10, 0, 0, 0, 0)));
    assert!((engine.graph().video("a").unwrap().initial_score() - 10.0).abs() < EPS);
}
